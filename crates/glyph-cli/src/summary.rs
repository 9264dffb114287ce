use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use glyph_core::{BatchResult, DatasetIndex};
use glyph_model::{LetterType, MotionChannel, PictographRecord};
use glyph_validate::Severity;

use crate::types::ValidationOutcome;

pub fn print_catalogue() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Description"),
        header_cell("Count"),
        header_cell("Letters"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for letter_type in LetterType::ALL {
        table.add_row(vec![
            type_cell(letter_type),
            Cell::new(letter_type.description()),
            Cell::new(letter_type.letters().len()),
            Cell::new(letter_type.letters().join(" ")),
        ]);
    }
    println!("{table}");
}

pub fn print_load_summary(index: &DatasetIndex) {
    let report = index.report();
    println!(
        "Loaded: {} of {} rows at {}",
        report.indexed,
        report.total_rows,
        report.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    let mut sources = Table::new();
    sources.set_header(vec![
        header_cell("Source"),
        header_cell("Rows"),
        header_cell("Unreadable"),
        header_cell("SHA-256"),
    ]);
    apply_table_style(&mut sources);
    align_column(&mut sources, 1, CellAlignment::Right);
    align_column(&mut sources, 2, CellAlignment::Right);
    for source in &report.sources {
        sources.add_row(vec![
            Cell::new(source.path.display()),
            Cell::new(source.rows),
            count_cell(Some(source.unreadable_rows), Color::Red),
            dim_cell(short_digest(&source.digest)),
        ]);
    }
    println!("{sources}");

    let mut letters = Table::new();
    letters.set_header(vec![
        header_cell("Letter"),
        header_cell("Type"),
        header_cell("Records"),
    ]);
    apply_summary_table_style(&mut letters);
    align_column(&mut letters, 2, CellAlignment::Right);
    for (letter, records) in index.letter_groups() {
        let type_cell = match letter.letter_type() {
            Some(letter_type) => type_cell(letter_type),
            None => Cell::new("unknown").fg(Color::Yellow),
        };
        letters.add_row(vec![letter_cell(letter.as_str()), type_cell, Cell::new(records.len())]);
    }
    letters.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(index.len()).add_attribute(Attribute::Bold),
    ]);
    println!("{letters}");

    if report.failures.is_empty() {
        return;
    }
    let mut failures = Table::new();
    failures.set_header(vec![
        header_cell("Row"),
        header_cell("Location"),
        header_cell("Field"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut failures);
    align_column(&mut failures, 0, CellAlignment::Right);
    for failure in &report.failures {
        failures.add_row(vec![
            Cell::new(failure.index),
            match &failure.location {
                Some(location) => Cell::new(location),
                None => dim_cell("-"),
            },
            Cell::new(failure.error.field().unwrap_or("-")),
            Cell::new(&failure.error).fg(Color::Red),
        ]);
    }
    println!();
    println!("Excluded rows:");
    println!("{failures}");
}

pub fn print_positions(index: &DatasetIndex) {
    let positions = index.available_start_positions();
    if positions.is_empty() {
        println!("No start positions.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Start position"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for position in positions {
        table.add_row(vec![
            Cell::new(position),
            Cell::new(index.continuations(position.as_str()).len()),
        ]);
    }
    println!("{table}");
}

pub fn print_continuations(index: &DatasetIndex, position: &str) {
    let records = index.continuations(position);
    if records.is_empty() {
        println!("No records start at {position}.");
        return;
    }
    println!("{} records start at {position}:", records.len());
    print_records(records.iter().copied());
}

pub fn print_batch(batch: &BatchResult) {
    println!(
        "Converted {} of {} records",
        batch.successes.len(),
        batch.len()
    );
    if !batch.successes.is_empty() {
        print_records(batch.records());
    }
    if batch.failures.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, error) in &batch.failures {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(error.field().unwrap_or("-")),
            Cell::new(error).fg(Color::Red),
        ]);
    }
    println!();
    println!("Failures:");
    println!("{table}");
}

pub fn print_validation(outcome: &ValidationOutcome) {
    let integrity = &outcome.integrity;
    let status = if outcome.is_valid() {
        Cell::new("VALID").fg(Color::Green)
    } else {
        Cell::new("INVALID").fg(Color::Red)
    }
    .add_attribute(Attribute::Bold);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Status"),
        header_cell("Rows"),
        header_cell("Invalid rows"),
        header_cell("Unreadable"),
        header_cell("Indexed"),
        header_cell("Letters"),
        header_cell("Positions"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    for column in 1..9 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    table.add_row(vec![
        status,
        Cell::new(outcome.rows_checked),
        count_cell(Some(outcome.invalid_rows()), Color::Red),
        count_cell(Some(outcome.unreadable.len()), Color::Red),
        Cell::new(integrity.records),
        Cell::new(integrity.letters),
        Cell::new(integrity.positions),
        count_cell(Some(outcome.error_count()), Color::Red),
        count_cell(Some(outcome.warning_count()), Color::Yellow),
    ]);
    println!("{table}");

    let mut issues = Table::new();
    issues.set_header(vec![
        header_cell("Where"),
        header_cell("Severity"),
        header_cell("Category"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut issues);
    align_column(&mut issues, 1, CellAlignment::Center);
    for row in &outcome.unreadable {
        issues.add_row(vec![
            Cell::new(&row.location),
            severity_cell(Severity::Error),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new(&row.error),
        ]);
    }
    for row in &outcome.rows {
        let findings = row
            .report
            .issues
            .iter()
            .map(|issue| (Severity::Error, issue))
            .chain(row.report.warnings.iter().map(|issue| (Severity::Warning, issue)));
        for (severity, issue) in findings {
            issues.add_row(vec![
                Cell::new(&row.location),
                severity_cell(severity),
                Cell::new(issue.category().label()),
                Cell::new(issue.field().unwrap_or("-")),
                Cell::new(issue.message()),
            ]);
        }
    }
    let findings = integrity
        .issues
        .iter()
        .map(|finding| (Severity::Error, finding))
        .chain(integrity.warnings.iter().map(|finding| (Severity::Warning, finding)));
    for (severity, finding) in findings {
        let place = match finding.record {
            Some(record) => Cell::new(format!("record {record}")),
            None => Cell::new("index"),
        };
        issues.add_row(vec![
            place,
            severity_cell(severity),
            Cell::new(finding.issue.category().label()),
            Cell::new(finding.issue.field().unwrap_or("-")),
            Cell::new(finding.issue.message()),
        ]);
    }
    if outcome.error_count() + outcome.warning_count() > 0 {
        println!();
        println!("Issues:");
        println!("{issues}");
    }
}

fn print_records<'a>(records: impl Iterator<Item = &'a PictographRecord>) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Letter"),
        header_cell("Start"),
        header_cell("End"),
        header_cell("Type"),
        header_cell("Pattern"),
        header_cell("Element"),
        header_cell("Primary"),
        header_cell("Secondary"),
    ]);
    apply_table_style(&mut table);
    for record in records {
        let classification = record.classification.as_ref();
        table.add_row(vec![
            match &record.letter {
                Some(letter) => letter_cell(letter.as_str()),
                None => dim_cell("-"),
            },
            optional_cell(record.start_position.as_ref()),
            optional_cell(record.end_position.as_ref()),
            match classification.and_then(|c| c.letter_type) {
                Some(letter_type) => type_cell(letter_type),
                None => dim_cell("-"),
            },
            optional_cell(classification.and_then(|c| c.pattern_mode)),
            optional_cell(classification.and_then(|c| c.elemental_tag)),
            channel_cell(record.primary.as_ref()),
            channel_cell(record.secondary.as_ref()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn channel_cell(channel: Option<&MotionChannel>) -> Cell {
    match channel {
        Some(channel) => Cell::new(format!(
            "{} {} {}→{} {}",
            channel.motion_kind,
            channel.rotation_direction,
            channel.start_location,
            channel.end_location,
            channel.turns
        )),
        None => dim_cell("-"),
    }
}

fn optional_cell<T: ToString>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn type_cell(letter_type: LetterType) -> Cell {
    Cell::new(format!("{} ({})", letter_type, letter_type.description()))
}

fn letter_cell(letter: &str) -> Cell {
    Cell::new(letter)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn short_digest(digest: &str) -> &str {
    digest.get(..12).unwrap_or(digest)
}

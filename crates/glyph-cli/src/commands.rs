use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, info_span};

use glyph_core::{BatchResult, DatasetIndex, convert_many};
use glyph_ingest::{LoadedSources, load_sources, read_json_records};
use glyph_validate::{validate_dataset, validate_structure};

use crate::cli::{PrefixArgs, SourceArgs};
use crate::config::GlyphConfig;
use crate::types::{RowReport, UnreadableRow, ValidationOutcome};

const PROGRESS_TEMPLATE: &str = "{spinner} indexing [{bar:40}] {pos}/{len} rows ({elapsed})";

/// Merges the optional config file with command-line arguments.
pub fn resolve_config(
    config_path: Option<&Path>,
    sources: &[PathBuf],
    prefixes: &PrefixArgs,
) -> Result<GlyphConfig> {
    let base = match config_path {
        Some(path) => GlyphConfig::load(path)?,
        None => GlyphConfig::default(),
    };
    Ok(base.with_overrides(
        sources,
        prefixes.primary_prefix.as_deref(),
        prefixes.secondary_prefix.as_deref(),
    ))
}

fn read_sources(config: &GlyphConfig) -> Result<LoadedSources> {
    if config.sources.is_empty() {
        bail!("no sources given; pass CSV files or directories, or use --config");
    }
    load_sources(&config.sources).context("load sources")
}

/// Loads the configured sources and builds the index, drawing a progress
/// bar on an interactive stderr.
pub fn load_index(config: &GlyphConfig) -> Result<DatasetIndex> {
    let loaded = read_sources(config)?;
    let progress = progress_bar(loaded.row_count());
    let index = DatasetIndex::build_from_sources_with_progress(
        &loaded,
        &config.normalize,
        |done, _total| progress.set_position(done as u64),
    );
    progress.finish_and_clear();
    Ok(index)
}

fn progress_bar(len: usize) -> ProgressBar {
    if !io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    match ProgressStyle::with_template(PROGRESS_TEMPLATE) {
        Ok(style) => bar.set_style(style.progress_chars("=> ")),
        Err(error) => debug!(%error, "progress template rejected, using default style"),
    }
    bar
}

pub fn run_load(config_path: Option<&Path>, args: &SourceArgs) -> Result<DatasetIndex> {
    let config = resolve_config(config_path, &args.sources, &args.prefixes)?;
    load_index(&config)
}

/// Converts every record of a JSON file. Row failures are part of the
/// result, not errors.
pub fn run_convert(
    config_path: Option<&Path>,
    input: &Path,
    prefixes: &PrefixArgs,
) -> Result<BatchResult> {
    let config = resolve_config(config_path, &[], prefixes)?;
    let rows = read_json_records(input)
        .with_context(|| format!("read records from {}", input.display()))?;
    Ok(convert_many(&rows, &config.normalize))
}

/// Checks every decoded row, then builds the index and checks its
/// integrity.
pub fn run_validate(config_path: Option<&Path>, args: &SourceArgs) -> Result<ValidationOutcome> {
    let config = resolve_config(config_path, &args.sources, &args.prefixes)?;
    let loaded = read_sources(&config)?;
    let span = info_span!("validate", rows = loaded.row_count());
    let _guard = span.enter();
    let start = Instant::now();

    let mut rows = Vec::new();
    let mut unreadable = Vec::new();
    for row in &loaded.rows {
        match &row.record {
            Ok(record) => {
                let report = validate_structure(record, &config.normalize);
                if !report.issues.is_empty() || !report.warnings.is_empty() {
                    rows.push(RowReport {
                        location: row.location.clone(),
                        report,
                    });
                }
            }
            Err(error) => unreadable.push(UnreadableRow {
                location: row.location.clone(),
                error: error.clone(),
            }),
        }
    }

    let index = DatasetIndex::build_from_sources(&loaded, &config.normalize);
    let integrity = validate_dataset(&index);
    let outcome = ValidationOutcome {
        rows_checked: loaded.row_count(),
        rows,
        unreadable,
        integrity,
    };
    info!(
        rows = outcome.rows_checked,
        errors = outcome.error_count(),
        warnings = outcome.warning_count(),
        valid = outcome.is_valid(),
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    Ok(outcome)
}

use std::fs;
use std::path::{Path, PathBuf};

use glyph_ingest::{IngestError, load_sources, read_json_records, read_source_table};
use glyph_model::ProcessingStage;

fn write(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_rows_as_string_mappings() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(
        dir.path(),
        "diamond.csv",
        b"\xef\xbb\xbfLetter, start_pos ,end_pos,blue_motion_type,blue_turns\nA,alpha3,alpha5,pro,\n",
    );

    let table = read_source_table(&path).expect("read csv");
    assert_eq!(
        table.headers,
        vec!["letter", "start_pos", "end_pos", "blue_motion_type", "blue_turns"]
    );
    assert_eq!(table.row_count(), 1);

    let row = &table.rows[0];
    assert_eq!(row.location.line, 2);
    let record = row.record.as_ref().expect("decoded row");
    assert_eq!(record["letter"], "A");
    assert_eq!(record["start_pos"], "alpha3");
    assert!(record.get("blue_turns").is_none(), "empty cells are absent");
    assert_eq!(table.digest.len(), 64);
}

#[test]
fn skips_blank_lines_and_keeps_bad_rows_in_place() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(
        dir.path(),
        "box.csv",
        b"letter,start_pos\nA,alpha1\n,\n\xff,alpha2\nB,alpha3\n",
    );

    let table = read_source_table(&path).expect("read csv");
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.failed_rows(), 1);

    let bad = table.rows[1].record.as_ref().expect_err("undecodable row");
    assert_eq!(bad.stage, ProcessingStage::Ingest);
    let last = table.rows[2].record.as_ref().expect("decoded row");
    assert_eq!(last["letter"], "B");
}

#[test]
fn missing_letter_column_is_a_file_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(dir.path(), "bad.csv", b"start_pos,end_pos\nalpha1,alpha3\n");

    let err = read_source_table(&path).expect_err("missing column");
    assert!(matches!(err, IngestError::MissingColumn { ref column, .. } if column == "letter"));
}

#[test]
fn missing_file_is_reported() {
    let err = read_source_table(Path::new("/definitely/not/here.csv")).expect_err("missing");
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn load_sources_concatenates_in_argument_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let diamond = write(dir.path(), "b_diamond.csv", b"letter\nA\nB\n");
    let boxed = write(dir.path(), "a_box.csv", b"letter\nC\n");

    let loaded = load_sources(&[diamond, boxed]).expect("load");
    let letters: Vec<&str> = loaded
        .records()
        .filter_map(|record| record["letter"].as_str())
        .collect();
    assert_eq!(letters, vec!["A", "B", "C"]);
    assert_eq!(loaded.sources.len(), 2);
    assert_eq!(loaded.sources[0].rows, 2);
    assert_eq!(loaded.sources[1].rows, 1);
}

#[test]
fn reads_json_object_or_array() {
    let dir = tempfile::tempdir().expect("temp dir");
    let single = write(dir.path(), "one.json", br#"{"letter": "A"}"#);
    let many = write(dir.path(), "many.json", br#"[{"letter": "A"}, 3]"#);
    let scalar = write(dir.path(), "scalar.json", b"42");

    assert_eq!(read_json_records(&single).expect("object").len(), 1);
    assert_eq!(read_json_records(&many).expect("array").len(), 2);
    let err = read_json_records(&scalar).expect_err("scalar");
    assert!(matches!(err, IngestError::JsonShape { found: "number", .. }));
}

use std::fs;

use glyph_core::{DatasetHandle, DatasetIndex};
use glyph_ingest::load_sources;
use glyph_normalization::NormalizeOptions;
use tempfile::TempDir;

#[test]
fn failures_point_at_their_source_line() {
    let dir = TempDir::new().expect("temp dir");
    let first = dir.path().join("box.csv");
    let second = dir.path().join("diamond.csv");
    fs::write(
        &first,
        "letter,start_pos,end_pos,blue_motion_type,red_motion_type\n\
         A,alpha1,alpha3,pro,pro\n\
         ,alpha3,alpha5,anti,anti\n",
    )
    .expect("write box");
    fs::write(
        &second,
        "letter,start_pos,end_pos,blue_motion_type\n\
         B,alpha3,alpha1,dash\n",
    )
    .expect("write diamond");

    let sources = load_sources(&[first.clone(), second]).expect("load");
    let index = DatasetIndex::build_from_sources(&sources, &NormalizeOptions::default());

    assert_eq!(index.len(), 2);
    let report = index.report();
    assert_eq!(report.total_rows, 3);
    assert_eq!(report.sources.len(), 2);
    assert_eq!(report.failures.len(), 1);

    let failure = &report.failures[0];
    assert_eq!(failure.index, 1);
    let location = failure.location.as_ref().expect("location");
    assert_eq!(location.file, first);
    assert_eq!(location.line, 3);
    assert_eq!(failure.error.field(), Some("letter"));

    let letters: Vec<&str> = index
        .continuations("alpha3")
        .iter()
        .filter_map(|record| record.letter.as_ref())
        .map(glyph_model::Letter::as_str)
        .collect();
    assert_eq!(letters, vec!["B"]);
}

#[test]
fn handle_reloads_from_changed_sources() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("box.csv");
    fs::write(&path, "letter,start_pos\nA,alpha1\n").expect("write first");

    let options = NormalizeOptions::new().with_primary_prefix("left");
    let first = load_sources(std::slice::from_ref(&path)).expect("load first");
    let handle = DatasetHandle::new(DatasetIndex::build_from_sources(&first, &options));
    let before = handle.snapshot();

    fs::write(&path, "letter,start_pos\nA,alpha1\nB,beta5\n").expect("write second");
    let second = load_sources(std::slice::from_ref(&path)).expect("load second");
    let after = handle.reload_from_sources(&second);

    assert_eq!(before.len(), 1);
    assert_eq!(after.len(), 2);
    assert_eq!(handle.snapshot().continuations("beta5").len(), 1);
    assert_eq!(after.options(), &options);
    assert_ne!(
        before.report().sources[0].digest,
        after.report().sources[0].digest
    );
}

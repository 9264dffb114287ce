use std::sync::Arc;
use std::thread;

use glyph_core::{DatasetHandle, DatasetIndex};
use glyph_normalization::NormalizeOptions;
use serde_json::json;

#[test]
fn reload_leaves_the_old_index_untouched() {
    let old = DatasetIndex::build(&[
        json!({"letter": "A", "start_pos": "alpha1"}),
        json!({"letter": "B", "start_pos": "alpha1"}),
    ]);
    let new = old.reload(&[json!({"letter": "C", "start_pos": "beta5"})]);

    assert_eq!(old.continuations("alpha1").len(), 2);
    assert!(old.continuations("beta5").is_empty());
    assert!(new.continuations("alpha1").is_empty());
    assert_eq!(new.continuations("beta5").len(), 1);
}

#[test]
fn reload_keeps_the_options() {
    let options = NormalizeOptions::new().with_primary_prefix("left");
    let old = DatasetIndex::build_with_options(&[], &options);
    let new = old.reload(&[json!({"letter": "A", "left_motion_type": "dash"})]);
    assert!(new.records()[0].primary.is_some());
}

#[test]
fn readers_keep_their_snapshot_across_reloads() {
    let handle = Arc::new(DatasetHandle::new(DatasetIndex::build(&[
        json!({"letter": "A", "start_pos": "alpha1"}),
    ])));
    let before = handle.snapshot();

    let writer = {
        let handle = Arc::clone(&handle);
        thread::spawn(move || {
            for round in 0..10 {
                let position = format!("beta{round}");
                handle.reload(&[json!({"letter": "B", "start_pos": position})]);
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let handle = Arc::clone(&handle);
            thread::spawn(move || {
                for _ in 0..50 {
                    let snapshot = handle.snapshot();
                    assert_eq!(snapshot.len(), 1);
                    assert_eq!(snapshot.available_start_positions().len(), 1);
                }
            })
        })
        .collect();

    writer.join().expect("writer");
    for reader in readers {
        reader.join().expect("reader");
    }

    assert_eq!(before.continuations("alpha1").len(), 1);
    let after = handle.snapshot();
    assert!(after.continuations("alpha1").is_empty());
    assert_eq!(after.continuations("beta9").len(), 1);
}

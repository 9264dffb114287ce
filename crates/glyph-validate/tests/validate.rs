use glyph_core::{DatasetIndex, convert_many};
use glyph_normalization::NormalizeOptions;
use glyph_validate::{Issue, validate_dataset, validate_round_trip, validate_structure};
use serde_json::json;

#[test]
fn structure_report_separates_errors_from_warnings() {
    let raw = json!({
        "start_pos": "alpha3",
        "blue_motion_type": "pro",
        "blue_prop_rot_dir": "spin",
        "blue_start_loc": "n",
        "blue_end_loc": "e",
        "blue_turns": "fl"
    });
    let report = validate_structure(&raw, &NormalizeOptions::default());

    assert!(!report.valid);
    insta::assert_json_snapshot!(report, @r#"
    {
      "valid": false,
      "issues": [
        {
          "issue": "required_missing",
          "field": "letter"
        }
      ],
      "warnings": [
        {
          "issue": "expected_missing",
          "field": "end_pos"
        },
        {
          "issue": "unrecognized_value",
          "field": "blue_prop_rot_dir",
          "family": "rotation direction",
          "value": "spin",
          "default": "None"
        },
        {
          "issue": "indeterminate_turns",
          "field": "blue_turns",
          "motion": "Shift"
        },
        {
          "issue": "channel_missing",
          "channel": "secondary"
        }
      ]
    }
    "#);
}

#[test]
fn valid_structure_means_normalization_succeeds() {
    let rows = vec![
        json!({"letter": "A", "start_pos": "alpha1", "end_pos": "alpha3"}),
        json!({"letter": 4}),
        json!("A"),
        json!({"letter": "B", "blue_attributes": 3}),
        json!({"letter": "C", "start_pos": ["alpha1"]}),
    ];
    let options = NormalizeOptions::default();
    let batch = convert_many(&rows, &options);
    let failed: Vec<usize> = batch.failures.iter().map(|(index, _)| *index).collect();

    let invalid: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, raw)| !validate_structure(raw, &options).valid)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(invalid, failed);
}

#[test]
fn built_indices_pass_integrity_and_round_trip() {
    let index = DatasetIndex::build(&[
        json!({
            "letter": "A",
            "start_pos": "alpha3",
            "end_pos": "alpha5",
            "blue_motion_type": "pro",
            "blue_prop_rot_dir": "cw",
            "blue_start_loc": "n",
            "blue_end_loc": "e",
            "red_motion_type": "anti",
            "red_prop_rot_dir": "cw",
            "red_start_loc": "s",
            "red_end_loc": "w"
        }),
        json!({
            "letter": "Λ-",
            "start_pos": "gamma11",
            "blue_motion_type": "dash",
            "red_motion_type": "float",
            "red_turns": "fl"
        }),
        json!({"letter": null}),
    ]);

    let report = validate_dataset(&index);
    assert!(report.valid, "{:?}", report.issues);
    assert_eq!(report.records, 2);
    assert_eq!(report.excluded_rows, 1);

    for record in index.records() {
        let round_trip = validate_round_trip(record, index.options());
        assert!(round_trip.valid, "{:?}", round_trip.issues);
    }
}

#[test]
fn unknown_letters_are_warnings_only() {
    let report = validate_structure(
        &json!({"letter": "Ж", "start_pos": "alpha1", "end_pos": "alpha1"}),
        &NormalizeOptions::default(),
    );
    assert!(report.valid);
    assert!(report.warnings.contains(&Issue::UnknownLetter {
        letter: "Ж".to_string()
    }));
}

#[test]
fn off_grid_turns_are_reported() {
    let report = validate_structure(
        &json!({
            "letter": "A",
            "start_pos": "alpha1",
            "end_pos": "alpha3",
            "blue_motion_type": "pro",
            "blue_prop_rot_dir": "cw",
            "blue_start_loc": "n",
            "blue_end_loc": "e",
            "blue_turns": "1.25",
            "red_motion_type": "anti",
            "red_prop_rot_dir": "cw",
            "red_start_loc": "s",
            "red_end_loc": "w",
            "red_turns": 0.2
        }),
        &NormalizeOptions::default(),
    );
    assert!(report.valid);
    assert_eq!(
        report.warnings,
        vec![
            Issue::UnrecognizedValue {
                field: "blue_turns".to_string(),
                family: "turns".to_string(),
                value: "1.25".to_string(),
                default: "0".to_string(),
            },
            Issue::UnrecognizedValue {
                field: "red_turns".to_string(),
                family: "turns".to_string(),
                value: "0.2".to_string(),
                default: "0".to_string(),
            },
        ]
    );
}

#[test]
fn wrong_typed_subfields_are_stricter_than_normalization() {
    let raw = json!({
        "letter": "A",
        "start_pos": "alpha1",
        "end_pos": "alpha3",
        "blue_motion_type": 5
    });
    let options = NormalizeOptions::default();

    let batch = convert_many(std::slice::from_ref(&raw), &options);
    assert!(batch.is_clean());

    let report = validate_structure(&raw, &options);
    assert!(!report.valid);
    assert_eq!(report.issues[0].field(), Some("blue_motion_type"));
}

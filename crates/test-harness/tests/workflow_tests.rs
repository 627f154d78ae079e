use mesh_extract::ExtractConfig;
use quote_bridge::messages::{ErrorKind, QuoteToHost};
use quote_types::BoundingBox;
use test_harness::assertions::*;
use test_harness::helpers::*;
use test_harness::{HarnessError, QuoteBuilder};

#[test]
fn upload_single_box() {
    let mut qb = QuoteBuilder::new();
    let batch_id = qb.add_box("Block.STL", [10.0, 20.0, 30.0]).upload().unwrap();

    assert_eq!(batch_id, qb.batch().batch_id);
    qb.assert_record_count(1).unwrap();
    let rec = qb.record("block.stl").unwrap();
    assert_bounding_box(rec, BoundingBox::new(10.0, 20.0, 30.0), 1e-9, "block").unwrap();
    assert_measurements(rec, 6000.0, 2200.0, 1e-6, "block").unwrap();
}

#[test]
fn file_names_are_lower_cased() {
    let mut qb = QuoteBuilder::new();
    qb.add_box("MiXeD.Stl", [1.0; 3]).upload().unwrap();
    assert_eq!(qb.batch().records[0].file_name, "mixed.stl");
    assert!(qb.record("MIXED.STL").is_ok());
}

#[test]
fn mixed_upload_reports_each_rejection() {
    let mut qb = QuoteBuilder::new();
    qb.add_box("a.stl", [1.0; 3])
        .add_raw("model.obj", b"v 0 0 0")
        .add_raw("empty.stl", &test_harness::stl::write_binary_stl(&[], "empty"))
        .add_garbled("garbled.stl")
        .add_ascii("b.stl", &tetrahedron_triangles(3.0))
        .upload()
        .unwrap();

    qb.assert_record_count(2).unwrap();
    qb.assert_rejected("model.obj", ErrorKind::UnsupportedFormat)
        .unwrap()
        .assert_rejected("empty.stl", ErrorKind::InvalidGeometry)
        .unwrap()
        .assert_rejected("garbled.stl", ErrorKind::BadPayload)
        .unwrap();
    assert_eq!(qb.failures().len(), 3);

    let tet = qb.record("b.stl").unwrap();
    assert_measurements(tet, 4.5, 4.5 * 3.0 + 4.5 * 3.0_f64.sqrt(), 1e-6, "tet").unwrap();
}

#[test]
fn binary_only_config_rejects_ascii() {
    let mut qb = QuoteBuilder::with_config(ExtractConfig::binary_only());
    qb.add_ascii("text.stl", &cube_triangles(1.0))
        .add_box("bin.stl", [1.0; 3])
        .upload()
        .unwrap();

    qb.assert_record_count(1).unwrap();
    qb.assert_rejected("text.stl", ErrorKind::InvalidGeometry).unwrap();
}

#[test]
fn calculate_without_upload_fails() {
    let mut qb = QuoteBuilder::new();
    match qb.calculate(unit_rates(2.0)) {
        Err(HarnessError::DispatchError { message }) => {
            assert_eq!(message, quote_bridge::NO_GEOMETRY_MESSAGE)
        }
        other => panic!("Expected DispatchError, got {:?}", other),
    }
}

#[test]
fn calculate_at_picks_record() {
    let mut qb = QuoteBuilder::new();
    qb.add_box("small.stl", [1.0; 3])
        .add_box("large.stl", [8.0; 3])
        .upload()
        .unwrap();

    let first = qb.calculate(unit_rates(0.0)).unwrap();
    let second = qb.calculate_at(unit_rates(0.0), 1).unwrap();
    assert_eq!(first.x_dimension, 1.0);
    assert_eq!(second.x_dimension, 8.0);

    let response = qb.calculate_raw(unit_rates(0.0), Some(2));
    assert!(matches!(
        response,
        QuoteToHost::Error {
            kind: ErrorKind::RecordOutOfRange,
            ..
        }
    ));
}

#[test]
fn fetch_batch_matches_session() {
    let mut qb = QuoteBuilder::new();
    qb.add_box("part.stl", [2.0, 3.0, 4.0]).upload().unwrap();
    let batch = qb.fetch_batch().unwrap();
    assert_eq!(batch.batch_id, qb.batch().batch_id);
    assert_eq!(batch.records, qb.batch().records);
}

#[test]
fn history_records_each_message() {
    let mut qb = QuoteBuilder::new();
    qb.add_box("a.stl", [1.0; 3])
        .add_raw("b.step", b"ISO-10303-21;")
        .upload()
        .unwrap();
    qb.calculate(unit_rates(1.0)).unwrap();
    let _ = qb.calculate_raw(unit_rates(1.0), Some(9));
    qb.fetch_batch().unwrap();

    let history: Vec<(&str, &str)> = qb
        .history()
        .iter()
        .map(|(a, b)| (a.as_str(), b.as_str()))
        .collect();
    assert_eq!(
        history,
        [
            ("Upload", "Uploaded(1 rejected)"),
            ("Calculate", "Calculated"),
            ("Calculate", "Error"),
            ("GetBatch", "Batch"),
        ]
    );
}

#[test]
fn report_lists_records_and_rejections() {
    let mut qb = QuoteBuilder::new();
    qb.add_box("cube.stl", [10.0; 3])
        .add_raw("notes.txt", b"hello")
        .upload()
        .unwrap();

    let report = qb.report();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.failures.len(), 1);

    let text = report.to_text();
    assert!(text.contains("cube.stl"));
    assert!(text.contains("notes.txt [UnsupportedFormat]"));

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["records"][0]["extents"][0], 10.0);
    assert_eq!(json["failures"][0]["kind"], "UnsupportedFormat");
}

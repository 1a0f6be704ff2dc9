use pathweave_cluster::cluster;
use pathweave_core::{ClusterResult, VisualAttrs};
use pathweave_svg::{DocumentInfo, SvgExporter, SvgImporter};

#[test]
fn test_export_file_round_trips_through_importer() {
    let attrs = VisualAttrs::new(0.75, "#112233");
    let segments = vec![
        pathweave_cluster::build_segment(0, "M 0 0 L 10 0", attrs.clone()).unwrap(),
        pathweave_cluster::build_segment(1, "M 10 0 L 10 10", attrs.clone()).unwrap(),
        pathweave_cluster::build_segment(2, "M 50 50 L 60 60", attrs).unwrap(),
    ];
    let result = cluster(&segments, 0.5).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.svg");
    SvgExporter::new()
        .export_file(&path, &DocumentInfo::default(), &result)
        .unwrap();

    let reread = SvgImporter::new(false).unwrap().import_file(&path).unwrap();
    assert_eq!(reread.segments.len(), 2);
    assert_eq!(reread.segments[0].d_attribute, "M 0 0 L 10 0 L 10 10");
    assert_eq!(reread.segments[1].d_attribute, "M 50 50 L 60 60");
    assert!(reread
        .segments
        .iter()
        .all(|s| s.visual_attrs == VisualAttrs::new(0.75, "#112233")));
}

#[test]
fn test_export_empty_result() {
    let svg = SvgExporter::new().render(&DocumentInfo::default(), &ClusterResult::empty());
    assert!(svg.contains("width=\"100%\" height=\"100%\""));
    assert!(!svg.contains("<g "));
    assert!(!svg.contains("viewBox"));
}

#[test]
fn test_export_file_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.svg");
    assert!(SvgExporter::new()
        .export_file(&path, &DocumentInfo::default(), &ClusterResult::empty())
        .is_err());
}

use pathweave_core::{Point, VisualAttrs};
use pathweave_svg::{SvgError, SvgImporter};
use std::io::Write;

const PDF_EXPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="595pt" height="842pt" viewBox="0 0 595 842">
<g id="surface1">
<path style="fill:none;stroke-width:0.5;stroke-linecap:butt;stroke-linejoin:miter;stroke:rgb(0%,0%,0%);stroke-opacity:1;" d="M 10 10 L 20 10 " transform="matrix(1,0,0,-1,0,842)"/>
<path style="fill:none;stroke-width:0.5;stroke:rgb(0%,0%,0%);" d="M 20 10 L 20 20 " transform="matrix(1,0,0,-1,0,842)"/>
<path style="fill:none;stroke-width:3;stroke:rgb(100%,100%,100%);" d="M 0 0 L 100 100 " transform="matrix(1,0,0,-1,0,842)"/>
</g>
</svg>
"#;

#[test]
fn test_import_pdf_style_document() {
    let drawing = SvgImporter::new(false).unwrap().import_str(PDF_EXPORT).unwrap();

    assert_eq!(drawing.segments.len(), 2);
    assert_eq!(drawing.skipped.white, 1);
    assert_eq!(drawing.document.width, "595pt");
    assert_eq!(drawing.document.view_box.as_deref(), Some("0 0 595 842"));
    assert_eq!(
        drawing.document.transform.as_deref(),
        Some("matrix(1,0,0,-1,0,842)")
    );

    let first = &drawing.segments[0];
    assert_eq!(first.start, Point::new(10.0, 10.0));
    assert_eq!(first.end, Point::new(20.0, 10.0));
    assert_eq!(first.visual_attrs, VisualAttrs::new(0.5, "#000000"));
    assert_eq!(first.d_attribute, "M 10 10 L 20 10");
    assert!(!first.is_closed);
}

#[test]
fn test_import_closed_and_relative_paths() {
    let svg = r#"<svg>
        <path d="m 0 0 l 10 0 l 0 10 z" stroke="black"/>
        <path d="M 5,5 h 10 v 10" stroke="black"/>
    </svg>"#;
    let drawing = SvgImporter::new(false).unwrap().import_str(svg).unwrap();

    let ring = &drawing.segments[0];
    assert!(ring.is_closed);
    assert_eq!(ring.start, Point::new(0.0, 0.0));
    assert_eq!(ring.end, Point::new(0.0, 0.0));

    let bend = &drawing.segments[1];
    assert_eq!(bend.end, Point::new(15.0, 15.0));
}

#[test]
fn test_import_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PDF_EXPORT.as_bytes()).unwrap();

    let drawing = SvgImporter::new(true).unwrap().import_file(file.path()).unwrap();
    assert_eq!(drawing.segments.len(), 3);
    assert_eq!(drawing.segments[2].visual_attrs.stroke_color, "#FFFFFF");
}

#[test]
fn test_import_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SvgImporter::new(false)
        .unwrap()
        .import_file(dir.path().join("absent.svg"))
        .unwrap_err();
    assert!(matches!(err, SvgError::Io(_)));
}

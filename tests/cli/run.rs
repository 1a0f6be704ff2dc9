use clap::Parser;
use pathweave::cli::{execute, Args};
use pathweave::Config;
use std::path::Path;

const FRAGMENTS: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" viewBox="0 0 200 100">
<path d="M 0 0 L 10 0" stroke="#000" stroke-width="0.5"/>
<path d="M 10 0 L 10 10" stroke="#000" stroke-width="0.5"/>
<path d="M 10.2 10 L 0 10" stroke="#000" stroke-width="0.5"/>
<path d="M 0 10 L 0 0" stroke="#000" stroke-width="0.5"/>
<path d="M 50 50 L 60 50" stroke="#f00" stroke-width="1"/>
<path d="M 0 0 L 200 100" stroke="#fff" stroke-width="4"/>
</svg>
"##;

fn write_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    Config::new().save_to_file(&path).unwrap();
    path
}

fn args(dir: &Path, extra: &[&str]) -> Args {
    let input = dir.join("drawing.svg");
    std::fs::write(&input, FRAGMENTS).unwrap();
    let config = write_config(dir);

    let mut argv = vec![
        "pathweave".to_string(),
        input.display().to_string(),
        "--config".to_string(),
        config.display().to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_cluster_square_with_default_output() {
    let dir = tempfile::tempdir().unwrap();
    let report = execute(&args(dir.path(), &[])).unwrap();

    assert_eq!(report.output, dir.path().join("drawing-clustered.svg"));
    assert_eq!(report.extracted_segments, 5);
    assert_eq!(report.skipped_white, 1);
    assert_eq!(report.stats.total_chains, 1);
    assert_eq!(report.stats.loop_count, 1);
    assert_eq!(report.stats.orphan_count, 1);

    let svg = std::fs::read_to_string(&report.output).unwrap();
    assert!(svg.contains("viewBox=\"0 0 200 100\""));
    assert!(svg.contains("id=\"chain-0\""));
    assert!(svg.contains("id=\"orphan-4\""));
    assert!(!svg.contains("#FFFFFF"));
}

#[test]
fn test_tight_tolerance_breaks_the_gap() {
    let dir = tempfile::tempdir().unwrap();
    let report = execute(&args(dir.path(), &["--tolerance", "0.1"])).unwrap();
    // the square opens at the gap and becomes one open chain
    assert_eq!(report.stats.loop_count, 0);
    assert_eq!(report.stats.total_chains, 1);
    assert_eq!(report.stats.max_chain_length, 4);
}

#[test]
fn test_by_attrs_with_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("joined.svg");
    let mut parsed = args(dir.path(), &["--by-attrs", "--keep-white"]);
    parsed.output = Some(output.clone());

    let report = execute(&parsed).unwrap();
    assert!(report.by_attrs);
    assert_eq!(report.groups.len(), 3);
    assert_eq!(report.stats.total_input_segments, 6);
    assert!(output.exists());
    assert!(report.to_string().contains("Total output paths: 3"));
}

#[test]
fn test_no_segments_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("blank.svg");
    std::fs::write(&input, "<svg width=\"10\" height=\"10\"></svg>").unwrap();
    let config = write_config(dir.path());

    let parsed = Args::try_parse_from([
        "pathweave".to_string(),
        input.display().to_string(),
        "--config".to_string(),
        config.display().to_string(),
    ])
    .unwrap();
    let err = execute(&parsed).unwrap_err();
    assert!(err.to_string().contains("No segments found"));
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let parsed = Args::try_parse_from([
        "pathweave".to_string(),
        dir.path().join("absent.svg").display().to_string(),
        "--config".to_string(),
        config.display().to_string(),
    ])
    .unwrap();
    assert!(execute(&parsed).is_err());
}

#[test]
fn test_invalid_tolerance_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = execute(&args(dir.path(), &["--tolerance", "0"])).unwrap_err();
    assert!(format!("{:#}", err).contains("cluster.tolerance"));
}

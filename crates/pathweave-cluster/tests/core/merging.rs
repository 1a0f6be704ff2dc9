use pathweave_cluster::{
    build_segment, cluster, format_commands, merge_commands, normalize, parse_path_data,
    reverse_commands, reverse_path_data, CommandKind,
};
use pathweave_core::{PathDataError, PathSegment, VisualAttrs};

fn segment(id: usize, d: &str) -> PathSegment {
    build_segment(id, d, VisualAttrs::new(0.5, "#112233")).unwrap()
}

#[test]
fn test_merge_mixed_commands_with_reversal() {
    let a = segment(0, "M 0 0 h 10");
    let b = segment(1, "M 20 5 Q 15 10 10 0");
    let c = segment(2, "m 20 5 a 5 5 0 0 1 10 0");

    let result = cluster(&[a, b, c], 0.5).unwrap();
    assert_eq!(result.chains.len(), 1);
    let chain = &result.chains[0];
    assert_eq!(chain.segment_ids, vec![0, 1, 2]);
    assert_eq!(chain.reversed, vec![false, true, false]);
    assert_eq!(
        chain.merged_d,
        "M 0 0 L 10 0 Q 15 10 20 5 A 5 5 0 0 1 30 5"
    );
}

#[test]
fn test_smooth_curves_reverse_after_normalization() {
    let commands = reverse_path_data("M 0 0 C 0 1 2 1 2 0 S 4 -1 4 0").unwrap();
    assert_eq!(
        format_commands(&commands, None),
        "M 4 0 C 4 -1 2 -1 2 0 C 2 1 0 1 0 0"
    );
}

#[test]
fn test_reversal_rejects_shorthand() {
    let err = reverse_commands(&parse_path_data("M 0 0 T 4 0")).unwrap_err();
    assert_eq!(err, PathDataError::UnsupportedReversal { command: 'T' });
    assert!(err.to_string().contains("'T'"));
}

#[test]
fn test_merged_sequence_has_one_move() {
    let segments = [
        segment(0, "M 0 0 L 1 0"),
        segment(1, "M 2 0 L 1 0"),
        segment(2, "M 2 0 C 3 1 4 1 5 0"),
    ];
    let commands = merge_commands([
        (&segments[0], false),
        (&segments[1], true),
        (&segments[2], false),
    ])
    .unwrap();

    let moves = commands
        .iter()
        .filter(|c| c.kind == CommandKind::MoveTo)
        .count();
    assert_eq!(moves, 1);
    assert!(commands.iter().all(|c| !c.relative));
}

#[test]
fn test_multi_subpath_segment_in_chain() {
    let a = segment(0, "M 0 0 L 10 0");
    let b = segment(1, "M 30 30 L 31 31 M 20 0 L 10 0");

    let result = cluster(&[a, b], 0.5).unwrap();
    let chain = &result.chains[0];
    assert_eq!(chain.reversed, vec![false, true]);
    assert_eq!(
        chain.merged_d,
        "M 0 0 L 10 0 L 20 0 M 31 31 L 30 30"
    );
}

#[test]
fn test_normalize_then_format_precision() {
    let commands = normalize(&parse_path_data("m 0.123456 0 l 1.000001 0"));
    assert_eq!(
        format_commands(&commands, Some(3)),
        "M 0.123 0 L 1.123 0"
    );
}

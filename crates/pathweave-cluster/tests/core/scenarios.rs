use pathweave_cluster::{build_segment, cluster, parse_path_data, reverse_path_data, CommandKind};
use pathweave_core::{PathSegment, Point, VisualAttrs};

fn segments(data: &[&str]) -> Vec<PathSegment> {
    data.iter()
        .enumerate()
        .map(|(id, d)| build_segment(id, d, VisualAttrs::new(1.0, "#000000")).unwrap())
        .collect()
}

#[test]
fn test_two_touching_lines_join() {
    let result = cluster(&segments(&["M 0,0 L 10,0", "M 10,0 L 20,0"]), 0.5).unwrap();

    assert_eq!(result.chains.len(), 1);
    assert_eq!(result.chains[0].segment_count(), 2);
    assert_eq!(result.chains[0].merged_d, "M 0 0 L 10 0 L 20 0");
    assert!(result.orphan_segments.is_empty());
    assert_eq!(result.stats.output_path_count(), 1);
    assert!((result.stats.path_count_reduction() - 50.0).abs() < 1e-9);
}

#[test]
fn test_lone_closed_square_is_loop() {
    let result = cluster(&segments(&["M 0,0 L 10,0 L 10,10 L 0,10 Z"]), 0.5).unwrap();

    assert_eq!(result.chains.len(), 1);
    let chain = &result.chains[0];
    assert!(chain.is_loop);
    assert_eq!(chain.segment_count(), 1);
    assert_eq!(chain.merged_d, "M 0,0 L 10,0 L 10,10 L 0,10 Z");
    assert!(result.orphan_segments.is_empty());
}

#[test]
fn test_lone_geometrically_closed_is_loop() {
    let result = cluster(&segments(&["M 0 0 L 10 0 L 10 10 L 0.2 0.1"]), 0.5).unwrap();
    assert_eq!(result.chains.len(), 1);
    assert!(result.chains[0].is_loop);
}

#[test]
fn test_square_edges_any_order() {
    let orders: [[&str; 4]; 3] = [
        ["M 0 0 L 10 0", "M 10 0 L 10 10", "M 10 10 L 0 10", "M 0 10 L 0 0"],
        ["M 10 10 L 0 10", "M 0 0 L 10 0", "M 0 10 L 0 0", "M 10 0 L 10 10"],
        ["M 10 0 L 0 0", "M 10 10 L 10 0", "M 0 10 L 10 10", "M 0 0 L 0 10"],
    ];

    for edges in orders {
        let result = cluster(&segments(&edges), 0.5).unwrap();
        assert_eq!(result.chains.len(), 1, "{edges:?}");
        let chain = &result.chains[0];
        assert!(chain.is_loop, "{edges:?}");
        assert_eq!(chain.segment_count(), 4);
        assert!(result.orphan_segments.is_empty());
        assert_eq!(result.stats.loop_count, 1);
    }
}

#[test]
fn test_distant_segments_are_orphans() {
    let result = cluster(&segments(&["M 0 0 L 10 0", "M 110 100 L 120 100"]), 0.5).unwrap();

    assert!(result.chains.is_empty());
    assert_eq!(result.orphan_segments.len(), 2);
    assert_eq!(result.stats.orphan_count, 2);
    assert_eq!(result.stats.path_count_reduction(), 0.0);
}

#[test]
fn test_reversed_cubic() {
    let commands = reverse_path_data("M 0,0 C 1,2 3,4 5,6").unwrap();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].kind, CommandKind::MoveTo);
    assert_eq!(commands[0].args, vec![5.0, 6.0]);
    assert_eq!(commands[1].kind, CommandKind::CubicTo);
    assert_eq!(commands[1].args, vec![3.0, 4.0, 1.0, 2.0, 0.0, 0.0]);
}

#[test]
fn test_gap_within_tolerance_joins() {
    let result = cluster(&segments(&["M 0 0 L 10 0", "M 10.3 0.2 L 20 0"]), 0.5).unwrap();
    assert_eq!(result.chains.len(), 1);

    let result = cluster(&segments(&["M 0 0 L 10 0", "M 10.6 0 L 20 0"]), 0.5).unwrap();
    assert!(result.chains.is_empty());
}

#[test]
fn test_stats_over_mixed_input() {
    let result = cluster(
        &segments(&[
            "M 0 0 L 10 0",
            "M 10 0 L 20 0",
            "M 20 0 L 30 0",
            "M 50 50 L 60 50 L 55 60 Z",
            "M 100 0 L 110 0",
        ]),
        0.5,
    )
    .unwrap();

    let stats = &result.stats;
    assert_eq!(stats.total_input_segments, 5);
    assert_eq!(stats.total_chains, 2);
    assert_eq!(stats.orphan_count, 1);
    assert_eq!(stats.loop_count, 1);
    assert_eq!(stats.max_chain_length, 3);
    assert!((stats.avg_chain_length - 2.0).abs() < 1e-12);
}

#[test]
fn test_endpoint_extraction_through_parse() {
    let commands = parse_path_data("m 5 5 h 10 v 10 z");
    let cursor = pathweave_cluster::path_data::replay(&commands);
    assert_eq!(cursor.current, Point::new(5.0, 5.0));
}

use pathweave_cluster::{build_segment, cluster};
use pathweave_core::{ClusterResult, PathSegment, VisualAttrs};

fn segments(data: &[&str]) -> Vec<PathSegment> {
    data.iter()
        .enumerate()
        .map(|(id, d)| build_segment(id, d, VisualAttrs::new(1.0, "#000000")).unwrap())
        .collect()
}

fn accounted(result: &ClusterResult) -> usize {
    result.chains.iter().map(|c| c.segment_count()).sum::<usize>() + result.orphan_segments.len()
}

#[test]
fn test_star_splits_into_two_chains() {
    let input = segments(&[
        "M -10 0 L 0 0",
        "M 0 0 L 10 0",
        "M 0 0 L 0 10",
        "M 0 -10 L 0 0",
    ]);
    let result = cluster(&input, 0.5).unwrap();

    assert_eq!(result.chains.len(), 2);
    assert_eq!(result.chains[0].segment_ids, vec![0, 1]);
    assert_eq!(result.chains[1].segment_ids, vec![2, 3]);
    assert_eq!(result.chains[1].reversed, vec![true, true]);
    assert_eq!(result.chains[1].merged_d, "M 0 10 L 0 0 L 0 -10");
    assert_eq!(accounted(&result), input.len());
}

#[test]
fn test_loop_with_tail_is_open() {
    let input = segments(&[
        "M 0 0 L 10 0",
        "M 10 0 L 10 10",
        "M 10 10 L 0 10",
        "M 0 10 L 0 0",
        "M 0 0 L -10 0",
    ]);
    let result = cluster(&input, 0.5).unwrap();

    assert_eq!(result.chains.len(), 1);
    let chain = &result.chains[0];
    assert_eq!(chain.segment_ids, vec![4, 0, 1, 2, 3]);
    assert_eq!(chain.reversed, vec![true, false, false, false, false]);
    assert!(!chain.is_loop);
    assert_eq!(
        chain.merged_d,
        "M -10 0 L 0 0 L 10 0 L 10 10 L 0 10 L 0 0"
    );
}

#[test]
fn test_closed_ring_on_a_line() {
    let input = segments(&["M 0 0 L 5 5 L 0 10 Z", "M 0 0 L -10 0"]);
    let result = cluster(&input, 0.5).unwrap();

    assert_eq!(result.chains.len(), 1);
    let chain = &result.chains[0];
    assert_eq!(chain.segment_ids, vec![1, 0]);
    assert_eq!(chain.reversed, vec![true, false]);
    assert_eq!(chain.merged_d, "M -10 0 L 0 0 L 5 5 L 0 10 L 0 0");
}

#[test]
fn test_branch_choice_is_stable_across_input_order() {
    let forward = segments(&["M -10 0 L 0 0", "M 0 0 L 10 0", "M 0 0 L 0 10"]);
    let mut shuffled = forward.clone();
    shuffled.reverse();

    let a = cluster(&forward, 0.5).unwrap();
    let b = cluster(&shuffled, 0.5).unwrap();

    assert_eq!(a.chains[0].segment_ids, b.chains[0].segment_ids);
    assert_eq!(a.chains[0].merged_d, b.chains[0].merged_d);
    assert_eq!(a.orphan_segments[0].segment_id, 2);
    assert_eq!(b.orphan_segments[0].segment_id, 2);
}

#[test]
fn test_chain_ids_follow_input_order() {
    let input = segments(&[
        "M 100 0 L 110 0",
        "M 0 0 L 10 0",
        "M 110 0 L 120 0",
        "M 10 0 L 20 0",
    ]);
    let result = cluster(&input, 0.5).unwrap();

    assert_eq!(result.chains.len(), 2);
    assert_eq!(result.chains[0].chain_id, 0);
    assert_eq!(result.chains[0].segment_ids, vec![0, 2]);
    assert_eq!(result.chains[1].chain_id, 1);
    assert_eq!(result.chains[1].segment_ids, vec![1, 3]);
}

#[test]
fn test_dense_junction_accounts_for_every_segment() {
    // six spokes meeting at one point
    let input = segments(&[
        "M 0 0 L 10 0",
        "M 0 0 L -10 0",
        "M 0 0 L 0 10",
        "M 0 0 L 0 -10",
        "M 0 0 L 7 7",
        "M 0 0 L -7 -7",
    ]);
    let result = cluster(&input, 0.5).unwrap();

    assert_eq!(result.chains.len(), 3);
    assert!(result.orphan_segments.is_empty());
    assert_eq!(accounted(&result), input.len());
    for chain in &result.chains {
        assert_eq!(chain.segment_count(), 2);
    }
}

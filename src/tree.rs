//! Queue-driven construction of one decision tree.
//!
//! Expansion is iterative, not recursive: a FIFO queue holds the nodes
//! pending expansion together with the samples that reached them. Each
//! dequeued node is split, its children are allocated in the shared arena,
//! and the stopping rules decide per child between enqueueing and sealing
//! it as a leaf.

use std::collections::VecDeque;

use tracing::debug;

use crate::node::{NodeArena, NodeId};
use crate::sample::Sample;
use crate::split::find_split;

/// Stopping parameters for tree growth.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GrowLimits {
    /// Depth ceiling; a node deeper than this is never expanded.
    /// `None` means unlimited.
    pub(crate) max_depth: Option<usize>,
    /// Minimum partition size required to keep expanding a node.
    pub(crate) min_size: usize,
}

/// Expand `root` (already allocated at depth 1, holding `samples`) into a
/// complete tree inside `arena`.
///
/// Stopping rules, first match wins per dequeued node:
/// 1. Either partition empty: both children become leaves carrying the
///    majority class of the *parent's* full sample set.
/// 2. Parent depth exceeds `max_depth`: both children become leaves, each
///    from its own partition.
/// 3. Per side: a partition smaller than `min_size` becomes a leaf;
///    otherwise it is enqueued for further expansion.
pub(crate) fn grow(
    arena: &mut NodeArena,
    root: NodeId,
    samples: Vec<Sample>,
    num_feature: usize,
    num_class: usize,
    limits: GrowLimits,
) {
    let mut queue: VecDeque<(NodeId, Vec<Sample>)> = VecDeque::new();
    queue.push_back((root, samples));

    while let Some((id, samples)) = queue.pop_front() {
        let depth = arena.node(id).depth();
        let split = find_split(&samples, num_feature, num_class);

        let parent_majority = majority_class(&samples, num_class);
        let (left_samples, right_samples): (Vec<Sample>, Vec<Sample>) = samples
            .into_iter()
            .partition(|s| s.features()[split.feature.index()] < split.value);

        let left = arena.alloc(depth + 1);
        let right = arena.alloc(depth + 1);
        arena.make_split(id, split.feature, split.value, left, right);

        // Degenerate split: absorb into the parent's statistics.
        if left_samples.is_empty() || right_samples.is_empty() {
            arena.make_leaf(left, parent_majority);
            arena.make_leaf(right, parent_majority);
            continue;
        }

        if limits.max_depth.is_some_and(|max| depth > max) {
            arena.make_leaf(left, majority_class(&left_samples, num_class));
            arena.make_leaf(right, majority_class(&right_samples, num_class));
            continue;
        }

        for (child, partition) in [(left, left_samples), (right, right_samples)] {
            if partition.len() < limits.min_size {
                arena.make_leaf(child, majority_class(&partition, num_class));
            } else {
                queue.push_back((child, partition));
            }
        }
    }

    debug!(root = %root, n_nodes = arena.len(), "tree grown");
}

/// Class with the most samples; ties resolved by lowest class id.
pub(crate) fn majority_class(samples: &[Sample], num_class: usize) -> usize {
    let mut counts = vec![0usize; num_class];
    for sample in samples {
        counts[sample.label()] += 1;
    }
    let mut best = 0;
    for class in 1..num_class {
        if counts[class] > counts[best] {
            best = class;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::{GrowLimits, grow, majority_class};
    use crate::node::{NodeArena, NodeKind};
    use crate::sample::Sample;

    fn limits(max_depth: Option<usize>, min_size: usize) -> GrowLimits {
        GrowLimits { max_depth, min_size }
    }

    fn two_cluster_samples() -> Vec<Sample> {
        vec![
            Sample::new(vec![0.1], 0),
            Sample::new(vec![0.2], 0),
            Sample::new(vec![0.9], 1),
            Sample::new(vec![1.0], 1),
        ]
    }

    #[test]
    fn majority_counts_labels() {
        let samples = vec![
            Sample::new(vec![0.0], 1),
            Sample::new(vec![0.0], 1),
            Sample::new(vec![0.0], 0),
        ];
        assert_eq!(majority_class(&samples, 2), 1);
    }

    #[test]
    fn majority_tie_goes_to_lowest_class() {
        let samples = vec![Sample::new(vec![0.0], 2), Sample::new(vec![0.0], 1)];
        assert_eq!(majority_class(&samples, 3), 1);
    }

    #[test]
    fn majority_of_empty_set_is_class_zero() {
        assert_eq!(majority_class(&[], 4), 0);
    }

    #[test]
    fn perfect_split_gives_root_and_two_leaves() {
        let mut arena = NodeArena::new();
        let root = arena.alloc(1);
        grow(&mut arena, root, two_cluster_samples(), 1, 2, limits(Some(10), 1));

        assert_eq!(arena.len(), 3);
        let (left, right) = match arena.node(root).kind() {
            NodeKind::Split { value, left, right, .. } => {
                assert!((value - 0.9).abs() < f64::EPSILON);
                (*left, *right)
            }
            other => panic!("expected split root, got {other:?}"),
        };
        assert_eq!(arena.node(left).kind(), &NodeKind::Leaf { class: 0 });
        assert_eq!(arena.node(right).kind(), &NodeKind::Leaf { class: 1 });
        assert_eq!(arena.node(left).depth(), 2);
        assert_eq!(arena.node(right).depth(), 2);
    }

    #[test]
    fn empty_partition_seals_both_children_with_parent_majority() {
        // Identical feature values: every split leaves the left side empty.
        let samples = vec![
            Sample::new(vec![1.0], 0),
            Sample::new(vec![1.0], 0),
            Sample::new(vec![1.0], 1),
        ];
        let mut arena = NodeArena::new();
        let root = arena.alloc(1);
        grow(&mut arena, root, samples, 1, 2, limits(Some(10), 1));

        assert_eq!(arena.len(), 3);
        match arena.node(root).kind() {
            NodeKind::Split { left, right, .. } => {
                assert_eq!(arena.node(*left).kind(), &NodeKind::Leaf { class: 0 });
                assert_eq!(arena.node(*right).kind(), &NodeKind::Leaf { class: 0 });
            }
            other => panic!("expected split root, got {other:?}"),
        }
    }

    #[test]
    fn min_size_seals_small_partitions() {
        let mut arena = NodeArena::new();
        let root = arena.alloc(1);
        // Both partitions (2 samples each) fall below min_size = 10.
        grow(&mut arena, root, two_cluster_samples(), 1, 2, limits(Some(10), 10));

        assert_eq!(arena.len(), 3);
        match arena.node(root).kind() {
            NodeKind::Split { left, right, .. } => {
                assert!(arena.node(*left).is_terminal());
                assert!(arena.node(*right).is_terminal());
            }
            other => panic!("expected split root, got {other:?}"),
        }
    }

    #[test]
    fn depth_rule_bounds_expansion() {
        // Alternating labels along one feature force deep recursion unless
        // the depth rule cuts growth off.
        let samples: Vec<Sample> = (0..32)
            .map(|i| Sample::new(vec![i as f64], i % 2))
            .collect();
        let mut arena = NodeArena::new();
        let root = arena.alloc(1);
        grow(&mut arena, root, samples, 1, 2, limits(Some(2), 1));

        // Nodes at depth max_depth + 1 may still be expanded; their children
        // land one level deeper before being sealed.
        for idx in 0..arena.len() {
            let node = arena.node(crate::node::NodeId::new(idx));
            assert!(node.depth() <= 4, "node at depth {}", node.depth());
            if !node.is_terminal() {
                assert!(node.depth() <= 3, "split node at depth {}", node.depth());
            }
        }
    }

    #[test]
    fn unlimited_depth_terminates() {
        let samples: Vec<Sample> = (0..16)
            .map(|i| Sample::new(vec![i as f64], i % 2))
            .collect();
        let mut arena = NodeArena::new();
        let root = arena.alloc(1);
        grow(&mut arena, root, samples, 1, 2, limits(None, 1));

        // Every node is finalized and children sit one level below parents.
        for idx in 0..arena.len() {
            let id = crate::node::NodeId::new(idx);
            match arena.node(id).kind() {
                NodeKind::Unexpanded => panic!("unexpanded node survived growth"),
                NodeKind::Split { left, right, .. } => {
                    assert_eq!(arena.node(*left).depth(), arena.node(id).depth() + 1);
                    assert_eq!(arena.node(*right).depth(), arena.node(id).depth() + 1);
                }
                NodeKind::Leaf { class } => assert!(*class < 2),
            }
        }
    }
}

//! Reverse-dependency queries over the workspace graph.
//!
//! Answers "who depends on this cycle" by walking edges backwards
//! (`edge.to == current`) from the cycle members. Two shapes are produced:
//! a flat discovery-ordered list of indirect dependents, and a bounded
//! ripple tree for display.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{DependencyGraph, RippleNode};

/// Default depth bound of the ripple tree (cycle members are depth 0).
pub const RIPPLE_MAX_DEPTH: usize = 3;

/// Maximum children kept per ripple tree node.
pub const RIPPLE_MAX_FAN_OUT: usize = 5;

/// Reverse adjacency over package names.
///
/// Maps each package to the packages that depend on it, in edge order, so
/// every traversal built on top of it is reproducible.
pub struct ReverseIndex<'g> {
    dependents: HashMap<&'g str, Vec<&'g str>>,
}

impl<'g> ReverseIndex<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        let mut dependents: HashMap<&'g str, Vec<&'g str>> = HashMap::new();
        for edge in &graph.edges {
            let entry = dependents.entry(edge.to.as_str()).or_default();
            if !entry.contains(&edge.from.as_str()) {
                entry.push(edge.from.as_str());
            }
        }
        Self { dependents }
    }

    /// Packages with an edge pointing at `package`.
    pub fn dependents_of(&self, package: &str) -> &[&'g str] {
        self.dependents
            .get(package)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Every package that reaches the cycle through reverse edges.
///
/// Breadth-first from all cycle members at once; the cycle members are
/// pre-marked as visited so they never show up in the result. The list is
/// in discovery order.
pub fn find_indirect_dependents(cycle_packages: &[String], graph: &DependencyGraph) -> Vec<String> {
    let index = ReverseIndex::new(graph);
    let mut visited: HashSet<&str> = cycle_packages.iter().map(String::as_str).collect();
    let mut queue: VecDeque<&str> = cycle_packages.iter().map(String::as_str).collect();
    let mut found = Vec::new();

    while let Some(current) = queue.pop_front() {
        for &dependent in index.dependents_of(current) {
            if visited.insert(dependent) {
                found.push(dependent.to_string());
                queue.push_back(dependent);
            }
        }
    }

    found
}

/// Depth-bounded tree of dependents, one root per cycle member.
///
/// Children are the direct dependents of a node that were not already
/// placed in the tree, truncated to [`RIPPLE_MAX_FAN_OUT`]. Expansion stops
/// once `max_depth` is reached.
pub fn build_ripple_tree(
    cycle_packages: &[String],
    graph: &DependencyGraph,
    max_depth: usize,
) -> Vec<RippleNode> {
    let index = ReverseIndex::new(graph);
    let mut visited: HashSet<String> = cycle_packages.iter().cloned().collect();

    cycle_packages
        .iter()
        .map(|package| RippleNode {
            package: package.clone(),
            depth: 0,
            dependents: expand(package, 1, max_depth, &index, &mut visited),
        })
        .collect()
}

fn expand(
    package: &str,
    depth: usize,
    max_depth: usize,
    index: &ReverseIndex<'_>,
    visited: &mut HashSet<String>,
) -> Vec<RippleNode> {
    if depth > max_depth {
        return Vec::new();
    }

    let children: Vec<&str> = index
        .dependents_of(package)
        .iter()
        .copied()
        .filter(|dep| !visited.contains(*dep))
        .take(RIPPLE_MAX_FAN_OUT)
        .collect();

    // Claim the whole sibling set first so siblings don't appear under each other.
    for child in &children {
        visited.insert(child.to_string());
    }

    children
        .into_iter()
        .map(|child| RippleNode {
            package: child.to_string(),
            depth,
            dependents: expand(child, depth + 1, max_depth, index, visited),
        })
        .collect()
}

/// Render a ripple tree as indented text, one package per line.
pub fn format_ripple_text(roots: &[RippleNode]) -> String {
    fn walk(node: &RippleNode, out: &mut String) {
        out.push_str(&"  ".repeat(node.depth));
        if node.depth == 0 {
            out.push_str(&format!("{} (cycle)\n", node.package));
        } else {
            out.push_str(&format!("└─ {} [depth {}]\n", node.package, node.depth));
        }
        for child in &node.dependents {
            walk(child, out);
        }
    }

    let mut output = String::new();
    for root in roots {
        walk(root, &mut output);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn mock_graph() -> DependencyGraph {
        // a -> b -> c -> a, d -> a, e -> d
        DependencyGraph::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("d", "a"), ("e", "d")])
    }

    #[test]
    fn test_indirect_dependents_excludes_cycle() {
        let result = find_indirect_dependents(&names(&["a", "b", "c"]), &mock_graph());
        assert_eq!(result, names(&["d", "e"]));
    }

    #[test]
    fn test_indirect_dependents_discovery_order() {
        // x and y depend on b, z depends on x
        let graph = DependencyGraph::from_edges([
            ("a", "b"),
            ("b", "a"),
            ("y", "b"),
            ("x", "b"),
            ("z", "x"),
        ]);
        let result = find_indirect_dependents(&names(&["a", "b"]), &graph);
        assert_eq!(result, names(&["y", "x", "z"]));
    }

    #[test]
    fn test_indirect_dependents_empty_graph() {
        let result = find_indirect_dependents(&names(&["a", "b"]), &DependencyGraph::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_reverse_index_dedupes_parallel_edges() {
        let graph = DependencyGraph::from_edges([("a", "b"), ("a", "b")]);
        let index = ReverseIndex::new(&graph);
        assert_eq!(index.dependents_of("b"), &["a"]);
        assert!(index.dependents_of("a").is_empty());
    }

    #[test]
    fn test_ripple_tree_shape() {
        let tree = build_ripple_tree(&names(&["a", "b", "c"]), &mock_graph(), RIPPLE_MAX_DEPTH);

        assert_eq!(tree.len(), 3);
        assert_eq!(tree[0].package, "a");
        assert_eq!(tree[0].depth, 0);
        assert_eq!(tree[0].dependents.len(), 1);

        let d = &tree[0].dependents[0];
        assert_eq!(d.package, "d");
        assert_eq!(d.depth, 1);
        assert_eq!(d.dependents[0].package, "e");
        assert_eq!(d.dependents[0].depth, 2);

        // b and c only have cycle members as dependents
        assert!(tree[1].dependents.is_empty());
        assert!(tree[2].dependents.is_empty());
    }

    #[test]
    fn test_ripple_tree_depth_bound() {
        // chain of dependents five deep
        let graph = DependencyGraph::from_edges([
            ("a", "b"),
            ("b", "a"),
            ("p1", "a"),
            ("p2", "p1"),
            ("p3", "p2"),
            ("p4", "p3"),
            ("p5", "p4"),
        ]);
        let tree = build_ripple_tree(&names(&["a", "b"]), &graph, RIPPLE_MAX_DEPTH);

        fn max_depth(node: &RippleNode) -> usize {
            node.dependents
                .iter()
                .map(max_depth)
                .max()
                .unwrap_or(node.depth)
        }
        assert_eq!(max_depth(&tree[0]), 3);
    }

    #[test]
    fn test_ripple_tree_fan_out_bound() {
        let mut pairs = vec![("a", "b"), ("b", "a")];
        let consumers = ["c1", "c2", "c3", "c4", "c5", "c6", "c7"];
        for consumer in consumers {
            pairs.push((consumer, "a"));
        }
        let graph = DependencyGraph::from_edges(pairs);
        let tree = build_ripple_tree(&names(&["a", "b"]), &graph, RIPPLE_MAX_DEPTH);

        assert_eq!(tree[0].dependents.len(), RIPPLE_MAX_FAN_OUT);
        assert_eq!(tree[0].dependents[0].package, "c1");
    }

    #[test]
    fn test_ripple_tree_terminates_on_dependent_cycles() {
        // d and e depend on each other and on the cycle
        let graph = DependencyGraph::from_edges([
            ("a", "b"),
            ("b", "a"),
            ("d", "a"),
            ("e", "d"),
            ("d", "e"),
        ]);
        let tree = build_ripple_tree(&names(&["a", "b"]), &graph, 10);
        let total: usize = tree.iter().map(RippleNode::size).sum();
        assert_eq!(total, 4); // a, b, d, e
    }

    #[test]
    fn test_ripple_tree_zero_depth() {
        let tree = build_ripple_tree(&names(&["a", "b", "c"]), &mock_graph(), 0);
        assert!(tree.iter().all(|root| root.dependents.is_empty()));
    }

    #[test]
    fn test_format_ripple_text() {
        let tree = build_ripple_tree(&names(&["a", "b", "c"]), &mock_graph(), RIPPLE_MAX_DEPTH);
        let text = format_ripple_text(&tree);
        assert!(text.starts_with("a (cycle)\n"));
        assert!(text.contains("└─ d [depth 1]"));
        assert!(text.contains("    └─ e [depth 2]"));
    }
}

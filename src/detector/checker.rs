use std::collections::HashSet;

use crate::core::FileId;
use crate::graph::ImportGraph;

/// Is `file` reachable from itself through at least one edge?
///
/// Walks from the out-neighbors of `file` with an explicit stack and a visited
/// set, so every node is expanded at most once and the answer costs O(V + E)
/// no matter how many distinct paths the graph contains.
pub fn has_cycle_through(graph: &ImportGraph, file: &FileId) -> bool {
    let mut visited: HashSet<&FileId> = HashSet::new();
    let mut stack: Vec<&FileId> = graph.out_neighbors(file).iter().map(|e| &e.to).collect();

    while let Some(node) = stack.pop() {
        if node == file {
            return true;
        }
        if !visited.insert(node) {
            continue;
        }
        stack.extend(
            graph
                .out_neighbors(node)
                .iter()
                .map(|e| &e.to)
                .filter(|next| !visited.contains(next)),
        );
    }

    false
}

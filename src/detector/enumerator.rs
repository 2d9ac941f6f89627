use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::{Cycle, FileId};
use crate::graph::ImportGraph;

/// Enumerate the shortest simple cycles that start and end at `file`
///
/// For every import of `file` the shortest way back to `file` through that
/// import is kept, and likewise for every file importing `file` directly.
/// Each of those is a breadth-first search over the nodes that can lie on a
/// cycle through `file`, so the cost stays linear in the graph per neighbor
/// however densely the files import each other. Cycles that do not contain
/// `file` are never produced.
///
/// At most `depth_limit` edges are followed, so a cycle of `k` edges is found
/// iff `depth_limit >= k`. The returned cycles all start at `file`, shortest
/// first, without duplicates.
pub fn enumerate_cycles(graph: &ImportGraph, file: &FileId, depth_limit: usize) -> Vec<Cycle> {
    if depth_limit == 0 {
        return Vec::new();
    }

    let relevant = nodes_on_cycles_through(graph, file);
    if relevant.is_empty() {
        return Vec::new();
    }

    let max_edges = depth_limit - 1;
    let mut candidates: Vec<Vec<&FileId>> = Vec::new();

    for edge in graph.out_neighbors(file) {
        let next = &edge.to;
        if next == file {
            candidates.push(vec![file]);
        } else if relevant.contains(next)
            && let Some(path) = shortest_path(graph, next, file, &relevant, max_edges)
        {
            candidates.push(std::iter::once(file).chain(path).collect());
        }
    }

    let mut importers: Vec<&FileId> = relevant
        .iter()
        .copied()
        .filter(|&node| node != file && graph.contains_edge(node, file))
        .collect();
    importers.sort();

    for importer in importers {
        if let Some(mut path) = shortest_path(graph, file, importer, &relevant, max_edges) {
            path.push(importer);
            candidates.push(path);
        }
    }

    let mut unique = HashSet::new();
    candidates.retain(|members| unique.insert(members.clone()));
    candidates.sort_by_key(Vec::len);

    candidates
        .into_iter()
        .map(|members| Cycle::new(members.into_iter().cloned().collect()))
        .collect()
}

/// Breadth-first search from `start` to `goal` through `allowed` nodes,
/// following at most `max_edges` edges
///
/// Returns the nodes of the path from `start` up to, but not including,
/// `goal`.
fn shortest_path<'g>(
    graph: &'g ImportGraph,
    start: &'g FileId,
    goal: &FileId,
    allowed: &HashSet<&'g FileId>,
    max_edges: usize,
) -> Option<Vec<&'g FileId>> {
    let mut parent: HashMap<&FileId, &FileId> = HashMap::new();
    let mut seen: HashSet<&FileId> = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0usize)]);

    while let Some((node, depth)) = queue.pop_front() {
        if depth >= max_edges {
            continue;
        }

        for edge in graph.out_neighbors(node) {
            let next = &edge.to;
            if next == goal {
                let mut path = vec![node];
                let mut current = node;
                while let Some(&prev) = parent.get(current) {
                    path.push(prev);
                    current = prev;
                }
                path.reverse();
                return Some(path);
            }

            if allowed.contains(next) && seen.insert(next) {
                parent.insert(next, node);
                queue.push_back((next, depth + 1));
            }
        }
    }

    None
}

/// Nodes that are reachable from `file` and can also reach it back
///
/// Only these can lie on a cycle through `file`; restricting the walk to them
/// keeps acyclic side branches from being expanded at all.
fn nodes_on_cycles_through<'g>(graph: &'g ImportGraph, file: &'g FileId) -> HashSet<&'g FileId> {
    let mut forward: HashSet<&FileId> = HashSet::new();
    let mut reverse: HashMap<&FileId, Vec<&FileId>> = HashMap::new();
    let mut stack = vec![file];

    while let Some(node) = stack.pop() {
        if !forward.insert(node) {
            continue;
        }
        for edge in graph.out_neighbors(node) {
            reverse.entry(&edge.to).or_default().push(node);
            stack.push(&edge.to);
        }
    }

    let mut backward: HashSet<&FileId> = HashSet::new();
    let mut stack: Vec<&FileId> = reverse.get(file).cloned().unwrap_or_default();
    while let Some(node) = stack.pop() {
        if !backward.insert(node) {
            continue;
        }
        if let Some(preds) = reverse.get(node) {
            stack.extend(preds.iter().copied());
        }
    }

    backward
}

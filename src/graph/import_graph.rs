use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};

use crate::core::{FileId, ImportEdge, SourceLocation};

/// Out-edges of a single file, kept in insertion order
#[derive(Debug, Clone, Default)]
struct OutEdges {
    edges: Vec<ImportEdge>,
    index: HashMap<FileId, usize>,
}

impl OutEdges {
    fn upsert(&mut self, from: &FileId, to: FileId, location: SourceLocation) {
        match self.index.get(&to) {
            Some(&slot) => self.edges[slot].location = location,
            None => {
                self.index.insert(to.clone(), self.edges.len());
                self.edges.push(ImportEdge {
                    from: from.clone(),
                    to,
                    location,
                });
            }
        }
    }
}

/// Directed graph of "file X imports file Y"
///
/// Every out-edge belongs to the file it leaves. Re-analysing a file means
/// calling [`ImportGraph::clear_out_edges`] and inserting its edges afresh, so
/// imports removed by an edit never linger. Edges into a file are never
/// touched when that file itself is cleared.
#[derive(Debug, Clone, Default)]
pub struct ImportGraph {
    out_edges: HashMap<FileId, OutEdges>,
}

impl ImportGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `from → to`, or refresh the recorded location if it exists
    pub fn add_edge(&mut self, from: &FileId, to: &FileId, location: SourceLocation) {
        self.out_edges
            .entry(from.clone())
            .or_default()
            .upsert(from, to.clone(), location);
    }

    /// Remove every edge whose source is `from`, returning how many went away
    pub fn clear_out_edges(&mut self, from: &FileId) -> usize {
        self.out_edges
            .remove(from)
            .map(|out| out.edges.len())
            .unwrap_or(0)
    }

    /// Current out-edges of `from`, in the order they were first inserted
    pub fn out_neighbors(&self, from: &FileId) -> &[ImportEdge] {
        self.out_edges
            .get(from)
            .map(|out| out.edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn edge(&self, from: &FileId, to: &FileId) -> Option<&ImportEdge> {
        let out = self.out_edges.get(from)?;
        out.index.get(to).map(|&slot| &out.edges[slot])
    }

    pub fn contains_edge(&self, from: &FileId, to: &FileId) -> bool {
        self.edge(from, to).is_some()
    }

    /// Every file that appears as a source or target of some edge, sorted
    pub fn files(&self) -> BTreeSet<&FileId> {
        self.out_edges
            .iter()
            .filter(|(_, out)| !out.edges.is_empty())
            .flat_map(|(from, out)| std::iter::once(from).chain(out.edges.iter().map(|e| &e.to)))
            .collect()
    }

    pub fn edges(&self) -> impl Iterator<Item = &ImportEdge> {
        self.out_edges.values().flat_map(|out| out.edges.iter())
    }

    pub fn edge_count(&self) -> usize {
        self.out_edges.values().map(|out| out.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }

    pub fn clear(&mut self) {
        self.out_edges.clear();
    }

    /// Snapshot the graph as a `petgraph` graph for rendering and whole-graph
    /// analysis. Nodes are added in sorted order so indices are stable.
    pub fn to_petgraph(&self) -> DiGraph<FileId, SourceLocation> {
        let mut graph = DiGraph::new();
        let mut indices: HashMap<&FileId, NodeIndex> = HashMap::new();

        for file in self.files() {
            indices.insert(file, graph.add_node(file.clone()));
        }

        let mut edges: Vec<&ImportEdge> = self.edges().collect();
        edges.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
        for edge in edges {
            graph.add_edge(indices[&edge.from], indices[&edge.to], edge.location);
        }

        graph
    }
}

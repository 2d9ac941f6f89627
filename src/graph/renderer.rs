use std::collections::{BTreeMap, HashSet};
use std::io::Write;
use std::path::PathBuf;

use miette::Result;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::ImportGraph;
use crate::core::{FileId, SourceLocation};
use crate::error::LoopDeLoopError;

// Same blue/orange palette for every format
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(LoopDeLoopError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(LoopDeLoopError::from)
    };
}

type FileGraph = DiGraph<FileId, SourceLocation>;

/// Renders the import graph as ASCII, Mermaid or Graphviz DOT
///
/// Files sitting on a cycle are those in a strongly connected component of
/// more than one file, or with an import of themselves.
pub struct GraphRenderer {
    highlight_cycles: bool,
    root: Option<PathBuf>,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool, root: Option<PathBuf>) -> Self {
        Self {
            highlight_cycles,
            root,
        }
    }

    fn label(&self, file: &FileId) -> String {
        file.display_relative(self.root.as_deref())
    }

    /// Node indices of every file that takes part in some cycle
    fn cyclic_nodes(graph: &FileGraph) -> HashSet<NodeIndex> {
        tarjan_scc(graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
            .flatten()
            .collect()
    }

    /// Strongly connected component index of every node
    fn component_of(graph: &FileGraph) -> BTreeMap<NodeIndex, usize> {
        tarjan_scc(graph)
            .into_iter()
            .enumerate()
            .flat_map(|(i, scc)| scc.into_iter().map(move |n| (n, i)))
            .collect()
    }

    fn edge_in_cycle(
        &self,
        components: &BTreeMap<NodeIndex, usize>,
        cyclic: &HashSet<NodeIndex>,
        from: NodeIndex,
        to: NodeIndex,
    ) -> bool {
        self.highlight_cycles && cyclic.contains(&from) && components.get(&from) == components.get(&to)
    }

    pub fn render_ascii(&self, graph: &ImportGraph, output: &mut dyn Write) -> Result<()> {
        let graph = graph.to_petgraph();
        if graph.node_count() == 0 {
            writeln_out!(output, "No imports found to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\n📊 Import Graph\n")?;

        let cyclic = Self::cyclic_nodes(&graph);
        let components = Self::component_of(&graph);

        for node in graph.node_indices() {
            let label = self.label(&graph[node]);
            if self.highlight_cycles && cyclic.contains(&node) {
                writeln_out!(output, "{} ⚠️  IN CYCLE", label)?;
            } else {
                writeln_out!(output, "{}", label)?;
            }

            let mut targets: Vec<NodeIndex> = graph.edges(node).map(|e| e.target()).collect();
            targets.sort();

            if targets.is_empty() {
                writeln_out!(output, "  └── (no project imports)")?;
            }
            for (i, target) in targets.iter().enumerate() {
                let prefix = if i == targets.len() - 1 {
                    "└──"
                } else {
                    "├──"
                };
                let marker = if self.edge_in_cycle(&components, &cyclic, node, *target) {
                    " ⚠️  [CYCLE]"
                } else {
                    ""
                };
                writeln_out!(
                    output,
                    "  {} → {}{}",
                    prefix,
                    self.label(&graph[*target]),
                    marker
                )?;
            }
            writeln_out!(output)?;
        }

        if self.highlight_cycles && !cyclic.is_empty() {
            writeln_out!(output, "⚠️  = Part of an import cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid(&self, graph: &ImportGraph, output: &mut dyn Write) -> Result<()> {
        let graph = graph.to_petgraph();
        let cyclic = Self::cyclic_nodes(&graph);
        let components = Self::component_of(&graph);

        writeln_out!(output, "graph TD")?;

        for node in graph.node_indices() {
            let id = mermaid_id(node);
            let label = self.label(&graph[node]);
            if self.highlight_cycles && cyclic.contains(&node) {
                writeln_out!(output, "    {}((\"{}\"))", id, label)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:3px",
                    id,
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(output, "    {}[\"{}\"]", id, label)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{}",
                    id,
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        // Mermaid styles links by their declaration order
        for (link, edge) in graph.edge_references().enumerate() {
            let (from, to) = (edge.source(), edge.target());
            writeln_out!(output, "    {} --> {}", mermaid_id(from), mermaid_id(to))?;
            let color = if self.edge_in_cycle(&components, &cyclic, from, to) {
                colors::CYCLE_EDGE
            } else {
                colors::NORMAL_EDGE
            };
            writeln_out!(output, "    linkStyle {} stroke:{}", link, color)?;
        }

        Ok(())
    }

    pub fn render_dot(&self, graph: &ImportGraph, output: &mut dyn Write) -> Result<()> {
        let graph = graph.to_petgraph();
        let cyclic = Self::cyclic_nodes(&graph);
        let components = Self::component_of(&graph);

        writeln_out!(output, "digraph imports {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=\"rounded,filled\"];")?;

        for node in graph.node_indices() {
            let (fill, stroke) = if self.highlight_cycles && cyclic.contains(&node) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };
            writeln_out!(
                output,
                "    n{} [label=\"{}\", fillcolor=\"{}\", color=\"{}\"];",
                node.index(),
                escape_dot(&self.label(&graph[node])),
                fill,
                stroke
            )?;
        }

        for edge in graph.edge_references() {
            let (from, to) = (edge.source(), edge.target());
            if self.edge_in_cycle(&components, &cyclic, from, to) {
                writeln_out!(
                    output,
                    "    n{} -> n{} [color=\"{}\", penwidth=2];",
                    from.index(),
                    to.index(),
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    "    n{} -> n{} [color=\"{}\"];",
                    from.index(),
                    to.index(),
                    colors::NORMAL_EDGE
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }
}

fn mermaid_id(node: NodeIndex) -> String {
    format!("f{}", node.index())
}

fn escape_dot(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> FileId {
        FileId::new(format!("/project/{name}"))
    }

    fn sample_graph() -> ImportGraph {
        let mut graph = ImportGraph::new();
        for (from, to) in [("a.ts", "b.ts"), ("b.ts", "a.ts"), ("c.ts", "a.ts")] {
            graph.add_edge(&file(from), &file(to), SourceLocation::default());
        }
        graph
    }

    fn render(f: impl Fn(&GraphRenderer, &ImportGraph, &mut dyn Write) -> Result<()>) -> String {
        let renderer = GraphRenderer::new(true, Some(PathBuf::from("/project")));
        let mut output = Vec::new();
        f(&renderer, &sample_graph(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_ascii_marks_cycle_members() {
        let output = render(|r, g, o| r.render_ascii(g, o));
        assert!(output.contains("a.ts ⚠️  IN CYCLE"));
        assert!(output.contains("b.ts ⚠️  IN CYCLE"));
        assert!(output.contains("\nc.ts\n"));
        assert!(output.contains("→ a.ts ⚠️  [CYCLE]"));
    }

    #[test]
    fn test_ascii_empty_graph() {
        let renderer = GraphRenderer::new(true, None);
        let mut output = Vec::new();
        renderer.render_ascii(&ImportGraph::new(), &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "No imports found to visualize\n"
        );
    }

    #[test]
    fn test_mermaid_output() {
        let output = render(|r, g, o| r.render_mermaid(g, o));
        assert!(output.starts_with("graph TD\n"));
        assert!(output.contains("f0((\"a.ts\"))"));
        assert!(output.contains("f2[\"c.ts\"]"));
        assert!(output.contains("f2 --> f0"));
    }

    #[test]
    fn test_dot_output() {
        let output = render(|r, g, o| r.render_dot(g, o));
        assert!(output.starts_with("digraph imports {"));
        assert!(output.contains("n0 -> n1 [color=\"#FF6500\", penwidth=2];"));
        assert!(output.contains("n2 -> n0 [color=\"#64B5F6\"];"));
        assert!(output.trim_end().ends_with('}'));
    }

    #[test]
    fn test_self_import_is_highlighted() {
        let mut graph = ImportGraph::new();
        graph.add_edge(&file("a.ts"), &file("a.ts"), SourceLocation::default());
        let renderer = GraphRenderer::new(true, None);
        let mut output = Vec::new();
        renderer.render_ascii(&graph, &mut output).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("IN CYCLE"));
    }
}

//! # Import Graph Module
//!
//! This module holds the single source of truth for "file X imports file Y"
//! and the renderers that visualize it.
//!
//! ## Components
//!
//! - **ImportGraph**: mutable directed graph keyed by [`FileId`], with
//!   per-file out-edge replacement for incremental reanalysis
//! - **GraphRenderer**: renders the graph as ASCII, Mermaid or DOT, with the
//!   files on cycles highlighted
//!
//! ## Example
//!
//! ```
//! use loop_de_loop::core::{FileId, SourceLocation};
//! use loop_de_loop::graph::{GraphRenderer, ImportGraph};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let mut graph = ImportGraph::new();
//! let app = FileId::new("/project/app.ts");
//! let util = FileId::new("/project/util.ts");
//! graph.add_edge(&app, &util, SourceLocation::new(0, 28));
//!
//! let renderer = GraphRenderer::new(true, Some("/project".into()));
//! let mut output = Vec::new();
//! renderer.render_dot(&graph, &mut output)?;
//!
//! let dot_output = String::from_utf8(output).into_diagnostic()?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains("util.ts"));
//! # Ok(())
//! # }
//! ```
//!
//! [`FileId`]: crate::core::FileId

mod import_graph;
mod renderer;

pub use import_graph::ImportGraph;
pub use renderer::GraphRenderer;

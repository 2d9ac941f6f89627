//! Tests for the graph renderer over a linted project

use std::fs;

use loop_de_loop::analyzer::ImportCycleLinter;
use loop_de_loop::core::FileId;
use loop_de_loop::graph::GraphRenderer;
use tempfile::TempDir;

/// `app -> cart -> checkout -> cart`, plus `app -> util`
fn linted_project() -> (TempDir, ImportCycleLinter) {
    let temp_dir = TempDir::new().unwrap();
    let files = [
        ("app.ts", "import './cart';\nimport { fmt } from './util';\n"),
        ("cart.ts", "import { pay } from './checkout';\n"),
        ("checkout.ts", "import { Cart } from './cart';\n"),
        ("util.ts", "export const fmt = (s: string) => s;\n"),
    ];
    for (name, content) in files {
        fs::write(temp_dir.path().join(name), content).unwrap();
    }

    let mut paths: Vec<FileId> = files
        .iter()
        .map(|(name, _)| FileId::new(temp_dir.path().join(name)))
        .collect();
    paths.sort();

    let mut linter = ImportCycleLinter::with_defaults(50, Some(temp_dir.path().to_path_buf()));
    linter.lint_paths(&paths, None);
    (temp_dir, linter)
}

fn renderer(linter: &ImportCycleLinter, highlight_cycles: bool) -> GraphRenderer {
    GraphRenderer::new(highlight_cycles, linter.root().map(|r| r.to_path_buf()))
}

#[test]
fn test_ascii_highlights_only_cycle_members() {
    let (_temp_dir, linter) = linted_project();
    let mut output = Vec::new();
    renderer(&linter, true)
        .render_ascii(linter.graph(), &mut output)
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("cart.ts ⚠️  IN CYCLE"));
    assert!(output.contains("checkout.ts ⚠️  IN CYCLE"));
    assert!(!output.contains("app.ts ⚠️"));
    assert!(output.contains("→ util.ts\n"));
    assert!(output.contains("→ checkout.ts ⚠️  [CYCLE]"));
    assert!(output.contains("util.ts\n  └── (no project imports)"));
}

#[test]
fn test_dot_edge_colors() {
    let (_temp_dir, linter) = linted_project();
    let mut output = Vec::new();
    renderer(&linter, true)
        .render_dot(linter.graph(), &mut output)
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    // nodes are numbered in path order: app, cart, checkout, util
    assert!(output.contains("n1 -> n2 [color=\"#FF6500\", penwidth=2];"));
    assert!(output.contains("n2 -> n1 [color=\"#FF6500\", penwidth=2];"));
    assert!(output.contains("n0 -> n3 [color=\"#64B5F6\"];"));
    assert!(output.contains("n0 -> n1 [color=\"#64B5F6\"];"));
}

#[test]
fn test_highlighting_can_be_disabled() {
    let (_temp_dir, linter) = linted_project();
    let mut output = Vec::new();
    renderer(&linter, false)
        .render_mermaid(linter.graph(), &mut output)
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.starts_with("graph TD\n"));
    assert!(!output.contains("#FF6500"));
    assert!(!output.contains("(("));
    assert_eq!(output.matches("-->").count(), 4);
}

//! Spectacle command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::SpectacleConfig;
use crate::executors::{CommandExecutor, lint_sources};
use crate::graph::GraphRenderer;

pub struct SpectacleExecutor;

impl CommandExecutor for SpectacleExecutor {
    type Config = SpectacleConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} import graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let (linter, _) =
            lint_sources(&config.settings, None).wrap_err("Failed to build import graph")?;

        let renderer = GraphRenderer::new(config.highlight_cycles, linter.root().map(Path::to_path_buf));

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref()
        {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        match config.format {
            GraphFormat::Ascii => renderer
                .render_ascii(linter.graph(), output_writer.as_mut())
                .wrap_err("Failed to render ASCII graph")?,
            GraphFormat::Mermaid => renderer
                .render_mermaid(linter.graph(), output_writer.as_mut())
                .wrap_err("Failed to render Mermaid graph")?,
            GraphFormat::Dot => renderer
                .render_dot(linter.graph(), output_writer.as_mut())
                .wrap_err("Failed to render DOT graph")?,
        }

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to write graph")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "loop-de-loop",
    about = "🎢 Find circular imports in TypeScript and JavaScript projects",
    long_about = "loop-de-loop follows the import statements of your TypeScript and JavaScript \
                  sources, builds the import graph file by file, and reports every circular \
                  import once, pointing at the statement that closes the loop.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the track for loops
    ///
    /// Lints every source file for circular imports. Each cycle is reported
    /// once, at the import statement that closes it.
    #[command(
        long_about = "Lint source files for circular imports. Files are discovered below the \
                      given paths, their import statements are resolved to project files, and \
                      the resulting import graph is checked incrementally as each file is \
                      added. A cycle is reported from the first of its files to close it, with \
                      the full chain of files in the message."
    )]
    Inspect {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if cycles found
        #[arg(long, env = "LOOP_DE_LOOP_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Put a spotlight on every loop through one file
    ///
    /// Builds the whole import graph, then lists the shortest cycles passing
    /// through the given file, including ones other files already closed.
    #[command(
        long_about = "List the circular imports involving a specific file, the shortest one through \
                      each of its imports and importers. The import graph is \
                      built from all discovered sources first, so the answer does not depend on \
                      the order files were linted in, and no cycle is hidden because another \
                      member already reported it."
    )]
    Spotlight {
        /// The file to examine
        #[arg(value_name = "FILE", env = "LOOP_DE_LOOP_FILE")]
        file: PathBuf,

        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,
    },

    /// Create a spectacular picture of the import graph
    ///
    /// Renders the import graph as ASCII art, a Mermaid diagram or a Graphviz
    /// DOT file, highlighting files that sit on a cycle.
    #[command(
        long_about = "Generate a visual import graph as ASCII art, a Mermaid diagram or a \
                      Graphviz DOT file. Files that take part in a circular import, and the \
                      imports between them, are highlighted."
    )]
    Spectacle {
        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "ascii",
            env = "LOOP_DE_LOOP_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "LOOP_DE_LOOP_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the graph
        #[arg(
            long,
            default_value = "true",
            action = ArgAction::Set,
            env = "LOOP_DE_LOOP_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// A reporter only when stderr is a terminal
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        let mut frames: Vec<&str> = SPINNER_FRAMES.to_vec();
        frames.push("✓");
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(&frames),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_discovery(&mut self) {
        let _ = self.term.clear_line();
        eprintln!("{} Discovering source files...", style("🔍").cyan());
        let spinner = self.create_spinner("Walking directories...");
        self.current_bar = Some(spinner);
    }

    pub fn scanning_path(&self, path: &Path) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Scanning: {}...", path.display()));
        } else {
            let _ = self.term.clear_line();
            eprint!(
                "\r{} Scanning: {}... ",
                style(self.next_frame()).cyan(),
                style(path.display()).dim()
            );
        }
    }

    pub fn finish_discovery(&mut self, count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if count == 0 {
            eprintln!("\r{} No source files found", style("✗").red());
        } else {
            eprintln!(
                "\r{} Discovery complete: found {} source {}",
                style("✓").green(),
                style(count).yellow().bold(),
                pluralize("file", count)
            );
        }
    }

    /// Bar for the parallel read-and-scan pass, cleared by the caller
    pub fn start_reading(&mut self, total_files: usize) -> ProgressBar {
        self.create_progress_bar(total_files as u64, "Reading sources")
    }

    pub fn start_linting(&mut self, total_files: usize) -> ProgressBar {
        eprintln!("\n{} Riding the import graph...", style("🎢").yellow());
        let pb = self.create_progress_bar(total_files as u64, "Linting imports");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn update_lint_progress(&self, file: &str) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Linting: {file}"));
            pb.inc(1);
        }
    }

    pub fn finish_linting(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }

    pub fn finish_cycle_detection(&self, cycles_found: usize) {
        if cycles_found == 0 {
            eprintln!(
                "{} No circular imports detected! {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} Found {} circular {}",
                style("⚠").yellow().bold(),
                style(cycles_found).red().bold(),
                pluralize("import", cycles_found)
            );
        }
    }
}

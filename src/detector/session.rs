use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use super::{ReportDeduplicator, enumerate_cycles, has_cycle_through};
use crate::constants::search::DEFAULT_DEPTH_LIMIT;
use crate::core::{Cycle, FileId, SourceLocation};
use crate::graph::ImportGraph;

/// All state that outlives a single file's analysis: the import graph, the
/// set of files already reported this run, and the search depth limit
///
/// Lifecycle per file: [`begin_file`](Self::begin_file), one
/// [`add_import`](Self::add_import) per resolved import, then
/// [`check_file`](Self::check_file). [`end_run`](Self::end_run) forgets what
/// was reported but keeps the graph for incremental reuse;
/// [`reset`](Self::reset) starts over from nothing.
#[derive(Debug, Clone)]
pub struct CycleSession {
    graph: ImportGraph,
    dedup: ReportDeduplicator,
    depth_limit: usize,
}

impl Default for CycleSession {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH_LIMIT)
    }
}

impl CycleSession {
    pub fn new(depth_limit: usize) -> Self {
        Self {
            graph: ImportGraph::new(),
            dedup: ReportDeduplicator::new(),
            depth_limit,
        }
    }

    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    pub fn graph(&self) -> &ImportGraph {
        &self.graph
    }

    pub fn deduplicator(&self) -> &ReportDeduplicator {
        &self.dedup
    }

    /// Drop the edges left over from a previous analysis of `file`
    pub fn begin_file(&mut self, file: &FileId) {
        let stale = self.graph.clear_out_edges(file);
        if stale > 0 {
            trace!(file = %file, stale, "Cleared stale import edges");
        }
    }

    pub fn add_import(&mut self, from: &FileId, to: &FileId, location: SourceLocation) {
        self.graph.add_edge(from, to, location);
    }

    /// Cycles through `file` that have not been reported yet this run
    pub fn check_file(&mut self, file: &FileId) -> Vec<Cycle> {
        if !has_cycle_through(&self.graph, file) {
            return Vec::new();
        }

        let cycles = enumerate_cycles(&self.graph, file, self.depth_limit);
        if cycles.is_empty() {
            debug!(
                file = %file,
                depth_limit = self.depth_limit,
                "Cycle exists but is longer than the depth limit"
            );
        }

        cycles
            .into_iter()
            .filter(|cycle| {
                let fresh = self.dedup.should_report(cycle);
                debug!(file = %file, length = cycle.len(), fresh, "Found import cycle");
                fresh
            })
            .collect()
    }

    /// Shortest cycles through `file`, ignoring what was already reported
    pub fn cycles_through(&self, file: &FileId) -> Vec<Cycle> {
        if !has_cycle_through(&self.graph, file) {
            return Vec::new();
        }
        enumerate_cycles(&self.graph, file, self.depth_limit)
    }

    /// Finish a run: reported cycles are forgotten, the graph is kept
    pub fn end_run(&mut self) {
        self.dedup.clear();
    }

    /// Start an independent run from an empty graph
    pub fn reset(&mut self) {
        self.graph.clear();
        self.dedup.clear();
    }
}

/// A [`CycleSession`] that several threads can feed at once
///
/// Every mutation and every cycle decision goes through one lock, so a check
/// always observes all edges inserted by files that finished before it.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<CycleSession>>,
}

impl SharedSession {
    pub fn new(session: CycleSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Replace `file`'s edges and check it, as one atomic step
    pub fn analyze_file(
        &self,
        file: &FileId,
        imports: impl IntoIterator<Item = (FileId, SourceLocation)>,
    ) -> Vec<Cycle> {
        let mut session = self.lock();
        session.begin_file(file);
        for (to, location) in imports {
            session.add_import(file, &to, location);
        }
        session.check_file(file)
    }

    /// Run `f` with exclusive access to the session
    pub fn with<R>(&self, f: impl FnOnce(&mut CycleSession) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn end_run(&self) {
        self.lock().end_run();
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    fn lock(&self) -> MutexGuard<'_, CycleSession> {
        // the session holds no invariant that a panicking holder could break
        // halfway, so a poisoned lock is still usable
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

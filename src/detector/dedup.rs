use std::collections::HashSet;

use crate::core::{Cycle, FileId};

/// Suppresses cycles that were already surfaced through another member file
///
/// Scoped to a single run: call [`ReportDeduplicator::clear`] when the run
/// ends. It never looks at or mutates the import graph.
#[derive(Debug, Clone, Default)]
pub struct ReportDeduplicator {
    found: HashSet<FileId>,
}

impl ReportDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether `cycle` is new
    ///
    /// Returns `false` when any member other than the triggering file has
    /// already been reported. Otherwise every member is recorded as found and
    /// `true` is returned.
    pub fn should_report(&mut self, cycle: &Cycle) -> bool {
        if cycle.members().iter().skip(1).any(|m| self.found.contains(m)) {
            return false;
        }
        self.found.extend(cycle.members().iter().cloned());
        true
    }

    pub fn is_found(&self, file: &FileId) -> bool {
        self.found.contains(file)
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn clear(&mut self) {
        self.found.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> FileId {
        FileId::new(format!("/project/{name}"))
    }

    fn cycle(names: &[&str]) -> Cycle {
        Cycle::new(names.iter().map(|n| file(n)).collect())
    }

    #[test]
    fn test_first_report_records_all_members() {
        let mut dedup = ReportDeduplicator::new();
        assert!(dedup.should_report(&cycle(&["a", "b", "c"])));
        for name in ["a", "b", "c"] {
            assert!(dedup.is_found(&file(name)));
        }
        assert_eq!(dedup.found_count(), 3);
    }

    #[test]
    fn test_same_cycle_from_other_member_is_suppressed() {
        let mut dedup = ReportDeduplicator::new();
        assert!(dedup.should_report(&cycle(&["a", "b", "c"])));
        assert!(!dedup.should_report(&cycle(&["b", "c", "a"])));
        assert!(!dedup.should_report(&cycle(&["c", "a", "b"])));
    }

    #[test]
    fn test_trigger_already_found_does_not_suppress() {
        let mut dedup = ReportDeduplicator::new();
        assert!(dedup.should_report(&cycle(&["a", "b"])));
        // only the trigger is known; the rest of the cycle is new
        assert!(dedup.should_report(&cycle(&["a", "x", "y"])));
    }

    #[test]
    fn test_self_loop_has_no_interior_members() {
        let mut dedup = ReportDeduplicator::new();
        assert!(dedup.should_report(&cycle(&["a"])));
        // a self-loop has no interior members, so it is never suppressed
        assert!(dedup.should_report(&cycle(&["a"])));
    }

    #[test]
    fn test_clear_starts_a_new_run() {
        let mut dedup = ReportDeduplicator::new();
        assert!(dedup.should_report(&cycle(&["a", "b"])));
        dedup.clear();
        assert!(dedup.should_report(&cycle(&["b", "a"])));
    }
}

//! # Cycle Detection Module
//!
//! This module finds circular imports incrementally, as files are presented
//! one at a time.
//!
//! ## Algorithm
//!
//! After a file's imports are inserted into the [`ImportGraph`], a cheap
//! reachability check ([`has_cycle_through`], O(V + E) with a visited set)
//! decides whether the file can reach itself. Only on a positive answer does
//! [`enumerate_cycles`] reconstruct the concrete paths: the shortest cycle
//! through each import and each importer of the file, found breadth-first
//! within a depth limit. Cycles found from one member file are not
//! reported again from the others ([`ReportDeduplicator`]).
//!
//! ## Key Components
//!
//! - **CycleSession**: graph + reported-set + depth limit, owned by the driver
//! - **SharedSession**: the same behind a single lock for concurrent drivers
//! - **ReportDeduplicator**: run-scoped duplicate suppression
//!
//! ## Example
//!
//! ```
//! use loop_de_loop::core::{FileId, SourceLocation};
//! use loop_de_loop::detector::CycleSession;
//!
//! let mut session = CycleSession::new(50);
//! let x = FileId::new("/project/x.ts");
//! let y = FileId::new("/project/y.ts");
//!
//! session.begin_file(&x);
//! session.add_import(&x, &y, SourceLocation::new(0, 23));
//! assert!(session.check_file(&x).is_empty());
//!
//! session.begin_file(&y);
//! session.add_import(&y, &x, SourceLocation::new(0, 23));
//! let cycles = session.check_file(&y);
//!
//! assert_eq!(cycles.len(), 1);
//! assert_eq!(cycles[0].members(), &[y.clone(), x.clone()]);
//! ```
//!
//! [`ImportGraph`]: crate::graph::ImportGraph

mod checker;
mod dedup;
mod enumerator;
mod session;

pub use checker::has_cycle_through;
pub use dedup::ReportDeduplicator;
pub use enumerator::enumerate_cycles;
pub use session::{CycleSession, SharedSession};

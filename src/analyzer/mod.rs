//! # Import Linting Module
//!
//! This module connects source files to the cycle detector. It pulls import
//! statements out of TypeScript/JavaScript text, resolves their specifiers to
//! project files and feeds the results into a
//! [`CycleSession`](crate::detector::CycleSession) one file at a time.
//!
//! ## Key Components
//!
//! - **scan_imports**: lexical import extraction, comments masked
//! - **ModuleResolver**: specifier resolution seam, with the file-system
//!   backed **RelativeResolver**
//! - **ImportCycleLinter**: the driver, producing one **CycleDiagnostic** per
//!   newly found cycle
//!
//! ## Example
//!
//! ```
//! use std::fs;
//!
//! use loop_de_loop::analyzer::ImportCycleLinter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! fs::write(dir.path().join("x.ts"), "import { y } from './y';\n")?;
//! fs::write(dir.path().join("y.ts"), "import { x } from './x';\n")?;
//!
//! let mut linter = ImportCycleLinter::with_defaults(50, Some(dir.path().to_path_buf()));
//! assert!(linter.lint_source(dir.path().join("x.ts"), "import { y } from './y';\n").is_empty());
//!
//! let diagnostics = linter.lint_source(dir.path().join("y.ts"), "import { x } from './x';\n");
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].message, "circular import detected: y.ts -> x.ts -> y.ts");
//! # Ok(())
//! # }
//! ```

mod diagnostic;
mod linter;
mod resolver;
mod scanner;

pub use diagnostic::{CycleDiagnostic, LintReport};
pub use linter::ImportCycleLinter;
pub use resolver::{ModuleResolver, RelativeResolver};
pub use scanner::scan_imports;

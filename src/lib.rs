//! # SpSparse - shared vocabulary for sparse arrays
//!
//! The pieces every sparse-array algorithm in SpSparse agrees on:
//! how duplicate coordinates are combined, when a value counts as
//! absent, how fatal errors are reported, and how index arrays are
//! printed in diagnostics.
//!
//! ## Core Concepts
//!
//! - **DuplicatePolicy**: how entries sharing a coordinate are merged
//! - **None-ness**: zero (and optionally NaN) values a sparse structure may drop
//! - **ErrorReporter**: injectable hook that fatal conditions pass through
//!
//! ## Usage
//!
//! ```
//! use spsparse::{isnone, ArrayDisplay, Destination, DuplicatePolicy, ErrorReporter};
//!
//! let policy = DuplicatePolicy::ReplaceThenAdd;
//! policy.check_destination(Destination::Dense)?;
//! assert_eq!(policy.resolve(f64::NAN, 2.0), 2.0);
//!
//! assert!(isnone(f64::NAN, true));
//! assert_eq!(ArrayDisplay(&[3, 5]).to_string(), "{3, 5}");
//!
//! let reporter = ErrorReporter::new(|code: i32, msg: &str| eprintln!("[{code}] {msg}"));
//! let err = reporter.fail(2, "rank mismatch");
//! assert_eq!(err.retcode(), 2);
//! # Ok::<(), spsparse::ValidationError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod format;
pub mod handler;
pub mod none;
pub mod order;
pub mod policy;

// Re-export primary types at crate root for convenience
pub use config::SparseConfig;
pub use error::{SpsparseError, SpsparseResult, ValidationError};
pub use format::{format_array, write_array, ArrayDisplay};
pub use handler::{install_default_handler, DefaultErrorHandler, ErrorHandler, ErrorReporter};
pub use none::{isnone, IsNone};
pub use order::{SortOrder, COL_MAJOR, ROW_MAJOR};
pub use policy::{Destination, DuplicatePolicy};

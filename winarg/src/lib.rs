#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # winarg
//!
//! A library for building Windows launcher command lines: argument quoting
//! for the native `CreateProcessW` argv convention, a simpler shell-style
//! quoting variant, and lexical relative-path computation between
//! `\`-separated path strings.
//!
//! All algorithms are pure, synchronous string transformations with no
//! filesystem I/O and no shared state; they are safe to call from any number
//! of threads without coordination.
//!
//! ## Core Functions
//!
//! - [`quote()`] and [`bash_quote()`]: argument quoting for the two conventions
//! - [`relative_to()`]: shortest relative path between two pre-normalized paths
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use winarg::{quote, relative_to};
//!
//! // Quote a token for a CreateProcessW command line
//! assert_eq!(quote("C:\\Program Files\\tool.exe"), "\"C:\\Program Files\\tool.exe\"");
//!
//! // Express one path relative to another
//! let relative = relative_to("C:\\work\\out\\bin", "C:\\work\\src").unwrap();
//! assert_eq!(relative, "..\\out\\bin");
//! ```

pub mod error;
pub mod logging;
pub mod quote;
pub mod winpath;

// Re-export key items at crate root for convenience
pub use error::{Error, MismatchReason, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use quote::{bash_quote, quote};
pub use winpath::{is_absolute, relative_to};

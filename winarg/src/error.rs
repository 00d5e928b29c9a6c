//! Error types for the winarg library.
//!
//! This module provides the error hierarchy for relative path computation,
//! using `thiserror` for ergonomic error handling. The quoting functions are
//! total and have no error cases.

use thiserror::Error;

/// Result type alias for operations that may fail with a winarg error.
///
/// # Examples
///
/// ```
/// use winarg::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(String::from("..\\bar"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the winarg library.
///
/// Only relative path computation can fail; the quoting functions have a
/// defined output for every input.
#[derive(Debug, Error)]
pub enum Error {
    /// The two paths given to [`relative_to`](crate::winpath::relative_to)
    /// cannot be related by a relative path.
    ///
    /// The message names both offending paths so callers can report the
    /// failure without reconstructing context.
    #[error("cannot compute relative path: {reason}\npath = {path}\nbase = {base}")]
    InputMismatch {
        /// The path that was to be expressed relative to `base`.
        path: String,
        /// The base the relative path would have started from.
        base: String,
        /// Why the inputs cannot be related.
        reason: MismatchReason,
    },
}

/// Reason why two paths cannot be related by a relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchReason {
    /// One input is absolute and the other is relative.
    MixedAbsoluteRelative,
    /// Both inputs are absolute but under different drive letters.
    DriveMismatch,
}

impl std::fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MixedAbsoluteRelative => {
                write!(f, "mixed absolute and non-absolute paths")
            }
            Self::DriveMismatch => write!(f, "paths are under different drives"),
        }
    }
}

impl Error {
    /// Returns the reason the inputs could not be related.
    ///
    /// # Examples
    ///
    /// ```
    /// use winarg::{relative_to, MismatchReason};
    ///
    /// let err = relative_to("C:\\foo", "D:\\foo").unwrap_err();
    /// assert_eq!(err.reason(), MismatchReason::DriveMismatch);
    /// ```
    #[must_use]
    pub fn reason(&self) -> MismatchReason {
        match self {
            Self::InputMismatch { reason, .. } => *reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_mismatch_display_names_both_paths() {
        let err = Error::InputMismatch {
            path: "C:\\foo".to_string(),
            base: "bar".to_string(),
            reason: MismatchReason::MixedAbsoluteRelative,
        };
        let display = format!("{err}");
        assert!(display.contains("cannot compute relative path"));
        assert!(display.contains("path = C:\\foo"));
        assert!(display.contains("base = bar"));
        assert!(display.contains("mixed absolute"));
    }

    #[test]
    fn test_drive_mismatch_display() {
        let err = Error::InputMismatch {
            path: "C:\\foo".to_string(),
            base: "D:\\foo".to_string(),
            reason: MismatchReason::DriveMismatch,
        };
        let display = format!("{err}");
        assert!(display.contains("different drives"));
    }

    #[test]
    fn test_mismatch_reason_display() {
        assert_eq!(
            format!("{}", MismatchReason::MixedAbsoluteRelative),
            "mixed absolute and non-absolute paths"
        );
        assert_eq!(
            format!("{}", MismatchReason::DriveMismatch),
            "paths are under different drives"
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Err(Error::InputMismatch {
                path: "C:\\a".to_string(),
                base: "b".to_string(),
                reason: MismatchReason::MixedAbsoluteRelative,
            })
        }

        assert!(returns_result().is_err());
    }
}

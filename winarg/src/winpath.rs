//! Lexical path-string operations for launcher command lines.
//!
//! This module works on `\`-separated path strings rather than on
//! [`std::path::Path`]: the strings end up verbatim inside command lines for
//! another process, so the exact separator and casing must be under the
//! caller's control. Nothing here touches the filesystem.
//!
//! Inputs to [`relative_to`] are assumed pre-normalized: `\` as the only
//! separator, no trailing separator, no `.`/`..` segments, and consistent
//! casing. [`normalize_for_comparison`] provides the lexical part of that
//! normalization for callers on case-insensitive filesystems; comparison
//! inside [`relative_to`] itself is ordinary character equality.

use crate::error::{Error, MismatchReason, Result};

/// Returns true if the path is absolute, i.e. drive-qualified.
///
/// An absolute path begins with an ASCII drive letter followed by `:`.
///
/// # Examples
///
/// ```
/// use winarg::is_absolute;
///
/// assert!(is_absolute("C:\\foo"));
/// assert!(is_absolute("c:"));
/// assert!(!is_absolute("foo\\bar"));
/// assert!(!is_absolute(""));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Computes the shortest relative path that expresses `path` in terms of
/// `base`.
///
/// Both inputs must use `\` as the separator and be pre-normalized (see the
/// module docs). Resolving the result against `base` lexically, one `..` or
/// segment at a time, reproduces `path` exactly.
///
/// # Errors
///
/// Returns [`Error::InputMismatch`] when exactly one of the inputs is
/// absolute, or when both are absolute but under different drive letters.
/// No diagnostic is printed here; reporting is the caller's concern.
///
/// # Examples
///
/// ```
/// use winarg::relative_to;
///
/// assert_eq!(relative_to("C:\\foo\\bar1", "C:\\foo\\bar2").unwrap(), "..\\bar1");
/// assert_eq!(relative_to("C:\\foo\\bar", "C:\\foo").unwrap(), "bar");
/// assert_eq!(relative_to("C:\\foo", "C:\\foo\\bar").unwrap(), "..");
/// assert_eq!(relative_to("C:\\foo", "C:\\foo").unwrap(), "");
///
/// assert!(relative_to("C:\\foo", "bar").is_err());
/// assert!(relative_to("C:\\foo", "D:\\foo").is_err());
/// ```
pub fn relative_to(path: &str, base: &str) -> Result<String> {
    if is_absolute(path) != is_absolute(base) {
        return Err(Error::InputMismatch {
            path: path.to_string(),
            base: base.to_string(),
            reason: MismatchReason::MixedAbsoluteRelative,
        });
    }

    let p = path.as_bytes();
    let b = base.as_bytes();

    if is_absolute(path) && p[0] != b[0] {
        return Err(Error::InputMismatch {
            path: path.to_string(),
            base: base.to_string(),
            reason: MismatchReason::DriveMismatch,
        });
    }

    // Walk both paths in lockstep, recording the separator position after
    // the last fully matched fragment.
    let mut pos = 0;
    let mut last_sep: Option<usize> = None;
    while pos < p.len() && pos < b.len() && p[pos] == b[pos] {
        if p[pos] == b'\\' {
            last_sep = Some(pos);
        }
        pos += 1;
    }

    if pos == p.len() && pos == b.len() {
        // base == path in this case
        return Ok(String::new());
    }

    if (pos == b.len() && p.get(pos) == Some(&b'\\'))
        || (pos == p.len() && b.get(pos) == Some(&b'\\'))
    {
        // One of the paths is a direct ancestor of the other. Move the
        // effective separator to the end of the shorter path so the shared
        // fragment does not produce a spurious trailing segment.
        // eg. path = C:\foo\bar, base = C:\foo => last_sep = 6
        //  or path = C:\foo, base = C:\foo\bar => last_sep = 6
        last_sep = Some(pos);
    }

    let suffix_start = last_sep.map_or(0, |sep| sep + 1);
    let mut result = String::new();

    // One ..\ for the ascent out of base's unmatched suffix, plus one more
    // per further separator in that suffix. When base is an ancestor of
    // path the suffix is empty and no prefix is emitted. suffix_start ==
    // base.len() cannot occur for a non-empty suffix because a normalized
    // path never ends with a separator.
    if suffix_start < b.len() {
        result.push_str("..\\");
        for &c in &b[suffix_start..] {
            if c == b'\\' {
                result.push_str("..\\");
            }
        }
    }

    // Append path's unmatched fragments. When path is an ancestor of base
    // the effective separator sits at the end of path and there is nothing
    // to append; the ascent prefix then ends the result, so drop its
    // trailing separator (".." rather than "..\").
    let remainder = match last_sep {
        Some(sep) if sep == p.len() => "",
        Some(sep) => &path[sep + 1..],
        None => path,
    };
    if remainder.is_empty() {
        if result.ends_with('\\') {
            result.pop();
        }
    } else {
        result.push_str(remainder);
    }

    Ok(result)
}

/// Returns the text after the last `\` or `/` separator.
///
/// When the path contains no separator the whole string is returned.
///
/// # Examples
///
/// ```
/// use winarg::winpath::base_name;
///
/// assert_eq!(base_name("C:\\foo\\bar.exe"), "bar.exe");
/// assert_eq!(base_name("foo/bar"), "bar");
/// assert_eq!(base_name("bar.exe"), "bar.exe");
/// ```
#[must_use]
pub fn base_name(path: &str) -> &str {
    path.rfind(['\\', '/']).map_or(path, |sep| &path[sep + 1..])
}

/// Returns the text before the last `\` or `/` separator.
///
/// When the path contains no separator the whole string is returned.
///
/// # Examples
///
/// ```
/// use winarg::winpath::parent_dir;
///
/// assert_eq!(parent_dir("C:\\foo\\bar.exe"), "C:\\foo");
/// assert_eq!(parent_dir("foo/bar"), "foo");
/// ```
#[must_use]
pub fn parent_dir(path: &str) -> &str {
    path.rfind(['\\', '/']).map_or(path, |sep| &path[..sep])
}

/// Strips a trailing `.exe` extension from a binary path, if present.
///
/// # Examples
///
/// ```
/// use winarg::winpath::without_exe_extension;
///
/// assert_eq!(without_exe_extension("C:\\foo\\bar.exe"), "C:\\foo\\bar");
/// assert_eq!(without_exe_extension("C:\\foo\\bar"), "C:\\foo\\bar");
/// ```
#[must_use]
pub fn without_exe_extension(binary: &str) -> &str {
    binary.strip_suffix(".exe").unwrap_or(binary)
}

/// Ensures a binary path carries exactly one `.exe` extension.
///
/// # Examples
///
/// ```
/// use winarg::winpath::with_exe_extension;
///
/// assert_eq!(with_exe_extension("C:\\foo\\bar"), "C:\\foo\\bar.exe");
/// assert_eq!(with_exe_extension("C:\\foo\\bar.exe"), "C:\\foo\\bar.exe");
/// ```
#[must_use]
pub fn with_exe_extension(binary: &str) -> String {
    format!("{}.exe", without_exe_extension(binary))
}

/// Normalizes a path string for character-equality comparison.
///
/// Converts `/` separators to `\`, lower-cases ASCII letters, and trims
/// trailing separators. Callers targeting case-insensitive filesystems
/// should apply this to both inputs before [`relative_to`]; the
/// relativization itself never folds case.
///
/// # Examples
///
/// ```
/// use winarg::winpath::normalize_for_comparison;
///
/// assert_eq!(normalize_for_comparison("C:/Foo/Bar"), "c:\\foo\\bar");
/// assert_eq!(normalize_for_comparison("C:\\foo\\"), "c:\\foo");
/// ```
#[must_use]
pub fn normalize_for_comparison(path: &str) -> String {
    let mut normalized = path.replace('/', "\\").to_ascii_lowercase();
    while normalized.ends_with('\\') {
        normalized.pop();
    }
    normalized
}

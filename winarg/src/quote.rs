//! Argument quoting for process command lines.
//!
//! This module provides two quoting conventions:
//!
//! - [`quote`] encodes a token for the Windows `CreateProcessW` command line,
//!   so that the standard argv splitter (the `CommandLineToArgvW` backslash
//!   rule) decodes it back to the original characters.
//! - [`bash_quote`] encodes a token for a POSIX-shell-style command string,
//!   where every backslash is unconditionally an escape introducer.
//!
//! The two conventions are deliberately separate implementations. The native
//! convention needs backslash-run lookahead (a run of backslashes is only
//! special when it touches a quote or the end of the token); the shell
//! convention does not. Folding them into one parameterized function would
//! risk applying the wrong rule to the wrong decoder.
//!
//! The algorithm for [`quote`] is based on information found in
//! <http://daviddeley.com/autohotkey/parameters/parameters.htm>

/// Quotes an argument for the Windows `CreateProcessW` argv convention.
///
/// The output, when decoded by the standard argv splitter, yields exactly the
/// input characters. Tokens containing neither a space nor a quote character
/// are returned unchanged: without word-breaking characters they decode
/// identically either way, and this keeps command lines readable.
///
/// Within a quoted token:
///
/// - a literal quote becomes `\"`;
/// - a run of backslashes immediately followed by a quote (including the
///   closing quote this function appends) is doubled, so the decoder sees
///   them as literal backslashes;
/// - a run of backslashes followed by an ordinary character is copied
///   unchanged.
///
/// # Examples
///
/// ```
/// use winarg::quote;
///
/// assert_eq!(quote(""), "\"\"");
/// assert_eq!(quote("foo"), "foo");
/// assert_eq!(quote("foo bar"), "\"foo bar\"");
/// assert_eq!(quote("a\"b"), "\"a\\\"b\"");
///
/// // A trailing backslash must be doubled so it does not escape the
/// // closing quote.
/// assert_eq!(quote("a \\"), "\"a \\\\\"");
///
/// // A backslash run not touching a quote keeps its count.
/// assert_eq!(quote("a\\b c"), "\"a\\b c\"");
/// ```
#[must_use]
pub fn quote(s: &str) -> String {
    if s.is_empty() {
        return "\"\"".to_string();
    }
    if !s.bytes().any(|b| b == b' ' || b == b'"') {
        return s.to_string();
    }

    let bytes = s.as_bytes();
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');

    // Forward scan: `start` marks the beginning of a pending run of ordinary
    // characters, copied in one piece when the next special character (or the
    // end of the token) is reached.
    let mut start = Some(0);
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                if let Some(from) = start.take() {
                    result.push_str(&s[from..i]);
                }
                // A quote character. Escape it with a single backslash.
                result.push_str("\\\"");
            }
            b'\\' => {
                if let Some(from) = start.take() {
                    result.push_str(&s[from..i]);
                }
                // First backslash in a run. Whether the run is escaped
                // depends on what terminates it.
                let mut run_end = i + 1;
                while run_end < bytes.len() && bytes[run_end] == b'\\' {
                    run_end += 1;
                }
                let run_len = run_end - i;
                if run_end == bytes.len() {
                    // The run reaches the end of the token, so it is
                    // immediately followed by our closing quote. Every
                    // backslash must be escaped with another backslash.
                    result.extend(std::iter::repeat('\\').take(run_len * 2));
                    break;
                }
                if bytes[run_end] == b'"' {
                    // The run is terminated by a quote. Escape every
                    // backslash with another backslash, then escape the
                    // quote itself.
                    result.extend(std::iter::repeat('\\').take(run_len * 2));
                    result.push_str("\\\"");
                    // Consume the terminating quote along with the run.
                    i = run_end;
                } else {
                    // No quote after the run. The backslashes count for
                    // themselves and must not be escaped.
                    result.extend(std::iter::repeat('\\').take(run_len));
                    i = run_end - 1;
                }
            }
            _ => {
                if start.is_none() {
                    start = Some(i);
                }
            }
        }
        i += 1;
    }

    // Flush the final run of ordinary characters.
    if let Some(from) = start {
        result.push_str(&s[from..]);
    }
    result.push('"');
    result
}

/// Quotes an argument for a POSIX-shell-style command string.
///
/// The token is wrapped in quotes only when it contains a space. Every quote
/// character is escaped as `\"` and every backslash as `\\`, independent of
/// context: the target decoder treats each backslash as an escape introducer
/// unconditionally, so no run-length logic is needed.
///
/// # Examples
///
/// ```
/// use winarg::bash_quote;
///
/// assert_eq!(bash_quote(""), "\"\"");
/// assert_eq!(bash_quote("foo"), "foo");
/// assert_eq!(bash_quote("foo bar"), "\"foo bar\"");
/// assert_eq!(bash_quote("a\\b"), "a\\\\b");
/// ```
#[must_use]
pub fn bash_quote(s: &str) -> String {
    if s.is_empty() {
        return "\"\"".to_string();
    }

    let has_space = s.contains(' ');
    // The result is at least as long as the input.
    let mut result = String::with_capacity(s.len() + 2);
    if has_space {
        result.push('"');
    }
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            _ => result.push(c),
        }
    }
    if has_space {
        result.push('"');
    }
    result
}

//! Message deduplication.
//!
//! Errors built by naive string concatenation render their cause's text
//! inside their own (`"doing foo: <cause>"`). When formatting a chain one
//! level per line, that repetition has to be subtracted back out. The
//! functions here work purely on the two rendered strings — no knowledge of
//! the format string that produced them is needed.

use std::borrow::Cow;
use std::error::Error as StdError;

use crate::chain::{ChainError, OwnMessage};

/// The portion of `full` not contributed by `cause`.
///
/// - `cause` absent from `full`, or first occurring at index 0: `full` is
///   returned unchanged — no safe reduction exists, and a match at the very
///   start would leave a degenerate empty result. An empty `cause` and
///   `full == cause` both land here by construction.
/// - `cause` is a pure suffix (`"doing foo: <cause>"`): the prefix is
///   returned with any trailing `':'` / `' '` run stripped.
/// - `cause` occurs mid-string (`"failed (<cause>) while doing foo"`): the
///   cause's text is replaced by a single `*`, keeping the surrounding
///   structure: `"failed (*) while doing foo"`.
pub fn own_portion<'a>(full: &'a str, cause: &str) -> Cow<'a, str> {
    match full.find(cause) {
        Some(idx) if idx > 0 => {
            if idx + cause.len() == full.len() {
                Cow::Borrowed(full[..idx].trim_end_matches([':', ' ']))
            } else {
                Cow::Owned(format!(
                    "{}*{}",
                    &full[..idx],
                    &full[idx + cause.len()..]
                ))
            }
        }
        _ => Cow::Borrowed(full),
    }
}

/// The deduplicated own message of `err`.
///
/// Exact when a native message is available: a [`ChainError`] reports its
/// creator-supplied message verbatim, as does a [`ChainError`] sitting in
/// the cause slot. Otherwise the heuristic [`own_portion`] subtraction runs
/// against the cause's flattened text, and an error with no cause at all
/// reports its flattened text unchanged.
///
/// ```
/// use chainerr::{unwrap_message, ChainError};
///
/// let err = ChainError::wrap(std::io::Error::other("disk full"), "saving index");
/// assert_eq!(err.to_string(), "saving index: disk full");
/// assert_eq!(unwrap_message(&err), "saving index");
/// ```
pub fn unwrap_message(err: &(dyn StdError + 'static)) -> String {
    if let Some(node) = err.downcast_ref::<ChainError>() {
        return node.own_message().to_owned();
    }
    let Some(cause) = err.source() else {
        return err.to_string();
    };
    if let Some(node) = cause.downcast_ref::<ChainError>() {
        return node.own_message().to_owned();
    }
    own_portion(&err.to_string(), &cause.to_string()).into_owned()
}

#[cfg(test)]
mod tests;

//! Constant sentinel errors.

use thiserror::Error;

/// A constant, string-backed error with no chain or frame.
///
/// Sentinels are comparison targets, not wrapped diagnostics:
///
/// ```
/// use chainerr::Sentinel;
///
/// const NOT_FOUND: Sentinel = Sentinel("entry not found");
///
/// fn lookup(key: &str) -> Result<(), Sentinel> {
///     if key.is_empty() { Err(NOT_FOUND) } else { Ok(()) }
/// }
///
/// assert_eq!(lookup(""), Err(NOT_FOUND));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Error)]
#[error("{0}")]
pub struct Sentinel(pub &'static str);

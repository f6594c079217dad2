//! Chain traversal and formatting.
//!
//! Renders an error chain either as the flattened single-line text or as a
//! detailed multi-line trace, one own-message per level, each followed by
//! its captured frame when the link has one. Chains may mix [`ChainError`]
//! links with foreign errors; every capability is probed per link and absent
//! capabilities fall back silently (native message → deduplicated message →
//! flattened text; no frame → no frame line).

use std::error::Error as StdError;
use std::fmt;

use crate::chain::{ChainError, OwnMessage, WithFrame};
use crate::dedup::own_portion;
use crate::frame::Frame;

/// Rendering mode for [`render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Render {
    /// The flattened single-line `message: cause: ...` text.
    Short,
    /// One own-message per level, each followed by its frame.
    Detailed,
    /// Like [`Render::Detailed`], with function names in frames.
    DetailedWithFunctions,
}

impl Render {
    /// Parse a mode token. Recognized: `short`, `detailed`,
    /// `detailed-functions`.
    pub fn parse(token: &str) -> Option<Render> {
        match token {
            "short" => Some(Render::Short),
            "detailed" => Some(Render::Detailed),
            "detailed-functions" => Some(Render::DetailedWithFunctions),
            _ => None,
        }
    }

    /// Render `err` to `out` in this mode.
    pub fn write(self, err: &(dyn StdError + 'static), out: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Render::Short => write!(out, "{err}"),
            Render::Detailed => format_chain(err, out, false),
            Render::DetailedWithFunctions => format_chain(err, out, true),
        }
    }
}

/// Render `err` to `out` in the mode named by `token`.
///
/// An unrecognized token is not a failure: a single placeholder line naming
/// the token is emitted instead, so diagnostic code never errors while
/// reporting a diagnostic. The only failure path is the sink's own
/// [`fmt::Error`].
pub fn render(
    err: &(dyn StdError + 'static),
    out: &mut dyn fmt::Write,
    token: &str,
) -> fmt::Result {
    match Render::parse(token) {
        Some(mode) => mode.write(err, out),
        None => write!(out, "unsupported render mode {token:?} (ChainError)"),
    }
}

/// Write the detailed multi-line trace of `err` to `out`.
///
/// One line per chain level holding that level's own message, levels after
/// the first prefixed with `"  - "`, each level followed by its frame's
/// rendering when it captured one. The walk is an explicit loop — chains are
/// caller-controlled and unbounded, so recursion is off the table.
pub fn format_chain(
    err: &(dyn StdError + 'static),
    out: &mut dyn fmt::Write,
    with_functions: bool,
) -> fmt::Result {
    let mut prefix = "";
    let mut current = Some(err);

    while let Some(err) = current {
        let next = err.source();
        writeln!(out, "{prefix}{}", level_message(err, next))?;

        if let Some(frame) = frame_of(err) {
            frame.render(out, with_functions)?;
        }

        prefix = "  - ";
        current = next;
    }
    Ok(())
}

/// One level's own message: native when the link exposes it, deduplicated
/// against the next link's flattened text otherwise, the link's flattened
/// text verbatim at the terminus.
fn level_message(err: &(dyn StdError + 'static), next: Option<&(dyn StdError + 'static)>) -> String {
    if let Some(own) = own_message_of(err) {
        own.to_owned()
    } else if let Some(next) = next {
        own_portion(&err.to_string(), &next.to_string()).into_owned()
    } else {
        err.to_string()
    }
}

fn own_message_of<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a str> {
    err.downcast_ref::<ChainError>()
        .map(OwnMessage::own_message)
}

fn frame_of<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn Frame> {
    err.downcast_ref::<ChainError>().map(WithFrame::frame)
}

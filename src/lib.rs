//! Error chaining with call-site frames and message deduplication.
//!
//! Errors built here carry three things: a message, an optional wrapped
//! cause (forming a linked chain), and the source location where they were
//! created. Two independent services sit on top:
//!
//! - **Rendering**: a chain prints as either the flattened single line
//!   (`"saving index: opening segment: disk full"`) or a detailed per-level
//!   trace with one own-message and one frame per link ([`format_chain`],
//!   [`render`], or the `{:+}` / `{:#}` format flags on [`ChainError`]).
//! - **Deduplication**: [`unwrap_message`] recovers the portion of a message
//!   an error contributed itself, subtracting the substring its cause
//!   contributed — so errors built by naive concatenation (`format!("doing
//!   foo: {cause}")`) still render one clean message per level.
//!
//! Chains interoperate with any `std::error::Error`: foreign links are
//! walked via `source()` and deduplicated heuristically, while [`ChainError`]
//! links report their message and frame exactly.

mod chain;
mod dedup;
mod frame;
mod render;
mod sentinel;

pub use chain::{ChainError, OwnMessage, WithFrame};
pub use dedup::{own_portion, unwrap_message};
pub use frame::{CallerFrame, Frame};
pub use render::{format_chain, render, Render};
pub use sentinel::Sentinel;

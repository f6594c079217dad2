//! The chain-node error type and its constructors.
//!
//! A [`ChainError`] carries three things: the message its creator supplied,
//! an optional wrapped cause, and the [`Frame`] where it was constructed.
//! Nodes are immutable once built. The message never embeds the cause's
//! text; the flattened `message: cause: ...` form is produced on demand by
//! the [`Display`](fmt::Display) impl, so code that only knows how to pull a
//! flat string out of an error still sees the full chain.

use std::error::Error as StdError;
use std::fmt;

use crate::frame::{CallerFrame, Frame};
use crate::render;

/// An error link that knows its own message, separate from its cause's.
///
/// The returned text is exactly what the creator supplied; it never embeds
/// the cause's rendering.
pub trait OwnMessage {
    /// The creator-supplied message for this link alone.
    fn own_message(&self) -> &str;
}

/// An error link that captured a call-site [`Frame`].
pub trait WithFrame {
    /// The frame captured when this link was constructed.
    fn frame(&self) -> &dyn Frame;
}

/// An error with a message, an optional wrapped cause, and the call site
/// where it was created.
///
/// Build one with [`ChainError::new`] or [`ChainError::wrap`] (or the
/// [`newf!`](crate::newf) / [`wrapf!`](crate::wrapf) macros for formatted
/// messages). The cause may be any `std::error::Error`, including another
/// `ChainError`; chains freely mix the two.
///
/// ```
/// use chainerr::ChainError;
///
/// let io = std::io::Error::other("disk full");
/// let err = ChainError::wrap(io, "saving index");
/// assert_eq!(err.to_string(), "saving index: disk full");
/// ```
#[derive(Debug)]
pub struct ChainError {
    message: String,
    cause: Option<Box<dyn StdError + Send + Sync + 'static>>,
    frame: Box<dyn Frame>,
}

impl ChainError {
    /// Create a chain terminus with the given message.
    ///
    /// The frame records the caller of `new`, not `new` itself.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        ChainError {
            message: message.into(),
            cause: None,
            frame: Box::new(CallerFrame::capture()),
        }
    }

    /// Wrap `cause` with a new message.
    ///
    /// `message` must not repeat the cause's text; the flattened rendering
    /// appends it automatically. A caller with no cause to wrap uses
    /// [`ChainError::new`] instead — an absent cause is not representable
    /// here.
    #[track_caller]
    pub fn wrap(
        cause: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
        message: impl Into<String>,
    ) -> Self {
        ChainError {
            message: message.into(),
            cause: Some(cause.into()),
            frame: Box::new(CallerFrame::capture()),
        }
    }

    /// Replace the captured frame.
    ///
    /// Consuming builder for callers that capture frames through some other
    /// mechanism (or pin them to fixed values in tests).
    pub fn with_frame(mut self, frame: impl Frame + 'static) -> Self {
        self.frame = Box::new(frame);
        self
    }
}

impl OwnMessage for ChainError {
    fn own_message(&self) -> &str {
        &self.message
    }
}

impl WithFrame for ChainError {
    fn frame(&self) -> &dyn Frame {
        &*self.frame
    }
}

impl fmt::Display for ChainError {
    /// Plain `{}` renders the flattened `message: cause: ...` text. `{:+}`
    /// renders the detailed per-level trace, `{:#}` the same trace with
    /// function names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.sign_plus() || f.alternate() {
            let with_functions = f.alternate();
            return render::format_chain(self, f, with_functions);
        }
        match &self.cause {
            Some(cause) => write!(f, "{}: {cause}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl StdError for ChainError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| &**cause as &(dyn StdError + 'static))
    }
}

/// [`ChainError::new`] with a formatted message.
///
/// ```
/// let err = chainerr::newf!("no entry for key {:?}", "alpha");
/// assert_eq!(err.to_string(), "no entry for key \"alpha\"");
/// ```
#[macro_export]
macro_rules! newf {
    ($($arg:tt)*) => {
        $crate::ChainError::new(::std::format!($($arg)*))
    };
}

/// [`ChainError::wrap`] with a formatted message.
///
/// ```
/// let cause = chainerr::ChainError::new("timeout");
/// let err = chainerr::wrapf!(cause, "fetching shard {}", 3);
/// assert_eq!(err.to_string(), "fetching shard 3: timeout");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($cause:expr, $($arg:tt)*) => {
        $crate::ChainError::wrap($cause, ::std::format!($($arg)*))
    };
}

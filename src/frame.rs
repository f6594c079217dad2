//! Call-site frames.
//!
//! A [`Frame`] records where an error was created. The chain machinery treats
//! frames as opaque: it captures one at construction and asks it to render
//! itself during detailed formatting, nothing more. Swapping in a different
//! capture mechanism (or a fixed fake in tests) only requires implementing
//! the trait.

use std::fmt;
use std::panic::Location;

/// A captured call-site location.
///
/// Implementations write zero or more indented, human-readable lines to the
/// sink. When `with_functions` is true and the frame knows the name of the
/// function it was captured in, that name is printed on its own line before
/// the location.
pub trait Frame: fmt::Debug + Send + Sync {
    /// Render this frame to `out`.
    fn render(&self, out: &mut dyn fmt::Write, with_functions: bool) -> fmt::Result;
}

/// The default [`Frame`]: file and line of the constructor call site.
///
/// Captured via [`Location::caller`] inside a `#[track_caller]` constructor,
/// so the recorded location is the direct caller of `new`/`wrap`, not the
/// constructor's own internals. [`Location`] carries no function name;
/// [`CallerFrame::named`] attaches one where the caller wants it reported.
#[derive(Clone, Copy, Debug)]
pub struct CallerFrame {
    location: &'static Location<'static>,
    function: Option<&'static str>,
}

impl CallerFrame {
    /// Capture the caller's location.
    #[track_caller]
    pub fn capture() -> Self {
        CallerFrame {
            location: Location::caller(),
            function: None,
        }
    }

    /// Capture the caller's location together with a function name to report
    /// when rendering with functions enabled.
    #[track_caller]
    pub fn named(function: &'static str) -> Self {
        CallerFrame {
            location: Location::caller(),
            function: Some(function),
        }
    }

    /// The captured source file.
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    /// The captured line number.
    pub fn line(&self) -> u32 {
        self.location.line()
    }
}

impl Frame for CallerFrame {
    fn render(&self, out: &mut dyn fmt::Write, with_functions: bool) -> fmt::Result {
        if with_functions {
            if let Some(function) = self.function {
                writeln!(out, "    {function}")?;
            }
        }
        writeln!(out, "    {}:{}", self.location.file(), self.location.line())
    }
}

#[cfg(test)]
mod tests;

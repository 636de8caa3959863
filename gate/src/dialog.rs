//! Blocking user dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! In a browser the gate suspends the page on `window.prompt` and
//! `window.alert`; nothing else on the page runs until the user answers.
//! Hosts without native modal dialogs use [`TerminalDialogs`], which turns
//! the same interaction into a line-based request/response over any
//! reader/writer pair.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use std::io::{self, BufRead, Write};

/// Text of the token prompt.
pub const PROMPT_MESSAGE: &str = "Please enter your auth token:";

/// Text shown when the user declines the prompt.
pub const DECLINED_MESSAGE: &str = "You need a token to proceed.";

/// Modal prompt/alert capability.
pub trait Dialogs {
    /// Ask for a line of text and block until answered.
    ///
    /// Returns `None` when the user cancels or submits an empty value.
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Show a notification and block until dismissed.
    fn alert(&mut self, message: &str);
}

// =============================================================================
// TERMINAL DIALOGS
// =============================================================================

/// Line-oriented dialogs over a reader and a writer.
///
/// A prompt writes `message ` and reads one line. End of input counts as
/// cancel. The trailing line ending is stripped, nothing else is.
pub struct TerminalDialogs<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalDialogs<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_answer(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        Ok((!answer.is_empty()).then(|| answer.to_owned()))
    }
}

impl<R: BufRead, W: Write> Dialogs for TerminalDialogs<R, W> {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.read_answer(message).unwrap_or_else(|e| {
            log::warn!("prompt failed, treating as cancel: {e}");
            None
        })
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{message}").and_then(|()| self.output.flush()) {
            log::warn!("alert could not be shown: {e}");
        }
    }
}

// =============================================================================
// BROWSER DIALOGS
// =============================================================================

/// `window.prompt` / `window.alert`.
#[cfg(feature = "hydrate")]
pub struct WindowDialogs {
    window: web_sys::Window,
}

#[cfg(feature = "hydrate")]
impl WindowDialogs {
    #[must_use]
    pub fn from_window() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

#[cfg(feature = "hydrate")]
impl Dialogs for WindowDialogs {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.window
            .prompt_with_message(message)
            .ok()
            .flatten()
            .filter(|answer| !answer.is_empty())
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("alert could not be shown: {e:?}");
        }
    }
}

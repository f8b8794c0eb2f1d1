//! Line-based console I/O.

use std::fmt::Display;
use std::io::{self, BufRead, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::PlayError;

/// Raised when the player asks to abandon the game, e.g. from a Ctrl-C handler.
///
/// Clones share one flag.
#[derive(Debug, Clone, Default)]
pub struct AbortSignal(Arc<AtomicBool>);

impl AbortSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// A prompt/answer channel to the player.
///
/// Generic over the streams so sessions can be driven from memory in tests.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    abort: AbortSignal,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_abort(input, output, AbortSignal::new())
    }

    /// A console whose prompts fail with [`PlayError::Interrupted`] once
    /// `abort` is triggered.
    pub fn with_abort(input: R, output: W, abort: AbortSignal) -> Self {
        Self {
            input,
            output,
            abort,
        }
    }

    pub fn abort_signal(&self) -> &AbortSignal {
        &self.abort
    }

    /// Write one line of text.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Show `text` without a newline and read the player's answer, trimmed.
    ///
    /// A line that is not valid UTF-8 reads as an empty answer so the caller
    /// re-prompts. The abort signal is checked before and after the read.
    pub fn prompt(&mut self, text: &str) -> Result<String, PlayError> {
        self.check_abort()?;
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line);
        self.check_abort()?;
        match read {
            Ok(0) => Err(PlayError::InputClosed),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) if e.kind() == ErrorKind::InvalidData => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn check_abort(&self) -> Result<(), PlayError> {
        if self.abort.is_triggered() {
            return Err(PlayError::Interrupted);
        }
        Ok(())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

//! Line-oriented console the session talks through.

use crate::error::SessionError;
use std::io::{BufRead, Write};
use tracing::{instrument, trace};

/// Line-based input and output used by a session.
///
/// Sessions never touch stdin or stdout directly, so they can be driven
/// by scripted input in tests.
pub trait Console {
    /// Reads the next line without its line terminator.
    ///
    /// Blocks until a line is available.
    fn read_line(&mut self) -> Result<String, SessionError>;

    /// Writes `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> Result<(), SessionError>;
}

/// [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl StdConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> Result<String, SessionError> {
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        trace!(line = %line, "Line read");
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<(), SessionError> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

use std::{fmt::Display, io::Write};

/// Output sink for user-facing text
///
/// Listings and identification lines go to `out`. Action lines, warnings
/// and advisories go to `err`, which is flushed after every line so it
/// interleaves correctly with stdout on a terminal.
#[derive(Debug)]
pub struct Console<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> Console<O, E> {
    /// Creates a console over the given writers.
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Writes a line to the output stream.
    ///
    /// # Errors
    /// Returns error if the write fails
    pub fn line(&mut self, text: impl Display) -> std::io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Writes a line to the error stream and flushes it.
    ///
    /// # Errors
    /// Returns error if the write fails
    pub fn notice(&mut self, text: impl Display) -> std::io::Result<()> {
        writeln!(self.err, "{text}")?;
        self.err.flush()
    }

    /// Flushes the output stream.
    ///
    /// # Errors
    /// Returns error if the flush fails
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    /// Consumes the console, returning the output and error writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

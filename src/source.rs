use crate::error::CalcError;
use crate::variables::Bindings;
use std::collections::{HashMap, VecDeque};
use std::io::{BufRead, Write};

/// Supplies one value per discovered variable.
///
/// The pipeline calls this exactly once for each distinct name, in ascending
/// name order, and never when the expression failed validation.
pub trait ValueSource {
    fn value_for(&mut self, name: &str) -> Result<f64, CalcError>;
}

impl ValueSource for Bindings {
    fn value_for(&mut self, name: &str) -> Result<f64, CalcError> {
        self.get(name)
            .copied()
            .ok_or_else(|| CalcError::missing_value(name))
    }
}

impl ValueSource for HashMap<String, f64> {
    fn value_for(&mut self, name: &str) -> Result<f64, CalcError> {
        self.get(name)
            .copied()
            .ok_or_else(|| CalcError::missing_value(name))
    }
}

/// Interactive source: asks on `writer`, reads whitespace-separated numbers
/// from `reader`. Several values may sit on one line.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Reads a whole line, dropping any numbers left over from the last request.
    pub fn read_line(&mut self) -> std::io::Result<Option<String>> {
        self.pending.clear();
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl<R: BufRead, W: Write> ValueSource for Prompt<R, W> {
    fn value_for(&mut self, name: &str) -> Result<f64, CalcError> {
        // Prompt output is best effort; only the reader decides success.
        let _ = write!(self.writer, "Enter the value for variable {}: ", name);
        let _ = self.writer.flush();

        let token = self
            .next_token()
            .map_err(|error| CalcError::io_error(name, &error))?
            .ok_or_else(|| CalcError::input_exhausted(name))?;

        token
            .parse::<f64>()
            .map_err(|_| CalcError::malformed_input(name, &token))
    }
}

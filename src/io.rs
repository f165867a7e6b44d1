//! Reading objective vectors from delimited text.
//!
//! One vector per line. Lines are handled as follows:
//!
//! - the first `header_lines` lines are skipped unconditionally
//! - blank lines are skipped
//! - lines with fewer than `objectives` tokens are skipped
//! - lines whose first `objectives` tokens do not all parse as `f64` are
//!   skipped
//! - tokens beyond the first `objectives` are ignored
//!
//! I/O failures abort a read, and so does a stream that yields no vector at
//! all.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading vectors.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The underlying stream could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The read options failed validation.
    #[error("invalid read options: {0}")]
    InvalidOptions(String),

    /// The stream held no usable vector.
    #[error("no vector found ({skipped} lines skipped)")]
    Empty {
        /// Data lines skipped as short or malformed.
        skipped: usize,
    },
}

/// How to split a text stream into vectors.
///
/// ```
/// use u_moeval::io::ReadOptions;
///
/// let options = ReadOptions::new(3).with_separator(",").with_header_lines(1);
/// assert_eq!(options.objectives, 3);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadOptions {
    /// Number of leading tokens per line read as objectives.
    pub objectives: usize,

    /// Token separator. Empty tokens between repeated separators are ignored.
    pub separator: String,

    /// Lines skipped before data begins.
    pub header_lines: usize,
}

impl ReadOptions {
    /// Options for `objectives` values per line, space separated, no header.
    pub fn new(objectives: usize) -> Self {
        Self {
            objectives,
            separator: " ".into(),
            header_lines: 0,
        }
    }

    /// Sets the token separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the number of header lines to skip.
    pub fn with_header_lines(mut self, n: usize) -> Self {
        self.header_lines = n;
        self
    }

    /// Validates the options.
    pub fn validate(&self) -> Result<(), String> {
        if self.objectives == 0 {
            return Err("objectives must be at least 1".into());
        }
        if self.separator.is_empty() {
            return Err("separator must not be empty".into());
        }
        Ok(())
    }

    /// Parses one data line, or `None` if it is to be skipped.
    fn parse_line(&self, line: &str) -> Option<Vec<f64>> {
        let tokens: Vec<&str> = line
            .split(self.separator.as_str())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .take(self.objectives)
            .collect();
        if tokens.len() < self.objectives {
            return None;
        }
        tokens.iter().map(|t| t.parse::<f64>().ok()).collect()
    }
}

/// Reads every vector from `reader`.
///
/// # Errors
///
/// [`ReadError::Io`] if the stream fails, [`ReadError::InvalidOptions`] if
/// `options` fail validation, [`ReadError::Empty`] if no line yields a vector.
///
/// # Example
///
/// ```
/// use u_moeval::io::{read_vectors, ReadOptions};
///
/// let text = "f1 f2\n1 2\n\n3\n4 5 6\n";
/// let vectors = read_vectors(text.as_bytes(), &ReadOptions::new(2).with_header_lines(1)).unwrap();
/// assert_eq!(vectors, vec![vec![1.0, 2.0], vec![4.0, 5.0]]);
/// ```
pub fn read_vectors<R: BufRead>(reader: R, options: &ReadOptions) -> Result<Vec<Vec<f64>>, ReadError> {
    options.validate().map_err(ReadError::InvalidOptions)?;

    let mut vectors = Vec::new();
    let mut skipped = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line_no < options.header_lines || line.trim().is_empty() {
            continue;
        }
        match options.parse_line(&line) {
            Some(v) => vectors.push(v),
            None => {
                skipped += 1;
                debug!(line = line_no + 1, "skipping short or malformed line");
            }
        }
    }

    if vectors.is_empty() {
        return Err(ReadError::Empty { skipped });
    }

    debug!(vectors = vectors.len(), skipped, "finished reading vectors");
    Ok(vectors)
}

/// Reads every vector from the file at `path`.
pub fn read_vectors_from_path<P: AsRef<Path>>(
    path: P,
    options: &ReadOptions,
) -> Result<Vec<Vec<f64>>, ReadError> {
    let file = File::open(path)?;
    read_vectors(BufReader::new(file), options)
}

use thiserror::Error;

use crate::source::Position;

/// A fatal minification failure. No partial output is produced.
///
/// The position points at the opening delimiter of the literal or comment
/// that never terminated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct MinifyError {
    /// What failed to terminate.
    pub kind: ErrorKind,
    /// Line of the opening delimiter, starting at 1.
    pub line: usize,
    /// Column of the opening delimiter, starting at 1.
    pub column: usize,
}

impl MinifyError {
    pub(crate) fn new(kind: ErrorKind, at: Position) -> Self {
        Self {
            kind,
            line: at.line,
            column: at.column,
        }
    }

    /// Where the offending literal or comment opened.
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

/// The kinds of malformed input the minifier rejects.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A line terminator or end of input inside a string or template literal.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A line terminator or end of input inside a regular expression literal.
    #[error("unterminated regular expression literal")]
    UnterminatedRegex,
    /// End of input inside a `/* ... */` comment.
    #[error("unterminated comment")]
    UnterminatedComment,
}

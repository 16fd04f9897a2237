//! Character source: raw input bytes with line-ending normalization, control
//! folding and a single byte of lookahead.
//!
//! Invariants
//! - At most one byte is ever buffered ahead of the cursor (`lookahead`).
//! - `\r\n` and a lone `\r` both surface as one `\n`.
//! - Every other byte below `0x20` except `\n` surfaces as `b' '`.
//! - Bytes `>= 0x80` are passed through untouched, so multi-byte UTF-8
//!   sequences are never split or rewritten.

/// UTF-8 byte order mark.
pub(crate) const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Anything below this is a control character and folds to a space.
pub(crate) const SPACE: u8 = b' ';

/// Line and column (both 1-based) of a byte in the input.
///
/// Columns count UTF-8 scalars, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Position {
    #[inline]
    fn bump(&mut self, byte: u8) {
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if !is_continuation(byte) {
            self.column += 1;
        }
    }
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// One normalized byte and where it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Read {
    byte: Option<u8>,
    at: Position,
}

#[derive(Debug)]
pub(crate) struct CharSource<'src> {
    input: &'src [u8],
    idx: usize,
    pos: Position,
    last: Position,
    lookahead: Option<Read>,
    had_bom: bool,
}

impl<'src> CharSource<'src> {
    pub(crate) fn new(input: &'src [u8]) -> Self {
        let had_bom = input.starts_with(BOM);
        Self {
            input,
            idx: if had_bom { BOM.len() } else { 0 },
            pos: Position::default(),
            last: Position::default(),
            lookahead: None,
            had_bom,
        }
    }

    /// Whether a leading byte-order mark was skipped.
    pub(crate) fn had_bom(&self) -> bool {
        self.had_bom
    }

    /// Position of the byte most recently returned by [`get`](Self::get).
    pub(crate) fn last_position(&self) -> Position {
        self.last
    }

    /// Consumes the next normalized byte, or `None` at end of input.
    pub(crate) fn get(&mut self) -> Option<u8> {
        let read = match self.lookahead.take() {
            Some(read) => read,
            None => self.read(),
        };
        self.last = read.at;
        read.byte
    }

    /// Returns the next normalized byte without consuming it.
    pub(crate) fn peek(&mut self) -> Option<u8> {
        if self.lookahead.is_none() {
            self.lookahead = Some(self.read());
        }
        self.lookahead.and_then(|read| read.byte)
    }

    fn read(&mut self) -> Read {
        let at = self.pos;
        let Some(&raw) = self.input.get(self.idx) else {
            return Read { byte: None, at };
        };
        self.idx += 1;

        let byte = match raw {
            b'\r' => {
                if self.input.get(self.idx) == Some(&b'\n') {
                    self.idx += 1;
                }
                b'\n'
            }
            b'\n' => b'\n',
            c if c < SPACE => SPACE,
            c => c,
        };
        self.pos.bump(byte);
        Read {
            byte: Some(byte),
            at,
        }
    }
}

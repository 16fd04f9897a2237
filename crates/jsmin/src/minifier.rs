//! The minifier engine: emission policy, lexical classifier and the string
//! and regex sub-scanners.
//!
//! Overview
//! - The engine looks at a pair of bytes: `a`, already decided relative to
//!   the output so far, and `b`, whose fate is decided next. `b` is always
//!   read through the [`CommentReader`], so comments never reach the policy.
//! - Three actions move the pair forward. They chain: [`keep`] emits `a` and
//!   then performs [`advance`], which shifts `b` into `a` and then performs
//!   [`advance_pair`], which reads a fresh `b`.
//! - Strings, template literals and regex literals are copied verbatim by
//!   dedicated scanners reading raw bytes, entered from `advance` (quote in
//!   `a`) and `advance_pair` (regex-opening `/` in `b`).
//!
//! Limitations
//! - Regex detection is the JSMin heuristic: a `/` opens a regex only after
//!   one of `( , = : [ ! & | ? { } ;` or a line feed. Division right after a
//!   block-closing `}` is misread as a regex opener, and a regex after a
//!   keyword separated by a space (`return /x/`) is read as division.
//! - A line feed outside a literal is dropped unless a space precedes it, so
//!   code relying on automatic semicolon insertion fuses: `return\nx` becomes
//!   `returnx` and `a\nb` becomes `ab`.
//! - A line feed that reaches `a` (after a space, or at the start) still opens
//!   a regex and is emitted raw in front of it: `a \n/x/` becomes `a\n/x/`,
//!   which a second pass reads as division.
//!
//! Deviations from classic JSMin
//! - A separator is never the first byte of the output: ` a` becomes `a`.
//! - A line feed is not emitted in front of a regex at the very start of the
//!   output: `\n/x/` becomes `/x/`.
//!
//! [`keep`]: Minifier::keep
//! [`advance`]: Minifier::advance
//! [`advance_pair`]: Minifier::advance_pair

use alloc::vec::Vec;

use crate::{
    error::{ErrorKind, MinifyError},
    options::MinifyOptions,
    reader::CommentReader,
    source::{BOM, CharSource, Position},
};

const LF: u8 = b'\n';

/// Bytes after which a `/` starts a regex literal rather than a division.
const REGEX_PREFIX: &[u8] = b"(,=:[!&|?{};\n";

/// Whether `c` belongs to an identifier or number for spacing purposes.
///
/// Anything above `0x7E` counts, so non-ASCII text is never fused.
#[inline]
pub(crate) fn is_alphanum(c: Option<u8>) -> bool {
    match c {
        Some(c) => c > 126 || c == b'\\' || c == b'$' || c == b'_' || c.is_ascii_alphanumeric(),
        None => false,
    }
}

/// Lexical mode. Line feeds are data inside a literal and separators
/// everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Code,
    String { delimiter: u8 },
    Regex,
}

impl Mode {
    fn in_literal(self) -> bool {
        !matches!(self, Mode::Code)
    }
}

pub(crate) struct Minifier<'src> {
    reader: CommentReader<'src>,
    a: Option<u8>,
    b: Option<u8>,
    mode: Mode,
    output: Vec<u8>,
    /// Length of any preamble (a re-emitted BOM); nothing has been minified
    /// while `output.len() == start`.
    start: usize,
    #[cfg(any(test, feature = "fuzzing"))]
    panic_on_error: bool,
}

impl<'src> Minifier<'src> {
    pub(crate) fn new(input: &'src [u8], options: MinifyOptions) -> Self {
        let reader = CommentReader::new(CharSource::new(input));
        let mut output = Vec::with_capacity(input.len());
        if options.keep_bom && reader.had_bom() {
            output.extend_from_slice(BOM);
        }
        let start = output.len();

        Self {
            reader,
            a: Some(LF),
            b: None,
            mode: Mode::Code,
            output,
            start,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: options.panic_on_error,
        }
    }

    /// Runs the engine to completion and returns the minified bytes.
    pub(crate) fn run(mut self) -> Result<Vec<u8>, MinifyError> {
        self.advance_pair()?;

        while let Some(a) = self.a {
            let a = if a == LF {
                if self.mode.in_literal() {
                    self.output.push(LF);
                    self.a = self.reader.source().get();
                    continue;
                }
                self.a = Some(b' ');
                b' '
            } else {
                a
            };

            if a == b' ' {
                if is_alphanum(self.b) {
                    self.keep()?;
                } else {
                    self.advance()?;
                }
                continue;
            }

            match self.b {
                Some(b' ') => {
                    if is_alphanum(self.a) {
                        self.keep()?;
                    } else {
                        self.advance_pair()?;
                    }
                }
                Some(LF) => {
                    if self.mode.in_literal() {
                        self.keep()?;
                    } else {
                        self.advance_pair()?;
                    }
                }
                _ => self.keep()?,
            }
        }

        Ok(self.output)
    }

    // ------------------------------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------------------------------

    /// Emits `a`, then advances.
    fn keep(&mut self) -> Result<(), MinifyError> {
        match self.a {
            Some(LF) if !self.mode.in_literal() => self.emit_separator(),
            Some(b' ') => self.emit_separator(),
            Some(c) => self.output.push(c),
            None => {}
        }
        self.advance()
    }

    /// Drops `a` by shifting `b` into its place, then reads a new `b`.
    fn advance(&mut self) -> Result<(), MinifyError> {
        self.a = self.b;
        if let Some(delimiter @ (b'\'' | b'"' | b'`')) = self.a {
            self.output.push(delimiter);
            self.mode = Mode::String { delimiter };
            self.scan_string()?;
        }
        self.advance_pair()
    }

    /// Drops `b` by reading the next one through the comment reader.
    fn advance_pair(&mut self) -> Result<(), MinifyError> {
        self.b = self.read_next()?;
        if self.b == Some(b'/') && self.regex_may_start() {
            match self.a {
                Some(LF) if self.output.len() == self.start => {}
                Some(c) => self.output.push(c),
                None => {}
            }
            self.output.push(b'/');
            self.mode = Mode::Regex;
            self.scan_regex()?;
            self.mode = Mode::Code;
        }
        Ok(())
    }

    fn regex_may_start(&self) -> bool {
        !matches!(self.mode, Mode::String { .. })
            && self.a.is_some_and(|a| REGEX_PREFIX.contains(&a))
    }

    /// A space between tokens, suppressed at the very start of the output.
    fn emit_separator(&mut self) {
        if self.output.len() > self.start {
            self.output.push(b' ');
        }
    }

    // ------------------------------------------------------------------------------------------------
    // Sub-scanners
    // ------------------------------------------------------------------------------------------------

    /// Copies a string or template literal body. The opening delimiter has
    /// been emitted; on return `a` holds the closing delimiter, not yet
    /// emitted.
    fn scan_string(&mut self) -> Result<(), MinifyError> {
        let Mode::String { delimiter } = self.mode else {
            return Ok(());
        };
        let opened_at = self.reader.source().last_position();

        loop {
            match self.reader.source().get() {
                Some(b'\\') => {
                    self.output.push(b'\\');
                    match self.reader.source().get() {
                        Some(escaped) => self.output.push(escaped),
                        None => return Err(self.error(ErrorKind::UnterminatedString, opened_at)),
                    }
                }
                Some(c) if c == delimiter => {
                    self.a = Some(c);
                    self.mode = Mode::Code;
                    return Ok(());
                }
                Some(c) if c > LF => self.output.push(c),
                _ => return Err(self.error(ErrorKind::UnterminatedString, opened_at)),
            }
        }
    }

    /// Copies a regex literal body after its opening `/`. On return `a` holds
    /// the closing `/`, not yet emitted, and `b` the byte after it.
    fn scan_regex(&mut self) -> Result<(), MinifyError> {
        let opened_at = self.reader.source().last_position();

        loop {
            let c = match self.reader.source().get() {
                Some(b'/') => break,
                Some(b'[') => {
                    self.output.push(b'[');
                    self.scan_regex_class(opened_at)?;
                    b']'
                }
                Some(b'\\') => {
                    self.output.push(b'\\');
                    self.escaped_regex_byte(opened_at)?
                }
                Some(c) if c > LF => c,
                _ => return Err(self.error(ErrorKind::UnterminatedRegex, opened_at)),
            };
            self.output.push(c);
        }

        self.a = Some(b'/');
        self.b = self.read_next()?;
        Ok(())
    }

    /// Copies a `[...]` class up to, not including, its `]`.
    fn scan_regex_class(&mut self, opened_at: Position) -> Result<(), MinifyError> {
        loop {
            let c = match self.reader.source().get() {
                Some(b']') => return Ok(()),
                Some(b'\\') => {
                    self.output.push(b'\\');
                    self.escaped_regex_byte(opened_at)?
                }
                Some(c) if c > LF => c,
                _ => return Err(self.error(ErrorKind::UnterminatedRegex, opened_at)),
            };
            self.output.push(c);
        }
    }

    fn escaped_regex_byte(&mut self, opened_at: Position) -> Result<u8, MinifyError> {
        self.reader
            .source()
            .get()
            .ok_or_else(|| self.error(ErrorKind::UnterminatedRegex, opened_at))
    }

    // ------------------------------------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------------------------------------

    /// Reads through the comment reader, reporting its errors like our own.
    fn read_next(&mut self) -> Result<Option<u8>, MinifyError> {
        self.reader.next().map_err(|err| self.fail(err))
    }

    fn error(&self, kind: ErrorKind, at: Position) -> MinifyError {
        self.fail(MinifyError::new(kind, at))
    }

    fn fail(&self, err: MinifyError) -> MinifyError {
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.panic_on_error, "{err}");
        err
    }
}

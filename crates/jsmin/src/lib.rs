//! A single-pass JavaScript minifier in the tradition of JSMin.
//!
//! Comments are removed and whitespace is collapsed to the minimum needed to
//! keep adjacent tokens apart. String, template and regular expression
//! literals are copied verbatim. There is no parsing beyond the lexical
//! level: no renaming, no dead-code removal, no semicolon insertion.
//!
//! ```rust
//! let out = jsmin::minify("var answer = 42; // the answer\n").unwrap();
//! assert_eq!(out, "var answer=42;");
//! ```
//!
//! Malformed input is a hard stop:
//!
//! ```rust
//! use jsmin::ErrorKind;
//!
//! let err = jsmin::minify("var s = 'abc").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::UnterminatedString);
//! assert_eq!((err.line, err.column), (1, 9));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod minifier;
mod options;
mod reader;
mod source;

#[cfg(test)]
mod tests;

use alloc::{string::String, vec::Vec};

use bstr::ByteVec;

pub use error::{ErrorKind, MinifyError};
pub use options::MinifyOptions;
pub use source::Position;

use minifier::Minifier;

/// Minifies JavaScript source text with the default options.
///
/// # Errors
///
/// Returns a [`MinifyError`] if a string, template or regex literal meets a
/// line terminator or the end of input before closing, or if a block comment
/// is never closed.
pub fn minify(source: &str) -> Result<String, MinifyError> {
    minify_with(source, MinifyOptions::default())
}

/// Minifies JavaScript source text.
///
/// # Errors
///
/// See [`minify`].
pub fn minify_with(source: &str, options: MinifyOptions) -> Result<String, MinifyError> {
    // Only ASCII bytes are ever dropped or rewritten, so valid UTF-8 in means
    // valid UTF-8 out and the lossy conversion never substitutes anything.
    minify_bytes_with(source.as_bytes(), options).map(ByteVec::into_string_lossy)
}

/// Minifies JavaScript source given as raw bytes with the default options.
///
/// The input need not be valid UTF-8; bytes above `0x7E` are treated as
/// identifier characters and copied through.
///
/// # Errors
///
/// See [`minify`].
pub fn minify_bytes(source: &[u8]) -> Result<Vec<u8>, MinifyError> {
    minify_bytes_with(source, MinifyOptions::default())
}

/// Minifies JavaScript source given as raw bytes.
///
/// # Errors
///
/// See [`minify`].
pub fn minify_bytes_with(source: &[u8], options: MinifyOptions) -> Result<Vec<u8>, MinifyError> {
    Minifier::new(source, options).run()
}

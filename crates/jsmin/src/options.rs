/// Configuration options for the minifier.
///
/// The defaults reproduce classic JSMin output.
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinifyOptions {
    /// Whether to re-emit a leading UTF-8 byte-order mark.
    ///
    /// A BOM at the very start of the input is always skipped before lexing.
    /// When this is `true` and one was present, the output starts with the
    /// same three bytes (`EF BB BF`).
    ///
    /// # Default
    ///
    /// `false`
    pub keep_bom: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on malformed input instead of returning an error.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces.
    pub panic_on_error: bool,
}

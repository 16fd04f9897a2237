#![no_main]

use arbitrary::Arbitrary;
use jsmin::{MinifyOptions, minify_bytes_with};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    keep_bom: bool,
    source: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let options = MinifyOptions {
        keep_bom: input.keep_bom,
        ..Default::default()
    };

    let Ok(once) = minify_bytes_with(input.source, options) else {
        return;
    };

    // Only ASCII is ever dropped or rewritten.
    if std::str::from_utf8(input.source).is_ok() {
        assert!(std::str::from_utf8(&once).is_ok(), "minify broke UTF-8");
    }
    if !input.keep_bom {
        assert!(once.len() <= input.source.len(), "minify grew the input");
    }
});

use alloc::string::ToString;

use rstest::rstest;

use crate::{ErrorKind, MinifyError, MinifyOptions, Position, minify, minify_with};

#[rstest]
#[case::missing_quote("var s = 'abc", ErrorKind::UnterminatedString, 1, 9)]
#[case::line_feed_in_string("var s = 'ab\ncd';", ErrorKind::UnterminatedString, 1, 9)]
#[case::line_feed_in_template("s = `a\nb`", ErrorKind::UnterminatedString, 1, 5)]
#[case::backslash_at_end("s = \"abc\\", ErrorKind::UnterminatedString, 1, 5)]
#[case::string_on_later_line("a;\n  b = '\n", ErrorKind::UnterminatedString, 2, 7)]
#[case::string_after_multibyte("é = 'x", ErrorKind::UnterminatedString, 1, 5)]
#[case::missing_slash("x = /ab", ErrorKind::UnterminatedRegex, 1, 5)]
#[case::line_feed_in_regex("x = /ab\n/", ErrorKind::UnterminatedRegex, 1, 5)]
#[case::open_class("x = /[ab", ErrorKind::UnterminatedRegex, 1, 5)]
#[case::line_feed_in_class("x = /[a\n]/", ErrorKind::UnterminatedRegex, 1, 5)]
#[case::regex_backslash_at_end("x = (/a\\", ErrorKind::UnterminatedRegex, 1, 6)]
#[case::open_comment("a /* b", ErrorKind::UnterminatedComment, 1, 3)]
#[case::open_comment_later_line("a;\n/*\n*", ErrorKind::UnterminatedComment, 2, 1)]
#[case::slash_star_slash("/*/", ErrorKind::UnterminatedComment, 1, 1)]
fn rejects_unterminated(
    #[case] input: &str,
    #[case] kind: ErrorKind,
    #[case] line: usize,
    #[case] column: usize,
) {
    let err = minify(input).unwrap_err();
    assert_eq!(err, MinifyError { kind, line, column });
    assert_eq!(err.position(), Position { line, column });
}

#[test]
fn error_messages() {
    let err = minify("var s = 'abc").unwrap_err();
    assert_eq!(err.to_string(), "unterminated string literal at 1:9");

    let err = minify("x = /ab").unwrap_err();
    assert_eq!(err.to_string(), "unterminated regular expression literal at 1:5");

    let err = minify("/* x").unwrap_err();
    assert_eq!(err.to_string(), "unterminated comment at 1:1");
}

#[test]
fn comment_inside_string_cannot_terminate_it() {
    let err = minify("s = '/* x */").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnterminatedString);
}

#[test]
#[should_panic(expected = "unterminated string literal at 1:1")]
fn panic_on_error_panics() {
    let _ = minify_with(
        "'abc",
        MinifyOptions {
            panic_on_error: true,
            ..Default::default()
        },
    );
}

#[test]
#[should_panic(expected = "unterminated comment at 1:3")]
fn panic_on_error_covers_comments() {
    let _ = minify_with(
        "a /* b",
        MinifyOptions {
            panic_on_error: true,
            ..Default::default()
        },
    );
}

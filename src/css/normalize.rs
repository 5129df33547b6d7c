//! Remove insignificant whitespace and redundant separators.

use once_cell::sync::Lazy;
use regex::Regex;

use super::placeholder::COMMENT_SENTINEL_PATTERN;

static COMMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\s*{COMMENT_SENTINEL_PATTERN}\s*")).unwrap());

static PUNCTUATION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*([{}:;,])\s*").unwrap());

static OPEN_BRACKET_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\[(])\s*").unwrap());

static CLOSE_BRACKET_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*([)\]])").unwrap());

/// Selectors without any word character, e.g. `a,.{`.
static EMPTY_SELECTOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:,[\d\s.#+>~:]*\{)").unwrap());

static REPEATED_SEPARATOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([;,])[;,]+").unwrap());

/// Remove protected comments together with the whitespace around them.
pub fn strip_comments(css: impl AsRef<str>) -> String {
    COMMENT_REGEX.replace_all(css.as_ref(), "").into_owned()
}

/// Normalize whitespace around punctuation.
///
/// Runs of separators are collapsed after whitespace around them has been
/// removed, so `a ; ; b` becomes `a;b`.
pub fn normalize(css: impl AsRef<str>) -> String {
    let css = PUNCTUATION_REGEX.replace_all(css.as_ref(), "$1");
    let css = OPEN_BRACKET_REGEX.replace_all(&css, "$1");
    let css = CLOSE_BRACKET_REGEX.replace_all(&css, "$1");
    let css = EMPTY_SELECTOR_REGEX.replace_all(&css, "{");
    let css = REPEATED_SEPARATOR_REGEX.replace_all(&css, "$1");
    css.into_owned()
}

#[cfg(test)]
mod tests {
    use super::{normalize, strip_comments};

    #[test]
    fn comments() {
        assert_eq!(strip_comments("!comment0!\nb { c: d;!comment1! }"), "b { c: d;}");
        assert_eq!(strip_comments("a{b:!string0!}"), "a{b:!string0!}");
    }

    #[test]
    fn punctuation() {
        const CASES: [(&str, &str); 4] = [
            ("a , b  {  color : red ;  }", "a,b{color:red;}"),
            ("a\n{\n\tcolor:\tred\n}\n", "a{color:red}"),
            ("a[ href ] { margin: 0   auto }", "a[href]{margin:0   auto}"),
            ("@media ( min-width: 1px ) {}", "@media (min-width:1px){}"),
        ];

        for (input, expected) in CASES {
            assert_eq!(normalize(input), expected, "{input:?}");
        }
    }

    #[test]
    fn empty_selectors() {
        assert_eq!(normalize("a, .{color:red}"), "a{color:red}");
        assert_eq!(normalize("a,> ~{color:red}"), "a{color:red}");
        assert_eq!(normalize("a,b{color:red}"), "a,b{color:red}");
    }

    #[test]
    fn repeated_separators() {
        assert_eq!(normalize("a{color:red; ;;}"), "a{color:red;}");
        assert_eq!(normalize("a,,b{}"), "a,b{}");
        assert_eq!(normalize("a{b:c;,d:e}"), "a{b:c;d:e}");
    }
}

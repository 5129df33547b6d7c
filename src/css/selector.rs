//! Put each selector of a selector list on its own line.
//!
//! Commas separate selectors, at-rule conditions, function arguments and
//! multiple values of a declaration. Only commas separating selectors at the
//! top level of a rule header become line breaks; all other commas are
//! followed by a single space.

use once_cell::sync::Lazy;
use regex::Regex;

static COMMA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*").unwrap());

/// At-rules whose header is a list of conditions.
static CONDITION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(?:document|media)").unwrap());

/// Break selector lists in normalized CSS code.
pub fn break_selectors(css: impl AsRef<str>) -> String {
    css.as_ref()
        .split('}')
        .map(break_block)
        .collect::<Vec<_>>()
        .join("}")
}

/// Process the text between two closing braces.
///
/// The text after the last `{` is a declaration body; every other segment
/// ends with a rule header, possibly preceded by declarations.
fn break_block(block: &str) -> String {
    let segments: Vec<&str> = block.split('{').collect();
    let last = segments.len() - 1;

    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            if i == last {
                space_commas(segment)
            } else {
                break_segment(segment)
            }
        })
        .collect::<Vec<_>>()
        .join("{")
}

/// Process declarations followed by a rule header.
fn break_segment(segment: &str) -> String {
    let mut parts: Vec<String> = segment.split(';').map(str::to_owned).collect();

    if let Some((header, declarations)) = parts.split_last_mut() {
        for declaration in declarations {
            *declaration = space_commas(declaration);
        }
        *header = break_header(header);
    }

    parts.join(";")
}

/// Format the commas of a rule header.
pub fn break_header(header: &str) -> String {
    if CONDITION_REGEX.is_match(header) {
        return space_commas(header);
    }

    let mut result = String::with_capacity(header.len());
    let mut depth = 0usize;
    let mut chars = header.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '(' => {
                depth += 1;
                result.push(c);
            },
            ')' => {
                depth = depth.saturating_sub(1);
                result.push(c);
            },
            ',' => {
                while chars.next_if(|c| c.is_whitespace()).is_some() {}
                result.push_str(if depth == 0 { ",\n" } else { ", " });
            },
            _ => result.push(c),
        }
    }

    result
}

fn space_commas(text: &str) -> String {
    COMMA_REGEX.replace_all(text, ", ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::{break_header, break_selectors};

    #[test]
    fn selector_list() {
        assert_eq!(
            break_selectors("a,b,c{color:red;}"),
            "a,\nb,\nc{color:red;}"
        );
    }

    #[test]
    fn declaration_values() {
        assert_eq!(
            break_selectors("a{font-family:x,y;margin:0}b,c{transition:a 1s,b 2s}"),
            "a{font-family:x, y;margin:0}b,\nc{transition:a 1s, b 2s}"
        );
    }

    #[test]
    fn conditions() {
        assert_eq!(
            break_selectors("@media (min-width:1px),(max-width:2px){a,b{color:red}}"),
            "@media (min-width:1px), (max-width:2px){a,\nb{color:red}}"
        );
        assert_eq!(
            break_header("@document url-prefix(),domain(a)"),
            "@document url-prefix(), domain(a)"
        );
    }

    #[test]
    fn parentheses() {
        const CASES: [(&str, &str); 4] = [
            ("a,b:not(.c,.d)", "a,\nb:not(.c, .d)"),
            (":is(a,b),c", ":is(a, b),\nc"),
            ("a:not(:is(b,c),d),e", "a:not(:is(b, c), d),\ne"),
            ("a),b", "a),\nb"),
        ];

        for (input, expected) in CASES {
            assert_eq!(break_header(input), expected, "{input:?}");
        }
    }

    #[test]
    fn top_level_comma_after_argument_list() {
        // Only the commas inside the argument list stay on the line
        assert_eq!(
            break_selectors(":is(a,b),c{d:e}"),
            ":is(a, b),\nc{d:e}"
        );
        assert_eq!(
            break_selectors("a:not(.b),c{d:e}"),
            "a:not(.b),\nc{d:e}"
        );
    }

    #[test]
    fn declarations_before_nested_rule() {
        assert_eq!(
            break_selectors("@page{margin:1px,2px;a,b{color:red}}"),
            "@page{margin:1px, 2px;a,\nb{color:red}}"
        );
    }
}

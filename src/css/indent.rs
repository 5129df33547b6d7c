//! Indent lines according to brace nesting.

use once_cell::sync::Lazy;
use regex::Regex;

static CLOSED_COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*.*?\*/").unwrap());

static OPEN_COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*.*").unwrap());

/// Leading whitespace of a line opening a comment.
static COMMENT_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s+)/\*").unwrap());

static COMMENT_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*|\*/").unwrap());

/// Line-by-line indentation state.
#[derive(Debug, Default)]
struct Indenter {
    /// Current nesting depth, never below zero.
    depth: i32,

    /// Whether the current line starts inside a block comment.
    in_comment: bool,

    /// Leading whitespace of the line that opened the current comment.
    comment_prefix: String,
}

impl Indenter {
    /// Compute the depth of a line and return the line without its original
    /// indentation.
    fn advance<'a>(&mut self, line: &'a str) -> (i32, &'a str) {
        let (delta, line) = if self.in_comment {
            let line = line.strip_prefix(self.comment_prefix.as_str()).unwrap_or(line);
            (0, line)
        } else {
            let code = CLOSED_COMMENT_REGEX.replace_all(line, "");
            let code = OPEN_COMMENT_REGEX.replace(&code, "");
            let delta = count(&code, '{') - count(&code, '}');

            self.comment_prefix = COMMENT_PREFIX_REGEX
                .captures(line)
                .map(|caps| caps[1].to_owned())
                .unwrap_or_default();

            (delta, line.trim())
        };

        for token in COMMENT_TOKEN_REGEX.find_iter(line) {
            match token.as_str() {
                "*/" if self.in_comment => self.in_comment = false,
                "/*" => self.in_comment = true,
                _ => {},
            }
        }

        let next_depth = (self.depth + delta).max(0);

        let depth = if delta > 0 { self.depth } else { next_depth };

        self.depth = next_depth;

        (depth, line)
    }
}

/// Indent every line by its brace nesting depth.
///
/// Lines opening a block are indented at the depth outside the block, other
/// lines at the depth after their closing braces. Braces inside comments are
/// ignored, and continuation lines of a comment keep their indentation
/// relative to the line that opened it. Blank lines are left empty.
pub fn indent(css: impl AsRef<str>, indentation: &str) -> String {
    let mut indenter = Indenter::default();

    css.as_ref()
        .split('\n')
        .map(|line| {
            let (depth, line) = indenter.advance(line);
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", indentation.repeat(depth as usize), line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn count(text: &str, c: char) -> i32 {
    text.matches(c).count() as i32
}

//! Protect fragments of CSS code from structural rewrites.
//!
//! Comments, quoted strings and `url()` calls are moved into a side table and
//! replaced by sentinels of the form `!comment0!`, `!string1!` or `!url2!`.
//! The number in a sentinel is the index of its fragment in the table, so
//! restoration does not depend on the order in which later stages leave the
//! sentinels.
//!
//! A fragment extracted over sentinels of earlier fragments, such as a string
//! containing a comment, stores the earlier text in place of those sentinels.
//! The nested fragments are then never restored on their own.
//!
//! Source text that already looks like a sentinel is not escaped. It is
//! restored as the fragment with the same kind and index if one exists, and
//! left unchanged otherwise. Restored text is never scanned again, so a
//! fragment containing sentinel-shaped text is restored verbatim.

use log::warn;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Block comments, with the horizontal whitespace preceding them.
static COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]*/\*[\s\S]*?\*/").unwrap());

/// Quoted values of `content:` declarations and `attr=` selectors.
static STRING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(content\s*:|[\w-]+\s*=)\s*((['"]).*?(['"]))\s*"#).unwrap());

/// `url()`, `url-prefix()` and `regexp()` calls.
static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:url|url-prefix|regexp)\([^)]+\)").unwrap());

/// Any sentinel.
static SENTINEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!(comment|string|url)(\d+)!").unwrap());

/// Pattern matching a comment sentinel, for use inside other patterns.
pub const COMMENT_SENTINEL_PATTERN: &str = r"!comment\d+!";

/// Kind of a protected fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentKind {
    /// A block comment.
    Comment,
    /// A quoted string.
    String,
    /// A `url()`-like function call.
    Url,
}

impl FragmentKind {
    /// Return the name used in sentinels of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::String => "string",
            Self::Url => "url",
        }
    }
}

/// A protected fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    /// Kind of the fragment.
    pub kind: FragmentKind,

    /// Original text of the fragment.
    pub text: String,
}

/// Table of protected fragments, indexed by extraction order.
#[derive(Clone, Debug, Default)]
pub struct Placeholders {
    fragments: Vec<Fragment>,

    /// Indices of fragments stored inside a later fragment.
    nested: Vec<usize>,
}

impl Placeholders {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Protect comments, strings and URLs, in this order.
    pub fn protect(css: impl AsRef<str>) -> (String, Self) {
        let mut placeholders = Self::new();
        let css = placeholders.protect_comments(css);
        let css = placeholders.protect_strings(css);
        let css = placeholders.protect_urls(css);
        (css, placeholders)
    }

    /// Replace block comments with sentinels.
    pub fn protect_comments(&mut self, css: impl AsRef<str>) -> String {
        COMMENT_REGEX
            .replace_all(css.as_ref(), |caps: &Captures<'_>| {
                self.push(FragmentKind::Comment, &caps[0])
            })
            .into_owned()
    }

    /// Replace quoted strings following `content:` or `attr=` with sentinels.
    ///
    /// The `content:` or `attr=` prefix is kept in the text, only the quoted
    /// literal is stored. Whitespace around the literal is dropped.
    pub fn protect_strings(&mut self, css: impl AsRef<str>) -> String {
        STRING_REGEX
            .replace_all(css.as_ref(), |caps: &Captures<'_>| {
                let sentinel = self.push(FragmentKind::String, &caps[2]);
                format!("{}{}", &caps[1], sentinel)
            })
            .into_owned()
    }

    /// Replace `url()`, `url-prefix()` and `regexp()` calls with sentinels.
    pub fn protect_urls(&mut self, css: impl AsRef<str>) -> String {
        URL_REGEX
            .replace_all(css.as_ref(), |caps: &Captures<'_>| {
                self.push(FragmentKind::Url, &caps[0])
            })
            .into_owned()
    }

    /// Replace the sentinels of the given kind with their original text.
    ///
    /// Sentinels with an unknown index are left in place. Restored text is not
    /// scanned again.
    pub fn restore(&self, css: impl AsRef<str>, kind: FragmentKind) -> String {
        let mut restored = 0;

        let result = SENTINEL_REGEX
            .replace_all(css.as_ref(), |caps: &Captures<'_>| {
                if &caps[1] != kind.tag() {
                    return caps[0].to_owned();
                }

                match find_fragment(&self.fragments, caps) {
                    Some(index) => {
                        restored += 1;
                        self.fragments[index].text.clone()
                    },
                    None => {
                        warn!("Unknown placeholder {:?}", &caps[0]);
                        caps[0].to_owned()
                    },
                }
            })
            .into_owned();

        let expected = self
            .fragments
            .iter()
            .enumerate()
            .filter(|(index, fragment)| fragment.kind == kind && !self.nested.contains(index))
            .count();

        if restored < expected {
            warn!(
                "Restored {} of {} {} placeholders",
                restored,
                expected,
                kind.tag()
            );
        }

        result
    }

    /// Return the number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Check if no fragment has been protected.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Return an iterator over the fragments, in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter()
    }

    /// Store a fragment and return its sentinel.
    ///
    /// Sentinels of known fragments inside `text` are replaced by the text of
    /// those fragments.
    fn push(&mut self, kind: FragmentKind, text: &str) -> String {
        let Self { fragments, nested } = self;

        let text = SENTINEL_REGEX
            .replace_all(text, |caps: &Captures<'_>| {
                match find_fragment(fragments.as_slice(), caps) {
                    Some(index) => {
                        nested.push(index);
                        fragments[index].text.clone()
                    },
                    None => caps[0].to_owned(),
                }
            })
            .into_owned();

        let sentinel = format!("!{}{}!", kind.tag(), fragments.len());
        fragments.push(Fragment { kind, text });
        sentinel
    }
}

/// Return the index of the fragment designated by a matched sentinel.
fn find_fragment(fragments: &[Fragment], caps: &Captures<'_>) -> Option<usize> {
    caps[2]
        .parse::<usize>()
        .ok()
        .filter(|&index| {
            fragments
                .get(index)
                .is_some_and(|fragment| fragment.kind.tag() == &caps[1])
        })
}

//! Format and minify CSS code.
//!
//! Both operations are pipelines of textual rewrites. Comments, strings and
//! URLs are first replaced by sentinels (see [`placeholder`]) so that the
//! structural rewrites cannot alter them, then restored at the end.
//!
//! The code is never parsed into a syntax tree: malformed input produces a
//! best-effort output.

pub mod calc;
pub mod indent;
pub mod normalize;
pub mod placeholder;
pub mod rule;
pub mod selector;
pub mod variable;

use serde::Deserialize;

use self::placeholder::{FragmentKind, Placeholders};
use crate::util::pipeline::Pipeline;

/// Options for [`format_with`].
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// String inserted once per nesting level.
    pub indent: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_owned(),
        }
    }
}

/// Options for [`minify_with`].
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MinifyOptions {
    /// Replace `var(--name)` references with their value and remove the
    /// `:root` block.
    pub inline_variables: bool,

    /// Demote `calc()` nested inside another `calc()` to a parenthesis.
    pub flatten_calc: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            inline_variables: true,
            flatten_calc: true,
        }
    }
}

/// Format CSS code with default options.
pub fn format(css: impl AsRef<str>) -> String {
    format_with(css, &FormatOptions::default())
}

/// Format CSS code.
///
/// The output has one selector per line, one declaration per line and a
/// blank line after each block. Comments, strings and URLs are kept
/// verbatim.
pub fn format_with(css: impl AsRef<str>, options: &FormatOptions) -> String {
    let mut placeholders = Placeholders::new();

    let css = Pipeline::new(css.as_ref().to_owned())
        .stage("protect comments", |css| placeholders.protect_comments(css))
        .stage("protect strings", |css| placeholders.protect_strings(css))
        .stage("protect urls", |css| placeholders.protect_urls(css))
        .stage("normalize", normalize::normalize)
        .stage("break selectors", selector::break_selectors)
        .stage("space declarations", rule::space_declarations)
        .stage("expand rules", rule::expand_rules)
        .stage("separate blocks", rule::separate_blocks)
        .stage("attach comments", rule::attach_comments)
        .into_inner();

    // Comments are restored before indenting so that their content is
    // indented along with them.
    Pipeline::new(css)
        .stage("restore comments", |css| {
            placeholders.restore(css, FragmentKind::Comment)
        })
        .stage("indent", |css| indent::indent(css, &options.indent))
        .stage("restore strings", |css| {
            placeholders.restore(css, FragmentKind::String)
        })
        .stage("restore urls", |css| placeholders.restore(css, FragmentKind::Url))
        .into_inner()
        .trim()
        .to_owned()
}

/// Minify CSS code with default options.
pub fn minify(css: impl AsRef<str>) -> String {
    minify_with(css, &MinifyOptions::default())
}

/// Minify CSS code.
///
/// Comments are removed. Strings and URLs are kept verbatim, including any
/// comment-like text they contain.
pub fn minify_with(css: impl AsRef<str>, options: &MinifyOptions) -> String {
    let mut placeholders = Placeholders::new();

    let css = Pipeline::new(css.as_ref().to_owned())
        .stage("protect comments", |css| placeholders.protect_comments(css))
        .stage("protect strings", |css| placeholders.protect_strings(css))
        .stage("protect urls", |css| placeholders.protect_urls(css))
        .stage("strip comments", normalize::strip_comments)
        .stage("normalize", normalize::normalize)
        .stage_if(
            options.inline_variables,
            "resolve variables",
            variable::resolve_variables,
        )
        .stage_if(options.flatten_calc, "flatten calc", calc::flatten_calc)
        .stage("compress", rule::compress)
        .into_inner();

    Pipeline::new(css)
        .stage("restore strings", |css| {
            placeholders.restore(css, FragmentKind::String)
        })
        .stage("restore urls", |css| placeholders.restore(css, FragmentKind::Url))
        .into_inner()
        .trim()
        .to_owned()
}

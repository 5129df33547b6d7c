//! Lay out rule blocks and declarations.
//!
//! These passes run after selectors have been broken and expect normalized
//! code, with comments protected as sentinels.

use once_cell::sync::Lazy;
use regex::Regex;

use super::placeholder::COMMENT_SENTINEL_PATTERN;

/// `property:value;` or `property:value}`.
static DECLARATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z-](?:\+_?)?):([^;{]+[;}])").unwrap());

static RULE_AFTER_DECLARATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r";\s*([^{};]+?)\{").unwrap());

static COMMENT_BEFORE_SEMICOLON_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\s*({COMMENT_SENTINEL_PATTERN})\s*;\s*")).unwrap()
});

static COMMENT_AFTER_DECLARATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(:[^:;]+;)\s*({COMMENT_SENTINEL_PATTERN})\s*")).unwrap()
});

static BEFORE_CLOSE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\}").unwrap());

static AFTER_CLOSE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\}\s*").unwrap());

static COMMENT_BEFORE_AT_RULE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\s*({COMMENT_SENTINEL_PATTERN})\s*@")).unwrap()
});

static COMMENT_BEFORE_RULE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\s*({COMMENT_SENTINEL_PATTERN})\s*([^/{{}};]+?)\{{")).unwrap()
});

static COMMENT_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\s*\n({COMMENT_SENTINEL_PATTERN})")).unwrap());

static COMMENT_AFTER_OPEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\{{\s*\n({COMMENT_SENTINEL_PATTERN})")).unwrap());

static COMMENT_INDENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"[ \t]*({COMMENT_SENTINEL_PATTERN})")).unwrap());

static IMPORTANT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+!important").unwrap());

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static IMPORT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"((?:@charset|@import)[^;]+;)\s*").unwrap());

/// Add a space after the colon of declarations.
///
/// Selectors such as `a:hover{` are left untouched.
pub fn space_declarations(css: impl AsRef<str>) -> String {
    DECLARATION_REGEX
        .replace_all(css.as_ref(), "$1: $2")
        .into_owned()
}

/// Insert line breaks around braces and after declarations.
pub fn expand_rules(css: impl AsRef<str>) -> String {
    let css = css.as_ref().replace('{', " {\n").replace(';', ";\n");
    let css = RULE_AFTER_DECLARATION_REGEX.replace_all(&css, ";\n\n${1}{");
    let css = COMMENT_BEFORE_SEMICOLON_REGEX.replace_all(&css, " $1 ;\n");
    let css = COMMENT_AFTER_DECLARATION_REGEX.replace_all(&css, "$1 $2\n");
    let css = BEFORE_CLOSE_REGEX.replace_all(&css, "\n}");
    let css = AFTER_CLOSE_REGEX.replace_all(&css, "}\n");
    css.into_owned()
}

/// Follow every closing brace with exactly one blank line.
pub fn separate_blocks(css: impl AsRef<str>) -> String {
    AFTER_CLOSE_REGEX
        .replace_all(css.as_ref(), "}\n\n")
        .into_owned()
}

/// Put comments preceding a rule or an at-rule on their own line, after a
/// blank line. A comment opening a block follows the brace directly.
///
/// The horizontal whitespace preceding a comment is dropped since the
/// protected comment carries its original indentation.
pub fn attach_comments(css: impl AsRef<str>) -> String {
    let css = COMMENT_BEFORE_AT_RULE_REGEX.replace_all(css.as_ref(), "\n\n$1\n@");
    let css = COMMENT_BEFORE_RULE_REGEX.replace_all(&css, "\n\n$1\n$2{");
    let css = COMMENT_LINE_REGEX.replace_all(&css, "\n\n$1");
    let css = COMMENT_AFTER_OPEN_REGEX.replace_all(&css, "{\n$1");
    let css = COMMENT_INDENT_REGEX.replace_all(&css, "$1");
    css.into_owned()
}

/// Compact normalized code further for minified output.
///
/// `!important` is glued to its value, whitespace runs become a single
/// space, `@charset` and `@import` statements end their line and the last
/// semicolon of each block is dropped.
pub fn compress(css: impl AsRef<str>) -> String {
    let css = IMPORTANT_REGEX.replace_all(css.as_ref(), "!important");
    let css = WHITESPACE_REGEX.replace_all(&css, " ");
    let css = IMPORT_REGEX.replace_all(&css, "$1\n");
    css.replace(";}", "}")
}

//! Inline custom properties.

use once_cell::sync::Lazy;
use regex::Regex;

/// `--name: value;`, or `--name: value}` for the last declaration of a block.
static DEFINITION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--([\w-]+):\s*([^;{}]+?)\s*[;}]").unwrap());

static ROOT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r":root\s*\{[\s\S]*?\}").unwrap());

/// A custom property definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    /// Name, without the leading `--`.
    pub name: String,

    /// Literal value.
    pub value: String,
}

/// Collect custom property definitions, in source order.
pub fn variables(css: impl AsRef<str>) -> Vec<Variable> {
    DEFINITION_REGEX
        .captures_iter(css.as_ref())
        .map(|caps| Variable {
            name: caps[1].to_owned(),
            value: caps[2].to_owned(),
        })
        .collect()
}

/// Replace `var(--name)` references with their value and remove `:root`
/// blocks.
///
/// Definitions are collected from the whole code before any block is
/// removed, including `:root` blocks nested in at-rules.
///
/// Definitions are substituted from the last one to the first one, with the
/// values read before any substitution. A value referencing a variable
/// defined earlier is therefore resolved by the later substitution of that
/// variable. Circular references are left unresolved.
pub fn resolve_variables(css: impl AsRef<str>) -> String {
    let mut css = css.as_ref().to_owned();

    for Variable { name, value } in variables(&css).into_iter().rev() {
        css = css.replace(&format!("var(--{name})"), &value);
    }

    ROOT_REGEX.replace_all(&css, "").into_owned()
}

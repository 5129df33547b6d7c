//! Flatten nested `calc()` expressions.

const CALC: &str = "calc(";

/// Demote every `calc(` nested inside another `calc(` to a plain `(`.
///
/// For instance, `calc(100% - calc(2rem + 2px))` becomes
/// `calc(100% - (2rem + 2px))`. Closing parentheses are left untouched since
/// only the function name is removed.
pub fn flatten_calc(css: impl AsRef<str>) -> String {
    let css = css.as_ref();
    let mut result = String::with_capacity(css.len());
    // One entry per open parenthesis: whether it opens a `calc()`
    let mut stack: Vec<bool> = Vec::new();
    let mut rest = css;

    while let Some(c) = rest.chars().next() {
        if rest.starts_with(CALC) && is_boundary(&result) {
            if stack.iter().any(|&is_calc| is_calc) {
                result.push('(');
                stack.push(false);
            } else {
                result.push_str(CALC);
                stack.push(true);
            }
            rest = &rest[CALC.len()..];
            continue;
        }

        match c {
            '(' => stack.push(false),
            ')' => {
                stack.pop();
            },
            // Declarations never span a block boundary
            ';' | '{' | '}' => stack.clear(),
            _ => {},
        }

        result.push(c);
        rest = &rest[c.len_utf8()..];
    }

    result
}

/// Check that `calc` does not end a longer identifier, e.g. `-webkit-calc`.
fn is_boundary(preceding: &str) -> bool {
    !preceding
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::flatten_calc;

    #[test]
    fn nested() {
        const CASES: [(&str, &str); 6] = [
            ("calc(100% - calc(2rem + 2px))", "calc(100% - (2rem + 2px))"),
            ("calc(1px + calc(2px + calc(3px)))", "calc(1px + (2px + (3px)))"),
            ("calc((1px + 2px) * calc(3))", "calc((1px + 2px) * (3))"),
            ("a{width:calc(1px);height:calc(2px)}", "a{width:calc(1px);height:calc(2px)}"),
            ("min(calc(1px), calc(2px))", "min(calc(1px), calc(2px))"),
            ("calc(1px + -webkit-calc(2px))", "calc(1px + -webkit-calc(2px))"),
        ];

        for (input, expected) in CASES {
            assert_eq!(flatten_calc(input), expected, "{input:?}");
        }
    }

    #[test]
    fn unbalanced() {
        assert_eq!(flatten_calc("calc(1px))calc(2px"), "calc(1px))calc(2px");
        assert_eq!(flatten_calc("a{b:calc(1px}c{d:calc(2px)}"), "a{b:calc(1px}c{d:calc(2px)}");
    }
}

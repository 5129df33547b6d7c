//! Properties of the formatter and the minifier.

use stylefmt::{format, minify};

const STYLESHEETS: [&str; 8] = [
    "a, b, c { color: red; }",
    "@media screen { .a { color: red; } .b, .c:not(.d, .e) { margin: 0 auto; } }",
    "/* header */\n.a { color: red; /* note */ }\n\n.b::before { content: \"{;}\"; }",
    ".a { background: url( img/a.png ) no-repeat; font-family: Arial, sans-serif }",
    "@media (min-width: 1px), (max-width: 2px) { a { top: 0 } }",
    ":root { --x: 1px }\n.a { width: var(--x) }",
    "a::before { content: \"/* keep */\"; }",
    ".a { /* one */ color: red }",
];

fn count(text: &str, c: char) -> usize {
    text.matches(c).count()
}

#[test]
fn idempotence() {
    for input in STYLESHEETS {
        let once = format(input);
        let twice = format(&once);
        assert_eq!(once, twice, "{input:?}");
    }
}

#[test]
fn brace_balance() {
    for input in STYLESHEETS {
        assert_eq!(count(input, '{'), count(input, '}'), "{input:?}");

        let formatted = format(input);
        assert_eq!(count(&formatted, '{'), count(&formatted, '}'), "{input:?}");

        let minified = minify(input);
        assert_eq!(count(&minified, '{'), count(&minified, '}'), "{input:?}");
    }
}

#[test]
fn placeholder_round_trip() {
    const INPUT: &str = concat!(
        "/* keep  {this;} ,as is */\n",
        "a[title=\"x , y\"]::after {\n",
        "  content: \"a ;  b\";\n",
        "  background: url( 'c d.png' );\n",
        "}\n",
    );

    let result = format(INPUT);

    assert!(result.contains("/* keep  {this;} ,as is */"));
    assert!(result.contains("a[title=\"x , y\"]::after {"));
    assert!(result.contains("    content: \"a ;  b\";"));
    assert!(result.contains("    background: url( 'c d.png' );"));
}

#[test]
fn selector_breaking() {
    assert_eq!(
        format("a, b, c { color: red; }"),
        "a,\nb,\nc {\n    color: red;\n}"
    );
}

#[test]
fn condition_joining() {
    let result = format("@media (min-width: 1px), (max-width: 2px) { a { top: 0 } }");

    assert_eq!(
        result.lines().next(),
        Some("@media (min-width:1px), (max-width:2px) {")
    );
}

#[test]
fn variable_inlining() {
    assert_eq!(
        minify(":root{--x:1px;} .a{width:var(--x);}"),
        ".a{width:1px}"
    );
}

#[test]
fn variable_nesting() {
    const INPUT: &str = concat!(
        ":root {\n",
        "  --unit: 4px;\n",
        "  --gap: calc(var(--unit) * 2);\n",
        "}\n",
        ".a { padding: var(--gap); }\n",
    );

    assert_eq!(minify(INPUT), ".a{padding:calc(4px * 2)}");
}

#[test]
fn variable_last_declaration() {
    const CASES: [(&str, &str); 2] = [
        (":root{--x:1px}.a{width:var(--x)}", ".a{width:1px}"),
        (":root { --x: 1px }\n.a { width: var(--x); }", ".a{width:1px}"),
    ];

    for (input, expected) in CASES {
        assert_eq!(minify(input), expected, "{input:?}");
    }
}

#[test]
fn variable_in_at_rule() {
    assert_eq!(
        minify("@media (min-width: 1px) { :root { --a: 1px } }\nb { c: var(--a) }"),
        "@media (min-width:1px){}b{c:1px}"
    );
}

#[test]
fn comment_in_string() {
    const INPUT: &str = r#"a::before { content: "/* keep */"; }"#;

    assert_eq!(format(INPUT), "a::before {\n    content: \"/* keep */\";\n}");
    assert_eq!(minify(INPUT), r#"a::before{content:"/* keep */"}"#);
}

#[test]
fn sentinel_in_source() {
    // Sentinel-shaped text takes the value of the fragment with the same index
    assert_eq!(
        format("a{b:!url0!;c:url(x)}"),
        "a {\n    b: url(x);\n    c: url(x)\n}"
    );
}

#[test]
fn calc_flattening() {
    assert_eq!(
        minify(".a { width: calc(100% - calc(2rem + 2px)); }"),
        ".a{width:calc(100% - (2rem + 2px))}"
    );
}

#[test]
fn indentation_depth() {
    let result = format("@media{ .a{color:red;} }");
    let lines: Vec<_> = result.lines().collect();

    assert_eq!(lines[0], "@media {");
    assert_eq!(lines[1], "    .a {");
    assert_eq!(lines[2], "        color: red;");
}

#[test]
fn minify_strips_comments() {
    assert_eq!(minify("/* a */ .a { /* b */ color: red; }"), ".a{color:red}");
}

#[test]
fn malformed() {
    for input in ["}}}", "a {", "a { color: red", "/* unterminated", "a { b: \"c }", ""] {
        let _ = format(input);
        let _ = minify(input);
    }

    assert_eq!(format("}"), "}");
    assert_eq!(format(""), "");
}

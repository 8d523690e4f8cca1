/// Stylesheets in the shape a component-styling runtime emits: compact rules,
/// component-id comments, media queries and keyframes in one sheet.
use stylesnap_css::{declaration_count, parse, print, selector_texts, CssError, CssRule};

const RUNTIME_SHEET: &str = r#"
/* sc-component-id: Button__Wrapper-abc123 */
.Button__Wrapper-abc123 {}
.kBQlAf{padding:4px 8px;border-radius:3px}
.kBQlAf:hover{opacity:0}
@media print{.kBQlAf{padding:2px}}
/****************************/
/* sc-component-id: Title-def456 */
.hXmTqb{font-size:1.5em;text-align:center}
@keyframes fadeIn{0%{opacity:0}100%{opacity:1}}
"#;

fn kind(rule: &CssRule<'_>) -> &'static str {
    match rule {
        CssRule::Style(_) => "style",
        CssRule::Media(_) => "media",
        CssRule::Supports(_) => "supports",
        CssRule::Keyframes(_) => "keyframes",
        _ => "other",
    }
}

#[test]
fn test_runtime_sheet_structure() {
    let sheet = parse(RUNTIME_SHEET).expect("Failed to parse");

    let kinds: Vec<&str> = sheet.rules.0.iter().map(kind).collect();
    assert_eq!(
        kinds,
        vec!["style", "style", "style", "media", "style", "keyframes"]
    );

    let CssRule::Style(hover) = &sheet.rules.0[2] else {
        panic!("expected the hover rule");
    };
    assert_eq!(selector_texts(hover).expect("selectors"), vec![".kBQlAf:hover"]);
    assert_eq!(declaration_count(hover), 1);

    let CssRule::Style(placeholder) = &sheet.rules.0[0] else {
        panic!("expected the placeholder rule");
    };
    assert_eq!(declaration_count(placeholder), 0);
}

#[test]
fn test_runtime_sheet_prints_stably() {
    let sheet = parse(RUNTIME_SHEET).expect("Failed to parse");
    let printed = print(&sheet).expect("Failed to print");

    // Printing is a fixed point once the layout has been normalized
    let reparsed = parse(&printed).expect("Failed to reparse");
    assert_eq!(print(&reparsed).expect("Failed to reprint"), printed);

    assert!(printed.contains(".kBQlAf {\n  padding: 4px 8px;\n  border-radius: 3px;\n}"));
    assert!(printed.contains("@media print {\n  .kBQlAf {\n    padding: 2px;\n  }\n}"));
    assert!(!printed.contains("sc-component-id"));
}

#[test]
fn test_error_points_at_line() {
    let source = ".a{color:red}\n.b{color:red}\n..c{color:red}";
    let err = parse(source).unwrap_err();

    assert!(matches!(err, CssError::Syntax { line: 3, .. }));
    let offset = err.offset(source).expect("offset");
    assert!(source[offset..].starts_with("..c") || source[offset..].starts_with(".c"));
}

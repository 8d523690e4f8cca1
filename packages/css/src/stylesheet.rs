use crate::error::CssResult;
use lightningcss::printer::PrinterOptions;
use lightningcss::rules::style::StyleRule;
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use lightningcss::traits::ToCss;

/// Parse a stylesheet without error recovery
///
/// Comments are not part of the parsed rules.
pub fn parse(source: &str) -> CssResult<StyleSheet<'_>> {
    Ok(StyleSheet::parse(source, ParserOptions::default())?)
}

/// Print a stylesheet in the expanded layout: one declaration per line, two
/// space indentation and a blank line between sibling rules
pub fn print(sheet: &StyleSheet<'_>) -> CssResult<String> {
    let result = sheet.to_css(PrinterOptions::default())?;
    Ok(result.code.trim_end().to_string())
}

/// Serialized text of each selector in the rule's selector list
pub fn selector_texts(rule: &StyleRule<'_>) -> CssResult<Vec<String>> {
    rule.selectors
        .0
        .iter()
        .map(|selector| Ok(selector.to_css_string(PrinterOptions::default())?))
        .collect()
}

/// Number of declarations in the rule, `!important` ones included
pub fn declaration_count(rule: &StyleRule<'_>) -> usize {
    rule.declarations.declarations.len() + rule.declarations.important_declarations.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CssError;
    use lightningcss::rules::CssRule;

    fn first_style<'a, 'i>(sheet: &'a StyleSheet<'i>) -> &'a StyleRule<'i> {
        match &sheet.rules.0[0] {
            CssRule::Style(style) => style,
            other => panic!("expected a style rule, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_and_print() {
        let sheet = parse(".sc-a1{color:red}.sc-b2{padding:4px}").expect("parse");
        assert_eq!(
            print(&sheet).expect("print"),
            ".sc-a1 {\n  color: red;\n}\n\n.sc-b2 {\n  padding: 4px;\n}"
        );
    }

    #[test]
    fn test_print_empty_sheet() {
        let sheet = parse("").expect("parse");
        assert_eq!(print(&sheet).expect("print"), "");
    }

    #[test]
    fn test_comments_are_accepted() {
        for source in [
            "/***/.a{color:red}",
            "/* note **/.a{color:red}",
            "/****************/\n.a{color:red}\n/* trailing */",
            "/* sc-component-id: Button-abc */\n.a { /* inline */ color: red; }",
        ] {
            let sheet = parse(source).expect("parse");
            assert_eq!(sheet.rules.0.len(), 1, "source: {}", source);
            assert_eq!(print(&sheet).expect("print"), ".a {\n  color: red;\n}");
        }
    }

    #[test]
    fn test_selector_texts() {
        let sheet = parse(".a:hover, .b > .c,.d{margin:0}").expect("parse");
        let selectors = selector_texts(first_style(&sheet)).expect("selectors");
        assert_eq!(selectors, vec![".a:hover", ".b > .c", ".d"]);
    }

    #[test]
    fn test_declaration_count() {
        let sheet = parse(".a{color:red;margin:0 !important}").expect("parse");
        assert_eq!(declaration_count(first_style(&sheet)), 2);

        let sheet = parse(".a{}").expect("parse");
        assert_eq!(declaration_count(first_style(&sheet)), 0);

        let sheet = parse(".a{/* only a comment */}").expect("parse");
        assert_eq!(declaration_count(first_style(&sheet)), 0);
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        let err = parse(".a{color:red}\n..b{color:red}").unwrap_err();
        match err {
            CssError::Syntax { line, .. } => assert_eq!(line, 2),
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }
}

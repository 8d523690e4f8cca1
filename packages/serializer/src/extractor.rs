use stylesnap_css::{declaration_count, parse, print, selector_texts, CssResult, CssRule, StyleRule, StyleSheet};
use tracing::{debug, instrument};

/// Whether a standard rule applies to any of `class_names`
///
/// Matching is plain substring containment on the selector text, so `btn`
/// also matches `.btn-large`. A rule needs at least one declaration to be
/// kept; comments are dropped by the parser, so a rule holding nothing but a
/// comment counts as empty.
pub fn rule_references(rule: &StyleRule<'_>, class_names: &[String]) -> CssResult<bool> {
    if declaration_count(rule) == 0 || class_names.is_empty() {
        return Ok(false);
    }

    let selectors = selector_texts(rule)?;
    Ok(class_names.iter().any(|class_name| {
        selectors
            .iter()
            .any(|selector| selector.contains(class_name.as_str()))
    }))
}

/// Standard rules of a container that reference `class_names`
fn filter_container<'i>(rules: Vec<CssRule<'i>>, class_names: &[String]) -> CssResult<Vec<CssRule<'i>>> {
    let mut kept = Vec::new();
    for rule in rules {
        if let CssRule::Style(style) = rule {
            if rule_references(&style, class_names)? {
                kept.push(CssRule::Style(style));
            }
        }
    }
    Ok(kept)
}

/// Reduce a stylesheet to the rules referencing `class_names`
///
/// Surviving standard rules come first, followed by the media and supports
/// blocks that still hold at least one rule. Everything else is dropped.
pub fn filter_stylesheet(sheet: &mut StyleSheet<'_>, class_names: &[String]) -> CssResult<()> {
    let mut rules = Vec::new();
    let mut containers = Vec::new();

    for rule in std::mem::take(&mut sheet.rules.0) {
        match rule {
            CssRule::Style(style) => {
                if rule_references(&style, class_names)? {
                    rules.push(CssRule::Style(style));
                }
            }
            CssRule::Media(mut media) => {
                media.rules.0 = filter_container(std::mem::take(&mut media.rules.0), class_names)?;
                if !media.rules.0.is_empty() {
                    containers.push(CssRule::Media(media));
                }
            }
            CssRule::Supports(mut supports) => {
                supports.rules.0 = filter_container(std::mem::take(&mut supports.rules.0), class_names)?;
                if !supports.rules.0.is_empty() {
                    containers.push(CssRule::Supports(supports));
                }
            }
            _ => {}
        }
    }

    rules.extend(containers);
    sheet.rules.0 = rules;
    Ok(())
}

/// Parse `stylesheet`, keep the rules for `class_names` and print them back
#[instrument(skip_all, fields(stylesheet_len = stylesheet.len(), class_names = class_names.len()))]
pub fn extract_style(stylesheet: &str, class_names: &[String]) -> CssResult<String> {
    let mut sheet = parse(stylesheet)?;
    let total = sheet.rules.0.len();

    filter_stylesheet(&mut sheet, class_names)?;
    debug!(total_rules = total, kept_rules = sheet.rules.0.len(), "Filtered stylesheet");

    print(&sheet)
}

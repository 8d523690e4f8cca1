use crate::alias::AliasMap;
use crate::config::SerializerConfig;
use crate::error::SerializerResult;
use regex::Regex;

/// Replace every working class name that survived extraction with its alias
///
/// Names are replaced in working-set order, as plain global substring
/// replacement over the whole text (CSS and markup alike). A name that is a
/// prefix of some other token therefore rewrites that token too. Names whose
/// alias cannot be resolved stay as they are.
pub fn substitute_aliases(text: &str, class_names: &[String], style: &str, aliases: &AliasMap) -> String {
    class_names
        .iter()
        .filter(|name| style.contains(name.as_str()))
        .fold(text.to_string(), |acc, name| match aliases.alias_for(name) {
            Some(alias) => acc.replace(name.as_str(), &alias),
            None => acc,
        })
}

fn hash_pattern(attributes: &[String], hash: &str) -> SerializerResult<Regex> {
    let attribute_group = attributes
        .iter()
        .map(|attribute| regex::escape(attribute))
        .collect::<Vec<_>>()
        .join("|");

    Ok(Regex::new(&format!(
        r#"((?:{})="[^"]*?){}\s?([^"]*")"#,
        attribute_group,
        regex::escape(hash)
    ))?)
}

/// Remove registry hashes (plus one trailing whitespace character) from the
/// values of the given class attributes
///
/// Each hash is removed at most once per attribute value.
pub fn strip_hashes(text: &str, hashes: &[String], attributes: &[String]) -> SerializerResult<String> {
    if attributes.is_empty() {
        return Ok(text.to_string());
    }

    let mut result = text.to_string();
    for hash in hashes {
        if hash.is_empty() || !result.contains(hash.as_str()) {
            continue;
        }
        let pattern = hash_pattern(attributes, hash)?;
        result = pattern.replace_all(&result, "${1}${2}").into_owned();
    }

    Ok(result)
}

/// Alias substitution followed by hash stripping
pub fn rewrite(
    text: &str,
    class_names: &[String],
    style: &str,
    hashes: &[String],
    aliases: &AliasMap,
    config: &SerializerConfig,
) -> SerializerResult<String> {
    let substituted = substitute_aliases(text, class_names, style, aliases);

    if !config.strip_unreferenced_hashes {
        return Ok(substituted);
    }

    strip_hashes(&substituted, hashes, &config.class_attributes)
}

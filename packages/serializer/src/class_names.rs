use crate::node::TreeNode;
use std::collections::HashSet;

/// Collect distinct class tokens from `nodes`, in first-seen order
///
/// Each node contributes the first of `attributes` that holds a non-empty
/// value. The value is split on whitespace runs.
pub fn collect_class_names(nodes: &[&TreeNode], attributes: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut class_names = Vec::new();

    for node in nodes {
        let Some(value) = attributes
            .iter()
            .filter_map(|attribute| node.prop(attribute))
            .find(|value| !value.is_empty())
        else {
            continue;
        };

        for token in value.split_whitespace() {
            if seen.insert(token) {
                class_names.push(token.to_string());
            }
        }
    }

    class_names
}

/// Keep only class names the styling runtime generated, preserving order
pub fn filter_hashed(class_names: Vec<String>, hashes: &[String]) -> Vec<String> {
    let known: HashSet<&str> = hashes.iter().map(String::as_str).collect();
    class_names
        .into_iter()
        .filter(|name| known.contains(name.as_str()))
        .collect()
}

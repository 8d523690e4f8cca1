use crate::alias::AliasMap;
use crate::class_names::{collect_class_names, filter_hashed};
use crate::config::SerializerConfig;
use crate::error::SerializerResult;
use crate::extractor::extract_style;
use crate::markup::MarkupPrinter;
use crate::node::TreeNode;
use crate::registry::StyleRegistry;
use crate::rewriter::rewrite;
use crate::visitor::{flatten, mark_processed};
use tracing::{debug, info, instrument};

/// Snapshot serializer that prefixes markup with the CSS it uses
///
/// Generated class names are replaced with readable aliases in both the CSS
/// and the markup, and generated names without surviving rules are removed
/// from class attributes.
pub struct StyleSheetSerializer<R> {
    registry: R,
    config: SerializerConfig,
}

impl<R: StyleRegistry> StyleSheetSerializer<R> {
    pub fn new(registry: R) -> Self {
        Self::with_config(registry, SerializerConfig::default())
    }

    pub fn with_config(registry: R, config: SerializerConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    /// Whether `node` should be handled by this serializer: a rendered node
    /// that has not been printed by it yet
    pub fn test(&self, node: &TreeNode) -> bool {
        node.is_serializable() && !node.is_processed()
    }

    /// Format `node` using `print` for the markup
    ///
    /// Every node of the tree is marked processed before `print` runs, so a
    /// base printer that dispatches back through [`Self::test`] will not
    /// reprocess children.
    #[instrument(skip_all, fields(node_type = %node.node_type))]
    pub fn print<F>(&self, node: &mut TreeNode, print: F) -> SerializerResult<String>
    where
        F: FnOnce(&TreeNode) -> String,
    {
        let marked = mark_processed(node);
        let node = &*node;
        let nodes = flatten(node);

        let hashes = self.registry.hashes();
        let class_names = collect_class_names(&nodes, &self.config.class_attributes);
        let collected = class_names.len();
        let class_names = filter_hashed(class_names, &hashes);
        debug!(
            nodes = nodes.len(),
            marked,
            collected,
            working = class_names.len(),
            hashes = hashes.len(),
            "Collected class names"
        );

        let style = extract_style(&self.registry.stylesheet(), &class_names)?;
        let code = print(node);

        let separator = if style.is_empty() { "" } else { "\n\n" };
        let result = format!("{}{}{}", style, separator, code);

        let aliases = AliasMap::build(&class_names);
        debug!(stems = aliases.groups().len(), "Built alias map");

        let output = rewrite(&result, &class_names, &style, &hashes, &aliases, &self.config)?;
        info!(style_len = style.len(), output_len = output.len(), "Serialized snapshot");
        Ok(output)
    }

    /// Format `node` with the built-in [`MarkupPrinter`]
    pub fn print_markup(&self, node: &mut TreeNode) -> SerializerResult<String> {
        let printer = MarkupPrinter::new();
        self.print(node, |node| printer.print(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SerializerError;
    use crate::registry::InMemoryRegistry;

    fn registry() -> InMemoryRegistry {
        InMemoryRegistry::new()
            .with_hashes(["sc-a1", "sc-b2"])
            .with_css(".sc-a1{color:red}.sc-b2{color:blue}")
    }

    #[test]
    fn test_accepts_fresh_nodes_only() {
        let serializer = StyleSheetSerializer::new(registry());
        let mut node = TreeNode::element("div").with_child(TreeNode::element("span"));
        assert!(serializer.test(&node));

        serializer.print_markup(&mut node).expect("print");
        assert!(!serializer.test(&node));
        assert!(node.child_nodes().all(|child| !serializer.test(child)));
    }

    #[test]
    fn test_rejects_other_values() {
        use crate::node::NodeKind;
        let serializer = StyleSheetSerializer::new(registry());
        let node = TreeNode::element("div").with_kind(NodeKind::Unknown);
        assert!(!serializer.test(&node));
    }

    #[test]
    fn test_base_printer_sees_marked_tree() {
        let serializer = StyleSheetSerializer::new(registry());
        let mut node = TreeNode::element("div").with_child(TreeNode::element("span"));
        let output = serializer
            .print(&mut node, |node| {
                assert!(node.is_processed());
                assert!(node.child_nodes().all(TreeNode::is_processed));
                "markup".to_string()
            })
            .expect("print");
        assert_eq!(output, "markup");
    }

    #[test]
    fn test_round_trip() {
        let serializer = StyleSheetSerializer::new(registry());
        let mut node = TreeNode::element("div").with_class_name("sc-a1");
        let output = serializer.print_markup(&mut node).expect("print");
        assert_eq!(output, ".sc {\n  color: red;\n}\n\n<div\n  className=\"sc\"\n/>");
    }

    #[test]
    fn test_no_class_names() {
        let serializer = StyleSheetSerializer::new(registry());
        let mut node = TreeNode::element("div").with_text("plain");
        let output = serializer.print_markup(&mut node).expect("print");
        assert_eq!(output, "<div>\n  plain\n</div>");
    }

    #[test]
    fn test_parse_failure_aborts() {
        let registry = InMemoryRegistry::new()
            .with_hash("sc-a1")
            .with_css(".sc-a1{color:red}\n..sc-b2{color:blue}");
        let serializer = StyleSheetSerializer::new(registry);
        let mut node = TreeNode::element("div").with_class_name("sc-a1");
        let err = serializer.print_markup(&mut node).unwrap_err();
        assert!(matches!(err, SerializerError::Stylesheet(_)));
    }
}

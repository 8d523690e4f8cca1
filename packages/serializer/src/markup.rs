use crate::node::{Child, TreeNode};
use serde_json::Value;

/// Prints a rendered tree as indented markup, the way test renderers format
/// snapshot values
///
/// Props are printed one per line in key order. String props print quoted,
/// any other value prints as compact JSON in braces. Elements without
/// children self-close.
pub struct MarkupPrinter {
    indent_string: String,
}

impl MarkupPrinter {
    pub fn new() -> Self {
        Self {
            indent_string: "  ".to_string(),
        }
    }

    pub fn with_indent(indent: &str) -> Self {
        Self {
            indent_string: indent.to_string(),
        }
    }

    pub fn print(&self, node: &TreeNode) -> String {
        let mut output = String::new();
        self.print_element(node, 0, &mut output);
        output
    }

    fn print_element(&self, node: &TreeNode, depth: usize, output: &mut String) {
        let indent = self.indent(depth);
        let has_children = !node.children().is_empty();

        output.push('<');
        output.push_str(&node.node_type);

        if node.props.is_empty() {
            output.push_str(if has_children { ">" } else { " />" });
        } else {
            let prop_indent = self.indent(depth + 1);
            for (key, value) in &node.props {
                output.push('\n');
                output.push_str(&prop_indent);
                output.push_str(key);
                output.push('=');
                output.push_str(&format_prop(value));
            }
            output.push('\n');
            output.push_str(&indent);
            output.push_str(if has_children { ">" } else { "/>" });
        }

        if !has_children {
            return;
        }

        let child_indent = self.indent(depth + 1);
        for child in node.children() {
            output.push('\n');
            output.push_str(&child_indent);
            match child {
                Child::Node(child) => self.print_element(child, depth + 1, output),
                Child::Text(text) => output.push_str(&escape_text(text)),
            }
        }

        output.push('\n');
        output.push_str(&indent);
        output.push_str("</");
        output.push_str(&node.node_type);
        output.push('>');
    }

    fn indent(&self, depth: usize) -> String {
        self.indent_string.repeat(depth)
    }
}

impl Default for MarkupPrinter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_prop(value: &Value) -> String {
    match value {
        Value::String(text) => format!("\"{}\"", escape_string(text)),
        other => format!("{{{}}}", other),
    }
}

fn escape_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn escape_text(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Discriminant of a rendered tree value
///
/// On the wire this is the `$$typeof` field of a test-renderer JSON node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NodeKind {
    #[default]
    #[serde(rename = "react.test.json")]
    TestJson,

    #[serde(other)]
    Unknown,
}

/// Child of a rendered node: either another node or raw text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    Node(TreeNode),
    Text(String),
}

/// Rendered component tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(rename = "$$typeof", default)]
    pub kind: NodeKind,

    #[serde(rename = "type")]
    pub node_type: String,

    /// Prop values as the renderer emitted them. Only string values can carry
    /// class names.
    #[serde(default)]
    pub props: BTreeMap<String, Value>,

    #[serde(default)]
    pub children: Option<Vec<Child>>,

    /// Set once the stylesheet serializer has handled this node
    #[serde(skip)]
    pub processed: bool,
}

impl TreeNode {
    pub fn element(node_type: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::TestJson,
            node_type: node_type.into(),
            props: BTreeMap::new(),
            children: None,
            processed: false,
        }
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_prop(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_prop_value(key, Value::String(value.into()))
    }

    pub fn with_prop_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    pub fn with_class_name(self, value: impl Into<String>) -> Self {
        self.with_prop("className", value)
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children
            .get_or_insert_with(Vec::new)
            .push(Child::Node(child));
        self
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children
            .get_or_insert_with(Vec::new)
            .extend(children.into_iter().map(Child::Node));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children
            .get_or_insert_with(Vec::new)
            .push(Child::Text(text.into()));
        self
    }

    /// String value of a prop; `None` when missing or not a string
    pub fn prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(Value::as_str)
    }

    pub fn children(&self) -> &[Child] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Element children only, text is skipped
    pub fn child_nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.children().iter().filter_map(|child| match child {
            Child::Node(node) => Some(node),
            Child::Text(_) => None,
        })
    }

    pub fn is_serializable(&self) -> bool {
        self.kind == NodeKind::TestJson
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }
}

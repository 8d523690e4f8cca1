pub mod alias;
pub mod class_names;
pub mod config;
pub mod error;
pub mod extractor;
pub mod markup;
pub mod node;
pub mod registry;
pub mod rewriter;
pub mod serializer;
pub mod visitor;

pub use alias::AliasMap;
pub use class_names::{collect_class_names, filter_hashed};
pub use config::SerializerConfig;
pub use error::{SerializerError, SerializerResult};
pub use extractor::{extract_style, filter_stylesheet};
pub use markup::MarkupPrinter;
pub use node::{Child, NodeKind, TreeNode};
pub use registry::{InMemoryRegistry, StyleRegistry};
pub use rewriter::{rewrite, strip_hashes, substitute_aliases};
pub use serializer::StyleSheetSerializer;
pub use visitor::{flatten, mark_processed, NodeVisitor, NodeVisitorMut};

//! Stylesheet handling for stylesnap, built on lightningcss
//!
//! Parsing, printing and the small amount of rule inspection the snapshot
//! serializer needs. Rule types are re-exported so callers can walk a parsed
//! sheet without depending on lightningcss directly.

pub mod error;
pub mod stylesheet;

#[cfg(feature = "pretty-errors")]
pub use error::format_error;
pub use error::{CssError, CssResult};
pub use lightningcss::rules::{style::StyleRule, CssRule, CssRuleList};
pub use lightningcss::stylesheet::StyleSheet;
pub use stylesheet::{declaration_count, parse, print, selector_texts};

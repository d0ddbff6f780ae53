// src/graph/links.rs
//! Hyperlink extraction from raw HTML text.
//!
//! This is a fixed pattern match, not an HTML parser: an opening `<a`, some
//! whitespace, any attributes that do not close the tag, then `href="TARGET"`.
//! Matching is case-sensitive and targets are taken verbatim.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

pub const LINK_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINK_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

/// Returns the distinct link targets found in `content`.
#[must_use]
pub fn extract(content: &str) -> BTreeSet<String> {
    LINK_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

//! Parser for the resource-gathering pipeline's block format
//!
//! The upstream search agent hands resources over as text blocks:
//!
//! ```text
//! **RESOURCE 1**
//! - Title: The Rust Book
//! - URL: https://doc.rust-lang.org/book/
//! - Type: Documentation
//! - Source: rust-lang.org
//! - Description: The canonical introduction.
//! ```
//!
//! Parsing is tolerant. Field lines match their prefixes case-insensitively,
//! a block without both a title and a URL is skipped, and an unrecognized
//! type keeps the default kind. The block marker `- Title:` is matched
//! exactly; prose that merely mentions titles does not turn into resources.

use waymark_domain::{Resource, ResourceKind};

/// Split agent text into resources
///
/// Returns an empty vec when nothing parseable is found; the caller decides
/// the fallback.
pub fn parse_resource_blocks(text: &str) -> Vec<Resource> {
    let mut resources = Vec::new();

    for block in text.split("**RESOURCE") {
        if block.trim().is_empty() || !block.contains("- Title:") {
            continue;
        }
        if let Some(resource) = parse_single_block(block) {
            resources.push(resource);
        }
    }

    resources
}

fn parse_single_block(block: &str) -> Option<Resource> {
    let mut title = String::new();
    let mut url = String::new();
    let mut kind = ResourceKind::default();
    let mut source = String::new();
    let mut description = String::new();

    for line in block.lines() {
        let trimmed = line.trim();

        if let Some(rest) = strip_field(trimmed, "- Title:") {
            title = rest.to_string();
        } else if let Some(rest) = strip_field(trimmed, "- URL:") {
            url = rest.to_string();
        } else if let Some(rest) = strip_field(trimmed, "- Type:") {
            if let Some(parsed) = ResourceKind::parse(rest) {
                kind = parsed;
            }
        } else if let Some(rest) = strip_field(trimmed, "- Source:") {
            source = rest.to_string();
        } else if let Some(rest) = strip_field(trimmed, "- Description:") {
            description = rest.to_string();
        }
    }

    if title.trim().is_empty() || url.trim().is_empty() {
        return None;
    }
    Some(Resource::new(title, url, kind, source, description))
}

/// Case-insensitive prefix strip, trimming the remainder
fn strip_field<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    match line.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(line[prefix.len()..].trim()),
        _ => None,
    }
}

//! Embedded musing documents.
//!
//! Each entry lives as a markdown file with a frontmatter block; the
//! slug is the file's storage key. Compiled in with `include_str!` so
//! the page ships as a single artifact.

use crate::model::musing::{MusingEntry, MusingError};

const DOCS: &[(&str, &str)] = &[
    (
        "evaluating-agents",
        include_str!("musings/evaluating-agents.md"),
    ),
    (
        "shipping-side-projects",
        include_str!("musings/shipping-side-projects.md"),
    ),
    (
        "reading-children-of-time",
        include_str!("musings/reading-children-of-time.md"),
    ),
];

/// Parse every embedded document, newest first.
///
/// Content is static, so an error here is a build-content mistake; the
/// loader reports it instead of shipping a half-parsed collection.
/// Duplicate slugs are rejected.
pub fn all() -> Result<Vec<MusingEntry>, MusingError> {
    let mut entries = Vec::with_capacity(DOCS.len());
    for &(slug, raw) in DOCS {
        if entries.iter().any(|e: &MusingEntry| e.slug == slug) {
            return Err(MusingError::DuplicateSlug(slug.to_string()));
        }
        entries.push(MusingEntry::from_document(slug, raw)?);
    }
    entries.sort_by(|a: &MusingEntry, b: &MusingEntry| b.date.cmp(&a.date));
    log::debug!("loaded {} musings", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_documents_parse() {
        let entries = all().unwrap();
        assert_eq!(entries.len(), DOCS.len());
        for entry in &entries {
            assert!(!entry.title.is_empty(), "{} has no title", entry.slug);
            assert!(!entry.body.is_empty(), "{} has no body", entry.slug);
        }
    }

    #[test]
    fn sorted_newest_first() {
        let entries = all().unwrap();
        for pair in entries.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
        assert_eq!(entries[0].slug, "evaluating-agents");
    }
}

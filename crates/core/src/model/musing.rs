use chrono::NaiveDate;
use thiserror::Error;

use crate::parsers::parse_frontmatter;

#[derive(Debug, Error)]
pub enum MusingError {
    #[error("musing {slug:?}: unparseable date {value:?}")]
    InvalidDate { slug: String, value: String },
    #[error("duplicate musing slug {0:?}")]
    DuplicateSlug(String),
}

/// A single parsed musing: frontmatter plus markdown body.
///
/// Entries are built once at startup from embedded documents and are
/// immutable afterwards. The slug comes from the document's storage key
/// and is unique across the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct MusingEntry {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub description: String,
    pub body: String,
}

impl MusingEntry {
    /// Parse a raw document. Missing metadata degrades to empty fields;
    /// only an unparseable date is an error, since the date drives
    /// ordering and display.
    pub fn from_document(slug: impl Into<String>, raw: &str) -> Result<Self, MusingError> {
        let slug = slug.into();
        let (meta, body) = parse_frontmatter(raw);
        let date = NaiveDate::parse_from_str(&meta.date, "%Y-%m-%d").map_err(|_| {
            MusingError::InvalidDate {
                slug: slug.clone(),
                value: meta.date.clone(),
            }
        })?;
        Ok(Self {
            slug,
            title: meta.title,
            date,
            tags: meta.tags,
            description: meta.description,
            body,
        })
    }

    /// Long-form display date, e.g. "January 5, 2025".
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_document() {
        let raw = "---\ntitle: On evals\ndate: 2025-03-09\ntags: [ai, evals]\ndescription: Notes\n---\n# Heading\n\nBody.";
        let entry = MusingEntry::from_document("on-evals", raw).unwrap();
        assert_eq!(entry.slug, "on-evals");
        assert_eq!(entry.title, "On evals");
        assert_eq!(entry.display_date(), "March 9, 2025");
        assert_eq!(entry.tags, vec!["ai", "evals"]);
        assert!(entry.body.starts_with("# Heading"));
    }

    #[test]
    fn bad_date_is_an_error() {
        let raw = "---\ntitle: T\ndate: sometime in spring\n---\nBody";
        let err = MusingEntry::from_document("t", raw).unwrap_err();
        assert!(matches!(err, MusingError::InvalidDate { .. }));
    }
}

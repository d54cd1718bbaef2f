/// Metadata block extracted from the head of a content document.
///
/// Every field degrades to empty rather than erroring: a missing key is
/// an empty string, a missing `tags` line an empty list. Validation
/// (date parsing, slug uniqueness) happens at the musing layer, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    pub description: String,
}

const DELIMITER: &str = "---";

/// Split a raw content document into frontmatter and body.
///
/// The document is split on the `---` delimiter: the segment before the
/// first delimiter is discarded (expected empty), the segment between
/// the first and second is the metadata block, and everything after the
/// second is rejoined — further literal `---` occurrences included — and
/// trimmed as the body.
///
/// Degenerate inputs: with a single delimiter the metadata block is
/// empty and the body is everything after the delimiter; with no
/// delimiter at all the whole (trimmed) input is the body.
pub fn parse_frontmatter(raw: &str) -> (Frontmatter, String) {
    let parts: Vec<&str> = raw.split(DELIMITER).collect();
    match parts.len() {
        1 => (Frontmatter::default(), parts[0].trim().to_string()),
        2 => (Frontmatter::default(), parts[1].trim().to_string()),
        _ => {
            let block = parts[1];
            let body = parts[2..].join(DELIMITER).trim().to_string();
            (parse_block(block), body)
        }
    }
}

fn parse_block(block: &str) -> Frontmatter {
    Frontmatter {
        title: value_of(block, "title"),
        date: value_of(block, "date"),
        tags: parse_tags(&value_of(block, "tags")),
        description: value_of(block, "description"),
    }
}

/// The remainder of the first line starting with `key:`, trimmed.
/// Missing key yields an empty string.
fn value_of(block: &str, key: &str) -> String {
    block
        .lines()
        .map(str::trim_start)
        .find_map(|line| line.strip_prefix(key)?.strip_prefix(':'))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_default()
}

/// `[a, b, c]` (brackets optional) into an ordered list; empty elements
/// are dropped.
fn parse_tags(value: &str) -> Vec<String> {
    let inner = value.strip_prefix('[').unwrap_or(value);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    inner
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_complete_document() {
        let raw = "---\ntitle: Foo\ndate: 2024-01-01\ntags: [a, b]\n---\nBody text";
        let (meta, body) = parse_frontmatter(raw);
        assert_eq!(meta.title, "Foo");
        assert_eq!(meta.date, "2024-01-01");
        assert_eq!(meta.tags, vec!["a", "b"]);
        assert_eq!(body, "Body text");
    }

    #[test]
    fn missing_key_yields_empty_not_error() {
        let raw = "---\ntitle: No tags here\ndate: 2024-06-01\n---\nBody";
        let (meta, _) = parse_frontmatter(raw);
        assert_eq!(meta.tags, Vec::<String>::new());
        assert_eq!(meta.description, "");
    }

    #[test]
    fn body_keeps_later_delimiters() {
        let raw = "---\ntitle: T\n---\nBefore\n---\nAfter";
        let (_, body) = parse_frontmatter(raw);
        assert_eq!(body, "Before\n---\nAfter");
    }

    #[test]
    fn no_delimiter_means_whole_input_is_body() {
        let (meta, body) = parse_frontmatter("Just prose, no metadata.");
        assert_eq!(meta, Frontmatter::default());
        assert_eq!(body, "Just prose, no metadata.");
    }

    #[test]
    fn single_delimiter_means_empty_metadata() {
        let (meta, body) = parse_frontmatter("---\ntitle: Orphan\nMore text");
        assert_eq!(meta.title, "");
        assert_eq!(body, "title: Orphan\nMore text");
    }

    #[test]
    fn tags_without_brackets_still_split() {
        let raw = "---\ntags: rust, wasm ,  , egui\n---\n";
        let (meta, _) = parse_frontmatter(raw);
        assert_eq!(meta.tags, vec!["rust", "wasm", "egui"]);
    }

    #[test]
    fn key_match_requires_line_start() {
        // "subtitle:" must not satisfy a lookup for "title".
        let raw = "---\nsubtitle: wrong\ntitle: right\n---\n";
        let (meta, _) = parse_frontmatter(raw);
        assert_eq!(meta.title, "right");
    }
}

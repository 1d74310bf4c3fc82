use serde::Deserialize;

use super::DeckMeta;

#[derive(Debug, Default, Deserialize)]
struct RawMeta {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    footer: Option<String>,
}

/// Extract YAML frontmatter delimited by `---` lines at the very top of the
/// document. Returns the parsed meta and the remaining body. Documents
/// without frontmatter (or with frontmatter that fails to parse) get default
/// meta and the full content as body.
pub fn extract(content: &str) -> (DeckMeta, String) {
    let normalized = content.replace("\r\n", "\n");
    let trimmed = normalized.trim_start_matches('\n');

    let Some(rest) = trimmed.strip_prefix("---\n") else {
        return (DeckMeta::default(), normalized);
    };

    let Some(end) = rest.find("\n---") else {
        return (DeckMeta::default(), normalized);
    };

    let block = &rest[..end];
    let body = rest[end + 4..].trim_start_matches('\n').to_string();

    let raw: RawMeta = serde_yaml::from_str(block).unwrap_or_default();
    let meta = DeckMeta {
        title: raw.title,
        author: raw.author,
        footer: raw.footer,
    };

    (meta, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_known_keys() {
        let content = "---\ntitle: Deck\nauthor: Ada\nfooter: footer text\n---\n\nbody";
        let (meta, body) = extract(content);
        assert_eq!(meta.title.as_deref(), Some("Deck"));
        assert_eq!(meta.author.as_deref(), Some("Ada"));
        assert_eq!(meta.footer.as_deref(), Some("footer text"));
        assert_eq!(body, "body");
    }

    #[test]
    fn no_frontmatter_returns_full_body() {
        let (meta, body) = extract("# Heading\n\ntext");
        assert!(meta.title.is_none());
        assert_eq!(body, "# Heading\n\ntext");
    }

    #[test]
    fn unterminated_frontmatter_is_body() {
        let content = "---\ntitle: Half\n\nNo closing fence";
        let (meta, body) = extract(content);
        assert!(meta.title.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let content = "---\ntitle: Deck\ntheme: dark\n---\nbody";
        let (meta, _) = extract(content);
        assert_eq!(meta.title.as_deref(), Some("Deck"));
    }

    #[test]
    fn dash_rule_later_in_body_is_not_frontmatter() {
        let content = "Intro text\n\n---\n\nNext part";
        let (meta, body) = extract(content);
        assert!(meta.title.is_none());
        assert_eq!(body, content);
    }
}

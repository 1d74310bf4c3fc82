pub mod frontmatter;
pub mod splitter;

use std::path::Path;

use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Deck {
    pub meta: DeckMeta,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Default)]
pub struct DeckMeta {
    pub title: Option<String>,
    pub author: Option<String>,
    pub footer: Option<String>,
}

/// One content unit of the deck: an optional `# ` title plus body text.
#[derive(Debug, Clone)]
pub struct Slide {
    pub title: Option<String>,
    pub body: String,
}

pub fn parse(content: &str) -> Deck {
    let (meta, body) = frontmatter::extract(content);
    let slides = splitter::split(&body)
        .into_iter()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| parse_slide(&raw))
        .collect();
    Deck { meta, slides }
}

pub fn load(path: &Path) -> Result<Deck> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse(&content))
}

/// The first `# ` line becomes the slide title; everything else is body.
fn parse_slide(raw: &str) -> Slide {
    let mut title = None;
    let mut body_lines: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if title.is_none() && line.starts_with("# ") {
            title = Some(line[2..].trim().to_string());
        } else {
            body_lines.push(line);
        }
    }

    Slide {
        title,
        body: body_lines.join("\n").trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_title_comes_from_first_heading() {
        let deck = parse("# Welcome\n\nHello there");
        assert_eq!(deck.slides.len(), 1);
        assert_eq!(deck.slides[0].title.as_deref(), Some("Welcome"));
        assert_eq!(deck.slides[0].body, "Hello there");
    }

    #[test]
    fn slide_without_heading_has_no_title() {
        let deck = parse("Just a paragraph of text");
        assert_eq!(deck.slides.len(), 1);
        assert_eq!(deck.slides[0].title, None);
    }

    #[test]
    fn frontmatter_feeds_meta_not_slides() {
        let deck = parse("---\ntitle: My Course\nfooter: CS 101\n---\n\n# One\n\nBody");
        assert_eq!(deck.meta.title.as_deref(), Some("My Course"));
        assert_eq!(deck.meta.footer.as_deref(), Some("CS 101"));
        assert_eq!(deck.slides.len(), 1);
    }

    #[test]
    fn empty_input_yields_empty_deck() {
        let deck = parse("");
        assert!(deck.slides.is_empty());
    }

    #[test]
    fn sample_deck_slide_count() {
        let content = include_str!("../../../../sample-presentations/web-course.md");
        let deck = parse(content);
        assert_eq!(deck.slides.len(), 7, "sample deck should parse to 7 slides");
        assert!(deck.slides.iter().all(|s| s.title.is_some()));
    }
}

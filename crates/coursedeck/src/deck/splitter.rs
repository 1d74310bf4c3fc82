/// Split a document body (after frontmatter extraction) into raw slide
/// strings.
///
/// Three mechanisms create slide breaks:
/// 1. `---` with blank lines on both sides
/// 2. Three or more consecutive blank lines
/// 3. A `# ` heading when the current slide already has content
pub fn split(body: &str) -> Vec<String> {
    let body = body.replace("\r\n", "\n");
    let lines: Vec<&str> = body.split('\n').collect();

    let mut slides: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut blank_run = 0usize;

    let mut flush = |current: &mut Vec<&str>| {
        let text = current.join("\n").trim().to_string();
        if !text.is_empty() {
            slides.push(text);
        }
        current.clear();
    };

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            blank_run += 1;
            if blank_run == 3 {
                flush(&mut current);
            } else if blank_run < 3 {
                current.push(line);
            }
            continue;
        }

        // `---` separator needs a blank (or document edge) on both sides
        if is_dash_separator(trimmed) {
            let prev_blank = i == 0 || lines[i - 1].trim().is_empty();
            let next_blank = i + 1 >= lines.len() || lines[i + 1].trim().is_empty();
            if prev_blank && next_blank {
                flush(&mut current);
                blank_run = 0;
                continue;
            }
        }

        // An H1 after existing content starts a new slide
        if line.starts_with("# ") && has_content(&current) {
            flush(&mut current);
        }

        blank_run = 0;
        current.push(line);
    }

    flush(&mut current);
    slides
}

fn is_dash_separator(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

fn has_content(lines: &[&str]) -> bool {
    lines.iter().any(|l| !l.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_split() {
        let body = "Slide one\n\n\n\nSlide two";
        let slides = split(body);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0], "Slide one");
        assert_eq!(slides[1], "Slide two");
    }

    #[test]
    fn dash_separator() {
        let body = "Slide one\n\n---\n\nSlide two";
        let slides = split(body);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0], "Slide one");
        assert_eq!(slides[1], "Slide two");
    }

    #[test]
    fn dash_without_surrounding_blanks_stays_in_slide() {
        let body = "Slide one\n---\nstill slide one";
        let slides = split(body);
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn heading_inference() {
        let body = "# First\n\nContent\n\n# Second\n\nMore content";
        let slides = split(body);
        assert_eq!(slides.len(), 2);
        assert!(slides[0].starts_with("# First"));
        assert!(slides[1].starts_with("# Second"));
    }

    #[test]
    fn h2_does_not_split() {
        let body = "# Title\n\n## Subtitle\n\nContent";
        let slides = split(body);
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn first_heading_does_not_split() {
        let body = "# Only Heading\n\nContent here";
        let slides = split(body);
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn combined_separators_make_a_single_break() {
        let body = "Slide one\n\n\n\n---\n\n\n\nSlide two";
        let slides = split(body);
        assert_eq!(slides.len(), 2);
    }

    #[test]
    fn empty_body_yields_no_slides() {
        assert!(split("").is_empty());
        assert!(split("\n\n\n\n\n").is_empty());
    }

    #[test]
    fn crlf_input_is_normalized() {
        let body = "Slide one\r\n\r\n---\r\n\r\nSlide two";
        let slides = split(body);
        assert_eq!(slides.len(), 2);
    }
}

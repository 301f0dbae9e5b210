use scraper::{ElementRef, Node};

use super::text::{clean_description, clean_text};

/// Fragments shorter than this are layout noise (captions, bylines).
const MIN_FRAGMENT_LEN: usize = 20;
pub const MAX_FRAGMENTS: usize = 10;

pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];
const CONTENT_TAGS: &[&str] = &["p", "div", "span"];

/// A node following a heading, reduced to what the walk needs to know.
#[derive(Debug, Clone, PartialEq)]
pub enum Sibling {
    Heading,
    Content(String),
    Other,
}

/// Walk siblings until the next heading or `MAX_FRAGMENTS` collected fragments.
pub fn collect_description<I>(siblings: I) -> String
where
    I: IntoIterator<Item = Sibling>,
{
    let mut parts: Vec<String> = Vec::new();
    for sibling in siblings {
        match sibling {
            Sibling::Heading => break,
            Sibling::Content(raw) => {
                let text = clean_text(&raw);
                if text.chars().count() > MIN_FRAGMENT_LEN {
                    parts.push(text);
                }
            }
            Sibling::Other => {}
        }
        if parts.len() >= MAX_FRAGMENTS {
            break;
        }
    }
    clean_description(&parts.join(" "))
}

/// Siblings after `heading` in document order; text and comment nodes map to `Other`.
pub fn siblings_after<'a>(heading: ElementRef<'a>) -> impl Iterator<Item = Sibling> + 'a {
    heading.next_siblings().map(|node| match node.value() {
        Node::Element(el) => {
            let name = el.name();
            if HEADING_TAGS.contains(&name) {
                Sibling::Heading
            } else if CONTENT_TAGS.contains(&name) {
                let text = ElementRef::wrap(node)
                    .map(|e| e.text().collect::<String>())
                    .unwrap_or_default();
                Sibling::Content(text)
            } else {
                Sibling::Other
            }
        }
        _ => Sibling::Other,
    })
}

pub fn description_after_heading(heading: ElementRef<'_>) -> String {
    collect_description(siblings_after(heading))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn para(n: usize) -> Sibling {
        Sibling::Content(format!("Paragraph number {} about the temple tank.", n))
    }

    #[test]
    fn stops_at_next_heading() {
        let desc = collect_description(vec![para(1), Sibling::Other, para(2), Sibling::Heading, para(3)]);
        assert!(desc.contains("number 1"));
        assert!(desc.contains("number 2"));
        assert!(!desc.contains("number 3"));
    }

    #[test]
    fn caps_at_ten_fragments() {
        let desc = collect_description((1..=15).map(para));
        assert!(desc.contains("number 10 "));
        assert!(!desc.contains("number 11 "));
    }

    #[test]
    fn short_fragments_skipped() {
        let desc = collect_description(vec![
            Sibling::Content("Photo: ASI".into()),
            Sibling::Content("  The vimana rises to sixty-six metres.  ".into()),
        ]);
        assert_eq!(desc, "The vimana rises to sixty-six metres.");
    }

    #[test]
    fn empty_when_heading_first() {
        assert_eq!(collect_description(vec![Sibling::Heading, para(1)]), "");
    }

    #[test]
    fn walks_dom_siblings() {
        let html = Html::parse_document(
            "<div><h2>Shore Temple</h2>text node<p>Granite structural temple on the shore of the Bay of Bengal.</p>\
             <img src='x.png'><span>Built in the eighth century under the Pallavas.</span>\
             <h2>Next</h2><p>Not part of the description at all.</p></div>",
        );
        let sel = Selector::parse("h2").unwrap();
        let heading = html.select(&sel).next().unwrap();
        let desc = description_after_heading(heading);
        assert_eq!(
            desc,
            "Granite structural temple on the shore of the Bay of Bengal. Built in the eighth century under the Pallavas."
        );
    }
}

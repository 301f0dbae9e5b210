//! Heuristic temple extraction from a free-form pilgrimage article.
//!
//! Two discovery passes feed one `RecordSet`:
//!   1. headings inside content sections, description from following siblings
//!   2. visible body text split on name-like line starts
//! First found wins. An empty result falls back to a curated table.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, info, warn};

use super::classifier::TempleClassifier;
use super::description::description_after_heading;
use super::text::{clean_description, clean_text, strip_name_prefix};
use super::{RecordSet, TempleRecord};

static SECTION_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div[class], section[class], article[class]").unwrap());
static HEADING_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").unwrap());
static BODY_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

static SECTION_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"content|main|body|post").unwrap());
static SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n(?:About [A-Z]|\d+\.\s*[A-Z]|[A-Z][a-z]+\s+Temple)").unwrap()
});

/// Pattern-pass descriptions at or below this length are dropped.
const MIN_PATTERN_DESCRIPTION: usize = 50;
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript"];

pub struct ScrapeOutcome {
    pub records: Vec<TempleRecord>,
    pub used_fallback: bool,
}

pub struct TempleScraper {
    classifier: TempleClassifier,
    fallback: Vec<TempleRecord>,
}

impl TempleScraper {
    pub fn new(classifier: TempleClassifier, fallback: Vec<TempleRecord>) -> Self {
        TempleScraper {
            classifier,
            fallback,
        }
    }

    pub fn scrape(&self, html: &str) -> ScrapeOutcome {
        let document = Html::parse_document(html);
        let mut records = RecordSet::new();

        for section in content_sections(&document) {
            self.extract_from_section(section, &mut records);
        }
        let after_headings = records.len();
        self.extract_by_patterns(&document, &mut records);
        debug!(
            headings = after_headings,
            patterns = records.len() - after_headings,
            "Discovery passes done"
        );

        if records.is_empty() {
            warn!(
                fallback = self.fallback.len(),
                "No qualifying headings found, using curated fallback"
            );
            return ScrapeOutcome {
                records: self.fallback.clone(),
                used_fallback: true,
            };
        }

        ScrapeOutcome {
            records: records.into_vec(),
            used_fallback: false,
        }
    }

    /// Candidate name after cleaning and prefix removal, if it classifies as a temple.
    fn candidate_name(&self, raw: &str) -> Option<String> {
        let name = strip_name_prefix(&clean_text(raw));
        self.classifier.is_likely_temple_name(&name).then_some(name)
    }

    fn extract_from_section(&self, section: ElementRef<'_>, records: &mut RecordSet) {
        for heading in section.select(&HEADING_SEL) {
            let raw = heading.text().collect::<String>();
            let Some(name) = self.candidate_name(&raw) else {
                continue;
            };
            if records.contains(&name) {
                continue;
            }

            let description = description_after_heading(heading);
            if description.is_empty() {
                continue;
            }
            if records.insert(TempleRecord::new(name.clone(), description)) {
                info!(temple = %name, "Found temple");
            }
        }
    }

    fn extract_by_patterns(&self, document: &Html, records: &mut RecordSet) {
        let text = visible_text(document);

        for section in split_sections(&text) {
            let lines: Vec<&str> = section.trim().split('\n').collect();
            if lines.len() < 2 {
                continue;
            }
            let Some(name) = self.candidate_name(lines[0]) else {
                continue;
            };
            if records.contains(&name) {
                continue;
            }

            let body = lines[1..]
                .iter()
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .join("\n");
            let description = clean_description(&body);
            if description.chars().count() <= MIN_PATTERN_DESCRIPTION {
                continue;
            }
            if records.insert(TempleRecord::new(name.clone(), description)) {
                info!(temple = %name, "Found temple (pattern method)");
            }
        }
    }
}

/// `div`/`section`/`article` elements with a content-like class; else `<body>`; else the root.
fn content_sections(document: &Html) -> Vec<ElementRef<'_>> {
    let sections: Vec<_> = document
        .select(&SECTION_SEL)
        .filter(|el| el.value().classes().any(|c| SECTION_CLASS_RE.is_match(c)))
        .collect();
    if !sections.is_empty() {
        return sections;
    }
    match document.select(&BODY_SEL).next() {
        Some(body) => vec![body],
        None => vec![document.root_element()],
    }
}

/// Body text in document order, skipping script/style content.
fn visible_text(document: &Html) -> String {
    let root = document
        .select(&BODY_SEL)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut out = String::new();
    for node in root.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            matches!(a.value(), Node::Element(el) if HIDDEN_TAGS.contains(&el.name()))
        });
        if !hidden {
            out.push_str(text);
        }
    }
    out
}

/// Split before each newline that starts a name-like line. The newline itself is dropped.
fn split_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut start = 0;
    for m in SPLIT_RE.find_iter(text) {
        sections.push(&text[start..m.start()]);
        start = m.start() + 1;
    }
    sections.push(&text[start..]);
    sections
}

// ── Tests ──

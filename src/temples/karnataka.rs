//! Listing-page scraper: temple cards link to detail pages holding the description.

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};
use scraper::{Html, Selector};
use tracing::{info, warn};
use url::Url;

use super::TempleRecord;
use crate::error::Result;
use crate::net::Fetcher;

static CARD_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.tour-item").unwrap());
static CARD_LINK_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3 a").unwrap());
static DESCRIPTION_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.tour-item-description").unwrap());
static PARAGRAPH_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

pub const NO_DESCRIPTION: &str = "No description found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempleLink {
    pub name: String,
    pub url: String,
}

/// Cards on the listing page, in page order. Relative links resolve against `base`.
pub fn parse_listing(html: &str, base: &Url) -> Vec<TempleLink> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    for card in document.select(&CARD_SEL) {
        let Some(anchor) = card.select(&CARD_LINK_SEL).next() else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let name = anchor.text().collect::<String>().trim().to_string();
        if name.is_empty() {
            continue;
        }
        match base.join(href) {
            Ok(url) => links.push(TempleLink {
                name,
                url: url.to_string(),
            }),
            Err(e) => warn!(href = %href, "Skipping card with bad link: {}", e),
        }
    }

    links
}

/// Paragraphs of the description container joined by a space.
pub fn parse_detail(html: &str) -> String {
    let document = Html::parse_document(html);
    match document.select(&DESCRIPTION_SEL).next() {
        Some(container) => container
            .select(&PARAGRAPH_SEL)
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string(),
        None => NO_DESCRIPTION.to_string(),
    }
}

/// Fetch the listing, then each detail page in order. A failing detail page is skipped.
pub fn scrape(fetcher: &Fetcher, listing_url: &str, limit: Option<usize>) -> Result<Vec<TempleRecord>> {
    let base = Url::parse(listing_url)?;
    let listing = fetcher.fetch_html(listing_url)?;
    let mut links = parse_listing(&listing, &base);
    info!("Found {} temples on listing page", links.len());
    if let Some(n) = limit {
        links.truncate(n);
    }

    let pb = ProgressBar::new(links.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let mut records = Vec::with_capacity(links.len());
    for link in links {
        pb.set_message(link.name.clone());
        match fetcher.fetch_html(&link.url) {
            Ok(html) => records.push(TempleRecord::new(link.name, parse_detail(&html))),
            Err(e) => warn!(temple = %link.name, url = %link.url, "Skipping detail page: {}", e),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(records)
}

// ── Tests ──

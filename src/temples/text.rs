use std::sync::LazyLock;

use regex::Regex;

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static LEADING_PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\w\s]+").unwrap());
static NAME_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:About\s+|\d+\.\s*)").unwrap());
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+").unwrap());
static NAV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)read more|click here|see more|learn more").unwrap());

/// Collapse whitespace runs to one space, trim, drop leading punctuation.
pub fn clean_text(text: &str) -> String {
    let collapsed = WS_RE.replace_all(text.trim(), " ");
    LEADING_PUNCT_RE.replace(&collapsed, "").trim_start().to_string()
}

/// Remove leading "About " and "<number>." prefixes, repeatedly:
/// "108. About Meenakshi Amman Temple" -> "Meenakshi Amman Temple".
pub fn strip_name_prefix(name: &str) -> String {
    let mut current = name.trim();
    while let Some(m) = NAME_PREFIX_RE.find(current) {
        if m.is_empty() {
            break;
        }
        current = current[m.end()..].trim_start();
    }
    current.to_string()
}

/// Whitespace-normalised description with URLs, emails and navigation phrases removed.
pub fn clean_description(description: &str) -> String {
    let text = WS_RE.replace_all(description, " ");
    let text = URL_RE.replace_all(&text, "");
    let text = EMAIL_RE.replace_all(&text, "");
    let text = NAV_RE.replace_all(&text, "");
    WS_RE.replace_all(text.trim(), " ").into_owned()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_collapses_and_strips() {
        assert_eq!(clean_text("  »  Brihadeeswarar\n\t Temple  "), "Brihadeeswarar Temple");
        assert_eq!(clean_text("#1 pick"), "1 pick");
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("  \n "), "");
    }

    #[test]
    fn prefix_numbers_and_about() {
        assert_eq!(strip_name_prefix("108. About Meenakshi Amman Temple"), "Meenakshi Amman Temple");
        assert_eq!(strip_name_prefix("About Shore Temple"), "Shore Temple");
        assert_eq!(strip_name_prefix("3.Nataraja Temple"), "Nataraja Temple");
        assert_eq!(strip_name_prefix("Palani Murugan Temple"), "Palani Murugan Temple");
    }

    #[test]
    fn prefix_requires_word_boundary_after_about() {
        assert_eq!(strip_name_prefix("Aboutface"), "Aboutface");
    }

    #[test]
    fn description_scrubbed() {
        let raw = "Open daily.\n\nVisit https://example.com/temple?id=3 or mail info@temple.org. Read more  CLICK HERE";
        assert_eq!(clean_description(raw), "Open daily. Visit or mail");
    }

    #[test]
    fn description_without_noise_is_only_normalised() {
        assert_eq!(
            clean_description("Built by\n Raja Raja Chola I in 1010 CE."),
            "Built by Raja Raja Chola I in 1010 CE."
        );
    }
}

use std::sync::LazyLock;

use regex::Regex;

static PROPER_NOUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+").unwrap());

pub const TEMPLE_KEYWORDS: &[&str] = &[
    "temple", "kovil", "mandir", "shrine", "mutt", "ashram", "swamy", "swami", "eswarar",
    "amman", "perumal", "vishnu", "shiva", "devi", "lakshmi", "saraswati", "durga", "kali",
    "hanuman", "ganesha", "murugan", "ayyappa",
];

/// Page boilerplate headings. These win over any temple keyword.
pub const EXCLUDE_KEYWORDS: &[&str] = &[
    "about", "history", "architecture", "festival", "how to reach", "timings", "entry fee",
    "best time", "nearby", "facilities",
];

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 100;

/// Decides whether a short heading or line plausibly names a temple.
#[derive(Debug, Clone)]
pub struct TempleClassifier {
    temple_keywords: Vec<String>,
    exclude_keywords: Vec<String>,
}

impl Default for TempleClassifier {
    fn default() -> Self {
        Self::new(TEMPLE_KEYWORDS, EXCLUDE_KEYWORDS)
    }
}

impl TempleClassifier {
    pub fn new<S: AsRef<str>>(temple_keywords: &[S], exclude_keywords: &[S]) -> Self {
        let lower = |kws: &[S]| kws.iter().map(|k| k.as_ref().to_lowercase()).collect();
        TempleClassifier {
            temple_keywords: lower(temple_keywords),
            exclude_keywords: lower(exclude_keywords),
        }
    }

    pub fn is_likely_temple_name(&self, text: &str) -> bool {
        let len = text.chars().count();
        if !(MIN_LEN..MAX_LEN).contains(&len) {
            return false;
        }

        let lower = text.to_lowercase();
        if self.exclude_keywords.iter().any(|k| lower.contains(k.as_str())) {
            return false;
        }

        self.temple_keywords.iter().any(|k| lower.contains(k.as_str()))
            || PROPER_NOUN_RE.is_match(text)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> TempleClassifier {
        TempleClassifier::default()
    }

    #[test]
    fn length_bounds() {
        let c = classifier();
        assert!(!c.is_likely_temple_name(""));
        assert!(!c.is_likely_temple_name("Om"));
        assert!(c.is_likely_temple_name("Ooty"));
        let long = format!("Sri {} Temple", "Ranganathaswamy ".repeat(6));
        assert!(long.len() >= 100);
        assert!(!c.is_likely_temple_name(&long));
        let exactly_100 = format!("{}temple", "x".repeat(94));
        assert_eq!(exactly_100.len(), 100);
        assert!(!c.is_likely_temple_name(&exactly_100));
        let just_under = format!("{}temple", "x".repeat(93));
        assert!(c.is_likely_temple_name(&just_under));
    }

    #[test]
    fn exclusion_beats_keyword() {
        let c = classifier();
        assert!(!c.is_likely_temple_name("Meenakshi Temple Timings"));
        assert!(!c.is_likely_temple_name("History of Brihadeeswarar Temple"));
        assert!(!c.is_likely_temple_name("How to reach the shrine"));
        assert!(!c.is_likely_temple_name("About Meenakshi Amman Temple"));
        assert!(!c.is_likely_temple_name("nearby kovil"));
    }

    #[test]
    fn keyword_accepts_lowercase_text() {
        let c = classifier();
        assert!(c.is_likely_temple_name("sri ranganathaswamy temple"));
        assert!(c.is_likely_temple_name("arulmigu murugan kovil"));
        assert!(c.is_likely_temple_name("KAPALEESHWARAR TEMPLE"));
    }

    #[test]
    fn proper_noun_accepts_without_keyword() {
        let c = classifier();
        assert!(c.is_likely_temple_name("Rameswaram"));
        assert!(!c.is_likely_temple_name("things to do"));
        assert!(!c.is_likely_temple_name("ALL CAPS ONLY"));
    }

    #[test]
    fn custom_keyword_lists() {
        let c = TempleClassifier::new(&["gurudwara"], &["langar"]);
        assert!(c.is_likely_temple_name("old gurudwara"));
        assert!(!c.is_likely_temple_name("Gurudwara langar hall"));
        assert!(!c.is_likely_temple_name("the temple"));
    }
}

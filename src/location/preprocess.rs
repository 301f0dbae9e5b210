use std::sync::LazyLock;

use regex::Regex;

pub const STATE_NAMES: &[&str] = &[
    "Tamil Nadu",
    "Andhra Pradesh",
    "Kerala",
    "Karnataka",
    "Telangana",
    "Puducherry",
    "Maharashtra",
    "Odisha",
    "Bihar",
    "West Bengal",
];

static STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = STATE_NAMES
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives)).unwrap()
});
static COMMA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*(?:,\s*)+").unwrap());

/// Strip state names and stray separators before asking for a place name.
/// "Madurai, Tamil Nadu" -> "Madurai".
pub fn preprocess_location(raw: &str) -> String {
    let loc = STATE_RE.replace_all(raw.trim(), "");
    let loc = COMMA_RE.replace_all(&loc, ",");
    loc.trim_matches(|c| c == ',' || c == ' ').to_string()
}

// ── Tests ──

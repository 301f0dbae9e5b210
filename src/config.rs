use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_FILE: &str = "temple_scraper.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub user_agent: String,
    /// Fixed per-request timeout; there is no retry.
    pub request_timeout_secs: u64,
    pub trawell_url: String,
    pub trawell_output: String,
    pub karnataka_url: String,
    pub karnataka_output: String,
    pub locations_input: String,
    pub locations_output: String,
    pub llm: LlmSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub base_url: String,
}

impl Settings {
    /// Defaults, then the TOML file (explicit path, or `temple_scraper.toml` when it
    /// exists), then `TEMPLES_*` environment overrides (`TEMPLES_LLM__MODEL=...`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default(
                "user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
            )?
            .set_default("request_timeout_secs", 30)?
            .set_default("trawell_url", "https://www.trawell.in/tamilnadu/pilgrimages")?
            .set_default("trawell_output", "tamil_nadu_temples.xlsx")?
            .set_default(
                "karnataka_url",
                "https://karnatakatourism.org/tour-item/?type%5B%5D=temples",
            )?
            .set_default("karnataka_output", "temples_of_karnataka.xlsx")?
            .set_default("locations_input", "tamil_nadu_temples_with_locations.xlsx")?
            .set_default(
                "locations_output",
                "tamil_nadu_temples_with_locations_standardized.xlsx",
            )?
            .set_default("llm.model", "gpt-3.5-turbo")?
            .set_default("llm.max_tokens", 12)?
            .set_default("llm.temperature", 0.0)?
            .set_default("llm.base_url", "https://api.openai.com/v1")?;

        builder = match path {
            Some(p) => builder.add_source(File::from(p)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings = builder
            .add_source(Environment::with_prefix("TEMPLES").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        // An explicit path must exist; the implicit default file may not.
        assert!(Settings::load(Some(&missing)).is_err());

        let s = Settings::load(None).unwrap();
        assert_eq!(s.request_timeout_secs, 30);
        assert_eq!(s.llm.model, "gpt-3.5-turbo");
        assert_eq!(s.llm.max_tokens, 12);
        assert!(s.trawell_url.contains("trawell.in"));
    }

    #[test]
    fn file_overrides_defaults() {
        let mut f = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(f, "trawell_output = \"out.tsv\"\n[llm]\nmodel = \"gpt-4o-mini\"").unwrap();

        let s = Settings::load(Some(f.path())).unwrap();
        assert_eq!(s.trawell_output, "out.tsv");
        assert_eq!(s.llm.model, "gpt-4o-mini");
        assert_eq!(s.llm.max_tokens, 12);
    }
}

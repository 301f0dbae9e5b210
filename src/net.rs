use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{Error, Result};

/// Blocking page fetcher. One request at a time, fixed timeout, no retry.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;
        Ok(Fetcher { client })
    }

    pub fn fetch_html(&self, url: &str) -> Result<String> {
        info!(url = %url, "Fetching webpage");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        debug!(url = %url, bytes = body.len(), "Fetched");
        Ok(body)
    }
}

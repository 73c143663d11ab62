use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::{FetchError, TalkSource};
use crate::model::{SiteConfig, TalkRecord, parse_talks};

/// Reads the collection with a single GET against a fixed URL.
pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("talks")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn from_config(cfg: &SiteConfig) -> Result<Self> {
        Self::new(cfg.data_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<Vec<TalkRecord>> {
        let bytes = self
            .client
            .get(&self.url)
            .send()
            .context("request talks")?
            .error_for_status()
            .context("talks status")?
            .bytes()
            .context("read talks body")?;
        parse_talks(&bytes).context("parse talks")
    }
}

impl TalkSource for HttpSource {
    fn load(&self) -> Result<Vec<TalkRecord>, FetchError> {
        debug!(url = %self.url, "loading talks");
        match self.fetch() {
            Ok(items) => {
                debug!(url = %self.url, count = items.len(), "loaded talks");
                Ok(items)
            }
            Err(err) => {
                warn!(url = %self.url, "error loading data: {:#}", err);
                Err(FetchError)
            }
        }
    }
}

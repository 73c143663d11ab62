use std::thread;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::model::PhotoConfig;

/// Source of one image URL per call.
pub trait PhotoSource: Sync {
    fn random_photo(&self, topic: &str) -> Result<String>;
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PhotoSlot {
    pub index: usize,
    pub topic: String,
    /// `None` when the fetch for this slot failed.
    pub url: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct RandomPhotoResponse {
    urls: PhotoUrls,
}

#[derive(Debug, serde::Deserialize)]
struct PhotoUrls {
    regular: String,
}

pub struct UnsplashSource {
    api_url: String,
    access_key: String,
    client: reqwest::blocking::Client,
}

impl UnsplashSource {
    pub fn new(api_url: impl Into<String>, access_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("talks")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            api_url: api_url.into(),
            access_key: access_key.into(),
            client,
        })
    }

    /// `None` when no access key is configured.
    pub fn from_config(cfg: &PhotoConfig) -> Result<Option<Self>> {
        match cfg.access_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(Some(Self::new(cfg.api_url.clone(), key)?)),
            _ => Ok(None),
        }
    }
}

impl PhotoSource for UnsplashSource {
    fn random_photo(&self, topic: &str) -> Result<String> {
        let resp: RandomPhotoResponse = self
            .client
            .get(format!(
                "{}/photos/random",
                self.api_url.trim_end_matches('/')
            ))
            .query(&[("query", topic)])
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Client-ID {}", self.access_key),
            )
            .send()
            .context("random photo request")?
            .error_for_status()
            .context("random photo status")?
            .json()
            .context("parse random photo")?;
        Ok(resp.urls.regular)
    }
}

/// Topic for the slot at `index`: topics rotate across slots.
pub fn slot_topic(topics: &[String], index: usize) -> &str {
    if topics.is_empty() {
        return "";
    }
    &topics[index % topics.len()]
}

/// Fill `slots` photo slots, one request per slot, all in flight at once.
/// A failed slot keeps `url: None`; the others are unaffected.
pub fn load_slots<P: PhotoSource + ?Sized>(
    source: &P,
    slots: usize,
    topics: &[String],
) -> Vec<PhotoSlot> {
    thread::scope(|scope| {
        let handles: Vec<_> = (0..slots)
            .map(|index| {
                let topic = slot_topic(topics, index).to_string();
                scope.spawn(move || {
                    let url = match source.random_photo(&topic) {
                        Ok(url) => {
                            debug!(slot = index, topic = %topic, "photo loaded");
                            Some(url)
                        }
                        Err(err) => {
                            warn!(slot = index, topic = %topic, "photo failed: {:#}", err);
                            None
                        }
                    };
                    PhotoSlot { index, topic, url }
                })
            })
            .collect();

        handles
            .into_iter()
            .enumerate()
            .map(|(index, handle)| {
                handle.join().unwrap_or_else(|_| PhotoSlot {
                    index,
                    topic: slot_topic(topics, index).to_string(),
                    url: None,
                })
            })
            .collect()
    })
}

#[cfg(test)]
#[path = "../tests/widgets/photos_tests.rs"]
mod tests;

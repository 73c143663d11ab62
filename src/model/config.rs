use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_DATA_PATH: &str = "weekly-nerd-data.json";
pub const DEFAULT_PHOTO_API: &str = "https://api.unsplash.com";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the talk collection, relative to `base_url`.
    #[serde(default = "default_data_path")]
    pub data_path: String,

    #[serde(default)]
    pub photos: PhotoConfig,

    #[serde(default)]
    pub marquee: MarqueeConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhotoConfig {
    #[serde(default = "default_photo_api")]
    pub api_url: String,

    /// Unsplash client id. Photo slots stay empty without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,

    #[serde(default = "default_slots")]
    pub slots: usize,

    /// Keywords assigned to slots in rotation.
    #[serde(default = "default_topics")]
    pub topics: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarqueeConfig {
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))
    }

    /// URL of the talk collection.
    pub fn data_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.data_path.trim_start_matches('/')
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            data_path: default_data_path(),
            photos: PhotoConfig::default(),
            marquee: MarqueeConfig::default(),
        }
    }
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            api_url: default_photo_api(),
            access_key: None,
            slots: default_slots(),
            topics: default_topics(),
        }
    }
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            labels: default_labels(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_data_path() -> String {
    DEFAULT_DATA_PATH.to_string()
}

fn default_photo_api() -> String {
    DEFAULT_PHOTO_API.to_string()
}

fn default_slots() -> usize {
    4
}

fn default_topics() -> Vec<String> {
    vec!["nature".to_string(), "architecture".to_string()]
}

fn default_labels() -> Vec<String> {
    [
        "VS Code",
        "HTML",
        "CCS",
        "JavaScript",
        "Wordpress",
        "Prepr",
        "Figma",
        "Node.js",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;

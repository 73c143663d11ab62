use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::{FetchError, TalkSource};
use crate::model::{TalkRecord, parse_talks};

/// Reads the collection from a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<TalkRecord>> {
        let bytes =
            fs::read(&self.path).with_context(|| format!("read {}", self.path.display()))?;
        parse_talks(&bytes).with_context(|| format!("parse {}", self.path.display()))
    }
}

impl TalkSource for FileSource {
    fn load(&self) -> Result<Vec<TalkRecord>, FetchError> {
        match self.read() {
            Ok(items) => {
                debug!(path = %self.path.display(), count = items.len(), "loaded talks");
                Ok(items)
            }
            Err(err) => {
                warn!(path = %self.path.display(), "error loading data: {:#}", err);
                Err(FetchError)
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/source/file_tests.rs"]
mod tests;

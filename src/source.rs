//! Data source adapters: one read of the talk collection per `load()` call.

use thiserror::Error;

use crate::model::TalkRecord;

mod file;
mod http;

pub use self::file::FileSource;
pub use self::http::HttpSource;

/// The collection could not be loaded. Network errors, non-success responses
/// and malformed payloads all collapse into this one error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
#[error("failed to load talks")]
pub struct FetchError;

pub trait TalkSource {
    /// Read the whole collection once. No retries are attempted.
    fn load(&self) -> Result<Vec<TalkRecord>, FetchError>;
}

impl<T: TalkSource + ?Sized> TalkSource for Box<T> {
    fn load(&self) -> Result<Vec<TalkRecord>, FetchError> {
        (**self).load()
    }
}

impl<T: TalkSource + ?Sized> TalkSource for &T {
    fn load(&self) -> Result<Vec<TalkRecord>, FetchError> {
        (**self).load()
    }
}

mod config;
mod content;
mod talk;

pub use self::config::*;
pub use self::content::*;
pub use self::talk::*;

//! Decorative page widgets: random photo slots and the logo marquee.

pub mod marquee;
pub mod photos;

pub use self::marquee::Marquee;
pub use self::photos::{PhotoSlot, PhotoSource, UnsplashSource, load_slots};

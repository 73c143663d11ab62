//! Talks list: loads a static collection of talk records, derives a filtered and
//! sorted view of it, and renders that view as HTML or in a terminal.

pub mod controller;
pub mod logging;
pub mod model;
pub mod render;
pub mod source;
pub mod tui;
pub mod view;
pub mod widgets;

mod tui_shell;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;

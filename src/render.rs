//! HTML rendering of the list screen, detail popovers and the full page.
//!
//! Every string taken from a record is escaped before it is written.

mod detail;
mod escape;
mod list;
mod page;

pub use self::detail::render_detail;
pub use self::escape::escape_html;
pub use self::list::{render_list, render_row, stagger_delay};
pub use self::page::{PageModel, render_page};

pub const LOADING_MESSAGE: &str = "Loading speakers...";
pub const ERROR_TITLE: &str = "Error loading data";
pub const ERROR_MESSAGE: &str = "Please check your network connection and try again.";
pub const EMPTY_TITLE: &str = "No items found";
pub const EMPTY_MESSAGE: &str = "Try changing your filter settings";
pub const RETRY_BUTTON_ID: &str = "retry-button";

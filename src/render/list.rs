use std::fmt::Write;

use super::{
    EMPTY_MESSAGE, EMPTY_TITLE, ERROR_MESSAGE, ERROR_TITLE, LOADING_MESSAGE, RETRY_BUTTON_ID,
    escape_html as esc, render_detail,
};
use crate::controller::Screen;
use crate::model::TalkRecord;

/// Reveal delay for the row at `index`, in seconds. Uses the shortest float
/// form, so row 0 is `0s` and row 2 is `0.1s`.
pub fn stagger_delay(index: usize) -> String {
    format!("{}s", index as f64 * 0.05)
}

/// Inner markup of the list container for `screen`.
pub fn render_list(screen: &Screen<'_>) -> String {
    match screen {
        Screen::Loading => format!(
            "<div class=\"loading-state\">\n  <div class=\"loading-spinner\"></div>\n  <p>{}</p>\n</div>\n",
            LOADING_MESSAGE
        ),
        Screen::Failed => format!(
            "<div class=\"empty-state\">\n  <h3>{}</h3>\n  <p>{}</p>\n  <button id=\"{}\" class=\"control-button\">Retry</button>\n</div>\n",
            ERROR_TITLE, ERROR_MESSAGE, RETRY_BUTTON_ID
        ),
        Screen::Empty => format!(
            "<div class=\"empty-state\">\n  <h3>{}</h3>\n  <p>{}</p>\n</div>\n",
            EMPTY_TITLE, EMPTY_MESSAGE
        ),
        Screen::List(rows) => {
            let mut out = String::new();
            for (index, item) in rows.iter().enumerate() {
                out.push_str(&render_row(index, item));
            }
            out
        }
    }
}

/// One list row: the summary button and its popover.
pub fn render_row(index: usize, item: &TalkRecord) -> String {
    let id = esc(&item.id);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<li style=\"animation-delay: {}\">",
        stagger_delay(index)
    );
    let _ = writeln!(out, "  <button popovertarget=\"{}\">", id);
    let _ = writeln!(out, "    <div>");
    let _ = writeln!(
        out,
        "      <h4>\"{}\" by <strong>{}</strong></h4>",
        esc(&item.title),
        esc(&item.speaker.display())
    );
    let _ = writeln!(out, "      <p>{}</p>", esc(&item.kind));
    let _ = writeln!(out, "    </div>");
    let _ = writeln!(out, "    <h3>{}</h3>", esc(&item.date));
    let _ = writeln!(out, "  </button>");
    let _ = writeln!(out, "  <div popover id=\"{}\">", id);
    out.push_str(&render_detail(item));
    let _ = writeln!(out, "  </div>");
    let _ = writeln!(out, "</li>");
    out
}

#[cfg(test)]
#[path = "../tests/render/list_tests.rs"]
mod tests;

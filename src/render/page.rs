use std::fmt::Write;

use super::{escape_html as esc, render_list};
use crate::controller::Screen;
use crate::view::{Filter, SortAxis, ViewState};
use crate::widgets::{Marquee, PhotoSlot};

pub struct PageModel<'a> {
    pub title: &'a str,
    pub state: ViewState,
    pub screen: &'a Screen<'a>,
    pub photos: &'a [PhotoSlot],
    pub marquee: &'a Marquee,
}

/// Full HTML document. Control classes mirror the view state: the active
/// filter carries `active`, the active sort toggle carries `active` plus
/// `asc` or `desc`.
pub fn render_page(page: &PageModel<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{}</title>", esc(page.title));
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");

    let _ = writeln!(out, "<section id=\"WN\">");
    let _ = writeln!(out, "<div class=\"controls\">");
    for filter in Filter::ALL {
        let class = if filter == page.state.filter {
            "control-button active"
        } else {
            "control-button"
        };
        let _ = writeln!(
            out,
            "<button class=\"{}\" data-filter=\"{}\">{}</button>",
            class,
            filter.token(),
            filter.label()
        );
    }
    for axis in SortAxis::ALL {
        let class = match page.state.sort.direction_of(axis) {
            Some(direction) => format!("toggle-button active {}", direction.class()),
            None => "toggle-button".to_string(),
        };
        let _ = writeln!(
            out,
            "<button class=\"{}\" data-toggle=\"{}\">{}</button>",
            class,
            axis.token(),
            axis.label()
        );
    }
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "<ul class=\"wn-list\">");
    out.push_str(&render_list(page.screen));
    let _ = writeln!(out, "</ul>");
    let _ = writeln!(out, "</section>");

    if !page.photos.is_empty() {
        let _ = writeln!(out, "<div class=\"photos\">");
        for slot in page.photos {
            let _ = writeln!(
                out,
                "<img class=\"randomPhoto\" data-topic=\"{}\" src=\"{}\" alt=\"\">",
                esc(&slot.topic),
                esc(slot.url.as_deref().unwrap_or(""))
            );
        }
        let _ = writeln!(out, "</div>");
    }

    let _ = writeln!(out, "<div class=\"wrapper\">");
    out.push_str(&page.marquee.render_html());
    let _ = writeln!(out, "</div>");

    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

#[cfg(test)]
#[path = "../tests/render/page_tests.rs"]
mod tests;

use std::fmt::Write;

use crate::render::escape_html;

pub const ITEM_WIDTH: u32 = 200;
pub const GAP_WIDTH: u32 = 20;
const SECONDS_PER_ITEM: u32 = 3;

/// A looping strip of labels. The strip holds the labels twice so that
/// scrolling by one copy's width lands on an identical frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marquee {
    labels: Vec<String>,
}

impl Marquee {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Width of one copy of the labels, in pixels.
    pub fn set_width(&self) -> u32 {
        (ITEM_WIDTH + GAP_WIDTH) * self.labels.len() as u32
    }

    /// Width of the whole track (two copies).
    pub fn track_width(&self) -> u32 {
        self.set_width() * 2
    }

    pub fn duration_secs(&self) -> u32 {
        self.labels.len() as u32 * SECONDS_PER_ITEM
    }

    /// Labels in track order: the list, then the list again.
    pub fn track(&self) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .chain(self.labels.iter())
            .map(String::as_str)
    }

    pub fn render_html(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "<div style=\"display: flex; gap: {}px; width: {}px; position: absolute; left: 0; animation: scrollLeft {}s linear infinite\">",
            GAP_WIDTH,
            self.track_width(),
            self.duration_secs()
        );
        for label in self.track() {
            let _ = writeln!(
                out,
                "<div class=\"item\" style=\"position: relative\">{}</div>",
                escape_html(label)
            );
        }
        let _ = writeln!(out, "</div>");
        out
    }

    /// One text line of the strip, `width` columns wide, scrolled left by
    /// `offset` columns. Wraps around after one copy.
    pub fn frame(&self, offset: usize, width: usize) -> String {
        let cycle: Vec<char> = self
            .labels
            .iter()
            .flat_map(|l| l.chars().chain("   ".chars()))
            .collect();
        if cycle.is_empty() {
            return " ".repeat(width);
        }
        (0..width)
            .map(|col| cycle[(offset + col) % cycle.len()])
            .collect()
    }
}

impl Default for Marquee {
    fn default() -> Self {
        Self::new(crate::model::MarqueeConfig::default().labels)
    }
}

#[cfg(test)]
#[path = "../tests/widgets/marquee_tests.rs"]
mod tests;

use std::fmt::Write;

use super::escape_html as esc;
use crate::model::{DetailBlock, Entry, Section, SpeakerPanel, TalkRecord};

/// Detail panel for `item`: header, meta, summary, then each content block
/// in canonical order.
pub fn render_detail(item: &TalkRecord) -> String {
    let mut out = String::new();
    let speakers = esc(&item.speaker.display());

    let _ = writeln!(out, "<div class=\"bento-container\">");
    let _ = writeln!(out, "<div class=\"bento-header\">");
    let _ = writeln!(out, "<h2>{}</h2>", esc(&item.title));
    let _ = writeln!(out, "<h3>{}</h3>", speakers);
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "<div class=\"bento-meta\">");
    let _ = writeln!(out, "<p>{}</p>", esc(&item.kind));
    let _ = writeln!(out, "<p>{}</p>", esc(&item.date));
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "<div class=\"bento-content\">");
    let _ = writeln!(out, "<p>{}</p>", esc(&item.content.summary));

    for block in item.content.blocks() {
        write_block(&mut out, &block);
    }

    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "</div>");
    out
}

fn write_block(out: &mut String, block: &DetailBlock<'_>) {
    match block {
        DetailBlock::Introduction(text) => {
            let _ = writeln!(out, "<p>{}</p>", esc(text));
        }
        DetailBlock::BentoSections(sections) => write_bento(out, sections),
        DetailBlock::ListedSections(sections) => write_listed(out, sections),
        DetailBlock::FeatureGrid { heading, features } => {
            write_highlight(out, heading);
            let _ = writeln!(out, "<div class=\"feature-grid\">");
            for feature in *features {
                let _ = writeln!(out, "<div class=\"feature-card\">");
                let _ = writeln!(out, "<h4>{}</h4>", esc(&feature.title));
                let _ = writeln!(out, "<p>{}</p>", esc(&feature.description));
                let _ = writeln!(out, "</div>");
            }
            let _ = writeln!(out, "</div>");
        }
        DetailBlock::FeatureList { heading, features } => {
            if let Some(heading) = heading {
                write_highlight(out, heading);
            }
            write_entries(out, features);
        }
        DetailBlock::SpeakerPanels(speakers) => write_speakers(out, speakers),
        DetailBlock::ResourceList(resources) => {
            write_highlight(out, "Resources:");
            write_strings(out, "resources-list", resources);
        }
        DetailBlock::TakeawayList(takeaways) => {
            write_highlight(out, "Key Takeaways:");
            write_strings(out, "takeaways-list", takeaways);
        }
        DetailBlock::Challenges(text) => {
            let _ = writeln!(out, "<p>{}</p>", esc(text));
        }
        DetailBlock::Conclusion(text) => {
            let _ = writeln!(out, "<div class=\"conclusion\">");
            let _ = writeln!(
                out,
                "<p><strong>Conclusion:</strong> {}</p>",
                esc(text)
            );
            let _ = writeln!(out, "</div>");
        }
    }
}

fn write_highlight(out: &mut String, text: &str) {
    let _ = writeln!(out, "<div class=\"highlight\">");
    let _ = writeln!(out, "<p>{}</p>", esc(text));
    let _ = writeln!(out, "</div>");
}

fn write_bento(out: &mut String, sections: &[Section]) {
    let _ = writeln!(out, "<div class=\"bento-grid\">");
    for section in sections {
        let class = if section.span == Some(2) {
            "bento-box span-2"
        } else {
            "bento-box"
        };
        let _ = writeln!(out, "<div class=\"{}\">", class);
        let _ = writeln!(out, "<h4>{}</h4>", esc(&section.title));
        let _ = writeln!(
            out,
            "<p>{}</p>",
            esc(section.description.as_deref().unwrap_or(""))
        );
        let _ = writeln!(out, "</div>");
    }
    let _ = writeln!(out, "</div>");
}

fn write_listed(out: &mut String, sections: &[Section]) {
    for section in sections {
        write_highlight(out, &section.title);
        if section.entries().is_empty() {
            let _ = writeln!(
                out,
                "<p>{}</p>",
                esc(section.description.as_deref().unwrap_or(""))
            );
        } else {
            write_entries(out, section.entries());
        }
    }
}

fn write_entries(out: &mut String, entries: &[Entry]) {
    let _ = writeln!(out, "<ul>");
    for entry in entries {
        let _ = writeln!(
            out,
            "<li><strong>{}:</strong> {}</li>",
            esc(&entry.title),
            esc(&entry.description)
        );
    }
    let _ = writeln!(out, "</ul>");
}

fn write_strings(out: &mut String, class: &str, items: &[String]) {
    let _ = writeln!(out, "<ul class=\"{}\">", class);
    for item in items {
        let _ = writeln!(out, "<li>{}</li>", esc(item));
    }
    let _ = writeln!(out, "</ul>");
}

fn write_speakers(out: &mut String, speakers: &[SpeakerPanel]) {
    let _ = writeln!(out, "<div class=\"speakers-section\">");
    for speaker in speakers {
        let _ = writeln!(out, "<div class=\"speaker-card\">");
        let _ = writeln!(out, "<h3>{}</h3>", esc(&speaker.name));
        let _ = writeln!(out, "<h4>{}</h4>", esc(&speaker.title));
        if let Some(role) = speaker.role.as_deref().filter(|r| !r.is_empty()) {
            let _ = writeln!(out, "<p class=\"speaker-role\">{}</p>", esc(role));
        }

        if !speaker.topics().is_empty() {
            let _ = writeln!(out, "<div class=\"topic-list\">");
            for topic in speaker.topics() {
                let _ = writeln!(out, "<div class=\"topic-item\">");
                let _ = writeln!(out, "<h5>{}</h5>", esc(&topic.title));
                let _ = writeln!(out, "<p>{}</p>", esc(&topic.details));
                let _ = writeln!(out, "</div>");
            }
            let _ = writeln!(out, "</div>");
        } else if let Some(details) = speaker.details.as_deref().filter(|d| !d.is_empty()) {
            let _ = writeln!(out, "<p>{}</p>", esc(details));
        }

        let _ = writeln!(out, "</div>");
    }
    let _ = writeln!(out, "</div>");
}

#[cfg(test)]
#[path = "../tests/render/detail_tests.rs"]
mod tests;

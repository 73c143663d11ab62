use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::model::{DetailBlock, Entry, TalkRecord};

/// Detail popover for one talk, flattened to text lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct DetailPopup {
    pub(in crate::tui_shell) id: String,
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) scroll: usize,
}

impl DetailPopup {
    pub(in crate::tui_shell) fn new(item: &TalkRecord) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            lines: detail_lines(item),
            scroll: 0,
        }
    }

    pub(in crate::tui_shell) fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub(in crate::tui_shell) fn scroll_down(&mut self) {
        let max = self.lines.len().saturating_sub(1);
        self.scroll = (self.scroll + 1).min(max);
    }
}

pub(in crate::tui_shell) fn detail_lines(item: &TalkRecord) -> Vec<String> {
    let mut out = vec![
        item.speaker.display(),
        format!("{} | {}", item.kind, item.date),
        String::new(),
        item.content.summary.clone(),
    ];

    for block in item.content.blocks() {
        out.push(String::new());
        match block {
            DetailBlock::Introduction(text) | DetailBlock::Challenges(text) => {
                out.push(text.to_string());
            }
            DetailBlock::BentoSections(sections) => {
                for section in sections {
                    out.push(format!("[{}]", section.title));
                    if let Some(desc) = section.description.as_deref() {
                        out.push(desc.to_string());
                    }
                }
            }
            DetailBlock::ListedSections(sections) => {
                for section in sections {
                    out.push(format!("== {}", section.title));
                    if section.entries().is_empty() {
                        if let Some(desc) = section.description.as_deref() {
                            out.push(desc.to_string());
                        }
                    } else {
                        push_entries(&mut out, section.entries());
                    }
                }
            }
            DetailBlock::FeatureGrid { heading, features } => {
                out.push(format!("== {}", heading));
                for feature in features {
                    out.push(format!("[{}]", feature.title));
                    out.push(feature.description.clone());
                }
            }
            DetailBlock::FeatureList { heading, features } => {
                if let Some(heading) = heading {
                    out.push(format!("== {}", heading));
                }
                push_entries(&mut out, features);
            }
            DetailBlock::SpeakerPanels(speakers) => {
                for speaker in speakers {
                    out.push(format!("{} ({})", speaker.name, speaker.title));
                    if let Some(role) = speaker.role.as_deref() {
                        out.push(format!("  {}", role));
                    }
                    if speaker.topics().is_empty() {
                        if let Some(details) = speaker.details.as_deref() {
                            out.push(format!("  {}", details));
                        }
                    } else {
                        for topic in speaker.topics() {
                            out.push(format!("  - {}: {}", topic.title, topic.details));
                        }
                    }
                }
            }
            DetailBlock::ResourceList(items) => {
                out.push("== Resources:".to_string());
                out.extend(items.iter().map(|r| format!("  - {}", r)));
            }
            DetailBlock::TakeawayList(items) => {
                out.push("== Key Takeaways:".to_string());
                out.extend(items.iter().map(|t| format!("  - {}", t)));
            }
            DetailBlock::Conclusion(text) => {
                out.push(format!("Conclusion: {}", text));
            }
        }
    }

    out
}

fn push_entries(out: &mut Vec<String>, entries: &[Entry]) {
    for entry in entries {
        out.push(format!("  - {}: {}", entry.title, entry.description));
    }
}

pub(in crate::tui_shell) fn draw_detail(frame: &mut ratatui::Frame, detail: &DetailPopup) {
    let area = frame.area();
    // Never larger than the frame.
    let w = area.width.saturating_sub(6).clamp(20, 90).min(area.width);
    let h = area.height.saturating_sub(4).clamp(8, 30).min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = Rect {
        x,
        y,
        width: w,
        height: h,
    };

    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!("{} [{}]  (esc: close)", detail.title, detail.id));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let lines: Vec<Line> = detail.lines.iter().map(|s| Line::from(s.as_str())).collect();
    let scroll = detail.scroll.min(detail.lines.len().saturating_sub(1)) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        inner,
    );
}

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::{App, ListScreen};
use crate::render::{
    EMPTY_MESSAGE, EMPTY_TITLE, ERROR_MESSAGE, ERROR_TITLE, LOADING_MESSAGE,
};
use crate::source::TalkSource;

pub(in crate::tui_shell) fn draw_list<S: TalkSource>(
    frame: &mut ratatui::Frame,
    area: Rect,
    app: &App<S>,
) {
    let outer = Block::default().borders(Borders::ALL).title(Span::styled(
        format!("{} talks", app.view_state().filter.label()),
        Style::default().fg(Color::Yellow),
    ));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let placeholder = |title: &str, message: &str, color: Color| {
        Paragraph::new(vec![
            Line::from(Span::styled(
                title.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(message.to_string()),
        ])
    };

    match &app.screen {
        ListScreen::Loading => {
            frame.render_widget(placeholder("...", LOADING_MESSAGE, Color::Cyan), inner);
        }
        ListScreen::Failed => {
            frame.render_widget(
                placeholder(ERROR_TITLE, &format!("{} [r] Retry", ERROR_MESSAGE), Color::Red),
                inner,
            );
        }
        ListScreen::Empty => {
            frame.render_widget(placeholder(EMPTY_TITLE, EMPTY_MESSAGE, Color::Gray), inner);
        }
        ListScreen::List(rows) => {
            let items: Vec<ListItem> = rows
                .iter()
                .map(|t| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:<14}", t.date),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::raw(format!("\"{}\" by ", t.title)),
                        Span::styled(
                            t.speaker.display(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  {}", t.kind),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                })
                .collect();

            let mut state = ListState::default();
            state.select(Some(app.selected.min(rows.len().saturating_sub(1))));
            let list = List::new(items).highlight_style(Style::default().bg(Color::DarkGray));
            frame.render_stateful_widget(list, inner, &mut state);
        }
    }
}

use std::io::{self, IsTerminal};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::controller::{ListController, Screen};
use crate::model::TalkRecord;
use crate::source::TalkSource;
use crate::tui::TuiRunOptions;
use crate::view::{Filter, SortAxis, ViewState};
use crate::widgets::Marquee;

mod detail;
use detail::{DetailPopup, draw_detail};

mod list_view;
use list_view::draw_list;

const MARQUEE_STEP: Duration = Duration::from_millis(150);

pub(crate) fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(ListController::new(opts.source), opts.marquee);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

/// Owned copy of the last derived screen. Kept between frames so a random
/// order only changes when an action re-renders.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum ListScreen {
    Loading,
    Failed,
    Empty,
    List(Vec<TalkRecord>),
}

impl From<Screen<'_>> for ListScreen {
    fn from(screen: Screen<'_>) -> Self {
        match screen {
            Screen::Loading => ListScreen::Loading,
            Screen::Failed => ListScreen::Failed,
            Screen::Empty => ListScreen::Empty,
            Screen::List(rows) => ListScreen::List(rows.into_iter().cloned().collect()),
        }
    }
}

pub(super) struct App<S> {
    controller: ListController<S>,
    pub(super) screen: ListScreen,
    pub(super) selected: usize,
    pub(super) detail: Option<DetailPopup>,
    pub(super) marquee: Marquee,
    pub(super) marquee_offset: usize,

    /// Set when the next loop iteration should perform the blocking load,
    /// after the loading frame has been drawn.
    pending_load: bool,
    quit: bool,
}

impl<S: TalkSource> App<S> {
    pub(super) fn new(mut controller: ListController<S>, marquee: Marquee) -> Self {
        let screen = controller.start_loading().into();
        Self {
            controller,
            screen,
            selected: 0,
            detail: None,
            marquee,
            marquee_offset: 0,
            pending_load: true,
            quit: false,
        }
    }

    pub(super) fn view_state(&self) -> ViewState {
        self.controller.view_state()
    }

    pub(super) fn rows(&self) -> &[TalkRecord] {
        match &self.screen {
            ListScreen::List(rows) => rows,
            _ => &[],
        }
    }

    pub(super) fn selected_row(&self) -> Option<&TalkRecord> {
        self.rows().get(self.selected)
    }

    fn set_screen(&mut self, screen: ListScreen) {
        self.screen = screen;
        self.selected = 0;
        self.detail = None;
    }

    pub(super) fn finish_load(&mut self) {
        self.pending_load = false;
        let screen = self.controller.complete_loading().into();
        self.set_screen(screen);
    }

    pub(super) fn retry(&mut self) {
        if self.screen != ListScreen::Failed {
            return;
        }
        let screen = self.controller.start_loading().into();
        self.set_screen(screen);
        self.pending_load = true;
    }

    pub(super) fn toggle_sort(&mut self, axis: SortAxis) {
        if !matches!(self.screen, ListScreen::List(_) | ListScreen::Empty) {
            return;
        }
        let screen = self.controller.toggle_sort(axis).into();
        self.set_screen(screen);
    }

    pub(super) fn select_filter(&mut self, filter: Filter) {
        if !matches!(self.screen, ListScreen::List(_) | ListScreen::Empty) {
            return;
        }
        let screen = self.controller.select_filter(filter).into();
        self.set_screen(screen);
    }

    pub(super) fn cycle_filter(&mut self) {
        let current = self.view_state().filter;
        let idx = Filter::ALL.iter().position(|f| *f == current).unwrap_or(0);
        self.select_filter(Filter::ALL[(idx + 1) % Filter::ALL.len()]);
    }

    pub(super) fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(super) fn move_down(&mut self) {
        let max = self.rows().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    pub(super) fn open_detail(&mut self) {
        if let Some(item) = self.selected_row() {
            self.detail = Some(DetailPopup::new(item));
        }
    }

    fn tick(&mut self) {
        self.marquee_offset = self.marquee_offset.wrapping_add(1);
    }
}

fn run_loop<S: TalkSource>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    let mut last_step = Instant::now();
    loop {
        terminal.draw(|f| draw(f, app)).context("draw")?;
        if app.quit {
            return Ok(());
        }

        if app.pending_load {
            app.finish_load();
            continue;
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }

        if last_step.elapsed() >= MARQUEE_STEP {
            app.tick();
            last_step = Instant::now();
        }
    }
}

pub(super) fn handle_key<S: TalkSource>(app: &mut App<S>, key: KeyEvent) {
    if app.detail.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.detail = None,
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(detail) = app.detail.as_mut() {
                    detail.scroll_up();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(detail) = app.detail.as_mut() {
                    detail.scroll_down();
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Char('d') => app.toggle_sort(SortAxis::Date),
        KeyCode::Char('a') => app.toggle_sort(SortAxis::Alphabetical),
        KeyCode::Char('f') | KeyCode::Tab => app.cycle_filter(),
        KeyCode::Char('1') => app.select_filter(Filter::All),
        KeyCode::Char('2') => app.select_filter(Filter::WeeklyNerd),
        KeyCode::Char('3') => app.select_filter(Filter::GuestTeacher),
        KeyCode::Char('r') => app.retry(),
        _ => {}
    }
}

fn draw<S: TalkSource>(frame: &mut ratatui::Frame, app: &App<S>) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(controls_line(app.view_state()))
            .block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    draw_list(frame, chunks[1], app);

    let hints = match app.screen {
        ListScreen::Failed => "r: retry  q: quit",
        _ => "enter: details  d: date  a: a-z  f/1-3: filter  q: quit",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::Gray))),
        chunks[2],
    );

    let width = chunks[3].width as usize;
    frame.render_widget(
        Paragraph::new(Span::styled(
            app.marquee.frame(app.marquee_offset, width),
            Style::default().fg(Color::Cyan),
        )),
        chunks[3],
    );

    if let Some(detail) = &app.detail {
        draw_detail(frame, detail);
    }
}

/// Header line mirroring the page controls: filters, then sort toggles with
/// their direction.
pub(super) fn controls_line(state: ViewState) -> Line<'static> {
    let active = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let idle = Style::default().fg(Color::Gray);

    let mut spans = vec![
        Span::styled("Talks", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
    ];
    for filter in Filter::ALL {
        let style = if filter == state.filter { active } else { idle };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw(" | "));
    for axis in SortAxis::ALL {
        match state.sort.direction_of(axis) {
            Some(direction) => {
                let arrow = match direction {
                    crate::view::SortDirection::Ascending => "^",
                    crate::view::SortDirection::Descending => "v",
                };
                spans.push(Span::styled(format!(" {} {} ", axis.label(), arrow), active));
            }
            None => spans.push(Span::styled(format!(" {} ", axis.label()), idle)),
        }
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

#[cfg(test)]
#[path = "tests/tui_shell/app_tests.rs"]
mod tests;

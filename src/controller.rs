//! List controller: owns the loaded collection and the view state, and turns
//! user actions into a freshly derived screen.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::model::TalkRecord;
use crate::source::TalkSource;
use crate::view::{Filter, SortAxis, SortState, ViewState, derive_view};

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Failed,
    Ready(Vec<TalkRecord>),
}

/// What the list area shows after an action.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen<'a> {
    Loading,
    Failed,
    /// Loaded, but nothing matches the active filter.
    Empty,
    List(Vec<&'a TalkRecord>),
}

impl<'a> Screen<'a> {
    pub fn rows(&self) -> &[&'a TalkRecord] {
        match self {
            Screen::List(rows) => rows,
            _ => &[],
        }
    }
}

pub struct ListController<S> {
    source: S,
    load: LoadState,
    state: ViewState,
    rng: StdRng,
}

impl<S: TalkSource> ListController<S> {
    pub fn new(source: S) -> Self {
        Self::with_rng(source, StdRng::from_os_rng())
    }

    pub fn with_rng(source: S, rng: StdRng) -> Self {
        Self {
            source,
            load: LoadState::Loading,
            state: ViewState::default(),
            rng,
        }
    }

    pub fn view_state(&self) -> ViewState {
        self.state
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Loaded records in source order; empty until a load succeeds.
    pub fn items(&self) -> &[TalkRecord] {
        match &self.load {
            LoadState::Ready(items) => items,
            _ => &[],
        }
    }

    /// Enter the loading state without reading yet, so callers can show it
    /// before the blocking read.
    pub fn start_loading(&mut self) -> Screen<'_> {
        self.load = LoadState::Loading;
        Screen::Loading
    }

    /// Read the source once. Success resets the sort to random and renders
    /// the list; failure renders the error state.
    pub fn complete_loading(&mut self) -> Screen<'_> {
        match self.source.load() {
            Ok(items) => {
                warn_duplicate_ids(&items);
                self.load = LoadState::Ready(items);
                self.randomize()
            }
            Err(_) => {
                self.load = LoadState::Failed;
                Screen::Failed
            }
        }
    }

    pub fn load(&mut self) -> Screen<'_> {
        self.start_loading();
        self.complete_loading()
    }

    /// Re-invoke the source after a failed load.
    pub fn retry(&mut self) -> Screen<'_> {
        debug!("retrying load");
        self.load()
    }

    /// Activate the sort toggle for `axis`.
    pub fn toggle_sort(&mut self, axis: SortAxis) -> Screen<'_> {
        let next = self.state.sort.toggle(axis);
        debug!(axis = %axis, from = ?self.state.sort, to = ?next, "sort toggled");
        if next == SortState::Random {
            return self.randomize();
        }
        self.state.sort = next;
        self.render()
    }

    pub fn select_filter(&mut self, filter: Filter) -> Screen<'_> {
        debug!(filter = %filter, "filter selected");
        self.state.filter = filter;
        self.render()
    }

    /// Clear the sort and render in random order.
    pub fn randomize(&mut self) -> Screen<'_> {
        self.state.sort = SortState::Random;
        self.render()
    }

    /// Derive the view from the loaded collection. Each call reshuffles when
    /// no sort is active.
    pub fn render(&mut self) -> Screen<'_> {
        match &self.load {
            LoadState::Loading => Screen::Loading,
            LoadState::Failed => Screen::Failed,
            LoadState::Ready(items) => {
                let rows = derive_view(items, &self.state, &mut self.rng);
                if rows.is_empty() {
                    Screen::Empty
                } else {
                    Screen::List(rows)
                }
            }
        }
    }
}

fn warn_duplicate_ids(items: &[TalkRecord]) {
    let mut seen = HashSet::new();
    let dupes: Vec<&str> = items
        .iter()
        .filter(|t| !seen.insert(t.id.as_str()))
        .map(|t| t.id.as_str())
        .collect();
    if !dupes.is_empty() {
        warn!(ids = ?dupes, "duplicate talk ids; detail panels may target the wrong item");
    }
}

#[cfg(test)]
#[path = "tests/controller/controller_tests.rs"]
mod tests;

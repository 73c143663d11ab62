//! View state for the talk list: the active filter and sort selection, the
//! sort toggle state machine, and derivation of the rendered collection.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

use crate::model::{GUEST_TEACHER, TalkRecord, WEEKLY_NERD};

mod collate;
mod dates;
mod derive;

pub use self::collate::locale_cmp;
pub use self::dates::parse_date_obj;
pub use self::derive::derive_view;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    WeeklyNerd,
    GuestTeacher,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::WeeklyNerd, Filter::GuestTeacher];

    /// Token carried by the filter control.
    pub fn token(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::WeeklyNerd => "weekly-nerd",
            Filter::GuestTeacher => "guest-teacher",
        }
    }

    /// Category label matched against `TalkRecord::kind`; `None` for "all".
    pub fn category(self) -> Option<&'static str> {
        match self {
            Filter::All => None,
            Filter::WeeklyNerd => Some(WEEKLY_NERD),
            Filter::GuestTeacher => Some(GUEST_TEACHER),
        }
    }

    pub fn label(self) -> &'static str {
        self.category().unwrap_or("All")
    }

    pub fn matches(self, item: &TalkRecord) -> bool {
        match self.category() {
            None => true,
            Some(category) => item.kind == category,
        }
    }
}

impl FromStr for Filter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|f| f.token() == s)
            .ok_or_else(|| anyhow!("unknown filter '{}' (expected all, weekly-nerd, guest-teacher)", s))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortAxis {
    Date,
    Alphabetical,
}

impl SortAxis {
    pub const ALL: [SortAxis; 2] = [SortAxis::Date, SortAxis::Alphabetical];

    /// Token carried by the sort toggle control.
    pub fn token(self) -> &'static str {
        match self {
            SortAxis::Date => "date",
            SortAxis::Alphabetical => "alpha",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortAxis::Date => "Date",
            SortAxis::Alphabetical => "A-Z",
        }
    }
}

impl FromStr for SortAxis {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortAxis::ALL
            .into_iter()
            .find(|a| a.token() == s)
            .ok_or_else(|| anyhow!("unknown sort '{}' (expected date, alpha)", s))
    }
}

impl fmt::Display for SortAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn class(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortState {
    /// No axis active; every render shuffles.
    Random,
    Sorted {
        axis: SortAxis,
        direction: SortDirection,
    },
}

impl SortState {
    /// Next state after the toggle for `axis` is activated.
    ///
    /// The active axis cycles ascending, descending, random. Activating an axis
    /// that is not active clears the other one and starts at ascending.
    pub fn toggle(self, axis: SortAxis) -> SortState {
        match self {
            SortState::Sorted {
                axis: current,
                direction: SortDirection::Ascending,
            } if current == axis => SortState::Sorted {
                axis,
                direction: SortDirection::Descending,
            },
            SortState::Sorted {
                axis: current,
                direction: SortDirection::Descending,
            } if current == axis => SortState::Random,
            _ => SortState::Sorted {
                axis,
                direction: SortDirection::Ascending,
            },
        }
    }

    pub fn axis(self) -> Option<SortAxis> {
        match self {
            SortState::Random => None,
            SortState::Sorted { axis, .. } => Some(axis),
        }
    }

    /// Direction of `axis` if it is the active one.
    pub fn direction_of(self, axis: SortAxis) -> Option<SortDirection> {
        match self {
            SortState::Sorted {
                axis: current,
                direction,
            } if current == axis => Some(direction),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub sort: SortState,
    pub filter: Filter,
}

impl Default for ViewState {
    /// Newest first, no filter.
    fn default() -> Self {
        Self {
            sort: SortState::Sorted {
                axis: SortAxis::Date,
                direction: SortDirection::Descending,
            },
            filter: Filter::All,
        }
    }
}

#[cfg(test)]
#[path = "tests/view/state_tests.rs"]
mod tests;

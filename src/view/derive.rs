use rand::Rng;
use rand::seq::SliceRandom;

use super::{SortAxis, SortDirection, SortState, ViewState, locale_cmp, parse_date_obj};
use crate::model::TalkRecord;

/// Filter and order `items` for one render. The input is never reordered;
/// the result borrows from it.
///
/// Sorted orders are stable in both directions. `SortState::Random` draws a
/// fresh shuffle from `rng` on every call.
pub fn derive_view<'a, R: Rng + ?Sized>(
    items: &'a [TalkRecord],
    state: &ViewState,
    rng: &mut R,
) -> Vec<&'a TalkRecord> {
    let mut out: Vec<&TalkRecord> = items.iter().filter(|t| state.filter.matches(t)).collect();

    match state.sort {
        SortState::Random => out.shuffle(rng),
        SortState::Sorted { axis, direction } => {
            match axis {
                SortAxis::Date => {
                    let mut keyed: Vec<_> = out
                        .into_iter()
                        .map(|t| (parse_date_obj(&t.date_obj), t))
                        .collect();
                    match direction {
                        SortDirection::Ascending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
                        SortDirection::Descending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
                    }
                    out = keyed.into_iter().map(|(_, t)| t).collect();
                }
                SortAxis::Alphabetical => match direction {
                    SortDirection::Ascending => out.sort_by(|a, b| {
                        locale_cmp(a.speaker.primary(), b.speaker.primary())
                    }),
                    SortDirection::Descending => out.sort_by(|a, b| {
                        locale_cmp(b.speaker.primary(), a.speaker.primary())
                    }),
                },
            }
        }
    }

    out
}

#[cfg(test)]
#[path = "../tests/view/derive_tests.rs"]
mod tests;

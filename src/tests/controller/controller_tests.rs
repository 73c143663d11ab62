use super::*;
use crate::model::{GUEST_TEACHER, WEEKLY_NERD};
use crate::test_support::{
    FlakySource, StaticSource, ids, sample_items, seeded_rng, talk, two_items,
};
use crate::view::SortDirection;

fn ready(items: Vec<TalkRecord>) -> ListController<StaticSource> {
    let mut c = ListController::with_rng(StaticSource(items), seeded_rng());
    c.load();
    c
}

#[test]
fn starts_loading_with_date_descending() {
    let c = ListController::with_rng(StaticSource(two_items()), seeded_rng());
    assert_eq!(c.load_state(), &LoadState::Loading);
    assert_eq!(
        c.view_state().sort,
        SortState::Sorted {
            axis: SortAxis::Date,
            direction: SortDirection::Descending
        }
    );
    assert!(c.items().is_empty());
}

#[test]
fn successful_load_renders_random_order() {
    let mut c = ListController::with_rng(StaticSource(sample_items()), seeded_rng());
    let screen = c.load();
    assert_eq!(screen.rows().len(), 6);
    assert_eq!(c.view_state().sort, SortState::Random);
}

#[test]
fn two_item_end_to_end() {
    let mut c = ready(two_items());

    assert_eq!(ids(c.select_filter(Filter::WeeklyNerd).rows().iter().copied()), vec!["A"]);
    c.select_filter(Filter::All);

    assert_eq!(ids(c.toggle_sort(SortAxis::Date).rows().iter().copied()), vec!["A", "B"]);
    assert_eq!(ids(c.toggle_sort(SortAxis::Date).rows().iter().copied()), vec!["B", "A"]);

    let screen = c.toggle_sort(SortAxis::Date);
    assert_eq!(screen.rows().len(), 2);
    assert_eq!(c.view_state().sort, SortState::Random);
}

#[test]
fn switching_axis_mid_cycle_starts_at_ascending() {
    let mut c = ready(sample_items());
    c.toggle_sort(SortAxis::Date);
    c.toggle_sort(SortAxis::Date);
    let rows = ids(c.toggle_sort(SortAxis::Alphabetical).rows().iter().copied());
    assert_eq!(
        rows,
        vec!["wn-2", "gt-1", "wn-3", "gt-2", "wn-1", "gt-3"]
    );
    assert_eq!(
        c.view_state().sort,
        SortState::Sorted {
            axis: SortAxis::Alphabetical,
            direction: SortDirection::Ascending
        }
    );
}

#[test]
fn filter_keeps_sort_and_sort_keeps_filter() {
    let mut c = ready(sample_items());
    c.toggle_sort(SortAxis::Date);
    let rows = ids(c.select_filter(Filter::GuestTeacher).rows().iter().copied());
    assert_eq!(rows, vec!["gt-2", "gt-3", "gt-1"]);

    let rows = ids(c.toggle_sort(SortAxis::Date).rows().iter().copied());
    assert_eq!(rows, vec!["gt-1", "gt-3", "gt-2"]);
    assert_eq!(c.view_state().filter, Filter::GuestTeacher);
}

#[test]
fn empty_filter_result_is_empty_screen() {
    let mut c = ready(vec![talk("a", WEEKLY_NERD, "2024-01-01", "X")]);
    let screen = c.select_filter(Filter::GuestTeacher);
    assert_eq!(screen, Screen::Empty);
    assert!(screen.rows().is_empty());
}

#[test]
fn empty_collection_is_empty_not_failed() {
    let mut c = ListController::with_rng(StaticSource(Vec::new()), seeded_rng());
    assert_eq!(c.load(), Screen::Empty);
}

#[test]
fn failure_then_retry_goes_straight_to_random_list() {
    let source = FlakySource::new(two_items(), 1);
    let mut c = ListController::with_rng(&source, seeded_rng());

    assert_eq!(c.load(), Screen::Failed);
    assert_eq!(c.load_state(), &LoadState::Failed);
    assert_eq!(source.calls.get(), 1);

    let screen = c.retry();
    assert_eq!(screen.rows().len(), 2);
    assert_eq!(source.calls.get(), 2);
    assert_eq!(c.view_state().sort, SortState::Random);
}

#[test]
fn actions_before_load_keep_loading_screen() {
    let mut c = ListController::with_rng(StaticSource(two_items()), seeded_rng());
    assert_eq!(c.start_loading(), Screen::Loading);
    assert_eq!(c.toggle_sort(SortAxis::Alphabetical), Screen::Loading);
    assert_eq!(c.complete_loading().rows().len(), 2);
}

#[test]
fn failed_state_survives_actions() {
    let source = FlakySource::new(two_items(), 5);
    let mut c = ListController::with_rng(&source, seeded_rng());
    c.load();
    assert_eq!(c.select_filter(Filter::WeeklyNerd), Screen::Failed);
    assert_eq!(source.calls.get(), 1);
}

#[test]
fn loaded_items_keep_source_order() {
    let c = ready(vec![
        talk("z", GUEST_TEACHER, "2024-01-01", "Z"),
        talk("a", WEEKLY_NERD, "2023-01-01", "A"),
    ]);
    assert_eq!(ids(c.items()), vec!["z", "a"]);
}

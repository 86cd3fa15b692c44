// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use pokedraft_app::{
    AddOutcome, Candidate, DropdownPhase, PickerCommand, SelectionStore, SharedSelection,
};
use pokedraft_testkit::{catalog, named, open_picker};

const FILTERS: [&str; 9] = ["", "a", "saur", "pid", "nido", "mon-1", "x", "Pika", "e"];

#[test]
fn every_visible_row_matches_the_filter() {
    let mut picker = open_picker(catalog(150), 8);
    for filter in FILTERS {
        picker.dispatch(PickerCommand::Input(filter.to_owned()));
        assert!(
            picker
                .window()
                .iter()
                .all(|candidate| candidate.name.contains(filter)),
            "filter {filter:?} leaked a non-matching row"
        );
    }
}

#[test]
fn window_is_bounded_and_grows_monotonically() {
    let mut picker = open_picker(catalog(150), 8);
    for filter in FILTERS {
        picker.dispatch(PickerCommand::Input(filter.to_owned()));
        let mut previous = picker.window().len();
        for _ in 0..10 {
            let window = picker.window();
            assert!(window.len() <= window.page() * window.page_size());
            picker.dispatch(PickerCommand::LastRowVisible(false));
            picker.dispatch(PickerCommand::LastRowVisible(true));
            assert!(picker.window().len() >= previous);
            previous = picker.window().len();
        }
    }
}

#[test]
fn scrolling_to_the_end_reveals_every_match() {
    let mut picker = open_picker(catalog(150), 8);
    picker.dispatch(PickerCommand::Input("mon-".to_owned()));
    let expected = picker.window().match_count();
    while picker.window().has_more() {
        picker.dispatch(PickerCommand::LastRowVisible(false));
        picker.dispatch(PickerCommand::LastRowVisible(true));
    }
    assert_eq!(picker.window().len(), expected);
}

#[test]
fn team_invariants_hold_for_mixed_operations() {
    let pool = catalog(12);
    let mut store = SelectionStore::new(4);
    for step in 0..200usize {
        let candidate = pool[(step * 7 + step / 3) % pool.len()].clone();
        if step % 5 == 0 {
            store.remove(&candidate.name);
        } else {
            store.add(candidate);
        }

        assert!(store.len() <= 4);
        let mut names = store
            .members()
            .iter()
            .map(|member| member.name.clone())
            .collect::<Vec<String>>();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), store.len(), "duplicate after step {step}");
    }
}

#[test]
fn fifth_pick_replaces_the_last_slot() {
    let team = SharedSelection::new(4);
    for candidate in named(&["A", "B", "C", "D"]) {
        team.add(candidate);
    }
    assert_eq!(
        team.add(Candidate::new("E")),
        AddOutcome::Replaced {
            evicted: Candidate::new("D")
        }
    );
    assert_eq!(team.names(), vec!["A", "B", "C", "E"]);
}

#[test]
fn wrap_from_last_of_three_returns_to_top() {
    let mut picker = open_picker(named(&["X", "Y", "Z"]), 2);
    picker.dispatch(PickerCommand::ArrowDown);
    picker.dispatch(PickerCommand::ArrowDown);
    assert_eq!(picker.focused_index(), Some(2));

    picker.dispatch(PickerCommand::ArrowDown);
    assert_eq!(picker.focused_index(), Some(0));
    assert_eq!(picker.scroll_offset(), 0);
}

#[test]
fn enter_on_third_row_selects_it() {
    let mut picker = open_picker(named(&["X", "Y", "Z"]), 5);
    picker.dispatch(PickerCommand::Hover(2));
    picker.dispatch(PickerCommand::Enter);
    assert_eq!(picker.team().names(), vec!["Z"]);
    assert_eq!(picker.input(), "Z");
}

#[test]
fn empty_catalog_reports_no_matches() {
    let mut picker = open_picker(Vec::new(), 5);
    picker.dispatch(PickerCommand::Input("char".to_owned()));
    assert!(picker.window().is_empty());
    assert_eq!(picker.phase(), DropdownPhase::NoResults);
}

#[test]
fn team_builds_through_the_picker() {
    let mut picker = open_picker(catalog(40), 6);
    for name in ["pikachu", "charizard", "blastoise", "venusaur", "raichu"] {
        picker.dispatch(PickerCommand::Focus);
        picker.dispatch(PickerCommand::Input(name.to_owned()));
        picker.dispatch(PickerCommand::Enter);
    }
    assert_eq!(
        picker.team().names(),
        vec!["pikachu", "charizard", "blastoise", "raichu"]
    );
}

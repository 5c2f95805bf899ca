// Host-side tests for the pure carousel logic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod carousel {
    include!("../src/carousel.rs");
}

use carousel::*;
use constants::EDGE_TOLERANCE_PX;

#[test]
fn leftmost_position_disables_prev_only() {
    let state = nav_state(0.0, 3000.0, 900.0);
    assert!(!state.prev_enabled);
    assert!(state.next_enabled);
}

#[test]
fn rightmost_position_disables_next_only() {
    // Exactly at the end
    let state = nav_state(2100.0, 3000.0, 900.0);
    assert!(state.prev_enabled);
    assert!(!state.next_enabled);
}

#[test]
fn right_extreme_is_detected_within_one_pixel() {
    let max_scroll = 3000.0 - 900.0;
    let state = nav_state(max_scroll - EDGE_TOLERANCE_PX, 3000.0, 900.0);
    assert!(!state.next_enabled);
    // Just outside the tolerance the control stays enabled
    let state = nav_state(max_scroll - EDGE_TOLERANCE_PX - 0.5, 3000.0, 900.0);
    assert!(state.next_enabled);
}

#[test]
fn intermediate_positions_enable_both_controls() {
    for scroll_left in [1.0, 500.0, 1000.0, 2000.0] {
        let state = nav_state(scroll_left, 3000.0, 900.0);
        assert!(state.prev_enabled, "prev at {scroll_left}");
        assert!(state.next_enabled, "next at {scroll_left}");
    }
}

#[test]
fn non_overflowing_list_disables_both_controls() {
    let state = nav_state(0.0, 800.0, 900.0);
    assert!(!state.prev_enabled);
    assert!(!state.next_enabled);
}

#[test]
fn scroll_step_is_card_width_plus_gap() {
    assert_eq!(scroll_step(280.0, 24.0), 304.0);
    assert_eq!(scroll_step(280.0, 0.0), 280.0);
}

#[test]
fn card_toggles_between_closed_and_open_on_alternate_clicks() {
    let mut model = CarouselModel::new(TUTORS.len());
    assert!(!model.is_expanded(2));
    assert!(model.toggle(2));
    assert!(model.is_expanded(2));
    assert!(!model.toggle(2));
    assert!(!model.is_expanded(2));
    assert!(model.toggle(2));
    assert!(model.is_expanded(2));
}

#[test]
fn toggling_one_card_leaves_the_others_closed() {
    let mut model = CarouselModel::new(TUTORS.len());
    model.toggle(4);
    for i in 0..TUTORS.len() {
        assert_eq!(model.is_expanded(i), i == 4);
    }
}

#[test]
fn out_of_range_toggle_is_ignored() {
    let mut model = CarouselModel::new(3);
    assert!(!model.toggle(99));
    assert!(!model.is_expanded(99));
}

#[test]
fn tutor_list_is_complete() {
    assert_eq!(TUTORS.len(), 10);
    for tutor in TUTORS {
        assert!(!tutor.name.is_empty());
        assert!(!tutor.subject.is_empty());
        assert!(!tutor.image.is_empty());
        assert!(!tutor.bio.is_empty());
    }
}

#[test]
fn card_markup_contains_every_field() {
    let tutor = &TUTORS[0];
    let html = card_markup(tutor);
    assert!(html.contains(tutor.name));
    assert!(html.contains(tutor.subject));
    assert!(html.contains(tutor.image));
    assert!(html.contains(tutor.bio));
    assert!(html.contains("class=\"bio\""));
}

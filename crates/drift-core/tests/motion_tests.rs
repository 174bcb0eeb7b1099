// Host-side tests for the page motion helpers.

use drift_core::{
    follow_step, header_compact, section_is_active, show_scroll_top, tilt_for_pointer, Counter,
    CURSOR_TRAIL_EASE,
};

#[test]
fn follow_step_covers_a_fraction_of_the_gap() {
    assert_eq!(follow_step(0.0, 100.0, CURSOR_TRAIL_EASE), 40.0);
    assert_eq!(follow_step(100.0, 100.0, CURSOR_TRAIL_EASE), 100.0);
    // Works in both directions.
    assert_eq!(follow_step(100.0, 0.0, CURSOR_TRAIL_EASE), 60.0);
}

#[test]
fn follow_step_converges_onto_a_still_target() {
    let mut x = 0.0;
    for _ in 0..50 {
        let next = follow_step(x, 100.0, CURSOR_TRAIL_EASE);
        assert!(next >= x, "trail should move toward the target");
        assert!(next <= 100.0, "trail should not overshoot");
        x = next;
    }
    assert!((x - 100.0).abs() < 1e-3);
}

#[test]
fn tilt_is_flat_at_the_center() {
    let tilt = tilt_for_pointer(150.0, 100.0, 300.0, 200.0);
    assert_eq!(tilt.rotate_x_deg, 0.0);
    assert_eq!(tilt.rotate_y_deg, 0.0);
}

#[test]
fn tilt_reaches_full_angle_at_the_edges() {
    // Pointer at the right edge, vertically centered: yaw only.
    let tilt = tilt_for_pointer(300.0, 100.0, 300.0, 200.0);
    assert_eq!(tilt.rotate_y_deg, 10.0);
    assert_eq!(tilt.rotate_x_deg, 0.0);

    // Top edge: the card leans away from the pointer, so pitch is positive.
    let tilt = tilt_for_pointer(150.0, 0.0, 300.0, 200.0);
    assert_eq!(tilt.rotate_x_deg, 10.0);
    assert_eq!(tilt.rotate_y_deg, 0.0);

    // Left and bottom flip the signs.
    let tilt = tilt_for_pointer(0.0, 200.0, 300.0, 200.0);
    assert_eq!(tilt.rotate_y_deg, -10.0);
    assert_eq!(tilt.rotate_x_deg, -10.0);
}

#[test]
fn counter_lands_exactly_on_its_target() {
    let mut counter = Counter::new(250);
    let mut steps = 0;
    let mut shown = 0;
    while !counter.is_done() {
        shown = counter.step();
        steps += 1;
        assert!(steps <= 10_000, "counter failed to finish");
    }
    assert_eq!(shown, 250);
    // 2000ms at 16ms frames: 125 steps of 2 each.
    assert_eq!(steps, 125);
}

#[test]
fn counter_rounds_up_mid_flight() {
    // Increment is 100/125 = 0.8, so the first frame shows 1, not 0.
    let mut counter = Counter::new(100);
    assert_eq!(counter.step(), 1);
    assert!(!counter.is_done());
}

#[test]
fn counter_display_never_exceeds_target() {
    let mut counter = Counter::new(37);
    let mut last = 0;
    while !counter.is_done() {
        let shown = counter.step();
        assert!(shown <= 37);
        assert!(shown >= last, "display should be monotonic");
        last = shown;
    }
    assert_eq!(last, 37);
}

#[test]
fn zero_target_finishes_immediately() {
    let mut counter = Counter::new(0);
    assert_eq!(counter.step(), 0);
    assert!(counter.is_done());
}

#[test]
fn custom_timing_changes_step_count() {
    // 100ms at 25ms frames: 4 steps.
    let mut counter = Counter::with_timing(40, 100.0, 25.0);
    let mut steps = 0;
    while !counter.is_done() {
        counter.step();
        steps += 1;
        assert!(steps <= 100);
    }
    assert_eq!(steps, 4);
}

#[test]
fn header_compacts_past_its_threshold() {
    assert!(!header_compact(0.0));
    assert!(!header_compact(49.9));
    assert!(header_compact(50.0));
    assert!(header_compact(2000.0));
}

#[test]
fn scroll_top_button_appears_past_its_threshold() {
    assert!(!show_scroll_top(399.9));
    assert!(show_scroll_top(400.0));
}

#[test]
fn section_activation_window_leads_the_viewport() {
    // Section at 500 with height 300: active for y in (380, 680].
    assert!(!section_is_active(380.0, 500.0, 300.0));
    assert!(section_is_active(380.1, 500.0, 300.0));
    assert!(section_is_active(680.0, 500.0, 300.0));
    assert!(!section_is_active(680.1, 500.0, 300.0));
}

#[test]
fn at_most_one_adjacent_section_is_active() {
    // Back-to-back sections: the handoff point belongs to exactly one.
    let (top_a, h_a) = (0.0, 500.0);
    let (top_b, h_b) = (500.0, 400.0);
    for y in [0.0, 100.0, 379.9, 380.1, 500.0, 620.0, 779.9] {
        let both = section_is_active(y, top_a, h_a) && section_is_active(y, top_b, h_b);
        assert!(!both, "sections overlap at y={y}");
    }
}

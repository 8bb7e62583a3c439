// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

const RECT: (f32, f32, f32, f32) = (100.0, 50.0, 800.0, 600.0);

#[test]
fn canvas_center_maps_to_origin() {
    let ndc = client_to_ndc(RECT, 500.0, 350.0).unwrap();
    assert!(ndc.length() < 1e-6);
}

#[test]
fn canvas_corners_map_to_unit_square() {
    let top_left = client_to_ndc(RECT, 100.0, 50.0).unwrap();
    assert_eq!(top_left, Vec2::new(-1.0, 1.0));
    let bottom_right = client_to_ndc(RECT, 900.0, 650.0).unwrap();
    assert_eq!(bottom_right, Vec2::new(1.0, -1.0));
}

#[test]
fn outside_the_canvas_maps_outside_the_range() {
    let ndc = client_to_ndc(RECT, 0.0, 0.0).unwrap();
    assert!(ndc.x < -1.0);
    assert!(ndc.y > 1.0);
}

#[test]
fn collapsed_canvas_has_no_ndc() {
    assert!(client_to_ndc((0.0, 0.0, 0.0, 600.0), 10.0, 10.0).is_none());
    assert!(client_to_ndc((0.0, 0.0, 800.0, 0.0), 10.0, 10.0).is_none());
}

#[test]
fn drag_reports_deltas_only_while_active() {
    let mut drag = DragState::default();
    assert!(drag.move_to(Vec2::new(5.0, 5.0)).is_none());

    drag.begin(Vec2::new(10.0, 10.0));
    assert_eq!(drag.move_to(Vec2::new(13.0, 14.0)), Some(Vec2::new(3.0, 4.0)));
    assert_eq!(drag.move_to(Vec2::new(13.0, 10.0)), Some(Vec2::new(0.0, -4.0)));
    assert!((drag.travelled - 9.0).abs() < 1e-6);

    drag.end();
    assert!(drag.move_to(Vec2::new(50.0, 50.0)).is_none());
}

#[test]
fn short_press_is_still_a_click() {
    let mut drag = DragState::default();
    drag.begin(Vec2::ZERO);
    drag.move_to(Vec2::new(1.0, 1.0));
    drag.end();
    assert!(drag.is_click(4.0));

    drag.begin(Vec2::ZERO);
    drag.move_to(Vec2::new(30.0, 0.0));
    drag.end();
    assert!(!drag.is_click(4.0));
}

#[test]
fn begin_resets_travel() {
    let mut drag = DragState::default();
    drag.begin(Vec2::ZERO);
    drag.move_to(Vec2::new(100.0, 0.0));
    drag.end();
    drag.begin(Vec2::new(100.0, 0.0));
    assert_eq!(drag.travelled, 0.0);
}

#[test]
fn drags_only_swallow_clicks_when_orbiting() {
    let mut drag = DragState::default();
    drag.begin(Vec2::ZERO);
    drag.move_to(Vec2::new(12.0, 0.0));
    drag.end();
    assert!(!drag.click_allowed(true, 4.0));
    assert!(drag.click_allowed(false, 4.0));
}

#[test]
fn pan_gestures() {
    assert!(wants_pan(2, false, false, false));
    assert!(wants_pan(0, true, false, false));
    assert!(wants_pan(0, false, true, false));
    assert!(wants_pan(0, false, false, true));
    assert!(!wants_pan(0, false, false, false));
    assert!(!wants_pan(1, true, false, false));
}

#[test]
fn begin_clears_pan_mode() {
    let mut drag = DragState::default();
    drag.begin_pan(Vec2::ZERO);
    assert!(drag.panning);
    drag.end();
    drag.begin(Vec2::ZERO);
    assert!(!drag.panning);
}

#[test]
fn wheel_collapses_to_sign() {
    assert_eq!(wheel_direction(120.0), 1.0);
    assert_eq!(wheel_direction(-3.5), -1.0);
    assert_eq!(wheel_direction(0.0), 0.0);
}

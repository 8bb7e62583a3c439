// Selection and picking behaviour of the Picker, exercised through the public API.

use diorama_core::{
    Bounds, Camera, Color, ObjectId, ObjectInfo, PickableObject, Picker, Ray, SelectionChange,
};
use glam::{Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

const A: ObjectId = ObjectId(1);
const B: ObjectId = ObjectId(2);
const SELECTED: Color = Color(0x333333);

fn cube_at(id: ObjectId, center: Vec3, emissive: Color) -> PickableObject {
    PickableObject::new(
        id,
        Bounds::aligned_box(center, Vec3::ONE),
        emissive,
        ObjectInfo {
            position: center,
            size: Vec3::ONE,
        },
    )
}

// Camera at +Z looking down -Z; the NDC center ray runs along the Z axis.
fn camera() -> Camera {
    Camera::perspective(60.0, 1.0, 0.1, 100.0).looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO)
}

#[test]
fn empty_registry_never_picks() {
    let picker = Picker::new();
    let cam = camera();
    for ndc in [Vec2::ZERO, Vec2::new(-1.0, 1.0), Vec2::new(0.5, -0.25)] {
        assert_eq!(picker.pick(ndc, &cam), None);
    }
}

#[test]
fn single_hit_returns_that_object() {
    let mut picker = Picker::new();
    picker.register(cube_at(A, Vec3::ZERO, Color::BLACK));
    picker.register(cube_at(B, Vec3::new(6.0, 0.0, 0.0), Color::BLACK));
    assert_eq!(picker.pick(Vec2::ZERO, &camera()), Some(A));
}

#[test]
fn nearest_of_overlapping_hits_wins() {
    // A's near face is 5 units from the eye, B's is 3 units.
    let mut picker = Picker::new();
    picker.register(cube_at(A, Vec3::new(0.0, 0.0, 4.5), Color::BLACK));
    picker.register(cube_at(B, Vec3::new(0.0, 0.0, 6.5), Color::BLACK));

    let hit = picker
        .pick_ray(&camera().ray_from_ndc(Vec2::ZERO))
        .expect("both cubes lie on the center ray");
    assert_eq!(hit.id, B);
    assert!((hit.distance - 3.0).abs() < 1e-4);
    assert_eq!(picker.pick(Vec2::ZERO, &camera()), Some(B));

    let all = picker.pick_all(&camera().ray_from_ndc(Vec2::ZERO));
    let ids: Vec<_> = all.iter().map(|h| h.id).collect();
    assert_eq!(ids, [B, A]);
    assert!((all[1].distance - 5.0).abs() < 1e-4);
}

#[test]
fn selecting_twice_matches_selecting_once() {
    let mut once = Picker::new();
    once.register(cube_at(A, Vec3::ZERO, Color(0x123456)));
    once.select(Some(A));

    let mut twice = Picker::new();
    twice.register(cube_at(A, Vec3::ZERO, Color(0x123456)));
    twice.select(Some(A));
    twice.select(Some(A));

    assert_eq!(once.highlight(A), twice.highlight(A));
    assert_eq!(twice.selected(), Some(A));

    // the captured value is still the original, not the selected highlight
    twice.select(None);
    assert_eq!(twice.highlight(A), Some(Color(0x123456)));
}

#[test]
fn select_then_clear_restores_highlight() {
    let mut picker = Picker::new();
    picker.register(cube_at(A, Vec3::ZERO, Color(0x0a0b0c)));
    picker.select(Some(A));
    assert_eq!(picker.highlight(A), Some(SELECTED));
    picker.select(None);
    assert_eq!(picker.highlight(A), Some(Color(0x0a0b0c)));
    assert_eq!(picker.selected(), None);
}

#[test]
fn switching_selection_restores_the_previous_object() {
    let mut picker = Picker::new();
    picker.register(cube_at(A, Vec3::ZERO, Color(0x000011)));
    picker.register(cube_at(B, Vec3::X * 3.0, Color(0x000022)));

    picker.select(Some(A));
    picker.select(Some(B));

    assert_eq!(picker.highlight(A), Some(Color(0x000011)));
    assert_eq!(picker.highlight(B), Some(SELECTED));
    assert_eq!(picker.selected(), Some(B));
}

#[test]
fn unregistering_the_selection_empties_it() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();

    let mut picker = Picker::new();
    picker.set_selection_hook(move |c| sink.borrow_mut().push(*c));
    picker.register(cube_at(A, Vec3::ZERO, Color(0x000011)));
    picker.select(Some(A));

    let removed = picker.unregister(A).expect("A was registered");
    assert_eq!(removed.emissive, Color(0x000011));
    assert_eq!(picker.selected(), None);
    assert!(picker.is_empty());
    assert_eq!(events.borrow().last(), Some(&SelectionChange::Cleared));

    // a second unregister is a contract violation and a no-op
    assert!(picker.unregister(A).is_none());
}

#[test]
fn rotated_box_is_hit_where_its_rotated_extent_lies() {
    let mut picker = Picker::new();
    picker.register(PickableObject::new(
        A,
        Bounds::Box {
            center: Vec3::ZERO,
            size: Vec3::new(4.0, 1.0, 1.0),
            rotation: glam::Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        },
        Color::BLACK,
        ObjectInfo {
            position: Vec3::ZERO,
            size: Vec3::new(4.0, 1.0, 1.0),
        },
    ));
    // the long axis now lies along Z
    let along_x = Ray::new(Vec3::new(-10.0, 0.0, 1.5), Vec3::X);
    assert!(picker.pick_ray(&along_x).is_some());
    let straight_down = Ray::new(Vec3::new(1.5, 10.0, 0.0), Vec3::NEG_Y);
    assert!(picker.pick_ray(&straight_down).is_none());
}

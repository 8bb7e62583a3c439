//! Campus diorama: grass, roads, four labeled buildings and a sphere looping
//! along the roads.

use glam::Vec3;

use super::{Animation, Demo, DemoKind};
use crate::camera::Camera;
use crate::color::Color;
use crate::constants::SPHERE_TRACK_SECS;
use crate::error::SceneError;
use crate::label::Label;
use crate::orbit::OrbitParams;
use crate::scene::{AmbientLight, DirectionalLight, Lighting, Material, Node, Scene, Shape};
use crate::tween::{Ease, KeyframeTrack, Repeat};

const CLEAR: Color = Color(0xd3d3d3);
const BUILDING_SIZE: Vec3 = Vec3::new(6.0, 3.0, 6.0);
const ROAD_Y: f32 = 0.01; // just above the grass
const SPHERE_RADIUS: f32 = 0.5;

// (x, z) waypoints of the sphere, starting from the origin
const SPHERE_PATH: [(f32, f32); 10] = [
    (0.0, 15.0),
    (-5.0, 15.0),
    (0.0, 12.0),
    (0.0, 2.0),
    (-5.0, 2.0),
    (0.0, 2.0),
    (0.0, -15.0),
    (-5.0, -15.0),
    (0.0, -12.0),
    (0.0, 0.0),
];

pub fn build(aspect: f32) -> Result<Demo, SceneError> {
    let camera = Camera::perspective(75.0, aspect, 0.1, 1000.0)
        .looking_at(Vec3::new(25.0, 25.0, 35.0), Vec3::ZERO);

    let mut scene = Scene::new(
        CLEAR,
        Lighting {
            ambient: AmbientLight {
                color: Color::WHITE,
                intensity: 0.4,
            },
            directional: DirectionalLight {
                color: Color::WHITE,
                intensity: 1.0,
                position: Vec3::new(10.0, 20.0, 10.0),
                cast_shadow: true,
            },
        },
    );

    scene.add(
        Node::new(
            "grass",
            Shape::Plane {
                width: 40.0,
                depth: 40.0,
            },
            Material::lambert(Color::GREEN),
        )
        .with_shadows(false, true),
    );
    for (name, width, depth, x, z) in [
        ("road-vertical", 5.0, 40.0, 0.0, 0.0),
        ("road-west", 18.0, 5.0, -11.0, -6.0),
        ("road-east", 18.0, 5.0, 11.0, -6.0),
    ] {
        scene.add(
            Node::new(name, Shape::Plane { width, depth }, Material::lambert(Color::GRAY))
                .at(Vec3::new(x, ROAD_Y, z)),
        );
    }

    for (text, x, z, material) in [
        ("Institute Of Technology", -5.0, 14.0, Material::phong(Color(0x256cb3))),
        ("IT Support", -5.0, 2.0, Material::phong(Color::WHITE)),
        ("Objekt 305", -5.0, -10.0, Material::standard(Color(0xffff00))),
        ("Lounge", 10.0, 0.0, Material::phong(Color(0x421d1a))),
    ] {
        scene.add(
            Node::new(text, Shape::Box { size: BUILDING_SIZE }, material)
                .at(Vec3::new(x, BUILDING_SIZE.y / 2.0, z))
                .with_shadows(true, true)
                .with_label(Label::new(text)),
        );
    }

    let start = Vec3::new(0.0, SPHERE_RADIUS, 0.0);
    let sphere = scene.add(
        Node::new(
            "sphere",
            Shape::Sphere {
                radius: SPHERE_RADIUS,
            },
            Material::standard(Color::RED),
        )
        .at(start)
        .with_shadows(true, false),
    );
    let track = KeyframeTrack::new(
        start,
        SPHERE_PATH
            .iter()
            .map(|&(x, z)| Vec3::new(x, start.y, z))
            .collect(),
        SPHERE_TRACK_SECS,
        Repeat::Infinite,
        Ease::Linear,
    )?;

    Ok(Demo {
        kind: DemoKind::Campus,
        scene,
        camera,
        pick_targets: Vec::new(),
        animations: vec![Animation {
            node: sphere,
            track,
        }],
        spinners: Vec::new(),
        orbit: Some(OrbitParams::default()),
    })
}

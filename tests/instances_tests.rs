// Host-side tests for instance packing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod instances {
    include!("../src/render/instances.rs");
}

use diorama_core::{DemoKind, InspectorParams, MeshKind, Scene};
use instances::*;

fn campus() -> Scene {
    DemoKind::Campus
        .build(1.5, &InspectorParams::default())
        .unwrap()
        .scene
}

fn covered(ranges: &[(MeshKind, std::ops::Range<u32>)]) -> u32 {
    ranges.iter().map(|(_, r)| r.end - r.start).sum()
}

#[test]
fn casters_are_packed_after_every_node() {
    let scene = campus();
    let batches = batch_scene(&scene, true);
    let casters = scene.iter().filter(|(_, n)| n.cast_shadow).count() as u32;

    assert_eq!(covered(&batches.ranges), scene.len() as u32);
    assert_eq!(covered(&batches.caster_ranges), casters);
    assert_eq!(casters, 5);
    assert_eq!(batches.instances.len() as u32, scene.len() as u32 + casters);

    let first_caster = batches.caster_ranges[0].1.start;
    assert_eq!(first_caster, scene.len() as u32);
}

#[test]
fn no_caster_instances_without_shadows() {
    let scene = campus();
    let batches = batch_scene(&scene, false);
    assert!(batches.caster_ranges.is_empty());
    assert_eq!(batches.instances.len(), scene.len());
}

#[test]
fn receive_flag_rides_in_the_normal_matrix() {
    let scene = campus();
    let grass = scene.node(scene.find("grass").unwrap()).unwrap();
    assert_eq!(InstanceRaw::from_node(grass).normal[0][3], 1.0);

    let (_, sphere) = scene
        .iter()
        .find(|(_, n)| n.cast_shadow && !n.receive_shadow)
        .unwrap();
    assert_eq!(InstanceRaw::from_node(sphere).normal[0][3], 0.0);
}

//! Explicit owner of everything a running demo mutates.
//!
//! The host builds one `SceneContext` per rendering surface and passes it to
//! both the pointer handlers and the frame loop.

use std::time::Duration;

use fnv::FnvHashMap;
use glam::{Quat, Vec2};

use crate::camera::Camera;
use crate::demo::{node_bounds, Animation, Demo, DemoKind, Spinner};
use crate::orbit::OrbitControls;
use crate::picker::{ObjectId, Picker, SelectionChange};
use crate::scene::{NodeId, Scene};

pub struct SceneContext {
    kind: DemoKind,
    scene: Scene,
    camera: Camera,
    picker: Picker,
    node_of: FnvHashMap<ObjectId, NodeId>,
    object_of: FnvHashMap<NodeId, ObjectId>,
    animations: Vec<Animation>,
    spinners: Vec<Spinner>,
    orbit: Option<OrbitControls>,
    elapsed: Duration,
}

impl SceneContext {
    pub fn new(demo: Demo) -> Self {
        Self::with_picker(demo, Picker::new())
    }

    /// Build around a preconfigured picker (custom highlight, hook).
    pub fn with_picker(demo: Demo, mut picker: Picker) -> Self {
        let mut node_of = FnvHashMap::default();
        let mut object_of = FnvHashMap::default();
        for target in demo.pick_targets {
            let id = picker.register(target.object);
            node_of.insert(id, target.node);
            object_of.insert(target.node, id);
        }
        let orbit = demo
            .orbit
            .map(|params| OrbitControls::from_camera(&demo.camera, params));
        log::info!(
            "{} ready: {} nodes, {} pickable",
            demo.kind,
            demo.scene.len(),
            picker.len()
        );
        Self {
            kind: demo.kind,
            scene: demo.scene,
            camera: demo.camera,
            picker,
            node_of,
            object_of,
            animations: demo.animations,
            spinners: demo.spinners,
            orbit,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance animations by `dt` and keep picker bounds in step.
    pub fn update(&mut self, dt: Duration) {
        self.elapsed += dt;

        for anim in &self.animations {
            if let Some(node) = self.scene.node_mut(anim.node) {
                node.transform.position = anim.track.sample(self.elapsed);
            }
        }

        let dt_sec = dt.as_secs_f32();
        for spinner in &self.spinners {
            if let Some(node) = self.scene.node_mut(spinner.node) {
                let step = Quat::from_rotation_y(spinner.rad_per_sec * dt_sec);
                node.transform.rotation = (step * node.transform.rotation).normalize();
            }
        }

        let moved = self
            .animations
            .iter()
            .map(|a| a.node)
            .chain(self.spinners.iter().map(|s| s.node));
        for node_id in moved {
            let (Some(&id), Some(node)) = (self.object_of.get(&node_id), self.scene.node(node_id))
            else {
                continue;
            };
            self.picker.set_bounds(id, node_bounds(node));
        }

        if let Some(orbit) = self.orbit.as_mut() {
            orbit.update(&mut self.camera);
        }
    }

    /// Select whatever is under `ndc`, or clear the selection on a miss.
    pub fn click(&mut self, ndc: Vec2) -> Option<ObjectId> {
        let hit = self.picker.pick(ndc, &self.camera);
        self.picker.select(hit);
        self.sync_highlights();
        self.picker.selected()
    }

    /// Stop treating `id` as pickable. Returns false for unknown ids.
    pub fn unregister(&mut self, id: ObjectId) -> bool {
        let Some(object) = self.picker.unregister(id) else {
            return false;
        };
        if let Some(node_id) = self.node_of.remove(&id) {
            self.object_of.remove(&node_id);
            if let Some(node) = self.scene.node_mut(node_id) {
                node.material.emissive = object.emissive;
            }
        }
        true
    }

    /// Match the camera to a new surface size. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.set_aspect(width as f32 / height as f32);
    }

    pub fn set_selection_hook(&mut self, hook: impl FnMut(&SelectionChange) + 'static) {
        self.picker.set_selection_hook(hook);
    }

    pub fn kind(&self) -> DemoKind {
        self.kind
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    pub fn orbit_mut(&mut self) -> Option<&mut OrbitControls> {
        self.orbit.as_mut()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn node_for(&self, id: ObjectId) -> Option<NodeId> {
        self.node_of.get(&id).copied()
    }

    fn sync_highlights(&mut self) {
        for (&id, &node_id) in &self.node_of {
            let (Some(color), Some(node)) = (self.picker.highlight(id), self.scene.node_mut(node_id))
            else {
                continue;
            };
            node.material.emissive = color;
        }
    }
}

//! Scene builders for the two demos.
//!
//! A builder returns a [`Demo`]: the scene plus everything the host needs to
//! animate it and to wire picking. Nothing here keeps global state; the host
//! turns a `Demo` into a [`SceneContext`](crate::context::SceneContext).

pub mod campus;
pub mod inspector;

use std::fmt;
use std::str::FromStr;

use glam::Vec3;

use crate::camera::Camera;
use crate::error::SceneError;
use crate::orbit::OrbitParams;
use crate::picker::{ObjectId, ObjectInfo, PickableObject};
use crate::picking::Bounds;
use crate::scene::{Node, NodeId, Scene, Shape};
use crate::tween::KeyframeTrack;

pub use inspector::InspectorParams;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DemoKind {
    Campus,
    #[default]
    Inspector,
}

impl DemoKind {
    pub fn build(self, aspect: f32, params: &InspectorParams) -> Result<Demo, SceneError> {
        match self {
            DemoKind::Campus => campus::build(aspect),
            DemoKind::Inspector => Ok(inspector::build(aspect, params)),
        }
    }
}

impl FromStr for DemoKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "campus" => Ok(DemoKind::Campus),
            "inspector" => Ok(DemoKind::Inspector),
            other => Err(SceneError::UnknownDemo(other.to_string())),
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DemoKind::Campus => "campus",
            DemoKind::Inspector => "inspector",
        })
    }
}

/// A node driven along a keyframe track.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub node: NodeId,
    pub track: KeyframeTrack,
}

/// A node spinning about the world Y axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spinner {
    pub node: NodeId,
    pub rad_per_sec: f32,
}

/// A pickable object and the scene node it stands for.
#[derive(Clone, Debug, PartialEq)]
pub struct PickTarget {
    pub object: PickableObject,
    pub node: NodeId,
}

#[derive(Clone, Debug)]
pub struct Demo {
    pub kind: DemoKind,
    pub scene: Scene,
    pub camera: Camera,
    pub pick_targets: Vec<PickTarget>,
    pub animations: Vec<Animation>,
    pub spinners: Vec<Spinner>,
    /// Orbit controls are attached when this is set.
    pub orbit: Option<OrbitParams>,
}

/// Bounds matching a node's current placement.
pub fn node_bounds(node: &Node) -> Bounds {
    match node.shape {
        Shape::Box { size } => Bounds::Box {
            center: node.transform.position,
            size,
            rotation: node.transform.rotation,
        },
        Shape::Plane { width, depth } => Bounds::Box {
            center: node.transform.position,
            size: Vec3::new(width, 0.0, depth),
            rotation: node.transform.rotation,
        },
        Shape::Sphere { radius } => Bounds::Sphere {
            center: node.transform.position,
            radius,
        },
    }
}

/// Picker entry for `node`, carrying its current emissive and its display info.
pub fn pickable(id: ObjectId, node: &Node) -> PickableObject {
    let info = ObjectInfo {
        position: node.transform.position,
        size: match node.shape {
            Shape::Box { size } => size,
            other => other.scale(),
        },
    };
    PickableObject::new(id, node_bounds(node), node.material.emissive, info)
}

//! Retained-mode scene description consumed by the renderer.
//!
//! The scene is a flat list of nodes. Nothing here talks to the GPU; the web
//! frontend walks the list each frame and builds instance data from it.

use glam::{Mat4, Quat, Vec3};

use crate::color::Color;
use crate::constants::{SHADOW_FAR, SHADOW_NEAR};
use crate::label::Label;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Width, height, depth.
    Box { size: Vec3 },
    /// Horizontal plane lying in XZ, facing +Y.
    Plane { width: f32, depth: f32 },
    Sphere { radius: f32 },
}

impl Shape {
    /// Scale applied to the unit mesh of this shape.
    pub fn scale(&self) -> Vec3 {
        match *self {
            Shape::Box { size } => size,
            Shape::Plane { width, depth } => Vec3::new(width, 1.0, depth),
            Shape::Sphere { radius } => Vec3::splat(radius * 2.0),
        }
    }
}

/// Shading model, approximating the three material flavours the demos use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shading {
    /// Diffuse only.
    #[default]
    Lambert,
    /// Diffuse plus a sharp specular lobe.
    Phong,
    /// Diffuse plus a broad, dim specular lobe.
    Standard,
}

impl Shading {
    /// Specular exponent and strength fed to the shader.
    pub fn specular(self) -> (f32, f32) {
        match self {
            Shading::Lambert => (1.0, 0.0),
            Shading::Phong => (30.0, 0.5),
            Shading::Standard => (8.0, 0.15),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub emissive: Color,
    pub shading: Shading,
}

impl Material {
    pub fn lambert(color: Color) -> Self {
        Self {
            color,
            emissive: Color::BLACK,
            shading: Shading::Lambert,
        }
    }

    pub fn phong(color: Color) -> Self {
        Self {
            shading: Shading::Phong,
            ..Self::lambert(color)
        }
    }

    pub fn standard(color: Color) -> Self {
        Self {
            shading: Shading::Standard,
            ..Self::lambert(color)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn matrix(&self, scale: Vec3) -> Mat4 {
        Mat4::from_scale_rotation_translation(scale, self.rotation, self.position)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub name: String,
    pub shape: Shape,
    pub transform: Transform,
    pub material: Material,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub label: Option<Label>,
}

impl Node {
    pub fn new(name: impl Into<String>, shape: Shape, material: Material) -> Self {
        Self {
            name: name.into(),
            shape,
            transform: Transform::default(),
            material,
            cast_shadow: false,
            receive_shadow: false,
            label: None,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.transform.matrix(self.shape.scale())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    /// The light shines from this point toward the origin.
    pub position: Vec3,
    pub cast_shadow: bool,
}

impl DirectionalLight {
    /// Unit vector pointing from the surface toward the light.
    pub fn direction_to_light(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }

    /// Orthographic light-space transform for the shadow map: a camera at
    /// `position` looking at the origin, covering `half_extent` on each side.
    pub fn shadow_view_projection(&self, half_extent: f32) -> Mat4 {
        let dir = self.direction_to_light();
        let up = if dir.y.abs() > 0.99 { Vec3::Z } else { Vec3::Y };
        let view = Mat4::look_at_rh(self.position, Vec3::ZERO, up);
        let proj = Mat4::orthographic_rh(
            -half_extent,
            half_extent,
            -half_extent,
            half_extent,
            SHADOW_NEAR,
            SHADOW_FAR,
        );
        proj * view
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: Color::WHITE,
                intensity: 0.5,
            },
            directional: DirectionalLight {
                color: Color::WHITE,
                intensity: 1.0,
                position: Vec3::new(1.0, 1.0, 1.0),
                cast_shadow: false,
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub background: Color,
    pub lighting: Lighting,
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new(background: Color, lighting: Lighting) -> Self {
        Self {
            background,
            lighting,
            nodes: Vec::new(),
        }
    }

    pub fn add(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True when the light casts shadows and at least one node casts one.
    pub fn casts_shadows(&self) -> bool {
        self.lighting.directional.cast_shadow && self.nodes.iter().any(|n| n.cast_shadow)
    }
}

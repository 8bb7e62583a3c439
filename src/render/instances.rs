// CPU-side vertex and instance data for the mesh, shadow and sprite passes.

use std::ops::Range;

use diorama_core::{Camera, Label, MeshKind, Node, Scene, Vertex};
use glam::{Mat3, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    pub(crate) model: [[f32; 4]; 4],
    /// Normal matrix columns; `normal[0][3]` is 1.0 on shadow receivers.
    pub(crate) normal: [[f32; 4]; 3],
    /// Linear base color, shininess in `w`.
    pub(crate) color: [f32; 4],
    /// Linear emissive, specular strength in `w`.
    pub(crate) emissive: [f32; 4],
}

impl InstanceRaw {
    pub fn from_node(node: &Node) -> Self {
        let model = node.model_matrix();
        let n = Mat3::from_mat4(model).inverse().transpose();
        let (shininess, strength) = node.material.shading.specular();
        let [r, g, b] = node.material.color.to_linear();
        let [er, eg, eb] = node.material.emissive.to_linear();
        Self {
            model: model.to_cols_array_2d(),
            normal: [
                n.x_axis.extend(if node.receive_shadow { 1.0 } else { 0.0 }).to_array(),
                n.y_axis.extend(0.0).to_array(),
                n.z_axis.extend(0.0).to_array(),
            ],
            color: [r, g, b, shininess],
            emissive: [er, eg, eb, strength],
        }
    }

    const ATTRIBS: [wgpu::VertexAttribute; 9] = wgpu::vertex_attr_array![
        2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4,
        6 => Float32x4, 7 => Float32x4, 8 => Float32x4,
        9 => Float32x4, 10 => Float32x4,
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

const VERTEX_ATTRIBS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

pub fn vertex_desc() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBS,
    }
}

/// All node instances packed by mesh, with the instance range of each mesh.
pub(crate) struct Batches {
    pub instances: Vec<InstanceRaw>,
    pub ranges: Vec<(MeshKind, Range<u32>)>,
    /// Shadow casters, packed after the regular instances.
    pub caster_ranges: Vec<(MeshKind, Range<u32>)>,
}

pub(crate) fn batch_scene(scene: &Scene, with_casters: bool) -> Batches {
    let mut instances = Vec::with_capacity(scene.len());
    let ranges = append_by_mesh(&mut instances, scene, |_| true);
    let caster_ranges = if with_casters {
        append_by_mesh(&mut instances, scene, |n| n.cast_shadow)
    } else {
        Vec::new()
    };
    Batches {
        instances,
        ranges,
        caster_ranges,
    }
}

fn append_by_mesh(
    instances: &mut Vec<InstanceRaw>,
    scene: &Scene,
    keep: impl Fn(&Node) -> bool,
) -> Vec<(MeshKind, Range<u32>)> {
    let mut ranges = Vec::with_capacity(MeshKind::ALL.len());
    for kind in MeshKind::ALL {
        let start = instances.len() as u32;
        instances.extend(
            scene
                .iter()
                .filter(|(_, n)| MeshKind::of(&n.shape) == kind && keep(n))
                .map(|(_, n)| InstanceRaw::from_node(n)),
        );
        let end = instances.len() as u32;
        if end > start {
            ranges.push((kind, start..end));
        }
    }
    ranges
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SpriteVertex {
    position: [f32; 3],
    uv: [f32; 2],
}

impl SpriteVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Four camera-facing corners for a label above a node at `parent`.
pub(crate) fn sprite_quad(label: &Label, parent: Vec3, camera: &Camera) -> [SpriteVertex; 4] {
    let center = label.anchor(parent);
    let (right, up) = camera.right_up();
    let half_w = right * label.style.sprite_scale.x * 0.5;
    let half_h = up * label.style.sprite_scale.y * 0.5;
    let corner = |p: Vec3, uv: [f32; 2]| SpriteVertex {
        position: p.to_array(),
        uv,
    };
    [
        corner(center - half_w - half_h, [0.0, 1.0]),
        corner(center + half_w - half_h, [1.0, 1.0]),
        corner(center + half_w + half_h, [1.0, 0.0]),
        corner(center - half_w + half_h, [0.0, 0.0]),
    ]
}

pub(crate) fn sprite_indices(count: usize) -> Vec<u32> {
    (0..count as u32)
        .flat_map(|i| {
            let b = i * 4;
            [b, b + 1, b + 2, b, b + 2, b + 3]
        })
        .collect()
}

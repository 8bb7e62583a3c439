//! Unit meshes for the three scene shapes.
//!
//! Every mesh is centered on the origin with extent 1 along each used axis;
//! node transforms scale them to size (see [`Shape::scale`]). Triangles wind
//! counter-clockwise when seen from outside.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::scene::Shape;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeshKind {
    Cube,
    Plane,
    Sphere,
}

impl MeshKind {
    pub const ALL: [MeshKind; 3] = [MeshKind::Cube, MeshKind::Plane, MeshKind::Sphere];

    pub fn of(shape: &Shape) -> Self {
        match shape {
            Shape::Box { .. } => MeshKind::Cube,
            Shape::Plane { .. } => MeshKind::Plane,
            Shape::Sphere { .. } => MeshKind::Sphere,
        }
    }

    pub fn build(self) -> Mesh {
        match self {
            MeshKind::Cube => Mesh::cube(),
            MeshKind::Plane => Mesh::plane(),
            MeshKind::Sphere => Mesh::sphere(32, 32),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// 1x1x1 cube.
    pub fn cube() -> Self {
        let mut mesh = Self::default();
        for normal in [
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::Z,
            Vec3::NEG_Z,
        ] {
            mesh.push_quad(normal * 0.5, normal);
        }
        mesh
    }

    /// 1x1 quad in the XZ plane facing +Y.
    pub fn plane() -> Self {
        let mut mesh = Self::default();
        mesh.push_quad(Vec3::ZERO, Vec3::Y);
        mesh
    }

    /// UV sphere of diameter 1.
    pub fn sphere(stacks: u32, slices: u32) -> Self {
        let stacks = stacks.max(2);
        let slices = slices.max(3);
        let mut mesh = Self::default();
        for i in 0..=stacks {
            let phi = std::f32::consts::PI * i as f32 / stacks as f32;
            for j in 0..=slices {
                let theta = std::f32::consts::TAU * j as f32 / slices as f32;
                let n = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
                mesh.vertices.push(Vertex::new(n * 0.5, n));
            }
        }
        let row = slices + 1;
        for i in 0..stacks {
            for j in 0..slices {
                let a = i * row + j;
                let b = a + row;
                mesh.indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
            }
        }
        mesh
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    // u x v == normal keeps the winding counter-clockwise from outside
    fn push_quad(&mut self, center: Vec3, normal: Vec3) {
        let u = Vec3::new(normal.y, normal.z, normal.x) * 0.5;
        let v = normal.cross(u);
        let base = self.vertices.len() as u32;
        for corner in [center - u - v, center + u - v, center + u + v, center - u + v] {
            self.vertices.push(Vertex::new(corner, normal));
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_outward_winding(mesh: &Mesh) {
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
            let pa = Vec3::from(a.position);
            let face = (Vec3::from(b.position) - pa).cross(Vec3::from(c.position) - pa);
            if face.length_squared() < 1e-12 {
                continue; // collapsed triangle at a sphere pole
            }
            assert!(face.dot(Vec3::from(a.normal)) > 0.0);
        }
    }

    #[test]
    fn cube_has_six_faces_within_unit_extent() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.index_count(), 36);
        for v in &cube.vertices {
            assert!(v.position.iter().all(|c| c.abs() <= 0.5 + 1e-6));
        }
        assert_outward_winding(&cube);
    }

    #[test]
    fn plane_faces_up() {
        let plane = Mesh::plane();
        assert!(plane.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
        assert!(plane.vertices.iter().all(|v| v.position[1] == 0.0));
        assert_outward_winding(&plane);
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let sphere = Mesh::sphere(8, 12);
        for v in &sphere.vertices {
            assert!((Vec3::from(v.position).length() - 0.5).abs() < 1e-5);
        }
        assert!(sphere.indices.iter().all(|&i| (i as usize) < sphere.vertex_count()));
        assert_outward_winding(&sphere);
    }

    #[test]
    fn mesh_kind_follows_shape() {
        assert_eq!(MeshKind::of(&Shape::Sphere { radius: 2.0 }), MeshKind::Sphere);
        assert_eq!(
            MeshKind::of(&Shape::Plane {
                width: 1.0,
                depth: 1.0
            }),
            MeshKind::Plane
        );
    }
}

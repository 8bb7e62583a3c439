//! Inspector scene: randomly placed boxes that slowly spin and can be clicked.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{pickable, Demo, DemoKind, PickTarget, Spinner};
use crate::camera::Camera;
use crate::color::Color;
use crate::constants::{
    CUBE_SPIN_RAD_PER_SEC, INSPECTOR_CUBE_COUNT, INSPECTOR_DEFAULT_SEED, INSPECTOR_SIZE_RANGE,
    INSPECTOR_XZ_RANGE, INSPECTOR_Y_RANGE,
};
use crate::picker::ObjectId;
use crate::scene::{AmbientLight, DirectionalLight, Lighting, Material, Node, Scene, Shape};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InspectorParams {
    pub cube_count: usize,
    pub seed: u64,
    /// Half-open range for each box dimension.
    pub size_range: (f32, f32),
    pub xz_range: (f32, f32),
    pub y_range: (f32, f32),
    pub spin_rad_per_sec: f32,
}

impl Default for InspectorParams {
    fn default() -> Self {
        Self {
            cube_count: INSPECTOR_CUBE_COUNT,
            seed: INSPECTOR_DEFAULT_SEED,
            size_range: INSPECTOR_SIZE_RANGE,
            xz_range: INSPECTOR_XZ_RANGE,
            y_range: INSPECTOR_Y_RANGE,
            spin_rad_per_sec: CUBE_SPIN_RAD_PER_SEC,
        }
    }
}

pub fn build(aspect: f32, params: &InspectorParams) -> Demo {
    let camera = Camera::perspective(70.0, aspect, 0.1, 1000.0)
        .looking_at(Vec3::new(0.0, 6.0, 14.0), Vec3::ZERO);

    let mut scene = Scene::new(
        Color(0x111111),
        Lighting {
            ambient: AmbientLight {
                color: Color::WHITE,
                intensity: 0.6,
            },
            directional: DirectionalLight {
                color: Color::WHITE,
                intensity: 0.8,
                position: Vec3::new(5.0, 10.0, 7.0),
                cast_shadow: false,
            },
        },
    );
    scene.add(
        Node::new(
            "ground",
            Shape::Plane {
                width: 60.0,
                depth: 60.0,
            },
            Material::standard(Color(0x222222)),
        )
        .at(Vec3::new(0.0, -1.5, 0.0)),
    );

    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut pick_targets = Vec::with_capacity(params.cube_count);
    let mut spinners = Vec::with_capacity(params.cube_count);
    for i in 0..params.cube_count {
        let size = Vec3::new(
            uniform(&mut rng, params.size_range),
            uniform(&mut rng, params.size_range),
            uniform(&mut rng, params.size_range),
        );
        let color = Color::from_rgb_f32(rng.gen(), rng.gen(), rng.gen());
        let position = Vec3::new(
            uniform(&mut rng, params.xz_range),
            uniform(&mut rng, params.y_range),
            uniform(&mut rng, params.xz_range),
        );

        let node = Node::new(format!("cube-{i}"), Shape::Box { size }, Material::standard(color))
            .at(position);
        let object = pickable(ObjectId(i as u32), &node);
        let node_id = scene.add(node);

        spinners.push(Spinner {
            node: node_id,
            rad_per_sec: params.spin_rad_per_sec,
        });
        pick_targets.push(PickTarget {
            object,
            node: node_id,
        });
    }
    log::debug!(
        "inspector layout: {} cubes from seed {}",
        params.cube_count,
        params.seed
    );

    Demo {
        kind: DemoKind::Inspector,
        scene,
        camera,
        pick_targets,
        animations: Vec::new(),
        spinners,
        orbit: None,
    }
}

fn uniform(rng: &mut StdRng, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

//! Ray casting against simple bounding volumes.
//!
//! Distances returned by the intersection tests are measured along the
//! normalized ray direction, so hits from different volumes can be compared
//! directly.

use glam::{Quat, Vec3};

/// World-space ray with a unit-length direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab test. Returns the entry distance when the origin is outside the
    /// box, the exit distance when it is inside, and `None` on a miss or when
    /// the box lies entirely behind the origin.
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let inv = Vec3::new(
            safe_recip(self.direction.x),
            safe_recip(self.direction.y),
            safe_recip(self.direction.z),
        );
        let t1 = (aabb.min - self.origin) * inv;
        let t2 = (aabb.max - self.origin) * inv;
        let t_near = t1.min(t2).max_element();
        let t_far = t1.max(t2).min_element();

        if t_far < t_near || t_far < 0.0 {
            return None;
        }
        Some(if t_near >= 0.0 { t_near } else { t_far })
    }

    /// Nearest non-negative intersection with a sphere.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.dot(oc) - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sq = disc.sqrt();
        let near = -b - sq;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + sq;
        (far >= 0.0).then_some(far)
    }
}

#[inline]
fn safe_recip(v: f32) -> f32 {
    if v.abs() > f32::EPSILON {
        1.0 / v
    } else {
        f32::MAX.copysign(v)
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Geometry a pickable object is hit-tested against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bounds {
    /// Box of `size` centered at `center`, rotated by `rotation` about its center.
    Box {
        center: Vec3,
        size: Vec3,
        rotation: Quat,
    },
    Sphere { center: Vec3, radius: f32 },
}

impl Bounds {
    pub fn aligned_box(center: Vec3, size: Vec3) -> Self {
        Bounds::Box {
            center,
            size,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn center(&self) -> Vec3 {
        match *self {
            Bounds::Box { center, .. } | Bounds::Sphere { center, .. } => center,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match *self {
            Bounds::Box {
                center,
                size,
                rotation,
            } => {
                // rotations preserve length, so local distances equal world distances
                let inv = rotation.inverse();
                let local = Ray {
                    origin: inv * (ray.origin - center),
                    direction: (inv * ray.direction).normalize(),
                };
                local.intersect_aabb(&Aabb::from_center_size(Vec3::ZERO, size))
            }
            Bounds::Sphere { center, radius } => ray.intersect_sphere(center, radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn aabb_hit_from_outside_returns_entry() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        let t = ray.intersect_aabb(&aabb).unwrap();
        assert!((t - 4.5).abs() < 1e-5);
    }

    #[test]
    fn aabb_behind_origin_misses() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        assert!(ray.intersect_aabb(&aabb).is_none());
    }

    #[test]
    fn aabb_inside_returns_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
        let t = ray.intersect_aabb(&aabb).unwrap();
        assert!((t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn axis_parallel_ray_outside_slab_misses() {
        let ray = Ray::new(Vec3::new(3.0, 0.0, 5.0), Vec3::NEG_Z);
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        assert!(ray.intersect_aabb(&aabb).is_none());
    }

    #[test]
    fn sphere_inside_returns_far_root() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::X);
        let t = ray.intersect_sphere(Vec3::new(0.0, 0.0, 5.0), 3.0).unwrap();
        assert!((t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn sphere_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    }

    #[test]
    fn quarter_turn_box_narrows_along_x() {
        let size = Vec3::new(2.0, 1.0, 0.2);
        let off_center = Ray::new(Vec3::new(0.8, 0.0, 5.0), Vec3::NEG_Z);
        let aligned = Bounds::aligned_box(Vec3::ZERO, size);
        assert!(aligned.intersect(&off_center).is_some());

        let rotated = Bounds::Box {
            center: Vec3::ZERO,
            size,
            rotation: Quat::from_rotation_y(FRAC_PI_2),
        };
        // After a quarter turn the box is 0.2 wide along X.
        assert!(rotated.intersect(&off_center).is_none());
        let centered = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let t = rotated.intersect(&centered).unwrap();
        assert!((t - 4.0).abs() < 1e-4);
    }

    #[test]
    fn aabb_new_orders_corners() {
        let aabb = Aabb::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(aabb.min, Vec3::ZERO);
        assert_eq!(aabb.max, Vec3::ONE);
        assert!(aabb.contains(Vec3::splat(0.5)));
        assert!(!aabb.contains(Vec3::new(1.5, 0.5, 0.5)));
    }
}

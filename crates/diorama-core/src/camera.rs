//! Perspective camera and the viewport used to turn pointer positions into
//! normalized device coordinates.
//!
//! These types avoid platform APIs so both the web frontend and host-side
//! tests can use them.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::error::SceneError;
use crate::picking::Ray;

/// Right-handed camera with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn perspective(fovy_degrees: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: fovy_degrees.to_radians(),
            znear,
            zfar,
        }
    }

    pub fn looking_at(mut self, eye: Vec3, target: Vec3) -> Self {
        self.eye = eye;
        self.target = target;
        self
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates (+Y up).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far = far.truncate() / far.w;
        Ray::new(self.eye, far - self.eye)
    }

    /// Project a world point to NDC. `None` when the point is behind the eye.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * world.extend(1.0);
        (clip.w > 0.0).then(|| clip.truncate() / clip.w)
    }

    /// Camera basis vectors in world space, used to face sprites toward the eye.
    pub fn right_up(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward);
        (right, up)
    }
}

/// Bounding rectangle of the rendering surface in client (CSS) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Result<Self, SceneError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(SceneError::EmptyViewport { width, height });
        }
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Map client coordinates to NDC in \[-1, 1\]² with +Y up. Points outside
    /// the rectangle map outside that range.
    pub fn client_to_ndc(&self, client_x: f32, client_y: f32) -> Vec2 {
        let x = ((client_x - self.left) / self.width) * 2.0 - 1.0;
        let y = -(((client_y - self.top) / self.height) * 2.0 - 1.0);
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::perspective(70.0, 16.0 / 9.0, 0.1, 1000.0)
            .looking_at(Vec3::new(0.0, 6.0, 14.0), Vec3::ZERO)
    }

    #[test]
    fn center_ray_passes_through_target() {
        let cam = camera();
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        let expected = (cam.target - cam.eye).normalize();
        assert!(ray.direction.abs_diff_eq(expected, 1e-4));
        assert_eq!(ray.origin, cam.eye);
    }

    #[test]
    fn project_target_lands_at_center() {
        let cam = camera();
        let ndc = cam.project(Vec3::ZERO).unwrap();
        assert!(ndc.truncate().abs_diff_eq(Vec2::ZERO, 1e-4));
        assert!(cam.project(cam.eye * 2.0).is_none());
    }

    #[test]
    fn top_of_screen_ray_points_above_center_ray() {
        let cam = camera();
        let center = cam.ray_from_ndc(Vec2::ZERO);
        let top = cam.ray_from_ndc(Vec2::new(0.0, 1.0));
        assert!(top.direction.y > center.direction.y);
    }

    #[test]
    fn viewport_corners_map_to_ndc_corners() {
        let vp = Viewport::new(10.0, 20.0, 200.0, 100.0).unwrap();
        assert_eq!(vp.client_to_ndc(10.0, 20.0), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.client_to_ndc(210.0, 120.0), Vec2::new(1.0, -1.0));
        assert_eq!(vp.client_to_ndc(110.0, 70.0), Vec2::ZERO);
    }

    #[test]
    fn empty_viewport_is_rejected() {
        assert!(matches!(
            Viewport::new(0.0, 0.0, 0.0, 10.0),
            Err(SceneError::EmptyViewport { .. })
        ));
        assert!(Viewport::new(0.0, 0.0, f32::NAN, 10.0).is_err());
    }

    #[test]
    fn set_aspect_ignores_degenerate_values() {
        let mut cam = camera();
        cam.set_aspect(0.0);
        assert_eq!(cam.aspect, 16.0 / 9.0);
        cam.set_aspect(2.0);
        assert_eq!(cam.aspect, 2.0);
    }
}

//! Orbit camera rig: drag to rotate around a target, wheel to dolly,
//! right-drag to pan the target.
//!
//! Input handlers only accumulate deltas; [`OrbitControls::update`] applies
//! them once per frame so damping behaves the same regardless of how many
//! pointer events arrive between frames.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::camera::Camera;
use crate::constants::{ORBIT_DAMPING_FACTOR, ORBIT_POLAR_EPSILON, ORBIT_ZOOM_STEP};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            enable_zoom: true,
            enable_pan: true,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControls {
    pub params: OrbitParams,
    target: Vec3,
    radius: f32,
    /// Azimuth around +Y, measured from +Z toward +X.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    pan_offset: Vec3,
    fovy_radians: f32,
}

impl OrbitControls {
    /// Start from the camera's current eye and target.
    pub fn from_camera(camera: &Camera, params: OrbitParams) -> Self {
        let offset = camera.eye - camera.target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            params,
            target: camera.target,
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            pan_offset: Vec3::ZERO,
            fovy_radians: camera.fovy_radians,
        }
    }

    /// Queue a rotation from a pointer drag of `dx`, `dy` pixels on a surface
    /// `height` pixels tall.
    pub fn rotate(&mut self, dx: f32, dy: f32, height: f32) {
        if height <= 0.0 {
            return;
        }
        let k = TAU * self.params.rotate_speed / height;
        self.delta_theta -= dx * k;
        self.delta_phi -= dy * k;
    }

    /// Queue a dolly step. Negative `wheel_delta_y` (scrolling up) moves closer.
    pub fn zoom(&mut self, wheel_delta_y: f32) {
        if !self.params.enable_zoom || wheel_delta_y == 0.0 {
            return;
        }
        let step = ORBIT_ZOOM_STEP.powf(self.params.zoom_speed);
        if wheel_delta_y < 0.0 {
            self.scale *= step;
        } else {
            self.scale /= step;
        }
    }

    /// Queue a target shift from a drag of `dx`, `dy` pixels. One surface
    /// height of drag moves the target by the visible height at the target.
    pub fn pan(&mut self, dx: f32, dy: f32, height: f32) {
        if !self.params.enable_pan || height <= 0.0 {
            return;
        }
        let visible_half = self.radius * (self.fovy_radians * 0.5).tan();
        let k = 2.0 * visible_half * self.params.pan_speed / height;
        let (right, up) = self.screen_axes();
        self.pan_offset += up * (dy * k) - right * (dx * k);
    }

    /// Apply pending deltas and write the new eye into `camera`.
    pub fn update(&mut self, camera: &mut Camera) {
        let factor = if self.params.enable_damping {
            self.params.damping_factor
        } else {
            1.0
        };
        self.theta += self.delta_theta * factor;
        self.phi = (self.phi + self.delta_phi * factor)
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        self.radius = (self.radius * self.scale)
            .clamp(self.params.min_distance, self.params.max_distance)
            .max(f32::EPSILON);
        self.scale = 1.0;
        self.target += self.pan_offset * factor;

        if self.params.enable_damping {
            self.delta_theta *= 1.0 - factor;
            self.delta_phi *= 1.0 - factor;
            self.pan_offset *= 1.0 - factor;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
            self.pan_offset = Vec3::ZERO;
        }

        camera.target = self.target;
        camera.eye = self.target + self.offset();
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Camera right and up vectors for the current orbit position.
    fn screen_axes(&self) -> (Vec3, Vec3) {
        let forward = -self.offset().normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        (right, right.cross(forward))
    }

    fn offset(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(
            self.radius * sin_phi * sin_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * cos_theta,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::perspective(75.0, 1.0, 0.1, 1000.0)
            .looking_at(Vec3::new(25.0, 25.0, 35.0), Vec3::ZERO)
    }

    #[test]
    fn update_without_input_keeps_eye() {
        let mut cam = camera();
        let mut controls = OrbitControls::from_camera(&cam, OrbitParams::default());
        controls.update(&mut cam);
        assert!(cam.eye.abs_diff_eq(Vec3::new(25.0, 25.0, 35.0), 1e-3));
    }

    #[test]
    fn damped_rotation_converges_to_full_delta() {
        let mut cam = camera();
        let mut damped = OrbitControls::from_camera(&cam, OrbitParams::default());
        let mut cam_direct = camera();
        let mut direct = OrbitControls::from_camera(
            &cam_direct,
            OrbitParams {
                enable_damping: false,
                ..OrbitParams::default()
            },
        );

        damped.rotate(100.0, 0.0, 800.0);
        direct.rotate(100.0, 0.0, 800.0);
        direct.update(&mut cam_direct);

        damped.update(&mut cam);
        assert!(!cam.eye.abs_diff_eq(cam_direct.eye, 1e-2));
        for _ in 0..600 {
            damped.update(&mut cam);
        }
        assert!(cam.eye.abs_diff_eq(cam_direct.eye, 1e-2));
    }

    #[test]
    fn zoom_moves_closer_and_respects_limits() {
        let mut cam = camera();
        let start = cam.eye.length();
        let mut controls = OrbitControls::from_camera(
            &cam,
            OrbitParams {
                min_distance: 40.0,
                ..OrbitParams::default()
            },
        );
        controls.zoom(-100.0);
        controls.update(&mut cam);
        assert!(cam.eye.length() < start);

        for _ in 0..50 {
            controls.zoom(-100.0);
            controls.update(&mut cam);
        }
        assert!((controls.distance() - 40.0).abs() < 1e-3);
    }

    #[test]
    fn polar_angle_never_flips_over_the_pole() {
        let mut cam = camera();
        let mut controls = OrbitControls::from_camera(
            &cam,
            OrbitParams {
                enable_damping: false,
                ..OrbitParams::default()
            },
        );
        controls.rotate(0.0, 10_000.0, 100.0);
        controls.update(&mut cam);
        assert!(cam.eye.y > 0.0);
    }

    #[test]
    fn pan_moves_target_and_eye_together() {
        let mut cam = Camera::perspective(90.0, 1.0, 0.1, 100.0)
            .looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controls = OrbitControls::from_camera(
            &cam,
            OrbitParams {
                enable_damping: false,
                ..OrbitParams::default()
            },
        );
        // Half a surface height to the right and down: the scene follows
        // the pointer, so the target moves left and up.
        controls.pan(50.0, 50.0, 100.0);
        controls.update(&mut cam);
        assert!(controls.target().abs_diff_eq(Vec3::new(-10.0, 10.0, 0.0), 1e-3));
        assert!((cam.eye - cam.target).abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-3));

        controls.update(&mut cam);
        assert!(controls.target().abs_diff_eq(Vec3::new(-10.0, 10.0, 0.0), 1e-3));
    }

    #[test]
    fn disabled_pan_keeps_target() {
        let mut cam = camera();
        let mut controls = OrbitControls::from_camera(
            &cam,
            OrbitParams {
                enable_pan: false,
                ..OrbitParams::default()
            },
        );
        controls.pan(300.0, -120.0, 800.0);
        controls.update(&mut cam);
        assert_eq!(controls.target(), Vec3::ZERO);
    }

    #[test]
    fn disabled_zoom_is_ignored() {
        let mut cam = camera();
        let start = cam.eye;
        let mut controls = OrbitControls::from_camera(
            &cam,
            OrbitParams {
                enable_zoom: false,
                ..OrbitParams::default()
            },
        );
        controls.zoom(-100.0);
        controls.update(&mut cam);
        assert!(cam.eye.abs_diff_eq(start, 1e-3));
    }
}

//! Keyframed position tweens.
//!
//! A track's duration is shared evenly between its keyframes. Segment `i`
//! runs from the previous keyframe (or the start point for the first
//! segment) to keyframe `i`.

use std::time::Duration;

use glam::Vec3;

use crate::error::SceneError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadIn => t * t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    /// Play once, then repeat `n` more times and hold the last keyframe.
    Times(u32),
    Infinite,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeTrack {
    start: Vec3,
    keyframes: Vec<Vec3>,
    duration: f32,
    repeat: Repeat,
    ease: Ease,
}

impl KeyframeTrack {
    pub fn new(
        start: Vec3,
        keyframes: Vec<Vec3>,
        duration_secs: f32,
        repeat: Repeat,
        ease: Ease,
    ) -> Result<Self, SceneError> {
        if keyframes.is_empty() {
            return Err(SceneError::EmptyTrack);
        }
        if !(duration_secs.is_finite() && duration_secs > 0.0) {
            return Err(SceneError::InvalidDuration(duration_secs));
        }
        Ok(Self {
            start,
            keyframes,
            duration: duration_secs,
            repeat,
            ease,
        })
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f32(self.duration)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        match self.repeat {
            Repeat::Infinite => false,
            Repeat::Times(n) => {
                elapsed.as_secs_f64() >= self.duration as f64 * (n as f64 + 1.0)
            }
        }
    }

    /// Position at `elapsed` since the track started.
    pub fn sample(&self, elapsed: Duration) -> Vec3 {
        if self.is_finished(elapsed) {
            return *self.keyframes.last().unwrap_or(&self.start);
        }
        // Wrap in f64 so the phase stays exact after hours of running.
        let local = (elapsed.as_secs_f64() % self.duration as f64) as f32;
        let segments = self.keyframes.len();
        let seg_len = self.duration / segments as f32;
        let index = ((local / seg_len) as usize).min(segments - 1);
        let t = (local - index as f32 * seg_len) / seg_len;

        let from = if index == 0 {
            self.start
        } else {
            self.keyframes[index - 1]
        };
        from.lerp(self.keyframes[index], self.ease.apply(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(repeat: Repeat) -> KeyframeTrack {
        KeyframeTrack::new(
            Vec3::ZERO,
            vec![Vec3::new(10.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 10.0)],
            4.0,
            repeat,
            Ease::Linear,
        )
        .unwrap()
    }

    #[test]
    fn samples_within_segments() {
        let t = track(Repeat::Infinite);
        assert_eq!(t.sample(Duration::ZERO), Vec3::ZERO);
        assert!(t.sample(Duration::from_secs(1)).abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-4));
        assert!(t.sample(Duration::from_secs(2)).abs_diff_eq(Vec3::new(10.0, 0.0, 0.0), 1e-4));
        assert!(t.sample(Duration::from_secs(3)).abs_diff_eq(Vec3::new(10.0, 0.0, 5.0), 1e-4));
    }

    #[test]
    fn infinite_track_wraps_to_start() {
        let t = track(Repeat::Infinite);
        assert!(t.sample(Duration::from_secs(5)).abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-4));
        assert!(!t.is_finished(Duration::from_secs(1000)));
    }

    #[test]
    fn finite_track_holds_last_keyframe() {
        let t = track(Repeat::Times(1));
        assert!(!t.is_finished(Duration::from_secs(7)));
        assert!(t.is_finished(Duration::from_secs(8)));
        assert_eq!(t.sample(Duration::from_secs(30)), Vec3::new(10.0, 0.0, 10.0));
    }

    #[test]
    fn invalid_tracks_are_rejected() {
        assert_eq!(
            KeyframeTrack::new(Vec3::ZERO, vec![], 1.0, Repeat::Infinite, Ease::Linear),
            Err(SceneError::EmptyTrack)
        );
        assert!(matches!(
            KeyframeTrack::new(Vec3::ZERO, vec![Vec3::ONE], 0.0, Repeat::Infinite, Ease::Linear),
            Err(SceneError::InvalidDuration(_))
        ));
    }

    #[test]
    fn loop_phase_survives_long_sessions() {
        let t = track(Repeat::Infinite);
        let late = Duration::from_secs(40_000_000 + 1);
        assert!(t.sample(late).abs_diff_eq(t.sample(Duration::from_secs(1)), 1e-4));
        let later = Duration::from_secs(40_000_000) + Duration::from_millis(2_500);
        assert!(t.sample(later).abs_diff_eq(Vec3::new(10.0, 0.0, 2.5), 1e-3));
    }

    #[test]
    fn ease_endpoints_are_fixed() {
        for ease in [Ease::Linear, Ease::QuadIn, Ease::QuadOut, Ease::QuadInOut] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
        }
        assert!(Ease::QuadIn.apply(0.5) < 0.5);
        assert!(Ease::QuadOut.apply(0.5) > 0.5);
    }
}

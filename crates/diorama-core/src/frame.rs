//! Frame scheduling primitives shared by every host.
//!
//! The host owns the tick source (`requestAnimationFrame` on the web). Each
//! tick it asks a [`FrameClock`] for the step size and hands it to
//! [`run_frame`], which performs exactly one update followed by one render.

use std::time::Duration;

use instant::Instant;

use crate::constants::MAX_FRAME_DT;

/// Something driven once per display refresh.
pub trait FrameTarget {
    fn update(&mut self, dt: Duration);
    fn render(&mut self) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the previous tick. The first tick yields zero; long gaps
    /// (a backgrounded tab) are clamped to `MAX_FRAME_DT`.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let dt = match self.last {
            Some(prev) if now > prev => now - prev,
            _ => Duration::ZERO,
        };
        self.last = Some(now);
        dt.min(MAX_FRAME_DT)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// One update-then-render step. Render failures are logged and swallowed so
/// the host loop keeps running.
pub fn run_frame<T: FrameTarget + ?Sized>(target: &mut T, dt: Duration) {
    target.update(dt);
    if let Err(e) = target.render() {
        log::error!("render error: {:?}", e);
    }
}

/// What a running loop does when the page is hidden or shown again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopAction {
    Keep,
    /// Back from the back/forward cache: forget the last tick.
    ResetClock,
    /// The page is really going away.
    Stop,
}

/// Map a `pagehide` (`showing == false`) or `pageshow` event to a loop
/// action. `persisted` is the event's back/forward cache flag.
pub fn page_transition(showing: bool, persisted: bool) -> LoopAction {
    match (showing, persisted) {
        (false, false) => LoopAction::Stop,
        (true, true) => LoopAction::ResetClock,
        _ => LoopAction::Keep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        fail: bool,
    }

    impl FrameTarget for Recorder {
        fn update(&mut self, _dt: Duration) {
            self.calls.push("update");
        }

        fn render(&mut self) -> anyhow::Result<()> {
            self.calls.push("render");
            if self.fail {
                anyhow::bail!("surface lost");
            }
            Ok(())
        }
    }

    #[test]
    fn first_tick_is_zero_then_measures_gap() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        assert_eq!(clock.tick(t0), Duration::ZERO);
        assert_eq!(clock.tick(t0 + Duration::from_millis(16)), Duration::from_millis(16));
    }

    #[test]
    fn long_gaps_are_clamped() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        clock.tick(t0);
        assert_eq!(clock.tick(t0 + Duration::from_secs(5)), MAX_FRAME_DT);
    }

    #[test]
    fn reset_forgets_previous_tick() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        clock.tick(t0);
        clock.reset();
        assert_eq!(clock.tick(t0 + Duration::from_millis(50)), Duration::ZERO);
    }

    #[test]
    fn cached_pages_keep_their_loop() {
        assert_eq!(page_transition(false, true), LoopAction::Keep);
        assert_eq!(page_transition(true, true), LoopAction::ResetClock);
    }

    #[test]
    fn unloading_stops_the_loop() {
        assert_eq!(page_transition(false, false), LoopAction::Stop);
        assert_eq!(page_transition(true, false), LoopAction::Keep);
    }

    #[test]
    fn run_frame_updates_before_rendering_even_on_failure() {
        let mut target = Recorder {
            fail: true,
            ..Recorder::default()
        };
        run_frame(&mut target, Duration::from_millis(16));
        run_frame(&mut target, Duration::from_millis(16));
        assert_eq!(target.calls, ["update", "render", "update", "render"]);
    }
}

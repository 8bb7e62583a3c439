use diorama_core::Viewport;
use glam::Vec2;

/// Pointer position relative to the canvas bounding rectangle, as NDC.
/// `rect` is `(left, top, width, height)` in client pixels; `None` while the
/// canvas has no area (hidden or not laid out yet).
#[inline]
pub fn client_to_ndc(rect: (f32, f32, f32, f32), client_x: f32, client_y: f32) -> Option<Vec2> {
    let (left, top, width, height) = rect;
    Viewport::new(left, top, width, height)
        .ok()
        .map(|vp| vp.client_to_ndc(client_x, client_y))
}

/// Tracks one pointer drag so the orbit controls get deltas and a short
/// press still counts as a click.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    /// The drag moves the orbit target instead of rotating around it.
    pub panning: bool,
    pub last: Vec2,
    pub travelled: f32,
}

impl DragState {
    pub fn begin(&mut self, pos: Vec2) {
        self.active = true;
        self.panning = false;
        self.last = pos;
        self.travelled = 0.0;
    }

    pub fn begin_pan(&mut self, pos: Vec2) {
        self.begin(pos);
        self.panning = true;
    }

    /// Delta since the previous position, or `None` when no drag is active.
    pub fn move_to(&mut self, pos: Vec2) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        self.travelled += delta.length();
        Some(delta)
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    /// True when the pointer moved less than `slop_px` over the whole press.
    pub fn is_click(&self, slop_px: f32) -> bool {
        self.travelled < slop_px
    }

    /// Whether a click should pick. Without orbit controls there is nothing
    /// to drag, so every click picks.
    pub fn click_allowed(&self, orbiting: bool, slop_px: f32) -> bool {
        !orbiting || self.is_click(slop_px)
    }
}

/// Right button, or the primary button with shift, ctrl or meta held, pans.
#[inline]
pub fn wants_pan(button: i16, shift: bool, ctrl: bool, meta: bool) -> bool {
    button == 2 || (button == 0 && (shift || ctrl || meta))
}

/// Collapse a wheel event into a single dolly direction.
#[inline]
pub fn wheel_direction(delta_y: f64) -> f32 {
    if delta_y > 0.0 {
        1.0
    } else if delta_y < 0.0 {
        -1.0
    } else {
        0.0
    }
}

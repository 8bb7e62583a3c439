use crate::constants::{DEMO_ATTR, DEMO_QUERY_KEY, SEED_ATTR};
use diorama_core::{DemoKind, InspectorParams};
use web_sys as web;

/// Keep the canvas backing store at CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Bounding rectangle as `(left, top, width, height)` in client pixels.
#[inline]
pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> (f32, f32, f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Demo named by `?demo=` or the canvas `data-demo` attribute, in that order.
/// Unknown names fall back to the default demo.
pub fn demo_kind(canvas: &web::HtmlCanvasElement) -> DemoKind {
    let requested = query_param(DEMO_QUERY_KEY).or_else(|| canvas.get_attribute(DEMO_ATTR));
    match requested {
        Some(name) => name.parse().unwrap_or_else(|e| {
            log::warn!("{}; using {}", e, DemoKind::default());
            DemoKind::default()
        }),
        None => DemoKind::default(),
    }
}

pub fn inspector_params(canvas: &web::HtmlCanvasElement) -> InspectorParams {
    let mut params = InspectorParams::default();
    if let Some(raw) = canvas.get_attribute(SEED_ATTR) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => params.seed = seed,
            Err(_) => log::warn!("ignoring {}=\"{}\"", SEED_ATTR, raw),
        }
    }
    params
}

fn query_param(key: &str) -> Option<String> {
    let search = web::window()?.location().search().ok()?;
    web::UrlSearchParams::new_with_str(&search).ok()?.get(key)
}

#![cfg(target_arch = "wasm32")]
use diorama_core::{SceneContext, SelectionChange};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod label;
mod render;
mod ui;

use constants::{CANVAS_ID, INFO_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("diorama-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Avoid grabbing a 2D context here to allow WebGPU to acquire the canvas
    events::wire_canvas_resize(&canvas);

    let kind = dom::demo_kind(&canvas);
    let params = dom::inspector_params(&canvas);
    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let demo = kind.build(aspect, &params)?;
    let mut ctx = SceneContext::new(demo);

    match ui::InfoPanel::find(&document, INFO_ID) {
        Some(panel) => {
            panel.show(&SelectionChange::Cleared);
            ctx.set_selection_hook(move |change| panel.show(change));
        }
        None => log::info!("no #{} element; selection panel disabled", INFO_ID),
    }
    let scene = Rc::new(RefCell::new(ctx));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });

    let rasterizer = label::CanvasRasterizer::new(document.clone());
    let gpu = frame::init_gpu(&canvas, &scene, &rasterizer).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene,
        canvas.clone(),
        gpu,
    )));
    let handle = frame::start_loop(frame_ctx.clone());
    events::wire_page_lifecycle(handle, frame_ctx);
    Ok(())
}

use crate::label::CanvasRasterizer;
use crate::render;
use diorama_core::{run_frame, FrameClock, FrameTarget, SceneContext};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneContext>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub clock: FrameClock,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        scene: Rc<RefCell<SceneContext>>,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        Self {
            scene,
            canvas,
            gpu,
            clock: FrameClock::new(),
        }
    }

    pub fn frame(&mut self) {
        let dt = self.clock.tick(Instant::now());
        run_frame(self, dt);
    }
}

impl<'a> FrameTarget for FrameContext<'a> {
    fn update(&mut self, dt: Duration) {
        let mut ctx = self.scene.borrow_mut();
        ctx.resize(self.canvas.width(), self.canvas.height());
        ctx.update(dt);
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let Some(g) = &mut self.gpu else {
            return Ok(());
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        g.render(&self.scene.borrow())
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<SceneContext>>,
    rasterizer: &CanvasRasterizer,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    // Labels are rasterized from a snapshot taken before the await.
    let snapshot = scene.borrow().scene().clone();
    match render::GpuState::new(leaked_canvas, &snapshot, rasterizer).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Owns the pending animation frame of a running loop.
#[derive(Clone)]
pub struct LoopHandle {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl LoopHandle {
    /// Stop the loop: cancel the pending frame and drop the tick closure.
    pub fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        if self.tick.borrow_mut().take().is_some() {
            log::info!("frame loop stopped");
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else { return };
    let id = match tick.borrow().as_ref() {
        Some(cb) => w.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
        None => None,
    };
    raf_id.set(id);
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &raf_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);
    LoopHandle { raf_id, tick }
}

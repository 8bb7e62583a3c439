mod pointer;

pub use pointer::{wire_input_handlers, InputWiring};

use crate::dom;
use crate::frame::{FrameContext, LoopHandle};
use diorama_core::{page_transition, LoopAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Maintain canvas internal pixel size to match CSS size * devicePixelRatio.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Stop the frame loop when the page is torn down. A page parked in the
/// back/forward cache keeps its loop and restarts its clock on return.
pub fn wire_page_lifecycle(handle: LoopHandle, frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let on_transition = move |ev: web::PageTransitionEvent| {
        let showing = ev.type_() == "pageshow";
        match page_transition(showing, ev.persisted()) {
            LoopAction::Stop => handle.cancel(),
            LoopAction::ResetClock => frame_ctx.borrow_mut().clock.reset(),
            LoopAction::Keep => {}
        }
    };
    let closure = Closure::wrap(Box::new(on_transition) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        for name in ["pagehide", "pageshow"] {
            _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

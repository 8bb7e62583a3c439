use crate::constants::CLICK_SLOP_PX;
use crate::dom;
use crate::input;
use diorama_core::SceneContext;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneContext>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    wire_click(&w);
    wire_contextmenu(&w);
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = client_pos(&ev);
        let mut drag = w.drag_state.borrow_mut();
        if input::wants_pan(ev.button(), ev.shift_key(), ev.ctrl_key(), ev.meta_key()) {
            drag.begin_pan(pos);
        } else {
            drag.begin(pos);
        }
        drop(drag);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut drag = w.drag_state.borrow_mut();
        let Some(delta) = drag.move_to(client_pos(&ev)) else {
            return;
        };
        let height = w.canvas.client_height() as f32;
        if let Some(orbit) = w.scene.borrow_mut().orbit_mut() {
            if drag.panning {
                orbit.pan(delta.x, delta.y, height);
            } else {
                orbit.rotate(delta.x, delta.y, height);
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.drag_state.borrow_mut().end();
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let mut ctx = w.scene.borrow_mut();
        let Some(orbit) = ctx.orbit_mut() else { return };
        let dir = input::wheel_direction(ev.delta_y());
        if dir != 0.0 {
            orbit.zoom(dir);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Clicks anywhere on the page pick against the canvas; a press that turned
/// into an orbit drag is not a click.
fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let orbiting = w.scene.borrow_mut().orbit_mut().is_some();
        if !w.drag_state.borrow().click_allowed(orbiting, CLICK_SLOP_PX) {
            return;
        }
        let pos = client_pos(&ev);
        let Some(ndc) = input::client_to_ndc(dom::canvas_rect(&w.canvas), pos.x, pos.y) else {
            return;
        };
        let picked = w.scene.borrow_mut().click(ndc);
        log::debug!("[click] ndc=({:.3},{:.3}) -> {:?}", ndc.x, ndc.y, picked);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Right-drag pans, so keep the browser menu off the canvas.
fn wire_contextmenu(w: &InputWiring) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}

//! Pointer wiring for the drag gesture. Pointer Events unify mouse and
//! touch, so one set of document-level listeners covers both. The closures
//! only write the shared `DragInput` scalars; the frame loop reads them at
//! the start of each tick.

use lid_core::DragInput;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub lid: web::HtmlElement,
    pub drag: Rc<RefCell<DragInput>>,
    pub audio_ctx: web::AudioContext,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let document = w.document.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // First gesture also unlocks audio under autoplay policies.
        _ = w.audio_ctx.resume();

        let client_x = ev.client_x() as f32;
        let lid_left = w.lid.get_bounding_client_rect().left() as f32;
        let mut drag = w.drag.borrow_mut();
        drag.active = true;
        drag.anchor_x = input::drag_anchor(client_x, lid_left);
        drag.pointer_x = client_x;
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let document = w.document.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut drag = w.drag.borrow_mut();
        if !drag.active {
            return;
        }
        if let Some(accepted) = input::accept_pointer_move(ev.client_x() as f32, drag.anchor_x) {
            drag.pointer_x = accepted;
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let document = w.document.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.drag.borrow_mut().active = false;
    }) as Box<dyn FnMut(_)>);
    for event in ["pointerup", "pointercancel"] {
        _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

//! The requestAnimationFrame loop: one fixed physics step per frame, then
//! the visual offset and audio parameters follow from the new state.

use lid_core::{slide_cue, DragInput, LidSim};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::{self, SlideVoice};
use crate::dom;

pub struct FrameContext {
    pub sim: Rc<RefCell<LidSim>>,
    pub drag: Rc<RefCell<DragInput>>,
    pub lid: web::HtmlElement,
    pub audio_ctx: web::AudioContext,
    pub slide: SlideVoice,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let drag = *self.drag.borrow();
        let outcome = self.sim.borrow_mut().step(&drag);

        let (position, velocity, cue) = {
            let sim = self.sim.borrow();
            let cue = slide_cue(sim.position, sim.velocity, drag.active, sim.params());
            (sim.position, sim.velocity, cue)
        };

        if outcome.detent_click {
            log::debug!("[detent] click at {:.1}px (v={:.0})", position, velocity);
            audio::trigger_detent_click(&self.audio_ctx);
        }
        audio::apply_slide_cue(&self.audio_ctx, &self.slide.gain, cue);

        dom::set_lid_offset(&self.lid, position);
    }
}

/// Start the self-rescheduling animation loop; it runs for the page session.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

#![cfg(target_arch = "wasm32")]
//! WASM entry point: looks up the case and lid elements, builds the audio
//! graph, wires pointer input, and starts the animation loop.

use lid_core::{DragInput, LidSim, SimParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;

use constants::{LID_ELEMENT_ID, PILL_CASE_ELEMENT_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lid-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let case = dom::require_element(&document, PILL_CASE_ELEMENT_ID)?;
    let lid = dom::require_element(&document, LID_ELEMENT_ID)?;

    let track = dom::track_width(&case);
    let params = SimParams::for_track_width(track);
    log::info!(
        "[sim] track={track}px compartment={:.1}px band={:.1}px",
        params.compartment_width,
        params.detent_active_range
    );

    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = audio_ctx.resume();
    let slide = audio::build_slide_voice(&audio_ctx)
        .map_err(|_| anyhow::anyhow!("audio graph init failed"))?;

    let sim = Rc::new(RefCell::new(LidSim::new(params)));
    let drag = Rc::new(RefCell::new(DragInput::default()));

    events::wire_input_handlers(events::InputWiring {
        document,
        lid: lid.clone(),
        drag: drag.clone(),
        audio_ctx: audio_ctx.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        drag,
        lid,
        audio_ctx,
        slide,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

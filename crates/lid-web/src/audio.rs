//! WebAudio graph plumbing for the two sound paths: the looping slide
//! texture (noise -> bandpass -> gain -> convolver -> destination) and the
//! one-shot detent click (noise -> gain -> destination).

use lid_core::{
    ImpulseResponse, SlideCue, CLICK_DURATION_SEC, CLICK_END_GAIN, CLICK_RAMP_SEC,
    CLICK_START_GAIN, IMPULSE_SECONDS, NOISE_BANDPASS_HZ, NOISE_BANDPASS_Q, NOISE_LOOP_SECONDS,
    SLIDE_FADE_FLOOR, SLIDE_FADE_OUT_SEC,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

use crate::constants::{IMPULSE_SEED, SLIDE_NOISE_SEED};

/// The persistent nodes of the slide texture. Held for the page lifetime so
/// the loop keeps playing; only `gain` is touched after construction.
pub struct SlideVoice {
    #[allow(dead_code)]
    pub source: web::AudioBufferSourceNode,
    #[allow(dead_code)]
    pub filter: web::BiquadFilterNode,
    pub gain: web::GainNode,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

fn upload_mono_buffer(
    audio_ctx: &web::AudioContext,
    samples: &mut [f32],
    label: &str,
) -> Result<web::AudioBuffer, ()> {
    let buffer = audio_ctx
        .create_buffer(1, samples.len() as u32, audio_ctx.sample_rate())
        .map_err(|e| {
            log::error!("{} buffer error: {:?}", label, e);
        })?;
    _ = buffer.copy_to_channel(samples, 0);
    Ok(buffer)
}

fn build_reverb(audio_ctx: &web::AudioContext) -> Result<web::ConvolverNode, ()> {
    let reverb = web::ConvolverNode::new(audio_ctx).map_err(|e| {
        log::error!("ConvolverNode error: {:?}", e);
    })?;
    reverb.set_normalize(true);

    let sr = audio_ctx.sample_rate();
    let mut rng = StdRng::seed_from_u64(IMPULSE_SEED);
    let ImpulseResponse {
        mut left,
        mut right,
    } = lid_core::impulse_response(sr, &mut rng);
    let len = (sr * IMPULSE_SECONDS) as u32;
    if let Ok(ir) = audio_ctx.create_buffer(2, len, sr) {
        _ = ir.copy_to_channel(&mut left, 0);
        _ = ir.copy_to_channel(&mut right, 1);
        reverb.set_buffer(Some(&ir));
    }
    Ok(reverb)
}

/// Build and start the looping slide texture. Its gain starts at zero; the
/// frame loop drives it from lid speed.
pub fn build_slide_voice(audio_ctx: &web::AudioContext) -> Result<SlideVoice, ()> {
    let sr = audio_ctx.sample_rate();
    let mut rng = StdRng::seed_from_u64(SLIDE_NOISE_SEED);
    let mut samples = lid_core::white_noise((sr * NOISE_LOOP_SECONDS) as usize, &mut rng);
    let buffer = upload_mono_buffer(audio_ctx, &mut samples, "slide noise")?;

    let source = web::AudioBufferSourceNode::new(audio_ctx).map_err(|e| {
        log::error!("AudioBufferSourceNode error: {:?}", e);
    })?;
    source.set_buffer(Some(&buffer));
    source.set_loop(true);

    let filter = web::BiquadFilterNode::new(audio_ctx).map_err(|e| {
        log::error!("BiquadFilterNode error: {:?}", e);
    })?;
    filter.set_type(web::BiquadFilterType::Bandpass);
    filter.frequency().set_value(NOISE_BANDPASS_HZ);
    filter.q().set_value(NOISE_BANDPASS_Q);

    let gain = create_gain(audio_ctx, 0.0, "Slide")?;
    let reverb = build_reverb(audio_ctx)?;

    _ = source.connect_with_audio_node(&filter);
    _ = filter.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(&reverb);
    _ = reverb.connect_with_audio_node(&audio_ctx.destination());

    _ = source.start();

    Ok(SlideVoice {
        source,
        filter,
        gain,
    })
}

/// Apply this frame's gain instruction to the slide texture.
pub fn apply_slide_cue(audio_ctx: &web::AudioContext, gain: &web::GainNode, cue: SlideCue) {
    match cue {
        SlideCue::Level(level) => gain.gain().set_value(level),
        SlideCue::Mute => gain.gain().set_value(0.0),
        SlideCue::FadeOut => {
            let end = audio_ctx.current_time() + SLIDE_FADE_OUT_SEC;
            _ = gain
                .gain()
                .exponential_ramp_to_value_at_time(SLIDE_FADE_FLOOR, end);
        }
        SlideCue::Hold => {}
    }
}

/// Fire the detent click: a fresh ~20ms burst of white noise with a fast
/// exponential fade, self-disposing after playback.
pub fn trigger_detent_click(audio_ctx: &web::AudioContext) {
    let sr = audio_ctx.sample_rate();
    let len = (sr as f64 * CLICK_DURATION_SEC).ceil() as usize;
    let mut samples = lid_core::white_noise(len, &mut rand::thread_rng());
    let Ok(buffer) = upload_mono_buffer(audio_ctx, &mut samples, "click noise") else {
        return;
    };

    let Ok(source) = web::AudioBufferSourceNode::new(audio_ctx) else {
        return;
    };
    source.set_buffer(Some(&buffer));

    let Ok(gain) = create_gain(audio_ctx, CLICK_START_GAIN, "Click") else {
        return;
    };
    let now = audio_ctx.current_time();
    _ = gain.gain().set_value_at_time(CLICK_START_GAIN, now);
    _ = gain
        .gain()
        .exponential_ramp_to_value_at_time(CLICK_END_GAIN, now + CLICK_RAMP_SEC);

    _ = source.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(&audio_ctx.destination());

    _ = source.start_with_when(now);
    _ = source.stop_with_when(now + CLICK_DURATION_SEC);
}

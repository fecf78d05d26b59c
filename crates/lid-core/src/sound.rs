//! Pure signal synthesis and per-frame gain policy for the lid sounds.
//!
//! Buffers are plain `Vec<f32>` sample data; the web crate uploads them into
//! WebAudio `AudioBuffer`s. Keeping the math here lets it run (and be
//! tested) natively.

use rand::Rng;

use crate::constants::*;
use crate::sim::SimParams;

/// Per-frame instruction for the looping slide-texture gain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlideCue {
    /// Set the gain directly to the given level.
    Level(f32),
    /// Force silence (lid parked at the closed detent, nobody touching it).
    Mute,
    /// Lid has cleared the last compartment; ramp to near-silence.
    FadeOut,
    /// Leave the gain where it is.
    Hold,
}

/// Linear |velocity| -> [0, 1] gain mapping for the sliding texture.
#[inline]
pub fn slide_volume(velocity: f32) -> f32 {
    (velocity.abs() / SLIDE_VOLUME_SPEED_DIVISOR).clamp(0.0, 1.0)
}

/// Decide what the slide-texture gain should do this frame.
pub fn slide_cue(position: f32, velocity: f32, dragging: bool, params: &SimParams) -> SlideCue {
    let last = params.last_interactive();
    if position > 0.0 && position <= last {
        SlideCue::Level(slide_volume(velocity))
    } else if position == 0.0 && !dragging {
        SlideCue::Mute
    } else if position >= last {
        SlideCue::FadeOut
    } else {
        SlideCue::Hold
    }
}

/// Uniform white noise in [-1, 1].
pub fn white_noise(len: usize, rng: &mut impl Rng) -> Vec<f32> {
    (0..len).map(|_| rng.gen::<f32>() * 2.0 - 1.0).collect()
}

/// Stereo impulse response for the convolution reverb.
pub struct ImpulseResponse {
    pub left: Vec<f32>,
    pub right: Vec<f32>,
}

impl ImpulseResponse {
    #[inline]
    pub fn len(&self) -> usize {
        self.left.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// Procedurally build the reverb impulse response: exponentially decaying
/// white noise plus a small set of fixed resonant harmonics, independent
/// noise per channel. `IMPULSE_SECONDS` long at the given sample rate.
pub fn impulse_response(sample_rate: f32, rng: &mut impl Rng) -> ImpulseResponse {
    let len = (sample_rate * IMPULSE_SECONDS) as usize;
    let mut left = vec![0.0f32; len];
    let mut right = vec![0.0f32; len];

    for i in 0..len {
        let t = i as f32 / sample_rate;
        let decay = (-(i as f32) / (sample_rate * IMPULSE_DECAY_TAU_SEC)).exp();

        let mut harmonics = 0.0f32;
        for (k, freq) in IMPULSE_RESONANT_HZ.iter().enumerate() {
            let amplitude = decay / ((k + 1) * (k + 1)) as f32;
            harmonics += (std::f32::consts::TAU * freq * t).sin() * amplitude;
        }

        left[i] = (rng.gen::<f32>() * 2.0 - 1.0 + harmonics) * decay;
        right[i] = (rng.gen::<f32>() * 2.0 - 1.0 + harmonics) * decay;
    }

    ImpulseResponse { left, right }
}

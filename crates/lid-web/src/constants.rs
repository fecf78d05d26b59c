// Front-end wiring constants.

// Host page element ids
pub const PILL_CASE_ELEMENT_ID: &str = "pill-case";
pub const LID_ELEMENT_ID: &str = "lid";

// Fixed seeds for the looping noise buffer and the reverb impulse response;
// the textures are decorative, so determinism beats entropy here.
pub const SLIDE_NOISE_SEED: u64 = 0x51_1D_E0;
pub const IMPULSE_SEED: u64 = 0x1234_ABCD;

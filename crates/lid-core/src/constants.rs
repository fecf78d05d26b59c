// Physics and sound tuning constants shared by the frontends.

// Case geometry
pub const COMPARTMENT_COUNT: u32 = 7;

// Spring/damper tuning. The drag spring is soft for smooth tracking; the
// detent spring is stiff so slots snap hard.
pub const DRAG_SPRING_STIFFNESS: f32 = 500.0;
pub const DETENT_SPRING_STIFFNESS: f32 = 1000.0;
pub const DAMPING_COEFFICIENT: f32 = 25.0;

// Fixed simulation timestep (seconds); one step per display frame.
pub const TIME_STEP_SEC: f32 = 0.016;

// Fraction of a compartment width around each detent center where the
// detent spring engages. Empirical, as is the bounce restitution.
pub const DETENT_ACTIVE_FRACTION: f32 = 0.2;
pub const BOUNCE_RESTITUTION: f32 = 0.2;

// Sliding-noise gain mapping: |velocity| in px/sec mapped linearly to [0,1]
pub const SLIDE_VOLUME_SPEED_DIVISOR: f32 = 6000.0;
pub const SLIDE_FADE_OUT_SEC: f64 = 1.0;
pub const SLIDE_FADE_FLOOR: f32 = 0.001;

// Detent click one-shot envelope
pub const CLICK_START_GAIN: f32 = 0.08;
pub const CLICK_END_GAIN: f32 = 0.005;
pub const CLICK_RAMP_SEC: f64 = 0.005;
pub const CLICK_DURATION_SEC: f64 = 0.02;

// Sliding noise texture: looping white noise through a resonant bandpass
pub const NOISE_LOOP_SECONDS: f32 = 2.0;
pub const NOISE_BANDPASS_HZ: f32 = 4800.0;
pub const NOISE_BANDPASS_Q: f32 = 3.0;

// Procedural impulse response for the convolution reverb
pub const IMPULSE_SECONDS: f32 = 1.0;
pub const IMPULSE_DECAY_TAU_SEC: f32 = 0.04;
// Measured from a spectrograph of a weekly vitamin case lid
pub const IMPULSE_RESONANT_HZ: [f32; 5] = [4800.0, 5900.0, 3500.0, 2500.0, 1500.0];

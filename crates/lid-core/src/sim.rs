//! Lid physics: a 1-D spring/damper integrator with detent slots.
//!
//! The lid slides along a track divided into compartments. While dragged it
//! is pulled toward the pointer by a soft spring; whenever it comes within
//! the activation band of a detent center a stiff spring snaps it onto the
//! slot. Everything here is platform-free and steps with a fixed timestep,
//! one step per display frame.

use crate::constants::*;

/// Simulation tuning derived from the measured track width.
#[derive(Clone, Copy, Debug)]
pub struct SimParams {
    pub drag_stiffness: f32,
    pub detent_stiffness: f32,
    pub damping: f32,
    pub time_step: f32,
    pub compartment_width: f32,
    pub compartment_count: u32,
    pub detent_active_range: f32,
    pub bounce_restitution: f32,
}

impl SimParams {
    /// Build the default tuning for a track of the given pixel width.
    pub fn for_track_width(track_width: f32) -> Self {
        let compartment_width = track_width / COMPARTMENT_COUNT as f32;
        Self {
            drag_stiffness: DRAG_SPRING_STIFFNESS,
            detent_stiffness: DETENT_SPRING_STIFFNESS,
            damping: DAMPING_COEFFICIENT,
            time_step: TIME_STEP_SEC,
            compartment_width,
            compartment_count: COMPARTMENT_COUNT,
            detent_active_range: compartment_width * DETENT_ACTIVE_FRACTION,
            bounce_restitution: BOUNCE_RESTITUTION,
        }
    }

    /// Center of the final detent: one slot per compartment plus the
    /// fully-open slot at `count * width`. No detent force applies beyond it.
    #[inline]
    pub fn final_detent(&self) -> f32 {
        self.compartment_width * self.compartment_count as f32
    }

    /// Position past which the lid has cleared the last compartment and the
    /// sliding texture fades out.
    #[inline]
    pub fn last_interactive(&self) -> f32 {
        self.compartment_width * (self.compartment_count - 1) as f32
    }
}

/// Pointer-derived drag state. Written by the input handlers, read once per
/// simulation tick; never mutated by the integrator.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragInput {
    pub active: bool,
    /// Pointer offset from the lid's left edge at grab time.
    pub anchor_x: f32,
    /// Latest accepted pointer X.
    pub pointer_x: f32,
}

impl DragInput {
    /// Lid position the current pointer implies.
    #[inline]
    pub fn target(&self) -> f32 {
        self.pointer_x - self.anchor_x
    }
}

/// Edge-triggered events produced by a single integration step. The caller
/// owns all side effects (click sound, haptics); the sim only reports them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Lid entered a detent band this step.
    pub detent_click: bool,
    /// Lid hit the closed boundary and bounced.
    pub bounced: bool,
}

/// The lid's continuous state plus the detent latch.
pub struct LidSim {
    pub position: f32,
    pub velocity: f32,
    detent_engaged: bool,
    params: SimParams,
}

impl LidSim {
    /// New lid at the closed position. The latch is seeded from the starting
    /// position so resting inside a band (the closed detent) does not fire a
    /// click on the first frame.
    pub fn new(params: SimParams) -> Self {
        let mut sim = Self {
            position: 0.0,
            velocity: 0.0,
            detent_engaged: false,
            params,
        };
        sim.detent_engaged = sim.in_detent_band();
        log::debug!(
            "[sim] new lid: compartment={:.1}px band={:.1}px final={:.0}px",
            params.compartment_width,
            params.detent_active_range,
            params.final_detent()
        );
        sim
    }

    #[inline]
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Center of the detent slot nearest the current position.
    #[inline]
    pub fn nearest_detent(&self) -> f32 {
        let w = self.params.compartment_width;
        (self.position / w).round() * w
    }

    /// Whether the detent spring engages at the current position: within the
    /// activation band of the nearest slot and not past the final detent.
    #[inline]
    pub fn in_detent_band(&self) -> bool {
        let offset = self.nearest_detent() - self.position;
        offset.abs() <= self.params.detent_active_range
            && self.position <= self.params.final_detent()
    }

    /// Advance the simulation by one fixed timestep.
    ///
    /// Forces are expressed per unit mass, so the sum is the acceleration.
    /// Integration is semi-implicit Euler: velocity first, then position from
    /// the updated velocity.
    pub fn step(&mut self, drag: &DragInput) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        let p = self.params;

        let mut force = -p.damping * self.velocity;

        if drag.active && self.position >= 0.0 {
            force += p.drag_stiffness * (drag.target() - self.position);
        }

        let detent_offset = self.nearest_detent() - self.position;
        let in_band = self.in_detent_band();
        if in_band && !self.detent_engaged {
            outcome.detent_click = true;
            self.detent_engaged = true;
        } else if !in_band && self.detent_engaged {
            self.detent_engaged = false;
        }
        if in_band {
            force += p.detent_stiffness * detent_offset;
        }

        self.velocity += force * p.time_step;
        self.position += self.velocity * p.time_step;

        // Closed boundary: clamp and soft-bounce.
        if self.position < 0.0 {
            self.position = 0.0;
            self.velocity = -self.velocity * p.bounce_restitution;
            outcome.bounced = true;
        }

        outcome
    }
}

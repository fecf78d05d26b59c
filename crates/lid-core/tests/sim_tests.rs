// Host-side tests for the lid physics integrator.

use lid_core::{DragInput, LidSim, SimParams};

const TRACK_WIDTH: f32 = 280.0; // 7 compartments of 40px
const W: f32 = 40.0;

fn params() -> SimParams {
    SimParams::for_track_width(TRACK_WIDTH)
}

fn lid_at(position: f32) -> LidSim {
    let mut sim = LidSim::new(params());
    sim.position = position;
    sim
}

fn drag_to(target: f32) -> DragInput {
    DragInput {
        active: true,
        anchor_x: 0.0,
        pointer_x: target,
    }
}

// Step until the lid comes to rest, counting detent clicks along the way.
fn run_until_settled(sim: &mut LidSim, drag: &DragInput, max_frames: usize) -> usize {
    let mut clicks = 0;
    for frame in 0..max_frames {
        if sim.step(drag).detent_click {
            clicks += 1;
        }
        if frame > 10 && sim.velocity.abs() < 1e-3 {
            return clicks;
        }
    }
    panic!("lid did not settle within {max_frames} frames");
}

#[test]
fn params_derive_compartment_geometry() {
    let p = params();
    assert_eq!(p.compartment_width, W);
    assert_eq!(p.detent_active_range, W * 0.2);
    assert_eq!(p.final_detent(), 7.0 * W);
    assert_eq!(p.last_interactive(), 6.0 * W);
}

#[test]
fn closed_lid_is_a_stable_equilibrium() {
    let mut sim = LidSim::new(params());
    let idle = DragInput::default();
    for _ in 0..500 {
        let outcome = sim.step(&idle);
        assert!(!outcome.detent_click, "click fired while parked at rest");
        assert!(!outcome.bounced);
    }
    assert_eq!(sim.position, 0.0);
    assert_eq!(sim.velocity, 0.0);
}

#[test]
fn nearest_detent_snaps_to_compartment_grid() {
    assert_eq!(lid_at(0.0).nearest_detent(), 0.0);
    assert_eq!(lid_at(50.0).nearest_detent(), W);
    assert_eq!(lid_at(61.0).nearest_detent(), 2.0 * W);
    assert_eq!(lid_at(199.0).nearest_detent(), 5.0 * W);
}

#[test]
fn detent_band_ends_at_final_detent() {
    // Just inside the last slot's band
    assert!(lid_at(7.0 * W - 0.1 * W).in_detent_band());
    assert!(lid_at(7.0 * W).in_detent_band());
    // Past the final detent the band never engages, even near a grid multiple
    assert!(!lid_at(7.0 * W + 2.0).in_detent_band());
    assert!(!lid_at(8.0 * W).in_detent_band());
}

#[test]
fn drag_into_adjacent_detent_clicks_exactly_once() {
    // Start between slots (outside any band) and pull onto the 3W slot.
    let mut sim = lid_at(2.5 * W);
    let clicks = run_until_settled(&mut sim, &drag_to(3.0 * W), 10_000);
    assert!(
        (sim.position - 3.0 * W).abs() <= sim.params().detent_active_range,
        "settled at {} instead of the 3W slot",
        sim.position
    );
    assert_eq!(clicks, 1);
}

#[test]
fn latch_suppresses_retrigger_inside_band() {
    // Perturbed within the 3W band: converges back without a second click.
    let mut sim = lid_at(3.0 * W + 0.15 * W);
    let clicks = run_until_settled(&mut sim, &DragInput::default(), 10_000);
    assert_eq!(clicks, 0);
    assert!((sim.position - 3.0 * W).abs() <= sim.params().detent_active_range);
}

#[test]
fn leaving_and_reentering_a_band_clicks_again() {
    // Settle on 3W first, then drag over to 4W: one fresh click.
    let mut sim = lid_at(3.0 * W);
    let clicks = run_until_settled(&mut sim, &drag_to(4.0 * W), 10_000);
    assert_eq!(clicks, 1);
    assert!((sim.position - 4.0 * W).abs() <= sim.params().detent_active_range);
}

#[test]
fn no_detent_pull_beyond_the_final_slot() {
    // Dragged past the case, the lid settles exactly at the pointer target
    // because only the drag spring and damping act out there.
    let mut sim = LidSim::new(params());
    run_until_settled(&mut sim, &drag_to(8.0 * W), 20_000);
    assert!(
        (sim.position - 8.0 * W).abs() < 0.5,
        "expected free settling at 8W, got {}",
        sim.position
    );
}

#[test]
fn position_never_goes_negative_under_leftward_drag() {
    let mut sim = LidSim::new(params());
    let drag = drag_to(-2.0 * W);
    for _ in 0..2_000 {
        sim.step(&drag);
        assert!(sim.position >= 0.0, "lid escaped the closed boundary");
    }
}

#[test]
fn boundary_bounce_inverts_and_scales_velocity() {
    let mut sim = lid_at(1.0);
    sim.velocity = -100.0;

    // One step: detent pull toward 0 plus damping gives v = -76 before the
    // boundary, so the clamp leaves v = 76 * 0.2.
    let outcome = sim.step(&DragInput::default());
    assert!(outcome.bounced);
    assert_eq!(sim.position, 0.0);
    assert!(
        (sim.velocity - 15.2).abs() < 1e-3,
        "bounce velocity {} != 15.2",
        sim.velocity
    );
}

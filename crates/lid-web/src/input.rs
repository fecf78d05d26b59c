// Pure pointer math for the drag gesture. Kept free of web-sys so the
// host-side tests can include this module directly.

/// Pointer offset from the lid's left edge at grab time. Subtracting it from
/// later pointer positions keeps the lid from jumping under the cursor.
#[inline]
pub fn drag_anchor(client_x: f32, lid_left: f32) -> f32 {
    client_x - lid_left
}

/// Lid position implied by the current pointer, relative to the grab anchor.
#[inline]
pub fn implied_position(client_x: f32, anchor_x: f32) -> f32 {
    client_x - anchor_x
}

/// Accept a pointer move only while the implied lid position stays on the
/// track; moves that would push the lid past the closed boundary are dropped
/// so the drag spring never aims at a negative target.
#[inline]
pub fn accept_pointer_move(client_x: f32, anchor_x: f32) -> Option<f32> {
    (implied_position(client_x, anchor_x) >= 0.0).then_some(client_x)
}

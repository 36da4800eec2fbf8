//! Overlap detection between grid-aligned unit bounding boxes
//!
//! Every entity occupies a unit square anchored at its (x, y) position. An
//! overlap is declared when either entity's anchor falls inside the other's
//! box, with both boxes shrunk horizontally by a margin factor so that the
//! sprites' transparent side padding doesn't register as a hit.
//!
//! The two-sided anchor-in-box check is a cheap approximation of a full AABB
//! intersection: it can miss configurations where both boxes partially
//! overlap without either anchor landing inside the other. Gameplay is tuned
//! around exactly these outcomes, so don't "fix" it to exact AABB.

/// True if `anchor` falls inside the unit box anchored at `corner`, shrunk
/// horizontally by `margin` on both sides.
///
/// Edges are half-open: an anchor exactly on the shrunk left edge is inside,
/// one exactly on the shrunk right edge is not.
fn anchor_in_box(anchor: (f32, f32), corner: (f32, f32), margin: f32) -> bool {
    let (ax, ay) = anchor;
    let (cx, cy) = corner;
    (cx + margin <= ax && ax < cx + 1.0 - margin) && (cy <= ay && ay < cy + 1.0)
}

/// Two-sided overlap test between the unit boxes anchored at `a` and `b`.
///
/// `margin` must be in `[0, 1)`: at 0 the full cell collides, and the hit
/// region narrows as it grows. The test is symmetric in `a` and `b`.
pub fn anchors_overlap(a: (f32, f32), b: (f32, f32), margin: f32) -> bool {
    anchor_in_box(a, b, margin) || anchor_in_box(b, a, margin)
}

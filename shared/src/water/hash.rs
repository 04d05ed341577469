//! Hash-to-noise helpers shared by every cell lookup.
//!
//! These mirror the WGSL builtins bit for bit where it matters: `fract` is the
//! GLSL flavour (`x - floor(x)`), not Rust's truncating `f32::fract`, so
//! negative cell coordinates hash the same way on both sides.

use bevy::math::Vec2;

/// First projection axis of the cell hash.
pub const HASH_AXIS_X: Vec2 = Vec2::new(127.1, 311.7);

/// Second projection axis of the cell hash.
pub const HASH_AXIS_Y: Vec2 = Vec2::new(269.5, 183.3);

/// Amplifies the low bits of `sin` before they are folded back into `[0, 1)`.
pub const HASH_SCALE: f32 = 43758.5453;

#[inline(always)]
pub fn fract_gl(x: f32) -> f32 {
    x - x.floor()
}

#[inline(always)]
pub fn fract_gl2(v: Vec2) -> Vec2 {
    v - v.floor()
}

/// Maps a cell coordinate to a pseudo-random point in `[0, 1)²`.
///
/// Not cryptographic: neighbouring cells only need to look uncorrelated.
pub fn hash2(cell: Vec2) -> Vec2 {
    let projected = Vec2::new(cell.dot(HASH_AXIS_X), cell.dot(HASH_AXIS_Y));
    Vec2::new(
        fract_gl(projected.x.sin() * HASH_SCALE),
        fract_gl(projected.y.sin() * HASH_SCALE),
    )
}

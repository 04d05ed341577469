//! Single-layer Worley (cellular) distance field with stepped animation.
//!
//! The surface is split into unit cells after tiling. Each cell owns one
//! pseudo-random feature point that orbits inside the cell; the field value at
//! a fragment is the distance to the nearest feature point among the 3x3 cell
//! neighbourhood, capped at 1.0.

use bevy::math::Vec2;
use std::f32::consts::TAU;

use super::hash::{fract_gl2, hash2};
use super::WaterConfig;

/// Offsets of the 3x3 neighbourhood, row by row.
pub const NEIGHBOUR_OFFSETS: [Vec2; 9] = [
    Vec2::new(-1.0, -1.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(-1.0, 1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
];

/// Field value used when no feature point is closer.
pub const MAX_DISTANCE: f32 = 1.0;

/// Snaps `v` down onto a grid of `steps` divisions per unit.
#[inline(always)]
pub fn quantize(v: Vec2, steps: f32) -> Vec2 {
    (v * steps).floor() / steps
}

/// Where a fragment lands after tiling: the cell it belongs to and its
/// (quantized) position inside that cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSample {
    pub cell: Vec2,
    pub local: Vec2,
}

impl CellSample {
    pub fn from_uv(uv: Vec2, config: &WaterConfig) -> Self {
        let st = uv * config.tiling;
        Self {
            // Integer cell indices are already on the grid; quantizing keeps the
            // GPU and CPU paths doing the same arithmetic.
            cell: quantize(st.floor(), config.quantize_steps),
            local: quantize(fract_gl2(st), config.quantize_steps),
        }
    }
}

/// Time snapped to the start of its animation frame.
#[inline(always)]
pub fn stepped_time(time: f32, animation_steps: f32) -> f32 {
    (time * animation_steps).floor() / animation_steps
}

/// Feature point of `cell`, in cell-local coordinates, at (already stepped)
/// time `phase`.
pub fn animated_point(cell: Vec2, phase: f32) -> Vec2 {
    let angle = Vec2::splat(phase) + TAU * hash2(cell);
    Vec2::splat(0.5) + 0.5 * Vec2::new(angle.x.sin(), angle.y.sin())
}

/// Distance from the fragment to the nearest feature point in the 3x3
/// neighbourhood of its cell.
pub fn min_distance(sample: CellSample, time: f32, config: &WaterConfig) -> f32 {
    let phase = stepped_time(time, config.animation_steps);
    NEIGHBOUR_OFFSETS
        .iter()
        .map(|&offset| {
            let point = animated_point(sample.cell + offset, phase);
            (offset + point - sample.local).length()
        })
        .fold(MAX_DISTANCE, f32::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_snaps_down() {
        assert_eq!(quantize(Vec2::new(0.3, 0.99), 4.0), Vec2::new(0.25, 0.75));
        assert_eq!(quantize(Vec2::new(0.0, 0.24), 4.0), Vec2::ZERO);
        assert_eq!(quantize(Vec2::new(7.0, -3.0), 4.0), Vec2::new(7.0, -3.0));
    }

    #[test]
    fn test_adjacent_uv_steps_land_in_adjacent_cells() {
        let config = WaterConfig::default();
        let a = CellSample::from_uv(Vec2::new(0.25375, 0.40375), &config);
        let b = CellSample::from_uv(Vec2::new(0.26375, 0.40375), &config);
        assert_eq!(a.cell, Vec2::new(25.0, 40.0));
        assert_eq!(b.cell - a.cell, Vec2::new(1.0, 0.0));
        assert_eq!(a.local, Vec2::new(0.25, 0.25));
        assert_eq!(a.local, b.local);
    }

    #[test]
    fn test_local_position_is_blocky() {
        let config = WaterConfig::default();
        let a = CellSample::from_uv(Vec2::new(0.0101, 0.0201), &config);
        let b = CellSample::from_uv(Vec2::new(0.0102, 0.0202), &config);
        assert_eq!(a, b);
        assert_eq!(a.local, Vec2::ZERO);
    }

    #[test]
    fn test_stepped_time_buckets() {
        assert_eq!(stepped_time(1.0, 8.0), 1.0);
        assert_eq!(stepped_time(1.1, 8.0), 1.0);
        assert_eq!(stepped_time(1.125, 8.0), 1.125);
        assert_eq!(stepped_time(0.0, 8.0), 0.0);
    }

    #[test]
    fn test_animated_point_stays_inside_cell() {
        for i in 0..64 {
            let cell = Vec2::new((i % 8) as f32 - 4.0, (i / 8) as f32 - 4.0);
            let point = animated_point(cell, i as f32 * 0.125);
            assert!(point.cmpge(Vec2::ZERO).all() && point.cmple(Vec2::ONE).all());
        }
    }

    #[test]
    fn test_origin_cell_point_at_time_zero_is_cell_centre() {
        assert_eq!(animated_point(Vec2::ZERO, 0.0), Vec2::splat(0.5));
    }

    #[test]
    fn test_min_distance_at_origin() {
        let config = WaterConfig::default();
        let sample = CellSample::from_uv(Vec2::ZERO, &config);
        let d = min_distance(sample, 0.0, &config);
        assert!((d - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5, "got {d}");
    }

    #[test]
    fn test_min_distance_is_capped() {
        let config = WaterConfig::default();
        for i in 0..200 {
            let uv = Vec2::new(i as f32 * 0.0037, i as f32 * 0.0051);
            let d = min_distance(CellSample::from_uv(uv, &config), i as f32 * 0.3, &config);
            assert!((0.0..=MAX_DISTANCE).contains(&d), "uv {uv} gave {d}");
        }
    }

    #[test]
    fn test_distance_field_is_coherent_within_a_cell() {
        // Within one cell the feature points are fixed, so stepping one
        // quantization block moves the field by at most the block size.
        let config = WaterConfig::default();
        let step = 1.0 / config.quantize_steps;
        for cell in [Vec2::ZERO, Vec2::new(12.0, 7.0), Vec2::new(-3.0, 41.0)] {
            for time in [0.0, 0.5, 2.75] {
                for y in 0..4 {
                    for x in 0..3 {
                        let a = CellSample {
                            cell,
                            local: Vec2::new(x as f32, y as f32) * step,
                        };
                        let b = CellSample {
                            cell,
                            local: a.local + Vec2::new(step, 0.0),
                        };
                        let da = min_distance(a, time, &config);
                        let db = min_distance(b, time, &config);
                        assert!(
                            (da - db).abs() <= step + 1e-5,
                            "jump of {} in cell {cell} at t={time}",
                            (da - db).abs()
                        );
                    }
                }
            }
        }
    }
}

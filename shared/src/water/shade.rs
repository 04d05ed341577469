//! The water fragment function.
//!
//! Keep in sync with `client/src/shaders/water.wgsl`: both sides must run the
//! same arithmetic in the same order for CPU snapshots to match the GPU.

use bevy::math::{Vec2, Vec3, Vec4};

use super::worley::{min_distance, CellSample};
use super::WaterConfig;

/// Per-frame values the host renderer supplies to every invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaderInputs {
    /// Viewport size in pixels.
    pub resolution: Vec2,
    /// Seconds since start.
    pub time: f32,
}

/// Intermediate terms of one evaluation, kept around for debugging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterFragment {
    pub min_distance: f32,
    pub highlight: f32,
    pub color: Vec4,
}

/// Brightness of the caustic lines for a given distance field value.
#[inline]
pub fn highlight(distance: f32, config: &WaterConfig) -> f32 {
    distance.powf(config.highlight_power) + config.glow_weight * distance.powf(config.glow_power)
}

/// Composites the tinted highlight over the base water color.
pub fn composite(highlight: f32, config: &WaterConfig) -> Vec3 {
    let white = Vec3::splat(highlight);
    let tinted = white.lerp(config.wave_color * highlight, config.tint_mix);
    config.base_color + tinted * config.attenuation
}

impl ShaderInputs {
    pub fn new(resolution: Vec2, time: f32) -> Self {
        Self { resolution, time }
    }

    pub fn fragment(&self, uv: Vec2, config: &WaterConfig) -> WaterFragment {
        let sample = CellSample::from_uv(uv, config);
        let min_distance = min_distance(sample, self.time, config);
        let highlight = highlight(min_distance, config);
        WaterFragment {
            min_distance,
            highlight,
            color: composite(highlight, config).extend(1.0),
        }
    }
}

/// Color of the water surface at `uv` for the given frame.
///
/// `resolution` is accepted to match the renderer's bindings; the pattern
/// itself only depends on `uv` and `time`.
pub fn water_color(uv: Vec2, time: f32, resolution: Vec2, config: &WaterConfig) -> Vec4 {
    ShaderInputs::new(resolution, time).fragment(uv, config).color
}

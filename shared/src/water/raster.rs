//! Software rasterizer for the water surface.
//!
//! Evaluates the fragment function once per pixel centre, the same way the GPU
//! does for a full-screen quad. Used for headless snapshots and for checking
//! the shader math without a device.

use bevy::color::{ColorToPacked, LinearRgba, Srgba};
use bevy::math::{UVec2, Vec2, Vec4};
use bevy_log::debug;

use super::{ShaderInputs, WaterConfig};

/// Largest frame the rasterizer will shade (a 16K square).
pub const MAX_FRAME_PIXELS: usize = 16384 * 16384;

/// Number of pixels in a `resolution`-sized frame, or `None` if it overflows
/// or exceeds [`MAX_FRAME_PIXELS`].
pub fn pixel_count(resolution: UVec2) -> Option<usize> {
    (resolution.x as usize)
        .checked_mul(resolution.y as usize)
        .filter(|&count| count <= MAX_FRAME_PIXELS)
}

/// Linear RGBA pixels in row-major order, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec4>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Vec4> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.pixels.get(index).copied()
    }

    /// Packs the frame the way a display would show it: clamped to `[0, 1]`
    /// and encoded as 8-bit sRGB.
    pub fn to_srgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| {
                let c = p.clamp(Vec4::ZERO, Vec4::ONE);
                Srgba::from(LinearRgba::new(c.x, c.y, c.z, c.w)).to_u8_array()
            })
            .collect()
    }
}

/// UV of the centre of pixel `(x, y)`.
pub fn uv_for_pixel(x: u32, y: u32, resolution: UVec2) -> Vec2 {
    (Vec2::new(x as f32, y as f32) + 0.5) / resolution.as_vec2()
}

/// Shades every pixel of a `resolution`-sized frame at `time`.
///
/// Callers taking sizes from user input should check them with
/// [`pixel_count`] first.
pub fn render_frame(resolution: UVec2, time: f32, config: &WaterConfig) -> Frame {
    let inputs = ShaderInputs::new(resolution.as_vec2(), time);
    let mut pixels =
        Vec::with_capacity((resolution.x as usize).saturating_mul(resolution.y as usize));
    for y in 0..resolution.y {
        for x in 0..resolution.x {
            let uv = uv_for_pixel(x, y, resolution);
            pixels.push(inputs.fragment(uv, config).color);
        }
    }

    debug!(
        "Rasterized {}x{} water frame at t={:.3}",
        resolution.x, resolution.y, time
    );

    Frame {
        width: resolution.x,
        height: resolution.y,
        pixels,
    }
}

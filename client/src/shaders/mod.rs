//! Custom shader system for Pixelwater
//!
//! ## Water Shader
//! The water shader (`shaders/water.wgsl`) draws a blocky, Worley-noise
//! caustic pattern over a flat water color. It uses:
//! - One feature point per cell, hashed from the cell coordinate
//! - Stepped animation (8 frames per second by default)
//! - Two power curves for the highlight and its glow
//!
//! Its CPU twin lives in `shared::water` and is what the tests exercise.

pub mod water;
pub mod water_uniforms;

pub use water::{WaterMaterial, WaterPlugin};
pub use water_uniforms::WaterUniform;

/// Shader asset paths
pub mod paths {
    /// Path of the embedded water shader
    pub const WATER_SHADER: &str = "embedded://pixelwater/shaders/water.wgsl";
}

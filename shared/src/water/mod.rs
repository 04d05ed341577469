//! Pixelated Worley-noise water surface, CPU side.
//!
//! This module is the reference for the fragment shader in
//! `client/src/shaders/water.wgsl`:
//!
//! ```text
//!                 ┌──────────────────────┐
//!                 │ WaterConfig (shared) │
//!                 └──────────┬───────────┘
//!           ┌────────────────┴────────────────┐
//!           ▼                                 ▼
//!   ┌───────────────┐                 ┌───────────────┐
//!   │ CPU reference │                 │  GPU shader   │
//!   │ (shade.rs)    │                 │ (water.wgsl)  │
//!   │ - snapshots   │                 │ - Material2d  │
//!   │ - tests       │                 │ - per pixel   │
//!   └───────────────┘                 └───────────────┘
//! ```
//!
//! Pipeline per fragment: tile the UV, snap it onto a blocky sub-cell grid,
//! find the nearest animated feature point among the 3x3 neighbouring cells,
//! and turn that distance into a tinted highlight over the base water color.

pub mod config;
pub mod hash;
pub mod raster;
pub mod shade;
pub mod worley;

pub use config::{ConfigError, WaterConfig};
pub use raster::{pixel_count, render_frame, uv_for_pixel, Frame, MAX_FRAME_PIXELS};
pub use shade::{water_color, ShaderInputs, WaterFragment};

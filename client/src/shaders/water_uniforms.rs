//! Water shader uniform data
//!
//! Separated into its own module to isolate the `#![allow(dead_code)]` directive,
//! which is required due to the ShaderType derive macro generating internal
//! `check` functions that trigger warnings.

#![allow(dead_code)]

use bevy::{prelude::*, render::render_resource::ShaderType};
use shared::WaterConfig;

/// Uniform data for the water shader (matches the WGSL `WaterSettings` struct)
#[derive(ShaderType, Reflect, Debug, Clone, Copy, PartialEq)]
pub struct WaterUniform {
    /// Base color of the water, alpha unused
    pub base_color: Vec4,
    /// Tint applied to the caustic highlight, alpha unused
    pub wave_color: Vec4,
    pub tiling: f32,
    pub quantize_steps: f32,
    /// Animation frames per second
    pub animation_steps: f32,
    pub highlight_power: f32,
    pub glow_power: f32,
    pub glow_weight: f32,
    pub tint_mix: f32,
    pub attenuation: f32,
}

impl From<&WaterConfig> for WaterUniform {
    fn from(config: &WaterConfig) -> Self {
        Self {
            base_color: config.base_color.extend(1.0),
            wave_color: config.wave_color.extend(1.0),
            tiling: config.tiling,
            quantize_steps: config.quantize_steps,
            animation_steps: config.animation_steps,
            highlight_power: config.highlight_power,
            glow_power: config.glow_power,
            glow_weight: config.glow_weight,
            tint_mix: config.tint_mix,
            attenuation: config.attenuation,
        }
    }
}

impl Default for WaterUniform {
    fn default() -> Self {
        Self::from(&WaterConfig::default())
    }
}

impl WaterUniform {
    /// Inverse of `From<&WaterConfig>`, used to persist live-tuned settings.
    pub fn to_config(&self) -> WaterConfig {
        WaterConfig {
            tiling: self.tiling,
            quantize_steps: self.quantize_steps,
            animation_steps: self.animation_steps,
            base_color: self.base_color.truncate(),
            wave_color: self.wave_color.truncate(),
            highlight_power: self.highlight_power,
            glow_power: self.glow_power,
            glow_weight: self.glow_weight,
            tint_mix: self.tint_mix,
            attenuation: self.attenuation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_converts_back_to_the_same_config() {
        let config = WaterConfig {
            quantize_steps: 8.0,
            wave_color: Vec3::new(1.0, 0.5, 0.25),
            ..Default::default()
        };
        assert_eq!(WaterUniform::from(&config).to_config(), config);
    }
}

//! Tuning constants for the water surface, shared between the CPU reference
//! and the GPU uniform.
//!
//! The defaults reproduce the fixed look of the effect; a RON file can override
//! any of them without recompiling the shader.

use bevy::math::Vec3;
use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Configuration Constants
// ============================================================================

/// UV scale applied before the cell lookup. 100 cells span the surface.
pub const DEFAULT_TILING: f32 = 100.0;

/// Sub-cell quantization steps per axis (the "pixel" size of the effect).
pub const DEFAULT_QUANTIZE_STEPS: f32 = 4.0;

/// Discrete animation frames per second.
pub const DEFAULT_ANIMATION_STEPS: f32 = 8.0;

pub const DEFAULT_BASE_COLOR: Vec3 = Vec3::new(0.05, 0.32, 0.52);
pub const DEFAULT_WAVE_COLOR: Vec3 = Vec3::new(0.62, 0.88, 1.0);

/// Exponent of the narrow caustic line.
pub const DEFAULT_HIGHLIGHT_POWER: f32 = 6.0;

/// Exponent of the soft glow around each line.
pub const DEFAULT_GLOW_POWER: f32 = 2.0;
pub const DEFAULT_GLOW_WEIGHT: f32 = 0.5;

/// 0.0 = white highlight, 1.0 = fully tinted by `wave_color`.
pub const DEFAULT_TINT_MIX: f32 = 0.6;
pub const DEFAULT_ATTENUATION: f32 = 0.45;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be finite and greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("`{field}` must be finite and not negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("`tint_mix` must lie within [0, 1] (got {0})")]
    TintMixOutOfRange(f32),
    #[error("`{0}` contains a non-finite channel")]
    NonFiniteColor(&'static str),
    #[error("invalid water config: {0}")]
    Ron(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Every constant the water surface depends on.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    pub tiling: f32,
    pub quantize_steps: f32,
    pub animation_steps: f32,
    pub base_color: Vec3,
    pub wave_color: Vec3,
    pub highlight_power: f32,
    pub glow_power: f32,
    pub glow_weight: f32,
    pub tint_mix: f32,
    pub attenuation: f32,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            tiling: DEFAULT_TILING,
            quantize_steps: DEFAULT_QUANTIZE_STEPS,
            animation_steps: DEFAULT_ANIMATION_STEPS,
            base_color: DEFAULT_BASE_COLOR,
            wave_color: DEFAULT_WAVE_COLOR,
            highlight_power: DEFAULT_HIGHLIGHT_POWER,
            glow_power: DEFAULT_GLOW_POWER,
            glow_weight: DEFAULT_GLOW_WEIGHT,
            tint_mix: DEFAULT_TINT_MIX,
            attenuation: DEFAULT_ATTENUATION,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl WaterConfig {
    /// Rejects values that would make the shader divide by zero or emit NaN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("tiling", self.tiling)?;
        positive("quantize_steps", self.quantize_steps)?;
        positive("animation_steps", self.animation_steps)?;
        non_negative("highlight_power", self.highlight_power)?;
        non_negative("glow_power", self.glow_power)?;
        non_negative("glow_weight", self.glow_weight)?;
        non_negative("attenuation", self.attenuation)?;
        if !(0.0..=1.0).contains(&self.tint_mix) {
            return Err(ConfigError::TintMixOutOfRange(self.tint_mix));
        }
        if !self.base_color.is_finite() {
            return Err(ConfigError::NonFiniteColor("base_color"));
        }
        if !self.wave_color.is_finite() {
            return Err(ConfigError::NonFiniteColor("wave_color"));
        }
        Ok(())
    }

    /// Parses and validates a RON document. Missing fields keep their defaults.
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: WaterConfig =
            ron::from_str(source).map_err(|e| ConfigError::Ron(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .with_depth_limit(2)
            .with_separate_tuple_members(false)
            .with_enumerate_arrays(false);
        ron::ser::to_string_pretty(self, pretty).map_err(|e| ConfigError::Ron(e.to_string()))
    }

    /// Index of the animation frame `time` falls into.
    pub fn animation_bucket(&self, time: f32) -> f32 {
        (time * self.animation_steps).floor()
    }

    /// Upper bound of any color channel the surface can produce.
    pub fn max_channel(&self, base: f32, wave: f32) -> f32 {
        let peak = 1.0 + self.glow_weight;
        let tint = (1.0 - self.tint_mix) + self.tint_mix * wave;
        base + peak * tint * self.attenuation
    }
}

//! Pixelated Worley-noise water material.
//!
//! The fragment shader (`water.wgsl`) is embedded at compile time and bound
//! through a `Material2d`, so it receives Bevy's 2D view uniform (group 0,
//! binding 0) and globals (group 0, binding 1) alongside our own settings.

use bevy::{
    asset::embedded_asset,
    prelude::*,
    render::render_resource::{AsBindGroup, ShaderRef},
    sprite::{Material2d, Material2dPlugin},
};
use shared::WaterConfig;

use super::water_uniforms::WaterUniform;

/// Plugin that registers the custom water material and shader.
pub struct WaterPlugin;

impl Plugin for WaterPlugin {
    fn build(&self, app: &mut App) {
        // Embed the shader at compile time
        embedded_asset!(app, "water.wgsl");

        app.add_plugins(Material2dPlugin::<WaterMaterial>::default())
            .register_asset_reflect::<WaterMaterial>();
    }
}

/// Water surface material.
///
/// Opaque: the shader always writes alpha 1.0.
#[derive(Asset, AsBindGroup, Reflect, Debug, Clone, Default)]
pub struct WaterMaterial {
    #[uniform(0)]
    pub settings: WaterUniform,
}

impl WaterMaterial {
    pub fn from_config(config: &WaterConfig) -> Self {
        Self {
            settings: WaterUniform::from(config),
        }
    }
}

impl Material2d for WaterMaterial {
    fn fragment_shader() -> ShaderRef {
        super::paths::WATER_SHADER.into()
    }
}

use bevy::{
    diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin},
    prelude::*,
    window::PrimaryWindow,
};

use crate::shaders::WaterMaterial;
use crate::world::WaterMaterialResource;

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct WaterText;

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut TextSpan, With<FpsText>>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed());
    for mut span in query.iter_mut() {
        **span = match fps {
            Some(value) => format!("{value:.1}"),
            None => "N/A".to_string(),
        };
    }
}

/// Shows the animation frame the shader is on and the viewport it draws into.
///
/// Reads the live material, so edits made in the inspector show up at once,
/// and the wrapped elapsed time, which is what the shader's `globals.time` is.
pub fn water_text_update_system(
    mut query: Query<&mut TextSpan, With<WaterText>>,
    time: Res<Time>,
    water: Option<Res<WaterMaterialResource>>,
    materials: Res<Assets<WaterMaterial>>,
    window_q: Query<&Window, With<PrimaryWindow>>,
) {
    let Some(material) = water.and_then(|water| materials.get(&water.handle)) else {
        return;
    };
    let bucket = (time.elapsed_secs_wrapped() * material.settings.animation_steps).floor();
    let resolution = window_q
        .single()
        .map(|window| format!("{}x{}", window.physical_width(), window.physical_height()))
        .unwrap_or_else(|_| "N/A".to_string());

    for mut span in query.iter_mut() {
        **span = format!("frame {bucket} @ {resolution}");
    }
}

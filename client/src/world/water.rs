//! The water scene: a 2D camera looking at one quad that always covers the
//! window.

use bevy::{
    core_pipeline::tonemapping::Tonemapping,
    prelude::*,
    window::{PrimaryWindow, WindowResized},
};
use shared::WaterConfig;

use crate::config::{save_config, ConfigPath};
use crate::constants::{keys, WATER_Z};
use crate::shaders::WaterMaterial;

/// Marker for the water quad.
#[derive(Component)]
pub struct Water;

/// Handle of the single water material.
#[derive(Resource)]
pub struct WaterMaterialResource {
    pub handle: Handle<WaterMaterial>,
}

/// Size used until the primary window reports its own.
const FALLBACK_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

pub fn setup_water(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<WaterMaterial>>,
    config: Res<WaterConfig>,
    window_q: Query<&Window, With<PrimaryWindow>>,
) {
    // Colors are written as-is: no tonemapping between shader and screen.
    commands.spawn((Camera2d, Tonemapping::None));

    let size = window_q.single().map(Window::size).unwrap_or(FALLBACK_SIZE);
    let handle = materials.add(WaterMaterial::from_config(&config));

    commands.spawn((
        Mesh2d(meshes.add(Rectangle::new(1.0, 1.0))),
        MeshMaterial2d(handle.clone()),
        Transform::from_xyz(0.0, 0.0, WATER_Z).with_scale(size.extend(1.0)),
        Water,
    ));
    commands.insert_resource(WaterMaterialResource { handle });

    info!("Water surface spawned at {}x{}", size.x, size.y);
}

/// Keeps the water quad the same size as the window.
pub fn fit_water_to_window(
    mut resize_events: EventReader<WindowResized>,
    mut water_q: Query<&mut Transform, With<Water>>,
) {
    let Some(resized) = resize_events.read().last() else {
        return;
    };
    let size = Vec2::new(resized.width, resized.height);
    for mut transform in water_q.iter_mut() {
        transform.scale = size.extend(1.0);
    }
    debug!("Water surface resized to {}x{}", size.x, size.y);
}

/// Writes the live material settings back to the config file.
pub fn save_water_config_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    water: Option<Res<WaterMaterialResource>>,
    materials: Res<Assets<WaterMaterial>>,
    config_path: Res<ConfigPath>,
    mut config: ResMut<WaterConfig>,
) {
    if !keyboard_input.just_pressed(keys::SAVE_CONFIG) {
        return;
    }
    let Some(material) = water.and_then(|water| materials.get(&water.handle)) else {
        return;
    };

    let updated = material.settings.to_config();
    if let Err(e) = updated.validate() {
        warn!("Not saving water config: {}", e);
        return;
    }
    match save_config(&updated, &config_path.0) {
        Ok(_) => {
            *config = updated;
            info!("Water config saved to {:?}", config_path.0);
        }
        Err(e) => error!("Failed to save water config to {:?}: {}", config_path.0, e),
    }
}

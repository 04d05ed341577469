pub mod setup;
pub mod stats;

use bevy::{diagnostic::FrameTimeDiagnosticsPlugin, prelude::*};
use bevy_inspector_egui::{bevy_egui::EguiPlugin, quick::AssetInspectorPlugin};
pub use setup::*;
pub use stats::*;

use crate::constants::keys;
use crate::shaders::WaterMaterial;

#[derive(Resource, Default)]
pub struct DebugOptions {
    is_hud_visible: bool,
    is_inspector_visible: bool,
}

impl DebugOptions {
    pub fn toggle_hud(&mut self) {
        self.is_hud_visible = !self.is_hud_visible;
    }

    pub fn toggle_inspector(&mut self) {
        self.is_inspector_visible = !self.is_inspector_visible;
        info!(
            "Water inspector: {}",
            if self.is_inspector_visible { "ON" } else { "OFF" }
        );
    }

    pub fn is_hud_visible(&self) -> bool {
        self.is_hud_visible
    }
}

fn inspector_visible(options: Res<DebugOptions>) -> bool {
    options.is_inspector_visible
}

pub fn toggle_debug_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut options: ResMut<DebugOptions>,
    mut hud_q: Query<&mut Visibility, With<HudRoot>>,
) {
    if keyboard_input.just_pressed(keys::TOGGLE_HUD) {
        options.toggle_hud();
        for mut visibility in hud_q.iter_mut() {
            *visibility = if options.is_hud_visible() {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
        }
    }
    if keyboard_input.just_pressed(keys::TOGGLE_INSPECTOR) {
        options.toggle_inspector();
    }
}

pub struct DebugHudPlugin;
impl Plugin for DebugHudPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }
        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin {
                enable_multipass_for_primary_context: true,
            });
        }
        app.init_resource::<DebugOptions>()
            .add_plugins(AssetInspectorPlugin::<WaterMaterial>::default().run_if(inspector_visible))
            .add_systems(Startup, setup_debug_hud)
            .add_systems(
                Update,
                (toggle_debug_system, fps_text_update_system, water_text_update_system),
            );
    }
}

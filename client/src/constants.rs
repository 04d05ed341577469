pub const WINDOW_TITLE: &str = "Pixelwater";
pub const DEFAULT_CONFIG_PATH: &str = "data/water.ron";
pub const DEFAULT_SNAPSHOT_WIDTH: u32 = 512;
pub const DEFAULT_SNAPSHOT_HEIGHT: u32 = 512;
/// Z of the water quad, behind anything else the camera might show.
pub const WATER_Z: f32 = -100.0;

pub mod keys {
    use bevy::input::keyboard::KeyCode;

    pub const TOGGLE_HUD: KeyCode = KeyCode::F3;
    pub const SAVE_CONFIG: KeyCode = KeyCode::F5;
    pub const TOGGLE_INSPECTOR: KeyCode = KeyCode::F8;
}

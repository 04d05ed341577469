mod config;
mod constants;
mod shaders;
mod snapshot;
mod ui;
mod world;

use bevy::{prelude::*, window::PresentMode};
use clap::Parser;
use config::{load_water_config, ConfigPath};
use constants::{DEFAULT_CONFIG_PATH, DEFAULT_SNAPSHOT_HEIGHT, DEFAULT_SNAPSHOT_WIDTH, WINDOW_TITLE};
use shaders::WaterPlugin;
use snapshot::{snapshot_app, SnapshotRequest};
use std::path::PathBuf;
use ui::hud::debug::DebugHudPlugin;
use world::{fit_water_to_window, save_water_config_system, setup_water};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(
        short,
        long,
        default_value = DEFAULT_CONFIG_PATH,
        help = "Water config file (RON), created with defaults if missing"
    )]
    config: PathBuf,

    #[arg(
        long,
        value_name = "PNG",
        help = "Render a single frame on the CPU to this file and exit"
    )]
    snapshot: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_SNAPSHOT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_SNAPSHOT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    #[arg(long, default_value_t = 0.0, help = "Seconds since start for the snapshot")]
    time: f32,
}

fn load_config_system(mut commands: Commands, config_path: Res<ConfigPath>) {
    commands.insert_resource(load_water_config(&config_path.0));
}

fn main() -> AppExit {
    let args = Args::parse();

    let mut app = match args.snapshot {
        Some(output) => snapshot_app(SnapshotRequest {
            output,
            resolution: UVec2::new(args.width, args.height),
            time: args.time,
        }),
        None => {
            let mut app = App::new();
            app.add_plugins(DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            }))
            .add_plugins((WaterPlugin, DebugHudPlugin))
            .add_systems(Startup, setup_water)
            .add_systems(Update, (fit_water_to_window, save_water_config_system));
            app
        }
    };

    app.insert_resource(ConfigPath(args.config))
        .add_systems(PreStartup, load_config_system)
        .run()
}

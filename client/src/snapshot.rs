//! Headless rendering: rasterize one frame of the water on the CPU and save it
//! as a PNG, without opening a window or touching the GPU.

use bevy::{log::LogPlugin, prelude::*};
use image::{
    error::{LimitError, LimitErrorKind, ParameterError, ParameterErrorKind},
    ImageError, RgbaImage,
};
use shared::water::pixel_count;
use shared::{render_frame, WaterConfig};
use std::{fs, path::PathBuf};

#[derive(Resource, Debug, Clone)]
pub struct SnapshotRequest {
    pub output: PathBuf,
    pub resolution: UVec2,
    pub time: f32,
}

pub fn write_snapshot(request: &SnapshotRequest, config: &WaterConfig) -> Result<(), ImageError> {
    if pixel_count(request.resolution).is_none() {
        return Err(ImageError::Limits(LimitError::from_kind(
            LimitErrorKind::DimensionError,
        )));
    }

    let frame = render_frame(request.resolution, request.time, config);
    let image = RgbaImage::from_raw(frame.width, frame.height, frame.to_srgba8()).ok_or_else(
        || ImageError::Parameter(ParameterError::from_kind(ParameterErrorKind::DimensionMismatch)),
    )?;

    if let Some(parent) = request.output.parent() {
        fs::create_dir_all(parent).map_err(ImageError::IoError)?;
    }
    image.save(&request.output)
}

fn snapshot_system(
    request: Res<SnapshotRequest>,
    config: Res<WaterConfig>,
    mut exit: EventWriter<AppExit>,
) {
    match write_snapshot(&request, &config) {
        Ok(_) => {
            info!(
                "Wrote {}x{} water snapshot at t={} to {:?}",
                request.resolution.x, request.resolution.y, request.time, request.output
            );
            exit.write(AppExit::Success);
        }
        Err(e) => {
            error!("Failed to write snapshot to {:?}: {}", request.output, e);
            exit.write(AppExit::error());
        }
    }
}

/// Builds the headless app around the shared startup systems.
pub fn snapshot_app(request: SnapshotRequest) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(request)
        .add_systems(Startup, snapshot_system);
    app
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, width: u32, height: u32) -> SnapshotRequest {
        SnapshotRequest {
            output: std::env::temp_dir()
                .join(format!("pixelwater-snapshot-{}", std::process::id()))
                .join(name),
            resolution: UVec2::new(width, height),
            time: 0.0,
        }
    }

    #[test]
    fn test_snapshot_is_written_as_png() {
        let request = request("frame.png", 24, 16);
        write_snapshot(&request, &WaterConfig::default()).unwrap();

        let image = image::open(&request.output).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (24, 16));
        assert!(image.pixels().all(|px| px.0[3] == 255));
    }

    #[test]
    fn test_oversized_snapshot_is_refused_before_rendering() {
        let request = request("huge.png", 65536, 65536);
        let result = write_snapshot(&request, &WaterConfig::default());
        assert!(matches!(result, Err(ImageError::Limits(_))));
        assert!(!request.output.exists());
    }

    #[test]
    fn test_snapshot_matches_cpu_frame() {
        let request = request("match.png", 8, 8);
        let config = WaterConfig::default();
        write_snapshot(&request, &config).unwrap();

        let expected = render_frame(request.resolution, request.time, &config).to_srgba8();
        let image = image::open(&request.output).unwrap().to_rgba8();
        assert_eq!(image.into_raw(), expected);
    }
}

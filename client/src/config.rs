use bevy::prelude::*;
use shared::{ConfigError, WaterConfig};
use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::Path,
};

/// Path the water config was loaded from, kept so it can be written back.
#[derive(Resource, Debug, Clone)]
pub struct ConfigPath(pub std::path::PathBuf);

pub fn save_config(config: &WaterConfig, path: &Path) -> Result<(), ConfigError> {
    let serialized = config.to_ron()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(serialized.as_bytes())?;
    Ok(())
}

/// Reads the water config at `path`, writing the defaults there first if the
/// file does not exist yet.
pub fn load_or_create(path: &Path) -> Result<WaterConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => WaterConfig::from_ron(&content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let config = WaterConfig::default();
            save_config(&config, path)?;
            info!("Created default water config at {:?}", path);
            Ok(config)
        }
        Err(e) => Err(e.into()),
    }
}

/// Like [`load_or_create`], but never fails: problems are logged and the
/// defaults are used instead.
pub fn load_water_config(path: &Path) -> WaterConfig {
    match load_or_create(path) {
        Ok(config) => {
            info!("Loaded water config from {:?}", path);
            config
        }
        Err(e) => {
            error!(
                "Failed to load water config at {:?}: {}; using defaults",
                path, e
            );
            WaterConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("pixelwater-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let path = scratch_path("created/water.ron");
        let _ = fs::remove_file(&path);

        let config = load_or_create(&path).unwrap();
        assert_eq!(config, WaterConfig::default());
        assert!(path.exists());

        let reloaded = load_or_create(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_saved_config_is_loaded_back() {
        let path = scratch_path("saved/water.ron");
        let config = WaterConfig {
            tiling: 25.0,
            tint_mix: 0.2,
            ..Default::default()
        };
        save_config(&config, &path).unwrap();
        assert_eq!(load_or_create(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let path = scratch_path("broken/water.ron");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "(tiling: -5.0)").unwrap();

        assert!(load_or_create(&path).is_err());
        assert_eq!(load_water_config(&path), WaterConfig::default());
    }
}

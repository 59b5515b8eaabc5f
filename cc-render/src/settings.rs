use std::path::{Path, PathBuf};

use bevy::prelude::*;
use cc_scene::interaction::SNAPSHOT_FILE_NAME;
use cc_scene::texture::{DEFAULT_SIZE, DEFAULT_STRIPE_WIDTH};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Fixed seed for entity phases. `None` draws fresh phases every mount.
    pub seed: Option<u64>,
    pub auto_rotate: bool,
    pub export_path: PathBuf,
    pub texture_size: u32,
    pub stripe_width: u32,
    pub bloom: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            seed: None,
            auto_rotate: true,
            export_path: PathBuf::from(SNAPSHOT_FILE_NAME),
            texture_size: DEFAULT_SIZE,
            stripe_width: DEFAULT_STRIPE_WIDTH,
            bloom: true,
        }
    }
}

impl SceneSettings {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Reads a settings file, falling back to defaults when it is missing or invalid.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("failed to read settings {:?}: {err}", path);
                return Self::default();
            }
        };
        match Self::from_toml_str(&raw) {
            Ok(settings) => {
                info!("loaded settings from {:?}", path);
                settings
            }
            Err(err) => {
                warn!("invalid settings {:?}: {err}", path);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = SceneSettings::from_toml_str("seed = 7\nauto_rotate = false\n").unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(!settings.auto_rotate);
        assert_eq!(settings.texture_size, DEFAULT_SIZE);
        assert_eq!(settings.export_path, PathBuf::from("app-icon.png"));
    }

    #[test]
    fn missing_file_falls_back() {
        let settings = SceneSettings::load(Path::new("/nonexistent/cc-settings.toml"));
        assert_eq!(settings, SceneSettings::default());
    }
}

use directories::ProjectDirs;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Settings kept in `editor.toml` under the platform config directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Reopened at startup when no path is given on the command line.
    pub last_project: Option<PathBuf>,
    /// Indent the project file when saving.
    pub pretty_print: bool,
    /// Pre-filled text of the response prompt in dialogue trees.
    pub default_response: String,
    pub window_size: [f32; 2],
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            last_project: None,
            pretty_print: true,
            default_response: "Continue".to_string(),
            window_size: [1280.0, 720.0],
        }
    }
}

fn get_config_path() -> Option<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("me", "liesegang", "story_editor") {
        let config_dir = proj_dirs.config_dir();
        if !config_dir.exists() {
            if let Err(e) = fs::create_dir_all(config_dir) {
                error!("Failed to create config directory: {}", e);
                return None;
            }
        }
        return Some(config_dir.join("editor.toml"));
    }
    None
}

pub fn save_config(config: &EditorConfig) {
    if let Some(path) = get_config_path() {
        match toml::to_string_pretty(config) {
            Ok(toml_str) => {
                if let Err(e) = fs::write(&path, toml_str) {
                    error!("Failed to write config file: {}", e);
                } else {
                    info!("Settings saved to {}", path.display());
                }
            }
            Err(e) => {
                error!("Failed to serialize config: {}", e);
            }
        }
    }
}

pub fn load_config() -> EditorConfig {
    if let Some(path) = get_config_path() {
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(toml_str) => match parse_config(&toml_str) {
                    Ok(config) => return config,
                    Err(e) => {
                        warn!("Failed to parse config file, using defaults: {}", e);
                    }
                },
                Err(e) => {
                    warn!("Failed to read config file, using defaults: {}", e);
                }
            }
        }
    }
    EditorConfig::default()
}

fn parse_config(toml_str: &str) -> Result<EditorConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_take_defaults() {
        let config = parse_config("pretty_print = false\n").unwrap();
        assert!(!config.pretty_print);
        assert_eq!(config.default_response, "Continue");
        assert_eq!(config.last_project, None);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = EditorConfig {
            last_project: Some(PathBuf::from("/tmp/story/data.json")),
            default_response: "Next".to_string(),
            ..Default::default()
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert_eq!(parse_config(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(parse_config("window_size = \"big\"").is_err());
    }
}

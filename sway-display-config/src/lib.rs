use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use sway_display_common::error::ConfigError;
use sway_display_common::mode::{EXTERNAL_OUTPUT, LAPTOP_OUTPUT, LAPTOP_WIDTH};
use sway_display_common::{CommandBuilder, DisplayError, DisplayLayout, ModeStore, Resolution, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_laptop_output")]
    pub laptop_output: String,
    #[serde(default = "default_external_output")]
    pub external_output: String,
    #[serde(default = "default_resolution")]
    pub resolution: String,
    #[serde(default = "default_laptop_width")]
    pub laptop_width: u32,
    #[serde(default = "default_swaymsg")]
    pub swaymsg: String,
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

// Default values
fn default_laptop_output() -> String {
    LAPTOP_OUTPUT.to_string()
}

fn default_external_output() -> String {
    EXTERNAL_OUTPUT.to_string()
}

fn default_resolution() -> String {
    Resolution::default().to_string()
}

fn default_laptop_width() -> u32 {
    LAPTOP_WIDTH
}

fn default_swaymsg() -> String {
    "swaymsg".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            laptop_output: default_laptop_output(),
            external_output: default_external_output(),
            resolution: default_resolution(),
            laptop_width: default_laptop_width(),
            swaymsg: default_swaymsg(),
            state_file: None,
        }
    }
}

impl Config {
    /// Loads `<config-dir>/sway-display/config.toml`, falling back to the
    /// built-in defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            log::debug!("No config file at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DisplayError::Config(ConfigError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| DisplayError::Config(ConfigError::TomlParse {
                message: e.to_string(),
            }))?;

        config.validate()?;

        log::debug!("Configuration loaded from {:?}", path);
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(DisplayError::Config(ConfigError::NoConfigDir))?
            .join("sway-display");

        Ok(config_dir.join("config.toml"))
    }

    pub fn display_layout(&self) -> Result<DisplayLayout> {
        Ok(DisplayLayout {
            laptop_output: self.laptop_output.clone(),
            external_output: self.external_output.clone(),
            resolution: self.parse_resolution()?,
            laptop_width: self.laptop_width,
        })
    }

    pub fn mode_store(&self) -> Result<ModeStore> {
        match &self.state_file {
            Some(path) => Ok(ModeStore::new(path.clone())),
            None => Ok(ModeStore::from_env()?),
        }
    }

    /// `swaymsg` is looked up on PATH only when a command is actually built.
    pub fn command_builder(&self) -> CommandBuilder {
        CommandBuilder::lookup(&self.swaymsg)
    }

    fn parse_resolution(&self) -> Result<Resolution> {
        self.resolution.parse().map_err(|_| invalid("resolution", &self.resolution))
    }

    fn validate(&self) -> Result<()> {
        if self.laptop_output.trim().is_empty() {
            return Err(invalid("laptop_output", &self.laptop_output));
        }

        if self.external_output.trim().is_empty() {
            return Err(invalid("external_output", &self.external_output));
        }

        // Both directives would target the same output.
        if self.laptop_output == self.external_output {
            return Err(invalid("external_output", &self.external_output));
        }

        self.parse_resolution()?;

        if self.laptop_width == 0 {
            return Err(invalid("laptop_width", &self.laptop_width.to_string()));
        }

        if self.swaymsg.trim().is_empty() {
            return Err(invalid("swaymsg", &self.swaymsg));
        }

        Ok(())
    }
}

fn invalid(field: &str, value: &str) -> DisplayError {
    DisplayError::Config(ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_builtin_layout() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.display_layout().unwrap(), DisplayLayout::default());
        assert_eq!(config.swaymsg, "swaymsg");
        assert_eq!(config.state_file, None);
    }

    #[test]
    fn test_command_builder_does_not_resolve_eagerly() {
        let config = Config {
            swaymsg: "sway-display-no-such-program".to_string(),
            ..Config::default()
        };

        let builder = config.command_builder();
        assert_eq!(builder.program(), "sway-display-no-such-program");
        assert!(builder.resolve().is_err());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str(r#"external_output = "HDMI-A-1""#).unwrap();

        assert_eq!(config.external_output, "HDMI-A-1");
        assert_eq!(config.laptop_output, "eDP-1");
        assert_eq!(config.resolution, "1920x1080");
        assert_eq!(config.laptop_width, 1920);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.resolution = "1920by1080".to_string();
        assert!(config.validate().is_err());

        config = Config::default();
        config.external_output = config.laptop_output.clone();
        assert!(config.validate().is_err());

        config = Config::default();
        config.laptop_width = 0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.laptop_output = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let state_path = temp_dir.path().join("state");

        let config_content = format!(
            r#"
            laptop_output = "eDP-2"
            external_output = "DP-3"
            resolution = "2560x1440"
            laptop_width = 2560
            swaymsg = "/usr/local/bin/swaymsg"
            state_file = {:?}
            "#,
            state_path
        );
        fs::write(&config_path, config_content).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        let display = config.display_layout().unwrap();

        assert_eq!(display.laptop_output, "eDP-2");
        assert_eq!(display.external_output, "DP-3");
        assert_eq!(display.resolution, Resolution::new(2560, 1440));
        assert_eq!(display.laptop_width, 2560);
        assert_eq!(config.mode_store().unwrap().path(), state_path.as_path());
    }

    #[test]
    fn test_config_load_nonexistent_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        match Config::load_from_path(&config_path).unwrap_err() {
            DisplayError::Config(ConfigError::FileRead { .. }) => {}
            other => panic!("Expected ConfigError::FileRead, got {:?}", other),
        }
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("invalid.toml");

        fs::write(&config_path, "laptop_width = \"wide\"").unwrap();
        match Config::load_from_path(&config_path).unwrap_err() {
            DisplayError::Config(ConfigError::TomlParse { .. }) => {}
            other => panic!("Expected ConfigError::TomlParse, got {:?}", other),
        }

        fs::write(&config_path, "monitor = \"DP-1\"").unwrap();
        assert!(Config::load_from_path(&config_path).is_err());
    }

    #[test]
    fn test_config_load_rejects_invalid_values() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        fs::write(&config_path, "resolution = \"0x1080\"").unwrap();
        match Config::load_from_path(&config_path).unwrap_err() {
            DisplayError::Config(ConfigError::InvalidValue { field, .. }) => {
                assert_eq!(field, "resolution")
            }
            other => panic!("Expected ConfigError::InvalidValue, got {:?}", other),
        }
    }
}

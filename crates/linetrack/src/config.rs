use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "linetrack";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Output format for `graph`: "compact" or "pretty".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Whether report output is colorized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `linetrack config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# linetrack configuration\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.format" => {
                match value {
                    "compact" | "pretty" => {}
                    _ => anyhow::bail!(
                        "Invalid format: {value}. Must be 'compact' or 'pretty'."
                    ),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .format = Some(value.to_string());
            }
            "defaults.color" => {
                let color: bool = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid color: {value}. Must be 'true' or 'false'.")
                })?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .color = Some(color);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.format, defaults.color"
            ),
        }
        Ok(())
    }

    /// Whether `graph` output should be pretty-printed by default.
    pub fn pretty_default(&self) -> bool {
        self.defaults.as_ref().and_then(|d| d.format.as_deref()) == Some("pretty")
    }

    /// Whether the user has disabled colored output in the config.
    pub fn color_disabled(&self) -> bool {
        self.defaults.as_ref().and_then(|d| d.color) == Some(false)
    }
}

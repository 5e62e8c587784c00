//! Configuration management using config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Font size in points (default: 14.0)
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Local copy of the activity point guidelines opened by the Guidelines button
    #[serde(default = "default_guidelines_path")]
    pub guidelines_path: String,

    /// Loading delay between pages in milliseconds (0 disables it)
    #[serde(default = "default_transition_delay_ms")]
    pub transition_delay_ms: u64,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Window position X (None = system default)
    #[serde(default)]
    pub window_x: Option<f32>,

    /// Window position Y (None = system default)
    #[serde(default)]
    pub window_y: Option<f32>,

    /// Window width (None = default 1200)
    #[serde(default)]
    pub window_width: Option<f32>,

    /// Window height (None = default 800)
    #[serde(default)]
    pub window_height: Option<f32>,

    #[serde(default)]
    pub window_maximized: bool,
}

fn default_font_size() -> f32 {
    14.0
}

fn default_guidelines_path() -> String {
    activity_points_core::constants::GUIDELINES_PATH.trim_start_matches('/').to_string()
}

fn default_transition_delay_ms() -> u64 {
    activity_points_core::constants::ROUTE_TRANSITION_DELAY_MS
}

fn default_log_filter() -> String {
    "activity_points=info,activity_points_core=info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            guidelines_path: default_guidelines_path(),
            transition_delay_ms: default_transition_delay_ms(),
            log_filter: default_log_filter(),
            window_x: None,
            window_y: None,
            window_width: None,
            window_height: None,
            window_maximized: false,
        }
    }
}

impl Config {
    /// Load config from file, creating default if it doesn't exist
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    /// Runs before logging is installed, so problems go to stderr
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match Self::parse(&content) {
                    Ok(config) => return config,
                    Err(e) => eprintln!("Error parsing {}: {}", path.display(), e),
                },
                Err(e) => eprintln!("Error reading {}: {}", path.display(), e),
            }
        }

        let config = Config::default();
        if let Err(e) = config.save_to(path) {
            eprintln!("Could not write default {}: {}", path.display(), e);
        }
        config
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(Path::new(CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.font_size, 14.0);
        assert_eq!(config.transition_delay_ms, 1000);
        assert_eq!(config.guidelines_path, "files/act.pdf");
        assert!(config.window_width.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::parse("transition_delay_ms = 0\nfont_size = 18.0\n").unwrap();
        assert!(config.transition_delay().is_zero());
        assert_eq!(config.font_size, 18.0);
        assert_eq!(config.log_filter, default_log_filter());
    }

    #[test]
    fn test_save_format_round_trips() {
        let mut config = Config::default();
        config.window_width = Some(1280.0);
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::parse(&text).unwrap();
        assert_eq!(parsed.window_width, Some(1280.0));
        assert_eq!(parsed.guidelines_path, config.guidelines_path);
    }

    #[test]
    fn test_load_writes_defaults_once() {
        let dir = std::env::temp_dir().join(format!("activity-points-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = Config::load_from(&path);
        assert_eq!(config.font_size, 14.0);
        assert!(path.exists());

        fs::write(&path, "font_size = 16.0\n").unwrap();
        assert_eq!(Config::load_from(&path).font_size, 16.0);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unwritable_location_still_loads_defaults() {
        let path = std::env::temp_dir()
            .join(format!("activity-points-missing-{}", std::process::id()))
            .join("nested")
            .join("config.toml");
        let config = Config::load_from(&path);
        assert_eq!(config.transition_delay_ms, 1000);
        assert!(!path.exists());
        assert!(config.save_to(&path).is_err());
    }
}

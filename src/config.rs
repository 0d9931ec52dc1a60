//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`FLAT_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use flatland_core::{SweepConfig, SweepConfigError};
use flatland_math::{Position, ShapeKind};
use flatland_render::SaveOptions;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Autoplay sweep configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Initial view configuration
    #[serde(default)]
    pub view: ViewConfig,
    /// Frame output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`FLAT_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // FLAT_ANIMATION__STEP=0.01 -> animation.step = 0.01
        figment = figment.merge(Env::prefixed("FLAT_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Autoplay sweep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
    /// Position change per tick
    pub step: f32,
    /// Lowest position reached while animating
    pub lower_bound: f32,
    /// Highest position reached while animating
    pub upper_bound: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let sweep = SweepConfig::default();
        Self {
            tick_interval_ms: sweep.interval.as_millis() as u64,
            step: sweep.step,
            lower_bound: sweep.lower,
            upper_bound: sweep.upper,
        }
    }
}

impl AnimationConfig {
    /// Convert to the validated sweep rule used by the explorer
    pub fn to_sweep_config(&self) -> Result<SweepConfig, SweepConfigError> {
        SweepConfig::new(
            self.step,
            self.lower_bound,
            self.upper_bound,
            Duration::from_millis(self.tick_interval_ms),
        )
    }
}

/// Initial view configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Shape shown at startup
    pub initial_shape: ShapeKind,
    /// Position at startup (clamped into [0, 1])
    pub initial_position: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_shape: ShapeKind::Sphere,
            initial_position: Position::PLANE.value(),
        }
    }
}

/// Frame output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory frames are written to (created if missing)
    pub directory: PathBuf,
    /// Write the side-by-side composite page
    pub composite: bool,
    /// Write one file per view
    pub per_view: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("frames"),
            composite: true,
            per_view: true,
        }
    }
}

impl OutputConfig {
    pub fn save_options(&self) -> SaveOptions {
        SaveOptions {
            per_view: self.per_view,
            composite: self.composite,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.animation.tick_interval_ms, 40);
        assert_eq!(config.animation.step, 0.006);
        assert_eq!(config.view.initial_shape, ShapeKind::Sphere);
        assert_eq!(config.output.directory, PathBuf::from("frames"));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("tick_interval_ms"));
        assert!(toml.contains("initial_shape = \"sphere\""));
    }

    #[test]
    fn test_default_animation_is_valid_sweep() {
        let sweep = AnimationConfig::default().to_sweep_config().unwrap();
        assert_eq!(sweep, SweepConfig::default());
    }

    #[test]
    fn test_invalid_animation_bounds_rejected() {
        let animation = AnimationConfig {
            lower_bound: 0.8,
            upper_bound: 0.2,
            ..AnimationConfig::default()
        };
        assert!(animation.to_sweep_config().is_err());
    }

    #[test]
    fn test_save_options_follow_output() {
        let output = OutputConfig {
            composite: false,
            ..OutputConfig::default()
        };
        let options = output.save_options();
        assert!(options.per_view);
        assert!(!options.composite);
    }
}

//! Headless runner settings
//!
//! Loaded from an optional JSON file. Simulation constants are fixed and are
//! not part of the settings.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::demo::DEFAULT_RESTART_DELAY;

/// What the runner writes per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FrameOutput {
    /// One scene JSON line per tick on stdout
    Json,
    /// Periodic summary lines through the logger
    #[default]
    Summary,
}

impl FrameOutput {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameOutput::Json => "json",
            FrameOutput::Summary => "summary",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(FrameOutput::Json),
            "summary" => Some(FrameOutput::Summary),
            _ => None,
        }
    }
}

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for the session
    pub seed: u64,
    /// Number of ticks to run
    pub frames: u64,
    pub output: FrameOutput,
    /// Frames between summary lines (summary output only)
    pub summary_every: u64,
    /// Let the demo pilot drive input; otherwise the ship idles
    pub autopilot: bool,
    /// Frames the pilot waits on the start / game-over screen
    pub restart_delay: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            frames: 3600,
            output: FrameOutput::Summary,
            summary_every: 600,
            autopilot: true,
            restart_delay: DEFAULT_RESTART_DELAY,
        }
    }
}

/// Failure to read a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read settings: {err}"),
            Self::Parse(err) => write!(f, "invalid settings JSON: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl Settings {
    /// Parse settings from JSON text; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&text)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Read settings, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }
}

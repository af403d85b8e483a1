// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Engine configuration: window, audio, and key-binding settings.
//!
//! Configuration is plain serde data loaded from a JSON file. Every field
//! has a default, so a missing or partial file still yields a usable
//! configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::Bindings;
use crate::math::Extent2D;

/// An error raised while loading the engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file contents are not valid configuration JSON.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Drawable size in pixels.
    pub size: Extent2D,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Vesper".to_string(),
            size: Extent2D::new(1280, 720),
        }
    }
}

/// Audio settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Master volume in `[0.0, 1.0]`.
    pub master_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { master_volume: 0.8 }
    }
}

/// The full engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window settings.
    pub window: WindowConfig,
    /// Audio settings.
    pub audio: AudioConfig,
    /// Key bindings.
    pub bindings: Bindings,
}

impl EngineConfig {
    /// Parses a configuration from a JSON string. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let config = EngineConfig::default();
        assert_eq!(config.window.size, Extent2D::new(1280, 720));
        assert!(config.audio.master_volume > 0.0);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = EngineConfig::from_json(r#"{ "audio": { "master_volume": 0.25 } }"#)
            .expect("partial config should parse");
        assert_eq!(config.audio.master_volume, 0.25);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn empty_object_parses_to_defaults() {
        let config = EngineConfig::from_json("{}").expect("empty config should parse");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn round_trip() {
        let mut config = EngineConfig::default();
        config.window.title = "Sandbox".to_string();
        config.audio.master_volume = 0.5;
        let json = config.to_json().expect("serialize");
        let back = EngineConfig::from_json(&json).expect("parse back");
        assert_eq!(back, config);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = EngineConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = EngineConfig::load("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use trellis::{Error, Result};

/// Width in pixels of the scrollbar strip.
pub const SCROLLBAR_WIDTH: u32 = 15;

/// Pixels scrolled per wheel notch.
pub const WHEEL_STEP: i32 = 20;

/// Tuning for scrollable containers. Missing fields take their defaults, so
/// a config file only needs to name what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    /// Width in pixels of the scrollbar strip.
    pub scrollbar_width: u32,
    /// Pixels scrolled per wheel notch.
    pub wheel_step: i32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrollbar_width: SCROLLBAR_WIDTH,
            wheel_step: WHEEL_STEP,
        }
    }
}

impl ScrollConfig {
    /// Parse a config from JSON.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() -> Result<()> {
        let c = ScrollConfig::from_json(r#"{ "wheel_step": 5 }"#)?;
        assert_eq!(c.wheel_step, 5);
        assert_eq!(c.scrollbar_width, SCROLLBAR_WIDTH);
        assert_eq!(ScrollConfig::from_json("{}")?, ScrollConfig::default());
        Ok(())
    }

    #[test]
    fn bad_config_is_an_error() {
        assert!(matches!(
            ScrollConfig::from_json(r#"{ "wheel_stp": 5 }"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ScrollConfig::load("/nonexistent/trellis.json"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn json_output_parses_back() -> Result<()> {
        let c = ScrollConfig {
            scrollbar_width: 8,
            wheel_step: 12,
        };
        assert_eq!(ScrollConfig::from_json(&c.to_json()?)?, c);
        Ok(())
    }
}

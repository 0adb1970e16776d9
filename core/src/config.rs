use crate::{
    error::{StreamError, StreamResult},
    theme::Theme,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Startup settings. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Pins the theme instead of detecting it from the terminal.
    #[serde(default)]
    pub theme: Option<Theme>,

    /// Pre-filled amount text, normalized like typed input.
    #[serde(default)]
    pub amount: Option<String>,

    /// Start ticking immediately when `amount` is positive.
    #[serde(default)]
    pub autostart: bool,
}

impl StreamConfig {
    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> StreamResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| StreamError::Config {
            path:   path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> StreamResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Configured theme, else the host preference.
    pub fn resolve_theme(&self) -> Theme {
        self.theme.unwrap_or_else(Theme::detect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = StreamConfig::from_json("{}").unwrap();
        assert_eq!(cfg, StreamConfig::default());
    }

    #[test]
    fn fields_parse() {
        let cfg = StreamConfig::from_json(
            r#"{"theme":"dark","amount":"12,00,000","autostart":true}"#,
        )
        .unwrap();
        assert_eq!(cfg.theme, Some(Theme::Dark));
        assert_eq!(cfg.amount.as_deref(), Some("12,00,000"));
        assert!(cfg.autostart);
        assert_eq!(cfg.resolve_theme(), Theme::Dark);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = StreamConfig::load("/nonexistent/revenue-stream.json").unwrap_err();
        assert!(matches!(err, StreamError::Config { .. }));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = StreamConfig::from_json("{theme").unwrap_err();
        assert!(matches!(err, StreamError::Serialization(_)));
    }
}

//! Theme types shared between the page and its scripts
//!
//! These types are used by both:
//! - The theme controller (native Rust and WASM)
//! - Page scripts, through the generated TypeScript bindings
//!
//! Serializable with serde for JSON page configuration and storage values

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Constants
// ============================================================================

/// Local storage key holding the persisted preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// Id of the toggle control on the page
pub const THEME_CONTROL_ID: &str = "theme-toggle";

/// Id of the optional JSON configuration element on the page
pub const THEME_CONFIG_ELEMENT_ID: &str = "theme-config";

pub const DEFAULT_THEME: ThemePreference = ThemePreference::Light;

// ============================================================================
// Theme Preference
// ============================================================================

/// Persisted user choice of visual theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../theme-ui/src/types/generated.ts")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Label for the toggle control while this theme is active.
    /// Describes the action the control performs next.
    pub fn action_label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Toggle Dark Mode",
            ThemePreference::Dark => "Toggle Light Mode",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preference: {0:?}")]
pub struct ParseThemeError(pub String);

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

// ============================================================================
// Markers & Configuration
// ============================================================================

/// Style classes applied to the page root for each theme.
/// The two sets are mutually exclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(default)]
#[ts(export, export_to = "../../theme-ui/src/types/generated.ts")]
pub struct ThemeMarkers {
    pub light: Vec<String>,
    pub dark: Vec<String>,
}

impl ThemeMarkers {
    pub fn for_theme(&self, theme: ThemePreference) -> &[String] {
        match theme {
            ThemePreference::Light => &self.light,
            ThemePreference::Dark => &self.dark,
        }
    }
}

impl Default for ThemeMarkers {
    fn default() -> Self {
        Self {
            light: vec!["bg-light".to_string(), "text-dark".to_string()],
            dark: vec!["bg-dark".to_string(), "text-white".to_string()],
        }
    }
}

/// Page-level configuration for the theme toggle.
/// Every field is optional in JSON and falls back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(default)]
#[ts(export, export_to = "../../theme-ui/src/types/generated.ts")]
pub struct ThemeConfig {
    pub storage_key: String,
    pub control_id: String,
    pub default_theme: ThemePreference,
    pub markers: ThemeMarkers,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_string(),
            control_id: THEME_CONTROL_ID.to_string(),
            default_theme: DEFAULT_THEME,
            markers: ThemeMarkers::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid theme config JSON: {0}")]
    Json(String),
    #[error("storage key must not be empty")]
    EmptyStorageKey,
    #[error("control id must not be empty")]
    EmptyControlId,
    #[error("no style markers configured for {0} theme")]
    EmptyMarkers(ThemePreference),
    #[error("style marker {0:?} is not a single class token")]
    InvalidMarker(String),
    #[error("style marker {0:?} is configured for both themes")]
    OverlappingMarker(String),
}

impl ThemeConfig {
    /// Parse a JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ThemeConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if self.control_id.trim().is_empty() {
            return Err(ConfigError::EmptyControlId);
        }
        for theme in [ThemePreference::Light, ThemePreference::Dark] {
            if self.markers.for_theme(theme).is_empty() {
                return Err(ConfigError::EmptyMarkers(theme));
            }
        }
        if let Some(bad) = self
            .markers
            .light
            .iter()
            .chain(self.markers.dark.iter())
            .find(|marker| marker.is_empty() || marker.chars().any(char::is_whitespace))
        {
            return Err(ConfigError::InvalidMarker(bad.clone()));
        }
        if let Some(shared) = self
            .markers
            .light
            .iter()
            .find(|marker| self.markers.dark.contains(marker))
        {
            return Err(ConfigError::OverlappingMarker(shared.clone()));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ts_rs::Config;

    #[test]
    fn test_theme_preference_serialization() {
        assert_eq!(
            serde_json::to_string(&ThemePreference::Dark).unwrap(),
            "\"dark\""
        );
        let theme: ThemePreference = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, ThemePreference::Light);
    }

    #[test]
    fn test_parse_rejects_unknown_theme() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        let err = "Dark".parse::<ThemePreference>().expect_err("must fail");
        assert_eq!(err, ParseThemeError("Dark".to_string()));
        assert!("".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_toggle_and_labels() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.action_label(), "Toggle Dark Mode");
        assert_eq!(ThemePreference::Dark.action_label(), "Toggle Light Mode");
        assert_eq!(ThemePreference::default(), DEFAULT_THEME);
    }

    #[test]
    fn test_default_config_matches_page_contract() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.control_id, "theme-toggle");
        assert_eq!(config.default_theme, ThemePreference::Light);
        assert_eq!(
            config.markers.for_theme(ThemePreference::Dark),
            ["bg-dark", "text-white"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_config_uses_defaults() {
        let config = ThemeConfig::from_json(r#"{"control_id": "mode-switch"}"#).unwrap();
        assert_eq!(config.control_id, "mode-switch");
        assert_eq!(config.storage_key, THEME_STORAGE_KEY);
        assert_eq!(config.markers, ThemeMarkers::default());
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let err = ThemeConfig::from_json("{not json").expect_err("must fail");
        assert!(matches!(err, ConfigError::Json(_)));

        let err = ThemeConfig::from_json(r#"{"storage_key": " "}"#).expect_err("must fail");
        assert_eq!(err, ConfigError::EmptyStorageKey);

        let err = ThemeConfig::from_json(r#"{"markers": {"light": ["a", "shared"], "dark": ["shared"]}}"#)
            .expect_err("must fail");
        assert_eq!(err, ConfigError::OverlappingMarker("shared".to_string()));

        let err = ThemeConfig::from_json(r#"{"markers": {"light": ["bg-light"], "dark": ["bg dark"]}}"#)
            .expect_err("must fail");
        assert_eq!(err, ConfigError::InvalidMarker("bg dark".to_string()));

        let err = ThemeConfig::from_json(r#"{"markers": {"light": ["bg-light"], "dark": ["bg-dark", ""]}}"#)
            .expect_err("must fail");
        assert_eq!(err, ConfigError::InvalidMarker(String::new()));

        let err = ThemeConfig::from_json(r#"{"markers": {"dark": []}}"#).expect_err("must fail");
        assert_eq!(err, ConfigError::EmptyMarkers(ThemePreference::Dark));
    }

    #[test]
    fn export_types() {
        // Export all types to TypeScript
        // The export_to attribute in each type's #[ts] macro specifies the output file
        let config = Config::default();
        ThemePreference::export(&config).unwrap();
        ThemeMarkers::export(&config).unwrap();
        ThemeConfig::export(&config).unwrap();
    }
}

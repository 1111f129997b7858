// Configuration validation module

use anyhow::Result;
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{load_config, resolve_config_path, AppConfigYaml, BindingConfigYaml};
use crate::core::{AppConfig, IconRef, TabItem};
use crate::utilities::{icon_glyph, parse_color};

/// Digit keys address at most nine tabs
pub const MAX_TABS: usize = 9;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("tab bar has no tabs")]
    NoTabs,

    #[error("tab bar has {0} tabs, at most 9 are supported")]
    TooManyTabs(usize),

    #[error("duplicate tab id: {0}")]
    DuplicateTabId(String),

    #[error("unknown icon '{icon}' for tab '{id}'")]
    UnknownIcon { id: String, icon: String },

    #[error("invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("invalid color for {field}: {value}")]
    InvalidColor { field: &'static str, value: String },
}

/// Configuration checked and converted into domain types
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub title: String,
    pub bindings: Vec<BindingConfigYaml>,
    pub status_text: String,
    pub items: Vec<TabItem>,
    pub settings: AppConfig,
}

/// Check a parsed config and merge its overrides into the compiled defaults
pub fn validate_config(config: AppConfigYaml, defaults: AppConfig) -> Result<ValidatedConfig, ConfigError> {
    let tabs = &config.tab_bar.tabs;
    if tabs.is_empty() {
        return Err(ConfigError::NoTabs);
    }
    if tabs.len() > MAX_TABS {
        return Err(ConfigError::TooManyTabs(tabs.len()));
    }

    let mut seen = HashSet::new();
    for tab in tabs {
        if !seen.insert(tab.id.as_str()) {
            return Err(ConfigError::DuplicateTabId(tab.id.clone()));
        }
        if icon_glyph(&tab.icon).is_none() {
            return Err(ConfigError::UnknownIcon {
                id: tab.id.clone(),
                icon: tab.icon.clone(),
            });
        }
    }

    let mut settings = defaults;
    if let Some(ms) = config.tab_bar.animation_ms {
        if ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "animation_ms",
                value: ms.to_string(),
            });
        }
        settings.wave.animation_ms = ms;
    }
    if let Some(depth) = config.tab_bar.notch_depth {
        if !depth.is_finite() || depth <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "notch_depth",
                value: depth.to_string(),
            });
        }
        settings.wave.notch_depth = depth;
    }
    if let Some(color) = &config.tab_bar.color {
        settings.display.bar_color = parse_color(color).ok_or_else(|| ConfigError::InvalidColor {
            field: "color",
            value: color.clone(),
        })?;
    }
    if let Some(color) = &config.tab_bar.accent {
        settings.display.accent_color = parse_color(color).ok_or_else(|| ConfigError::InvalidColor {
            field: "accent",
            value: color.clone(),
        })?;
    }

    if settings.wave.button_width <= 0.0 || settings.wave.bar_height <= 0.0 {
        return Err(ConfigError::InvalidValue {
            field: "button_width/bar_height",
            value: format!("{}/{}", settings.wave.button_width, settings.wave.bar_height),
        });
    }
    if settings.display.cell_width <= 0.0 || settings.display.cell_height <= 0.0 {
        return Err(ConfigError::InvalidValue {
            field: "cell_width/cell_height",
            value: format!("{}/{}", settings.display.cell_width, settings.display.cell_height),
        });
    }

    let items = tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| TabItem {
            index,
            id: tab.id.clone(),
            name: tab.name.clone(),
            icon: IconRef::new(tab.icon.clone()),
        })
        .collect();

    Ok(ValidatedConfig {
        title: config.application.title,
        bindings: config.application.bindings,
        status_text: config.application.status_bar.default_text,
        items,
        settings,
    })
}

/// Load and validate configuration
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<ValidatedConfig> {
    let path = resolve_config_path(config_path);

    let config = match load_config(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load configuration");
            return Err(e);
        }
    };

    let validated = validate_config(config, AppConfig::default())?;
    info!(path = %path.display(), tabs = validated.items.len(), "Configuration loaded");
    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    fn yaml(tabs: &str, extra: &str) -> AppConfigYaml {
        let text = format!(
            "application:\n  title: \"T\"\n  status_bar:\n    default_text: \"Ready\"\ntab_bar:\n{}  tabs:{}",
            extra, tabs
        );
        parse_config(&text).unwrap()
    }

    const THREE_TABS: &str = "\n    - { id: home, name: Home, icon: house }\n    - { id: me, name: Me, icon: person }\n    - { id: gear, name: Gear, icon: gear }\n";

    #[test]
    fn test_valid_config_builds_indexed_items() {
        let validated = validate_config(yaml(THREE_TABS, ""), AppConfig::default()).unwrap();
        assert_eq!(validated.items.len(), 3);
        for (position, item) in validated.items.iter().enumerate() {
            assert_eq!(item.index, position);
        }
        assert_eq!(validated.items[1].icon.name(), "person");
        assert_eq!(validated.status_text, "Ready");
    }

    #[test]
    fn test_overrides_are_merged() {
        let extra = "  animation_ms: 500\n  notch_depth: 30\n  color: \"#202020\"\n";
        let validated = validate_config(yaml(THREE_TABS, extra), AppConfig::default()).unwrap();
        assert_eq!(validated.settings.wave.animation_ms, 500);
        assert_eq!(validated.settings.wave.notch_depth, 30.0);
        assert_eq!(validated.settings.display.bar_color, (0x20, 0x20, 0x20));
    }

    #[test]
    fn test_empty_tab_list_is_rejected() {
        let err = validate_config(yaml(" []\n", ""), AppConfig::default()).unwrap_err();
        assert_eq!(err, ConfigError::NoTabs);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let tabs = "\n    - { id: a, name: A, icon: house }\n    - { id: a, name: B, icon: gear }\n";
        let err = validate_config(yaml(tabs, ""), AppConfig::default()).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateTabId("a".to_string()));
    }

    #[test]
    fn test_unknown_icon_is_rejected() {
        let tabs = "\n    - { id: a, name: A, icon: rocketship }\n";
        let err = validate_config(yaml(tabs, ""), AppConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownIcon { .. }));
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let err = validate_config(yaml(THREE_TABS, "  accent: \"#12\"\n"), AppConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { field: "accent", .. }));
    }

    #[test]
    fn test_non_positive_depth_is_rejected() {
        let err = validate_config(yaml(THREE_TABS, "  notch_depth: 0\n"), AppConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "notch_depth", .. }));
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let err = validate_config(yaml(THREE_TABS, "  animation_ms: 0\n"), AppConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                field: "animation_ms",
                value: "0".to_string(),
            }
        );
    }

    #[test]
    fn test_ten_tabs_are_rejected() {
        let tabs: String = (0..10)
            .map(|i| format!("\n    - {{ id: t{}, name: T{}, icon: star }}", i, i))
            .collect::<String>()
            + "\n";
        let err = validate_config(yaml(&tabs, ""), AppConfig::default()).unwrap_err();
        assert_eq!(err, ConfigError::TooManyTabs(10));
    }

    #[test]
    fn test_non_positive_button_and_bar_sizes_are_rejected() {
        let mut defaults = AppConfig::default();
        defaults.wave.button_width = 0.0;
        let err = validate_config(yaml(THREE_TABS, ""), defaults).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "button_width/bar_height", .. }));

        let mut defaults = AppConfig::default();
        defaults.wave.bar_height = -1.0;
        let err = validate_config(yaml(THREE_TABS, ""), defaults).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "button_width/bar_height", .. }));
    }

    #[test]
    fn test_non_positive_cell_size_is_rejected() {
        let mut defaults = AppConfig::default();
        defaults.display.cell_height = 0.0;
        let err = validate_config(yaml(THREE_TABS, ""), defaults).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "cell_width/cell_height", .. }));
    }
}

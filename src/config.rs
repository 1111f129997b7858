// Configuration loading module

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "WAVE_TABBAR_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfigYaml {
    pub application: ApplicationConfigYaml,
    pub tab_bar: TabBarConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfigYaml {
    pub title: String,
    #[serde(default)]
    pub bindings: Vec<BindingConfigYaml>,
    pub status_bar: StatusBarConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
}

/// Tab bar configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabBarConfigYaml {
    /// Override of the compiled animation duration
    pub animation_ms: Option<u64>,
    /// Override of the compiled notch depth
    pub notch_depth: Option<f64>,
    /// Bar background color override (e.g. "#111111" or "black")
    pub color: Option<String>,
    /// Selected button fill override
    pub accent: Option<String>,
    /// List of tabs
    pub tabs: Vec<TabConfigYaml>,
}

/// Tab configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabConfigYaml {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// Resolve the config path: explicit, then environment, then the bundled file
pub fn resolve_config_path(config_path: Option<PathBuf>) -> PathBuf {
    config_path
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| {
            let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
            default_path.push("src");
            default_path.push("config.yaml");
            default_path
        })
}

pub fn load_config(path: &Path) -> Result<AppConfigYaml> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Failed to parse config: {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<AppConfigYaml> {
    let config: AppConfigYaml = serde_yaml::from_str(contents)?;
    Ok(config)
}

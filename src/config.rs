use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use anyhow::{Context, Result};
use std::fs;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub bookmarks: HashMap<String, PathBuf>,
    #[serde(default)]
    pub sizes: HashMap<String, SizeProfile>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneralConfig {
    #[serde(default = "default_uri_scheme")]
    pub uri_scheme: String,
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,
    #[serde(default = "default_opener")]
    pub opener: String,
    #[serde(default)]
    pub default_param: Option<String>,
    #[serde(default)]
    pub size: WidgetSize,
}

fn default_uri_scheme() -> String { "obsidian".to_string() }
fn default_title_prefix() -> String { "Obsidian".to_string() }
fn default_opener() -> String { "xdg-open".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            uri_scheme: default_uri_scheme(),
            title_prefix: default_title_prefix(),
            opener: default_opener(),
            default_param: None,
            size: WidgetSize::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
    #[default]
    #[serde(other)]
    Default,
}

impl WidgetSize {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "small" => WidgetSize::Small,
            "medium" => WidgetSize::Medium,
            "large" => WidgetSize::Large,
            "extra-large" | "extralarge" => WidgetSize::ExtraLarge,
            _ => WidgetSize::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WidgetSize::Small => "small",
            WidgetSize::Medium => "medium",
            WidgetSize::Large => "large",
            WidgetSize::ExtraLarge => "extra-large",
            WidgetSize::Default => "default",
        }
    }
}

/// Fonts and row budget for one display size.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeProfile {
    pub title_font: u16,
    pub description_font: u16,
    pub rows: usize,
}

impl SizeProfile {
    pub const fn builtin(size: WidgetSize) -> Self {
        let (title_font, description_font, rows) = match size {
            WidgetSize::Small => (20, 14, 5),
            WidgetSize::Medium => (22, 14, 5),
            WidgetSize::Large => (24, 14, 12),
            WidgetSize::ExtraLarge => (26, 15, 12),
            WidgetSize::Default => (20, 14, 12),
        };
        Self { title_font, description_font, rows }
    }
}

impl Config {
    pub fn profile(&self, size: WidgetSize) -> SizeProfile {
        self.sizes
            .get(size.name())
            .copied()
            .unwrap_or_else(|| SizeProfile::builtin(size))
    }
}

pub fn default_config_path() -> PathBuf {
    let proj_dirs = ProjectDirs::from("org", "vaultpeek", "vaultpeek");
    if let Some(dirs) = &proj_dirs {
        dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config.toml")
    }
}

pub fn load_config() -> Result<Config> {
    load_config_from(&default_config_path())
}

pub fn load_config_from(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        log::debug!("No config at {:?}, using defaults", config_path);
        return Ok(Config::default());
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("parsing {}", config_path.display()))?;
    Ok(config)
}

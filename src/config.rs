use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".themeportrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Root of the active theme (its style.css, templates/ and parts/).
    #[serde(default = "default_theme_dir")]
    pub theme_dir: String,
    /// Root of the parent theme for child-theme sites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_theme_dir: Option<String>,
    /// Where user-customized documents and global-styles.json live.
    #[serde(default = "default_customizations_dir")]
    pub customizations_dir: String,
    /// Local media library root, searched when localizing images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploads_dir: Option<String>,
    /// Public URL prefix the media library is served under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploads_base_url: Option<String>,
}

fn default_theme_dir() -> String {
    "./theme".to_string()
}

fn default_customizations_dir() -> String {
    "./customizations".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_dir: default_theme_dir(),
            parent_theme_dir: None,
            customizations_dir: default_customizations_dir(),
            uploads_dir: None,
            uploads_base_url: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error when a required directory is blank or the
    /// uploads base URL has no usable scheme.
    pub fn validate(&self) -> Result<()> {
        if self.theme_dir.trim().is_empty() {
            bail!("'themeDir' must not be empty");
        }
        if self.customizations_dir.trim().is_empty() {
            bail!("'customizationsDir' must not be empty");
        }
        if let Some(url) = &self.uploads_base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                bail!(
                    "'uploadsBaseUrl' must start with http:// or https://, got \"{}\"",
                    url
                );
            }
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

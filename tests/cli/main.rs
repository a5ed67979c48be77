use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod clear;
mod export;
mod init;
mod patterns;

const BIN_NAME: &str = "themeport";

/// style.css of the fixture theme.
pub const STYLE_CSS: &str = concat!(
    "/*\n",
    "Theme Name: My Fancy Theme\n",
    "Theme URI: https://example.com/my-fancy-theme\n",
    "Author: Jane Doe\n",
    "Author URI: https://example.com\n",
    "Description: A fancy starter theme\n",
    "Version: 2.0.0\n",
    "Text Domain: mytheme\n",
    "*/\n",
);

pub const INDEX_TEMPLATE: &str =
    "<!-- wp:paragraph --><p>Welcome to our site</p><!-- /wp:paragraph -->";

pub const HEADER_PART: &str = "<!-- wp:site-title /-->";

pub struct SiteTest {
    _temp_dir: TempDir,
    site_dir: PathBuf,
}

impl SiteTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let site_dir = temp_dir.path().canonicalize()?;
        // Stop the upward config search at the site root.
        fs::create_dir(site_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            site_dir,
        })
    }

    /// A site whose active theme ships one template and one part.
    pub fn with_theme() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("theme/style.css", STYLE_CSS)?;
        test.write_file("theme/templates/index.html", INDEX_TEMPLATE)?;
        test.write_file("theme/parts/header.html", HEADER_PART)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.site_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.site_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.site_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn export_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("export");
        cmd
    }

    pub fn clear_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("clear-customizations");
        cmd
    }

    pub fn patterns_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("patterns");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.site_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

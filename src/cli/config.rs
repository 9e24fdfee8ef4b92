//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::export::DEFAULT_PDF_COMMAND;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "MDNOTES_CONFIG";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Store directory
    pub dir: Option<PathBuf>,

    /// Editor command for `edit` without field flags
    pub editor: Option<String>,

    /// HTML-to-PDF converter command line
    pub pdf_command: Option<String>,

    /// Default export theme (name or CSS path)
    pub export_theme: Option<String>,
}

impl Config {
    /// Load configuration from `$MDNOTES_CONFIG` or the default location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config file at {}", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `<config_dir>/mdnotes/config.toml`
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mdnotes")
            .join("config.toml")
    }

    /// Resolve the store directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. `<data_dir>/mdnotes`, or `.mdnotes` without a data dir
    pub fn store_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| match dirs::data_dir() {
                Some(data) => data.join("mdnotes"),
                None => PathBuf::from(".mdnotes"),
            })
    }

    /// Resolve the editor command.
    ///
    /// Precedence order:
    /// 1. Config file `editor` setting
    /// 2. $EDITOR environment variable
    /// 3. $VISUAL environment variable
    /// 4. "vi" as fallback
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| "vi".to_string())
    }

    pub fn pdf_command(&self) -> &str {
        self.pdf_command.as_deref().unwrap_or(DEFAULT_PDF_COMMAND)
    }

    /// Resolve the export theme, CLI `--theme` first.
    pub fn export_theme<'a>(&'a self, cli_theme: Option<&'a str>) -> Option<&'a str> {
        cli_theme.or(self.export_theme.as_deref())
    }
}

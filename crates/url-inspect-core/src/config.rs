use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application name used for XDG config/state directories.
pub const APP_NAME: &str = "url-inspect";

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    /// Color even when stdout is redirected. This opt-in setting overrides the
    /// default rule that redirected output is plain; `--no-color` still wins.
    Always,
    Never,
}

impl ColorMode {
    /// Final color decision; `--no-color` always wins.
    pub fn enabled(self, no_color_flag: bool, stdout_is_terminal: bool) -> bool {
        if no_color_flag {
            return false;
        }
        match self {
            ColorMode::Auto => stdout_is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Optional user configuration loaded from `~/.config/url-inspect/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Color policy: "auto" (default), "always" or "never".
    pub color: ColorMode,
    /// Maximum number of URL characters echoed back in error messages.
    pub error_preview_len: usize,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            error_preview_len: 15,
        }
    }
}

/// Path of an existing config file, if the user created one.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Parse configuration from `path`.
pub fn load_from(path: &Path) -> Result<InspectConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: InspectConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Load configuration from disk, falling back to defaults.
///
/// The file is never created. A missing or broken file must not stop URL
/// inspection, so errors are logged and defaults used.
pub fn load() -> InspectConfig {
    let path = match config_path() {
        Ok(Some(path)) => path,
        Ok(None) => return InspectConfig::default(),
        Err(err) => {
            tracing::warn!("cannot locate config directory: {:#}", err);
            return InspectConfig::default();
        }
    };

    match load_from(&path) {
        Ok(cfg) => {
            tracing::debug!("loaded config from {}", path.display());
            cfg
        }
        Err(err) => {
            tracing::warn!("ignoring invalid config {}: {:#}", path.display(), err);
            InspectConfig::default()
        }
    }
}

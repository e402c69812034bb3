//! Shell settings: built-in defaults + optional TOML config.
//!
//! - `Settings::default()` → `>>> ` prompt, steps shown, colors on
//! - `Settings::from_toml_file(path)` → load user settings
//! - `Settings::from_user_default_or_builtin()` → ~/.matrix/calc.toml if present

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub prompt: String,
    /// Print every RREF step, not just the result.
    pub show_steps: bool,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: ">>> ".to_string(),
            show_steps: true,
            color: true,
        }
    }
}

impl Settings {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// Use ~/.matrix/calc.toml if present; otherwise built-in.
    pub fn from_user_default_or_builtin() -> Self {
        if let Some(p) = default_config_path() {
            if p.exists() {
                match Self::from_toml_file(&p) {
                    Ok(s) => return s,
                    Err(e) => eprintln!("(warn) {:#}, using builtin settings", e),
                }
            }
        }
        Self::default()
    }

    /// An explicit `--config` path must load; otherwise fall back to the user
    /// default file or the built-ins.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        match cli_path {
            Some(p) => Self::from_toml_file(p),
            None => Ok(Self::from_user_default_or_builtin()),
        }
    }
}

/// ~/.matrix/calc.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".matrix").join("calc.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

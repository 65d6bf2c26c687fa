//! Form copy configuration loaded from TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use form_model::FormCopy;
use tracing::info;

/// Load form copy from `path`, or the defaults when no path is given.
pub fn load_form_copy(path: Option<&Path>) -> Result<FormCopy> {
    let Some(path) = path else {
        return Ok(FormCopy::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    let copy =
        parse_form_copy(&text).with_context(|| format!("parse config file {}", path.display()))?;
    info!(path = %path.display(), "loaded form config");
    Ok(copy)
}

/// Parse form copy from TOML text. Missing keys keep their defaults.
pub fn parse_form_copy(text: &str) -> Result<FormCopy> {
    let copy = toml::from_str(text).context("invalid form config")?;
    Ok(copy)
}

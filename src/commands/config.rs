use anyhow::{Context, Result};
use std::path::Path;

use crate::configtool::{get_config_path, Preferences};

pub fn show_config(prefs: &Preferences) -> Result<()> {
    let json = serde_json::to_string_pretty(prefs)
        .context("Failed to serialize preferences")?;
    println!("{}", json);
    Ok(())
}

/// 写入默认偏好设置。已存在的文件只有在 `force` 时才会被覆盖。
/// Returns whether the file was written.
pub fn init_config_at(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    Preferences::default().save_to(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

pub fn init_config(force: bool) -> Result<()> {
    let path = get_config_path()?;
    if init_config_at(&path, force)? {
        println!("Wrote default preferences to {}", path.display());
    } else {
        println!("Preferences file already exists: {} (use --force to overwrite)", path.display());
    }
    Ok(())
}

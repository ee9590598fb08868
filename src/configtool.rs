// __        __             ____
// \ \      / /____      __/ ___| ___ _ __
//  \ \ /\ / / _ \ \ /\ / / |  _ / _ \ '_ \
//   \ V  V / (_) \ V  V /| |_| |  __/ | | |
//    \_/\_/ \___/ \_/\_/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use serde::{Serialize, Deserialize};
use std::{fs, path::{Path, PathBuf}};
use std::io::{self, BufRead, Write};
use dirs::config_dir;
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::passgen::{GenerationConfig, MemorableConfig, PRESET_LENGTH};
use crate::wordlist::default_word_list_path;

pub const CONFIG_FILE: &str = "config.json";

/// 用户偏好设置，缺失字段使用默认值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub default_length: usize,
    pub preset_length: usize,
    pub word_count: usize,
    pub separator: String,
    pub wordlist: Option<PathBuf>,
    pub show_strength: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        let memorable = MemorableConfig::default();
        Self {
            default_length: GenerationConfig::default().length,
            preset_length: PRESET_LENGTH,
            word_count: memorable.word_count,
            separator: memorable.separator,
            wordlist: None,
            show_strength: true,
        }
    }
}

impl Preferences {
    /// Missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no preferences file, using defaults");
            return Ok(Self::default());
        }
        let config_data = fs::read_to_string(path)?;
        let prefs = serde_json::from_str(&config_data)?;
        Ok(prefs)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = fs::File::create(path)?;
        serde_json::to_writer_pretty(config_file, self)?;
        Ok(())
    }

    /// 读取失败时给出警告并使用默认值
    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Failed to load preferences, using defaults");
            Self::default()
        })
    }

    pub fn load_or_default() -> Self {
        match get_config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                warn!(error = %e, "Failed to locate preferences, using defaults");
                Self::default()
            }
        }
    }

    /// Flag value first, then the preferences entry, then the file beside the executable.
    pub fn resolve_wordlist(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.wordlist.clone())
            .unwrap_or_else(default_word_list_path)
    }

    pub fn memorable_config(&self) -> MemorableConfig {
        MemorableConfig {
            word_count: self.word_count,
            separator: self.separator.clone(),
        }
    }
}

pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("wowgen")),
        None => Err(ConfigError::ConfigDirError("Could not determine configuration directory".to_string())),
    }
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

/// 提示用户输入，返回去除首尾空白的一行
pub fn prompt_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

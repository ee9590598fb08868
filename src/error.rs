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
// Error types

use std::path::PathBuf;
use thiserror::Error;

/// 密码生成错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PassgenError {
    #[error("No characters available to generate password")]
    EmptyAlphabet,

    #[error("Word list is empty. Cannot generate memorable password")]
    EmptyPopulation,

    #[error("Password length must be at least 1")]
    InvalidLength,

    #[error("Word count must be at least 1")]
    InvalidWordCount,
}

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config directory error: {0}")]
    ConfigDirError(String),
}

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
// Word list loader

use std::fs;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::env;
use tracing::{debug, warn};

use crate::error::WordListError;

pub const WORDLIST_FILE: &str = "wordlist.txt";

/// `wordlist.txt` next to the running executable.
pub fn default_word_list_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(WORDLIST_FILE)
}

/// 读取单词列表。文件不存在时返回空列表并给出警告。
pub fn load_word_list(path: &Path) -> Result<Vec<String>, WordListError> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Wordlist file not found. Memorable passwords will not be available.");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(WordListError::Io { path: path.to_path_buf(), source });
        }
    };

    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| WordListError::Io { path: path.to_path_buf(), source })?;
        if let Some(word) = parse_line(&line) {
            words.push(word.to_string());
        }
    }

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

// 支持 diceware 格式: "11111\tword"
fn parse_line(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let word = match line.split_once('\t') {
        Some((index, word)) if index.chars().all(|c| c.is_ascii_digit()) => word.trim(),
        _ => line,
    };
    (!word.is_empty()).then_some(word)
}

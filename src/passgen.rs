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
// Password generator

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::PassgenError;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// All 32 printable ASCII punctuation characters.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
/// Characters dropped by `exclude_similar`.
pub const SIMILAR_CHARS: [char; 5] = ['i', 'l', '1', 'o', '0'];

/// Length used by the `--default` preset.
pub const PRESET_LENGTH: usize = 16;

/// 随机密码生成选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
    pub exclude_similar: bool,
    /// Overrides every other flag when non-empty. `Some("")` is an error.
    pub custom_characters: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: false,
            include_numbers: false,
            include_special: false,
            exclude_similar: false,
            custom_characters: None,
        }
    }
}

impl GenerationConfig {
    /// Preset: length 16 with uppercase, numbers and special characters.
    pub fn preset() -> Self {
        Self {
            length: PRESET_LENGTH,
            include_uppercase: true,
            include_numbers: true,
            include_special: true,
            ..Default::default()
        }
    }
}

/// 记忆密码生成选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorableConfig {
    pub word_count: usize,
    pub separator: String,
}

impl Default for MemorableConfig {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
        }
    }
}

/// Characters eligible for selection. Never empty; duplicates are kept and
/// weight the draw accordingly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn new(chars: Vec<char>) -> Result<Self, PassgenError> {
        if chars.is_empty() {
            return Err(PassgenError::EmptyAlphabet);
        }
        Ok(Self(chars))
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

pub fn build_alphabet(config: &GenerationConfig) -> Result<Alphabet, PassgenError> {
    // 自定义字符完全覆盖其他选项，不去重
    if let Some(custom) = &config.custom_characters {
        return Alphabet::new(custom.chars().collect());
    }

    let mut char_pool = String::from(LOWERCASE);
    if config.include_uppercase { char_pool.push_str(UPPERCASE); }
    if config.include_numbers { char_pool.push_str(DIGITS); }
    if config.include_special { char_pool.push_str(PUNCTUATION); }

    if config.exclude_similar {
        char_pool.retain(|c| !SIMILAR_CHARS.contains(&c));
    }

    Alphabet::new(char_pool.chars().collect())
}

/// Draws `length` characters uniformly, with replacement, from the OS CSPRNG.
pub fn generate_random_string(alphabet: &Alphabet, length: usize) -> String {
    let mut rng = OsRng::default();
    let chars = alphabet.chars();
    (0..length)
        .filter_map(|_| chars.choose(&mut rng).copied())
        .collect()
}

/// Draws `count` words uniformly, with replacement, and joins them with
/// `separator`.
pub fn generate_random_joined<S: AsRef<str>>(
    population: &[S],
    count: usize,
    separator: &str,
) -> Result<String, PassgenError> {
    if population.is_empty() {
        return Err(PassgenError::EmptyPopulation);
    }

    let mut rng = OsRng::default();
    let words: Vec<&str> = (0..count)
        .filter_map(|_| population.choose(&mut rng).map(|w| w.as_ref()))
        .collect();

    Ok(words.join(separator))
}

pub fn generate_password(config: &GenerationConfig) -> Result<String, PassgenError> {
    if config.length == 0 {
        return Err(PassgenError::InvalidLength);
    }
    let alphabet = build_alphabet(config)?;
    debug!(alphabet_size = alphabet.len(), length = config.length, "generating random password");
    Ok(generate_random_string(&alphabet, config.length))
}

/// 生成记忆密码（基于单词列表）
pub fn generate_memorable_password<S: AsRef<str>>(
    config: &MemorableConfig,
    words: &[S],
) -> Result<String, PassgenError> {
    if config.word_count == 0 {
        return Err(PassgenError::InvalidWordCount);
    }
    debug!(population = words.len(), word_count = config.word_count, "generating memorable password");
    generate_random_joined(words, config.word_count, &config.separator)
}

pub fn check_similar_chars(password: &str) -> Vec<char> {
    password.chars().filter(|c| SIMILAR_CHARS.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_is_full_ascii_set() {
        assert_eq!(PUNCTUATION.chars().count(), 32);
        assert!(PUNCTUATION.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn alphabet_rejects_empty() {
        assert_eq!(Alphabet::new(Vec::new()), Err(PassgenError::EmptyAlphabet));
    }

    #[test]
    fn class_order_is_fixed() {
        let config = GenerationConfig {
            include_uppercase: true,
            include_numbers: true,
            include_special: true,
            ..Default::default()
        };
        let alphabet = build_alphabet(&config).unwrap();
        let expected: String = [LOWERCASE, UPPERCASE, DIGITS, PUNCTUATION].concat();
        assert_eq!(alphabet.chars().iter().collect::<String>(), expected);
    }
}

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::configtool::{prompt_input, Preferences};
use crate::passgen::{self, GenerationConfig, MemorableConfig};
use super::password_gen::print_password;

/// Everything the prompts collect. Every field has a value before the first
/// question is asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveSettings {
    pub memorable: bool,
    pub generation: GenerationConfig,
    pub memorable_config: MemorableConfig,
}

impl InteractiveSettings {
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self {
            memorable: false,
            generation: GenerationConfig {
                length: prefs.default_length,
                ..Default::default()
            },
            memorable_config: prefs.memorable_config(),
        }
    }
}

fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: bool,
) -> io::Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    loop {
        let answer = prompt_input(input, output, &format!("{} {}: ", prompt, hint))?;
        match answer.to_ascii_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please answer y or n.")?,
        }
    }
}

fn prompt_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: usize,
) -> io::Result<usize> {
    loop {
        let answer = prompt_input(input, output, &format!("{} (default: {}): ", prompt, default))?;
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<usize>() {
            Ok(n) if n > 0 => return Ok(n),
            _ => writeln!(output, "Please enter a whole number greater than 0.")?,
        }
    }
}

/// 交互式收集生成参数。只有在单词列表可用时才询问记忆密码。
pub fn collect_settings<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prefs: &Preferences,
    words_available: bool,
) -> io::Result<InteractiveSettings> {
    let mut settings = InteractiveSettings::from_preferences(prefs);

    if words_available {
        settings.memorable = prompt_yes_no(input, output, "Generate a memorable password?", false)?;
    }

    if settings.memorable {
        let memorable = &mut settings.memorable_config;
        memorable.word_count = prompt_count(input, output, "Number of words", memorable.word_count)?;
        let separator = prompt_input(
            input,
            output,
            &format!("Separator (default: '{}', type 'none' for no separator): ", memorable.separator),
        )?;
        match separator.as_str() {
            "" => {}
            "none" => memorable.separator.clear(),
            _ => memorable.separator = separator,
        }
        return Ok(settings);
    }

    let generation = &mut settings.generation;
    generation.length = prompt_count(input, output, "Password length", generation.length)?;
    generation.include_uppercase = prompt_yes_no(input, output, "Include uppercase letters?", false)?;
    generation.include_numbers = prompt_yes_no(input, output, "Include numbers?", false)?;
    generation.include_special = prompt_yes_no(input, output, "Include special characters?", false)?;
    generation.exclude_similar =
        prompt_yes_no(input, output, "Exclude similar characters (i, l, 1, o, 0)?", false)?;
    let custom = prompt_input(input, output, "Custom characters (leave empty to use the options above): ")?;
    if !custom.is_empty() {
        generation.custom_characters = Some(custom);
    }

    Ok(settings)
}

/// 运行交互模式
pub fn run_interactive(prefs: &Preferences, words: &[String]) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let settings = collect_settings(&mut input, &mut output, prefs, !words.is_empty())
        .context("Failed to read input")?;

    let password = if settings.memorable {
        passgen::generate_memorable_password(&settings.memorable_config, words)
            .context("Failed to generate memorable password")?
    } else {
        passgen::generate_password(&settings.generation)
            .context("Failed to generate password")?
    };
    print_password(&password, prefs.show_strength);
    Ok(())
}

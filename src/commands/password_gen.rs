use anyhow::{Context, Result};

use crate::passgen::{self, GenerationConfig, MemorableConfig};
use crate::strength::evaluate_strength;

pub fn generate_random(config: &GenerationConfig, show_strength: bool) -> Result<()> {
    let password = passgen::generate_password(config)
        .context("Failed to generate password")?;
    print_password(&password, show_strength);
    Ok(())
}

pub fn generate_memorable(
    config: &MemorableConfig,
    words: &[String],
    show_strength: bool,
) -> Result<()> {
    let password = passgen::generate_memorable_password(config, words)
        .context("Failed to generate memorable password")?;
    print_password(&password, show_strength);
    Ok(())
}

pub(crate) fn print_password(password: &str, show_strength: bool) {
    println!("Generated password: {}", password);
    if show_strength {
        println!("Strength: {}", evaluate_strength(password));
    }
}

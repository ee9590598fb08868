use anyhow::{Context, Result};

use crate::passgen;
use crate::strength::{assess_password_strength, evaluate_strength};

pub fn test_password(password: Option<String>, check_similar: bool) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => rpassword::prompt_password("Password to test: ")
            .context("Failed to read password")?,
    };

    println!("Strength: {}", evaluate_strength(&password));

    let (rating, score, feedback) = assess_password_strength(&password);
    println!("zxcvbn estimate: {} (score: {}/4)", rating, score);
    if !feedback.is_empty() {
        println!("Suggestions: {}", feedback);
    }

    if check_similar {
        let similar = passgen::check_similar_chars(&password);
        if !similar.is_empty() {
            println!("Visually similar characters: {:?}", similar);
        } else {
            println!("No visually similar characters detected");
        }
    }
    Ok(())
}

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
// Password strength

use std::collections::HashSet;
use std::fmt;
use zxcvbn::zxcvbn;
use zxcvbn::Score;

pub const LENGTH_CRITERIA: usize = 12;
pub const VARIETY_CRITERIA: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Moderate => write!(f, "Moderate"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Heuristic strength of a password: how long it is and how many distinct
/// characters it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub length_score: usize,
    pub variety_score: usize,
    pub label: StrengthLabel,
}

impl fmt::Display for StrengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (length: {}, variety: {})",
            self.label, self.length_score, self.variety_score
        )
    }
}

pub fn evaluate_strength(password: &str) -> StrengthReport {
    let length_score = password.chars().count();
    let variety_score = password.chars().collect::<HashSet<char>>().len();

    let label = if length_score >= LENGTH_CRITERIA && variety_score >= VARIETY_CRITERIA {
        StrengthLabel::Strong
    } else if length_score >= LENGTH_CRITERIA / 2 && variety_score >= VARIETY_CRITERIA / 2 {
        StrengthLabel::Moderate
    } else {
        StrengthLabel::Weak
    };

    StrengthReport { length_score, variety_score, label }
}

/// zxcvbn 评估：返回 (评级, 分数 0-4, 建议)
pub fn assess_password_strength(password: &str) -> (String, u8, String) {
    let strength_result = zxcvbn(password, &[]);
    let score = strength_result.score();
    let feedback = strength_result.feedback().map_or_else(
        String::new,
        |f| f.suggestions().iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ")
    );

    let rating = match score {
        Score::Zero => "Very weak",
        Score::One => "Weak",
        Score::Two => "Fair",
        Score::Three => "Strong",
        Score::Four => "Very strong",
        _ => "Unknown",
    }.to_string();

    (rating, score as u8, feedback)
}

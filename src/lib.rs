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
// A cryptographically secure password generator.

pub mod commands;
pub mod configtool;
pub mod error;
pub mod passgen;
pub mod strength;
pub mod wordlist;

pub use error::{ConfigError, PassgenError, WordListError};

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

use anyhow::Result;
use clap::{ArgGroup, CommandFactory, Parser};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wowgen::commands::{config, interactive, password_gen, testpass};
use wowgen::configtool::Preferences;
use wowgen::passgen::{GenerationConfig, MemorableConfig};
use wowgen::wordlist::load_word_list;

#[derive(Debug, Parser)]
#[command(name = "wowgen", version)]
#[command(about = "WowGen: A cryptographically secure password generator", long_about = None)]
enum Cli {
    /// Generate a random password
    Gen(GenArgs),

    /// Generate a memorable password from random words
    Memorable(MemorableArgs),

    /// Answer a few questions and generate a password
    Interactive {
        /// Word list file for memorable passwords
        #[arg(long)]
        wordlist: Option<PathBuf>,
    },

    /// Test password strength
    Testpass(TestpassArgs),

    /// Show or initialize the preferences file
    Config(ConfigArgs),
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password [default: 12]
    #[arg(short, long)]
    length: Option<usize>,

    /// Include uppercase letters
    #[arg(short, long, default_value_t = false)]
    uppercase: bool,

    /// Include numbers
    #[arg(short, long, default_value_t = false)]
    numbers: bool,

    /// Include special characters
    #[arg(short, long, default_value_t = false)]
    special: bool,

    /// Exclude visually similar characters (i, l, 1, o, 0)
    #[arg(short, long, default_value_t = false)]
    exclude_similar: bool,

    /// Use exactly these characters, overriding the options above
    #[arg(short, long)]
    custom_chars: Option<String>,

    /// Preset: length 16 with uppercase, numbers and special characters (cannot be combined with -l, -c or -e)
    #[arg(short, long, default_value_t = false,
          conflicts_with_all = ["length", "custom_chars", "exclude_similar"])]
    default: bool,

    /// Do not print the strength report
    #[arg(long, default_value_t = false)]
    no_strength: bool,
}

#[derive(Debug, Parser)]
struct MemorableArgs {
    /// Number of words [default: 4]
    #[arg(short, long)]
    word_count: Option<usize>,

    /// Separator between words [default: -]
    #[arg(short = 'p', long)]
    separator: Option<String>,

    /// Word list file (one word per line)
    #[arg(long)]
    wordlist: Option<PathBuf>,

    /// Do not print the strength report
    #[arg(long, default_value_t = false)]
    no_strength: bool,
}

#[derive(Debug, Parser)]
#[command(group(ArgGroup::new("action").required(true).multiple(true).args(["show", "init"])))]
struct ConfigArgs {
    /// Print the effective preferences
    #[arg(long, default_value_t = false)]
    show: bool,

    /// Write the default preferences file
    #[arg(long, default_value_t = false)]
    init: bool,

    /// Overwrite an existing preferences file
    #[arg(long, default_value_t = false, requires = "init")]
    force: bool,
}

#[derive(Debug, Parser)]
struct TestpassArgs {
    /// Password to test (prompted for when omitted)
    password: Option<String>,

    /// Report visually similar characters
    #[arg(short = 'c', long, default_value_t = false)]
    check_similar: bool,
}

impl GenArgs {
    fn into_config(self, prefs: &Preferences) -> GenerationConfig {
        if self.default {
            return GenerationConfig {
                length: prefs.preset_length,
                ..GenerationConfig::preset()
            };
        }
        GenerationConfig {
            length: self.length.unwrap_or(prefs.default_length),
            include_uppercase: self.uppercase,
            include_numbers: self.numbers,
            include_special: self.special,
            exclude_similar: self.exclude_similar,
            custom_characters: self.custom_chars,
        }
    }
}

impl MemorableArgs {
    fn memorable_config(&self, prefs: &Preferences) -> MemorableConfig {
        MemorableConfig {
            word_count: self.word_count.unwrap_or(prefs.word_count),
            separator: self.separator.clone().unwrap_or_else(|| prefs.separator.clone()),
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "wowgen=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    // 无参数时打印帮助
    if std::env::args_os().len() == 1 {
        Cli::command().print_help()?;
        return Ok(());
    }

    let cli = Cli::parse();
    let prefs = Preferences::load_or_default();

    match cli {
        Cli::Gen(args) => {
            let show_strength = prefs.show_strength && !args.no_strength;
            let config = args.into_config(&prefs);
            password_gen::generate_random(&config, show_strength)
        },
        Cli::Memorable(args) => {
            let show_strength = prefs.show_strength && !args.no_strength;
            let config = args.memorable_config(&prefs);
            let words = load_word_list(&prefs.resolve_wordlist(args.wordlist))?;
            password_gen::generate_memorable(&config, &words, show_strength)
        },
        Cli::Interactive { wordlist } => {
            let words = load_word_list(&prefs.resolve_wordlist(wordlist))?;
            interactive::run_interactive(&prefs, &words)
        },
        Cli::Testpass(args) => {
            testpass::test_password(args.password, args.check_similar)
        },
        Cli::Config(args) => {
            if args.init {
                config::init_config(args.force)?;
            }
            if args.show {
                config::show_config(&prefs)?;
            }
            Ok(())
        },
    }
}

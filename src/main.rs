use std::io::Read;

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use unslop::{HumanizationLevel, WritingMode};

#[derive(Parser)]
#[command(
    name = "unslop",
    about = "Score prose for AI-typical style and rewrite it toward a natural register",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze text and print the result as JSON
    Analyze {
        /// File paths to analyze (reads stdin if none provided)
        files: Vec<String>,
    },
    /// Rewrite text toward a more natural register
    Humanize {
        /// File paths to rewrite (reads stdin if none provided)
        files: Vec<String>,
        /// Rewrite intensity
        #[arg(long, value_enum, default_value = "medium")]
        level: LevelArg,
        /// Style target
        #[arg(long, value_enum, default_value = "general")]
        mode: ModeArg,
        /// Seed for the random source (reproducible output)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print character/word/sentence counts as JSON
    Stats {
        /// File paths to count (reads stdin if none provided)
        files: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Light,
    Medium,
    Heavy,
}

impl From<LevelArg> for HumanizationLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Light => HumanizationLevel::Light,
            LevelArg::Medium => HumanizationLevel::Medium,
            LevelArg::Heavy => HumanizationLevel::Heavy,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    General,
    Professional,
}

impl From<ModeArg> for WritingMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::General => WritingMode::General,
            ModeArg::Professional => WritingMode::Professional,
        }
    }
}

fn inputs(files: &[String]) -> Vec<String> {
    if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .expect("Failed to read stdin");
        vec![input]
    } else {
        files
            .iter()
            .map(|path| {
                std::fs::read_to_string(path).unwrap_or_else(|e| {
                    eprintln!("Error reading {path}: {e}");
                    std::process::exit(1);
                })
            })
            .collect()
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { files } => {
            for text in inputs(&files) {
                let result = unslop::analyze_text(&text);
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
            }
        }
        Command::Humanize {
            files,
            level,
            mode,
            seed,
        } => {
            for text in inputs(&files) {
                let output = match seed {
                    Some(seed) => unslop::humanize_with(
                        &text,
                        level.into(),
                        mode.into(),
                        &mut SmallRng::seed_from_u64(seed),
                    ),
                    None => unslop::humanize_text(&text, level.into(), mode.into()),
                };
                println!("{output}");
            }
        }
        Command::Stats { files } => {
            for text in inputs(&files) {
                let stats = unslop::get_stats(&text);
                println!("{}", serde_json::to_string_pretty(&stats).unwrap());
            }
        }
    }
}

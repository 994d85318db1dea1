use crate::formatting::ColorMode;
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "readiness")]
#[command(about = "Enterprise security readiness self-assessment", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Plain output: ASCII glyphs and no colors
    #[arg(long, global = true)]
    pub plain: bool,

    /// When to color output: auto, always or never (overrides NO_COLOR and CLICOLOR)
    #[arg(long, global = true, value_name = "WHEN", value_parser = parse_color_mode)]
    pub color: Option<ColorMode>,

    /// Configuration file (defaults to the nearest .readiness.toml)
    #[arg(long, global = true, env = "READINESS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take the assessment interactively
    Run {
        /// Results link or `#answers=` fragment to resume from
        #[arg(long)]
        link: Option<String>,

        /// Never contact the submission endpoint
        #[arg(long)]
        offline: bool,

        /// Ignore the saved session and start at the contact gate
        #[arg(long, conflicts_with = "session_file")]
        fresh_session: bool,

        /// Session file (defaults to the user cache directory)
        #[arg(long)]
        session_file: Option<PathBuf>,
    },

    /// Score a set of answers without the interactive flow
    Score {
        /// Answers token, results link or `#answers=` fragment
        #[arg(long, visible_alias = "token", conflicts_with = "answers")]
        link: Option<String>,

        /// JSON file mapping question ids to scores
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Encode an answers JSON file into a shareable link
    Encode {
        /// JSON file mapping question ids to scores ("-" for stdin)
        answers: PathBuf,

        /// Print only the token instead of the full link
        #[arg(long)]
        token_only: bool,
    },

    /// Decode a token or results link into answers JSON
    Decode {
        /// Answers token, results link or `#answers=` fragment
        input: String,
    },

    /// List every dimension, question and answer option
    Questions {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check whether an address is accepted as a work email
    CheckEmail {
        email: String,
    },

    /// Write a default .readiness.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_color_mode(value: &str) -> Result<ColorMode, String> {
    ColorMode::parse(value).ok_or_else(|| format!("expected auto, always or never, got '{value}'"))
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

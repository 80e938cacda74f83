//! # hashtagger CLI
//!
//! Command-line interface for the hashtagger hashtag generator.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hashtagger::{
    commands::{self, GenerateArgs},
    config::CopyArgs,
    output::OutputFormat,
};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/hashtagger/config    Default count, output format, clipboard command

Generated Hashtags (in order):
  1. Custom tags                 #travel, #Food
  2. Words longer than 2 chars   #summer, #Summer
  3. Whole title                 #summerroadtrip, #SummerRoadTrip
  4. Context variants            #SummerRoadTripInsights, #summerExperts,
                                 #tripTrends, #SRT
  5. Random padding              #SummerRoadTripk3x9a

Getting Started:
  htg setup                                  Create the config file
  htg generate \"Summer Road Trip\"            Generate 30 hashtags
  htg generate \"My Trip\" -t \"travel, #Food\" -n 50 --copy

Learn more:
  htg <COMMAND> --help           Show detailed help for a command";

#[derive(Parser)]
#[command(name = "htg")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Contextual hashtag generator for post titles")]
#[command(
    long_about = "htg turns a post title into a list of unique hashtags. Words, the whole \
title and a few context phrases are turned into case variants, custom tags are cleaned \
and kept first, and random variants pad the list to the requested size."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Show debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate hashtags for a post title
    #[command(
        long_about = "Generate hashtags for a post title.\n\n\
Prints exactly --count unique hashtags (clamped to 1..=500). Custom tags are \
trimmed, lose one leading '#' and all inner whitespace, and come first. When no \
title is given and stdin is a terminal, the title and custom tags are prompted for.",
        after_help = "Examples:\n  \
htg generate \"hello world\" -n 10\n  \
htg generate \"My Trip\" --tags \"travel, #Food\" --count 50\n  \
htg generate \"Launch Day\" --format plain --copy\n  \
htg generate \"Launch Day\" --seed 42 --format json\n\n\
Output: Hashtags on stdout; notices on stderr."
    )]
    Generate {
        /// Post title
        title: Option<String>,

        /// Custom hashtags, comma-separated
        #[arg(short, long)]
        tags: Option<String>,

        /// Number of hashtags (1-500, default from config)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Seed for reproducible random padding
        #[arg(long)]
        seed: Option<u64>,

        /// Copy the hashtags to the clipboard
        #[arg(short, long, conflicts_with = "no_copy")]
        copy: bool,

        /// Do not copy, even if auto_copy is set
        #[arg(long)]
        no_copy: bool,
    },

    /// Create or repair the config file
    #[command(
        long_about = "Create ~/.config/hashtagger/config with commented defaults.\n\n\
If the file exists, unknown fields are removed and missing fields are added \
with their defaults."
    )]
    Setup,

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            title,
            tags,
            count,
            format,
            seed,
            copy,
            no_copy,
        } => commands::generate(GenerateArgs {
            title,
            tags,
            count,
            format,
            seed,
            copy: CopyArgs { copy, no_copy },
        }),

        Commands::Setup => commands::setup(),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}

//! CLI frontend for the Arcana tarot catalog and reading engine.

mod commands;
mod config;
mod context;
mod logger;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use arcana_core::Locale;

use commands::browse::Filter;
use commands::read::ReadingKind;
use config::AppConfig;
use context::AppContext;

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana: browse the tarot and draw readings",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output language: en or zh
    #[arg(short, long, global = true, default_value = "en")]
    lang: Locale,

    /// Directory containing the card tables
    #[arg(short, long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List cards in load order
    Browse {
        /// Only cards with this exact card type (e.g. major, minor, court)
        #[arg(short = 't', long = "type", conflicts_with_all = ["major", "minor"])]
        cardtype: Option<String>,

        /// Only the Major Arcana
        #[arg(long, conflicts_with = "minor")]
        major: bool,

        /// Only the Minor Arcana
        #[arg(long)]
        minor: bool,
    },

    /// Show a card by its slug, with previous/next navigation
    Show {
        /// Card slug (e.g. the-fool)
        url: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a card by name (case-insensitive)
    Find {
        /// Card name
        name: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Lay out a reading: one, three or six cards
    Read {
        /// Reading to draw
        #[arg(value_enum)]
        kind: ReadingKind,

        /// RNG seed for a reproducible reading
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Draw any number of cards with coin-flip orientations
    Draw {
        /// Number of cards to draw
        #[arg(allow_negative_numbers = true)]
        count: i64,

        /// Sample with replacement (cards may repeat)
        #[arg(long)]
        duplicates: bool,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check the card tables of every locale
    Validate {
        /// Image directory to check card images against
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let seed = match &cli.command {
        Commands::Read { seed, .. } | Commands::Draw { seed, .. } => *seed,
        _ => None,
    };
    let config = AppConfig::default()
        .with_data_dir(cli.data_dir)
        .with_locale(cli.lang)
        .with_seed(seed);

    let ctx = match AppContext::load(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!(error = %e, "failed to load card tables");
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Browse {
            cardtype,
            major,
            minor,
        } => {
            let filter = match (cardtype.as_deref(), major, minor) {
                (Some(t), _, _) => Filter::Type(t),
                (None, true, _) => Filter::Major,
                (None, _, true) => Filter::Minor,
                (None, false, false) => Filter::All,
            };
            commands::browse::run(&ctx, filter)
        }
        Commands::Show { url, json } => commands::show::run(&ctx, &url, json),
        Commands::Find { name, json } => commands::find::run(&ctx, &name, json),
        Commands::Read { kind, json, .. } => commands::read::run(&ctx, kind, json),
        Commands::Draw {
            count,
            duplicates,
            json,
            ..
        } => commands::draw::run(&ctx, count, duplicates, json),
        Commands::Validate { images, json } => {
            commands::validate::run(&ctx, images.as_deref(), json)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

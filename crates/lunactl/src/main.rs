//! Luna Control - CLI for the Luna sleep assistant
//!
//! Scores nightly sleep entries and runs the conversational assistant.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lunactl::commands;
use lunactl::config::Config;

#[derive(Parser)]
#[command(name = "lunactl")]
#[command(about = "Luna - sleep tracking and sleep-hygiene assistant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a nightly sleep entry and store it for analysis
    Score {
        /// Hours slept (0-24)
        #[arg(long)]
        hours: f64,

        /// Number of times sleep was interrupted
        #[arg(long, default_value_t = 0)]
        disturbances: u32,

        /// Bedroom temperature in degrees Celsius
        #[arg(long)]
        temperature: f64,

        /// Light exposure during sleep (yes/no)
        #[arg(long, default_value = "no")]
        light: String,

        /// Noise disturbance during sleep (yes/no)
        #[arg(long, default_value = "no")]
        noise: String,
    },

    /// Start an interactive chat with the assistant
    Chat {
        /// Seed for reply randomness (reproducible conversations)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Ask a single question and print the reply
    Ask {
        /// The question to ask
        message: Vec<String>,

        /// Seed for reply randomness
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the topics the assistant can answer
    Topics,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Commands::Score {
            hours,
            disturbances,
            temperature,
            light,
            noise,
        } => commands::score(&config, hours, disturbances, temperature, &light, &noise),
        Commands::Chat { seed } => commands::chat(&config, seed),
        Commands::Ask { message, seed } => commands::ask(&config, &message.join(" "), seed),
        Commands::Topics => commands::topics(),
    }
}

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use muster::config::Config;
use muster::report::{self, VerificationReport};
use muster::roblox::RobloxClient;
use muster::{output, pipeline};

/// Muster: membership-eligibility vetting for Roblox accounts.
///
/// Pulls account signals from the public Roblox APIs, applies the
/// community's rule set, and reports a verdict with concerns for
/// human review.
#[derive(Parser)]
#[command(name = "muster", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a Roblox account against the membership heuristics
    Verify {
        /// The Roblox username to verify
        username: String,

        /// Live blacklist CSV URL (public Google Sheet export link)
        #[arg(long)]
        blacklist_url: Option<String>,

        /// Where to write the JSON report (default: report_<user_id>.json)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Skip writing the JSON report
        #[arg(long)]
        no_report: bool,
    },

    /// Show the resolved configuration summary
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("muster=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Verify {
            username,
            blacklist_url,
            out,
            no_report,
        } => {
            let config = Config::load();
            let client = RobloxClient::new(config.request_timeout_secs)?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner());
            spinner.set_message(format!("Verifying {username}..."));
            spinner.enable_steady_tick(Duration::from_millis(120));

            let result =
                pipeline::verify_user(&client, &config, &username, blacklist_url.as_deref()).await;
            spinner.finish_and_clear();

            let verification = result?;
            output::terminal::display_verification(&verification);

            if !no_report {
                let report = VerificationReport::from_verification(&verification);
                let path = out.unwrap_or_else(|| PathBuf::from(report.default_filename()));
                report::write_report(&path, &report)?;
                println!("\nReport written to {}", path.display());
            }
        }

        Commands::Config => {
            let config = Config::load();
            output::terminal::display_config_summary(&config);
        }
    }

    Ok(())
}

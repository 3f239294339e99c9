use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lumira_core::{AnalysisClient, ScoreCategory, SCORED_ATTRIBUTES};

mod config;
mod render;
mod session;

use config::Config;
use session::{AnalysisSession, SessionState};

#[derive(Parser)]
#[command(name = "lumira", about = "AI facial analysis from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a facial photo and print the report
    Analyze {
        /// Path to the photo (PNG or JPEG; clear, front-facing works best)
        photo: PathBuf,
        /// Print the raw analysis document instead of the report
        #[arg(long)]
        json: bool,
    },
    /// List the scored attributes and their categories
    Attributes,
    /// Check provider reachability and credentials
    Status,
}

fn client_from(cfg: &Config) -> AnalysisClient {
    AnalysisClient::new(&cfg.api_base, &cfg.api_key, &cfg.model, cfg.timeout)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { photo, json } => {
            let cfg = Config::from_env()?;
            tracing::info!(model = %cfg.model, photo = %photo.display(), "starting analysis");

            let mut session = AnalysisSession::new(client_from(&cfg));
            match session.upload(&photo).await {
                SessionState::Success { result, .. } => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(result)?);
                    } else {
                        print!("{}", render::render_report(result, std::io::stdout().is_terminal()));
                    }
                }
                SessionState::Error { message } => {
                    eprintln!("{message}");
                    std::process::exit(1);
                }
                // upload always settles in Success or Error
                SessionState::Idle | SessionState::Loading => unreachable!(),
            }
        }
        Commands::Attributes => {
            for name in SCORED_ATTRIBUTES {
                let category = ScoreCategory::for_attribute(name)
                    .map(|c| c.as_str())
                    .unwrap_or("-");
                println!("{name:<16} {category}");
            }
        }
        Commands::Status => {
            let cfg = Config::from_env()?;
            let client = client_from(&cfg);
            if client.health_check().await {
                println!("provider reachable (model: {})", cfg.model);
            } else {
                eprintln!("provider unreachable — check LUMIRA_API_KEY and network");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

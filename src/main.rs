use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use truthscore::config::Config;
use truthscore::output::{report, terminal};
use truthscore::scoring::estimate;
use truthscore::{resolve_identifier, AnalysisError, Analyzer};

/// TruthScore: explainable trust scoring for YouTube videos.
///
/// Combines video metadata, vote data, comments and channel history into
/// a 0-100 score with a list of human-readable flags.
#[derive(Parser)]
#[command(name = "truthscore", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a video by URL or id
    Analyze {
        /// A watch/short/embed URL or a bare 11-character video id
        input: String,

        /// Print the full analysis as JSON instead of the colored report
        #[arg(long)]
        json: bool,

        /// Also print the plain-text summary for sharing
        #[arg(long)]
        summary: bool,
    },

    /// Print the video id extracted from a URL
    Normalize {
        input: String,
    },

    /// Rough score from vote counts alone
    Estimate {
        #[arg(long)]
        likes: u64,

        #[arg(long)]
        dislikes: u64,
    },

    /// Run the JSON API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: PORT env var or 3000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: TRUTHSCORE_BIND env var or 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("truthscore=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            json,
            summary,
        } => {
            let config = Config::load()?;
            config.require_youtube()?;

            let id = match resolve_identifier(&input) {
                Ok(id) => id,
                Err(e) => {
                    eprintln!("{}", e.to_string().red());
                    return Ok(ExitCode::FAILURE);
                }
            };

            let analyzer = Analyzer::from_config(&config)?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("  {spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message(format!("Analyzing {id}..."));
            spinner.enable_steady_tick(Duration::from_millis(100));

            let outcome = analyzer.analyze(&id).await;
            spinner.finish_and_clear();

            let analysis = match outcome {
                Ok(analysis) => analysis,
                Err(e) => {
                    print_failure(&e);
                    return Ok(ExitCode::FAILURE);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                terminal::display_analysis(&analysis);
            }

            if summary {
                println!("{}", report::plain_text_summary(&analysis));
            }
        }

        Commands::Normalize { input } => match resolve_identifier(&input) {
            Ok(id) => println!("{id}"),
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                return Ok(ExitCode::FAILURE);
            }
        },

        Commands::Estimate { likes, dislikes } => {
            let score = estimate::estimate_from_votes(likes, dislikes);
            println!("Rough estimate: {score}/100");
            println!(
                "{}",
                "Based on the dislike ratio only. Run `truthscore analyze` for the full score."
                    .dimmed()
            );
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            config.require_youtube()?;
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());

            tracing::info!(port, bind = %bind, "Starting web server");
            let analyzer = Analyzer::from_config(&config)?;
            truthscore::web::run_server(analyzer, port, &bind).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Explain a failed analysis in terms the user can act on.
fn print_failure(error: &AnalysisError) {
    match error {
        AnalysisError::NotFound(id) => {
            eprintln!(
                "{}",
                format!("Video {id} was not found. It may be private or deleted.").red()
            );
        }
        e if e.is_transient() => {
            eprintln!("{}", format!("Analysis failed: {e}").red());
            eprintln!("{}", "This is usually temporary, try again in a moment.".dimmed());
        }
        e => eprintln!("{}", e.to_string().red()),
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lead_score::clients::ClientStore;
use lead_score::error::ScoreError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_NOT_FOUND: i32 = 1;
const EXIT_DATA: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank every client in the book by score (default if no subcommand)
    List,
    /// Score one client by id
    Score {
        /// Client id as stored in the client book
        id: u64,
    },
    /// Create the config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "lead-score")]
#[command(about = "Mortgage lead scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (per-factor breakdown, skipped clients)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/lead-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the client book (overrides the config file)
    #[arg(long, global = true)]
    clients: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::List);

    // Init runs before any config exists
    if let Commands::Init = command {
        if let Err(e) = lead_score::config::run_init_wizard(cli.config.map(PathBuf::from)) {
            eprintln!("Init error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match lead_score::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate loan terms at startup
    if let Err(errors) = lead_score::scoring::validate_terms(&config.loan) {
        eprintln!("Loan term errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let clients_path = cli
        .clients
        .map(PathBuf::from)
        .unwrap_or_else(|| lead_score::config::resolve_clients_path(&config));

    if cli.verbose {
        eprintln!("Client book: {}", clients_path.display());
        eprintln!(
            "Loan: price {} upfront {} interest {} ufvalue {}",
            config.loan.price, config.loan.upfront, config.loan.interest, config.loan.ufvalue
        );
    }

    let store = ClientStore::new(clients_path);
    let use_colors = lead_score::output::should_use_colors();

    match command {
        Commands::Score { id } => {
            match lead_score::fetch::fetch_and_score(&store, id, &config.loan).await {
                Ok((client, result)) => {
                    println!(
                        "{}",
                        lead_score::output::format_score_line(&client, &result, use_colors)
                    );
                    if cli.verbose {
                        println!(
                            "{}",
                            lead_score::output::format_breakdown(&result, use_colors)
                        );
                    }
                }
                Err(e) => {
                    eprintln!("{}", e);
                    let code = match e {
                        ScoreError::ClientNotFound(_) => EXIT_NOT_FOUND,
                        _ => EXIT_DATA,
                    };
                    std::process::exit(code);
                }
            }
        }
        Commands::List => {
            match lead_score::fetch::fetch_and_score_all(&store, &config.loan, cli.verbose).await {
                Ok(scored) => {
                    let scored_refs: Vec<lead_score::output::ScoredClient> = scored
                        .iter()
                        .map(|(client, result)| lead_score::output::ScoredClient {
                            client,
                            result,
                        })
                        .collect();
                    println!(
                        "{}",
                        lead_score::output::format_scored_table(&scored_refs, use_colors)
                    );
                }
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_DATA);
                }
            }
        }
        Commands::Init => unreachable!(),
    }

    std::process::exit(EXIT_SUCCESS);
}

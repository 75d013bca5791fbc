use clap::Parser;
use log::debug;
use review::application::{init::init, list_reviews, ReviewService};
use review::cli::{format_outcome, format_review_list, Cli, Commands};
use review::domain::SystemClock;
use review::error::ReviewError;
use review::infrastructure::{Config, JsonStore, PromptSession};
use std::io;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    match run(cli, config) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli, config: Config) -> Result<(), ReviewError> {
    let config = config.with_store_override(cli.file);
    debug!("Using review store {}", config.store_path.display());

    match cli.command {
        Some(Commands::Init { path }) => init(&path.unwrap_or(config.store_path)),
        Some(Commands::Review) => {
            let store = JsonStore::open(&config.store_path)?;
            let mut service = ReviewService::new(store, SystemClock, config.questions);

            let stdin = io::stdin();
            let mut session = PromptSession::new(stdin.lock(), io::stdout());
            let outcome = service.execute(&mut session)?;

            println!("{}", format_outcome(&outcome));
            Ok(())
        }
        Some(Commands::List) => {
            let store = JsonStore::open(&config.store_path)?;
            let output = format_review_list(list_reviews(&store));

            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            Ok(())
        }
        None => {
            println!("review - Monthly self-review journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

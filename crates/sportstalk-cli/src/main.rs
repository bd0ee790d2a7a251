//! sportstalk CLI: chat with the sports answer service

use clap::{Parser, Subcommand};
use sportstalk_engine::{Config, Conversation, HttpAnswerService, ThemeName};
use sportstalk_tui::Theme;
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type CliResult = Result<(), Box<dyn Error>>;

/// Terminal chat client for the sports answer service
#[derive(Parser)]
#[command(name = "sportstalk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: .sportstalk/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Answer service base URL, overriding the config file
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the chat TUI (default when no command specified)
    Tui,

    /// Ask a single question and print the answer
    Ask {
        /// Question text
        #[arg(required = true)]
        question: Vec<String>,

        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the answer service is up
    Health,

    /// Write a default config file
    Init,
}

fn main() {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    if let Err(e) = init_logging(cli.log_file.as_deref(), cli.verbose, interactive) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let result = match &cli.command {
        None | Some(Commands::Tui) => cmd_tui(&cli),
        Some(Commands::Ask { question, json }) => cmd_ask(&cli, &question.join(" "), *json),
        Some(Commands::Health) => cmd_health(&cli),
        Some(Commands::Init) => cmd_init(&cli),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Set up tracing.
///
/// The TUI owns the terminal, so it only logs when a file is given.
fn init_logging(log_file: Option<&Path>, verbose: bool, interactive: bool) -> CliResult {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else if !interactive {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    if verbose {
        tracing::info!("Debug logging enabled");
    }
    Ok(())
}

fn config_path(cli: &Cli) -> Result<PathBuf, Box<dyn Error>> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Ok(Config::default_path(&std::env::current_dir()?)),
    }
}

/// Load the config file and apply flag and environment overrides.
fn resolve_config(cli: &Cli) -> Result<Config, Box<dyn Error>> {
    let path = config_path(cli)?;
    let mut config = Config::load_or_default(&path)?;
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.clone_from(endpoint);
    }
    if std::env::var_os("NO_COLOR").is_some() {
        config.theme = ThemeName::HighContrast;
    }
    tracing::debug!(path = %path.display(), endpoint = %config.endpoint, "config resolved");
    Ok(config)
}

fn runtime() -> Result<tokio::runtime::Runtime, Box<dyn Error>> {
    Ok(tokio::runtime::Runtime::new()?)
}

fn cmd_tui(cli: &Cli) -> CliResult {
    let config = resolve_config(cli)?;
    let service = Arc::new(HttpAnswerService::from_config(&config)?);
    let theme = Theme::from_name(config.theme);
    runtime()?.block_on(sportstalk_tui::run_tui(service, theme))
}

fn cmd_ask(cli: &Cli, question: &str, json: bool) -> CliResult {
    let config = resolve_config(cli)?;
    let service = HttpAnswerService::from_config(&config)?;
    let mut conversation = Conversation::new();

    let answer = runtime()?
        .block_on(conversation.submit(question, &service))?
        .map(|message| message.content.clone());
    let Some(answer) = answer else {
        return Err("question is empty".into());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(conversation.messages())?);
    } else {
        println!("{answer}");
    }
    Ok(())
}

fn cmd_health(cli: &Cli) -> CliResult {
    let config = resolve_config(cli)?;
    let service = HttpAnswerService::from_config(&config)?;
    let status = runtime()?.block_on(service.health())?;
    println!("{}: {status}", service.endpoint());
    Ok(())
}

fn cmd_init(cli: &Cli) -> CliResult {
    let path = config_path(cli)?;
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    let mut config = Config::default();
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.clone_from(endpoint);
    }
    config.save(&path)?;
    println!("Created {}", path.display());
    println!("Answer service: {}", config.endpoint);
    Ok(())
}

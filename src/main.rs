use clap::{Parser, Subcommand};

use quickchat::application::errors::ConfigError;
use quickchat::application::messaging::{CommandParser, SessionDispatcher};
use quickchat::domain::rules;
use quickchat::infrastructure::adapters::ConsoleAdapter;
use quickchat::infrastructure::config::Config;
use quickchat::Session;

#[derive(Parser)]
#[command(name = "quickchat")]
#[command(about = "A login and messaging simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Run,
    /// Check values against the format rules
    Validate {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        cell: Option<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_session(&cli.config),
        Commands::Validate {
            username,
            password,
            cell,
        } => {
            validate(username.as_deref(), password.as_deref(), cell.as_deref());
            Ok(())
        }
        Commands::Version => {
            println!("quickchat v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(config_path: &str) -> Config {
    if std::path::Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    }
}

fn run_session(config_path: &str) -> Result<(), ConfigError> {
    let config = load_config(config_path);
    config.validate()?;

    tracing::info!(
        "Starting {} (max length {}, recipient gate {})",
        config.app.name,
        config.messaging.max_length,
        if config.messaging.require_valid_recipient { "on" } else { "off" }
    );

    let session = Session::new(config.message_policy());
    let mut dispatcher = SessionDispatcher::new(session, ConsoleAdapter::new(&config.app.name))
        .with_parser(CommandParser::new(&config.app.prefix));
    dispatcher.run();
    Ok(())
}

fn validate(username: Option<&str>, password: Option<&str>, cell: Option<&str>) {
    let verdict = |ok: bool| if ok { "valid" } else { "invalid" };

    if let Some(username) = username {
        println!("username {}: {}", username, verdict(rules::check_username(username)));
    }
    if let Some(password) = password {
        println!("password: {}", verdict(rules::check_password_complexity(password)));
    }
    if let Some(cell) = cell {
        println!("cellphone {}: {}", cell, verdict(rules::check_cell_phone_number(cell)));
    }
}

fn init_config() -> Result<(), ConfigError> {
    let yaml = Config::default().to_yaml()?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}

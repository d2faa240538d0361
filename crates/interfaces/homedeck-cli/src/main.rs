use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use homedeck_app_core::TileClick;
use homedeck_cli::commands;
use homedeck_cli::console::ConsoleNotifier;
use homedeck_config::{
    ENV_API_BASE_URL, ENV_API_TOKEN, ENV_BOARD_PATH, ENV_DASHBOARD_ORIGIN,
};
use homedeck_core::{ControlCredentials, ServiceCommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Control API base URL
    #[arg(long, global = true, env = ENV_API_BASE_URL)]
    base_url: Option<String>,
    /// Bearer token for the control API
    #[arg(long, global = true, env = ENV_API_TOKEN, hide_env_values = true)]
    token: Option<String>,
    /// Board file (defaults to board.json in the config directory)
    #[arg(long, global = true, env = ENV_BOARD_PATH)]
    board: Option<PathBuf>,
    /// Dashboard URL whose scheme and host replace [dashboard_base] in external URLs
    #[arg(long, global = true, env = ENV_DASHBOARD_ORIGIN)]
    dashboard_origin: Option<String>,
    /// Do not wait for Enter after reporting an outcome
    #[arg(long, global = true)]
    no_wait: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the apps on the board
    Apps,
    /// Start a service
    Start { app: String },
    /// Stop a service
    Stop { app: String },
    /// Restart a service
    Restart { app: String },
    /// Click an app tile and print where it leads
    Open {
        app: String,
        #[arg(long, help = "Evaluate the click with edit mode enabled")]
        edit_mode: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let credentials = ControlCredentials::new(
        homedeck_config::base_url_or_default(cli.base_url),
        cli.token,
    );
    let dashboard_origin = homedeck_config::non_blank(cli.dashboard_origin);
    let board = commands::load_board(cli.board.as_deref())?;
    let notifier = ConsoleNotifier::new(!cli.no_wait);

    let (app, command) = match cli.command {
        Commands::Apps => {
            commands::cmd_apps(&board, dashboard_origin)?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Open { app, edit_mode } => {
            let click = commands::cmd_open(
                credentials,
                &board,
                &app,
                edit_mode,
                dashboard_origin,
                notifier,
            )?;
            match click {
                TileClick::Navigated(_) => {}
                TileClick::Ignored => println!("'{app}' is locked while edit mode is on"),
                TileClick::Inert => println!("'{app}' has no link to open"),
            }
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Start { app } => (app, ServiceCommand::Start),
        Commands::Stop { app } => (app, ServiceCommand::Stop),
        Commands::Restart { app } => (app, ServiceCommand::Restart),
    };

    let outcome = commands::cmd_service(credentials, &board, &app, command, notifier).await?;
    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

//! Movie Explorer - Netflix-style web browser for TMDB movie metadata
//!
//! # Usage
//!
//! ```bash
//! # Launch the web UI (http://localhost:8501)
//! movie-explorer
//!
//! # CLI mode (for automation)
//! movie-explorer search "blade runner"
//! movie-explorer info 78 --json
//! ```

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_explorer::cli::{Cli, Command, ExitCode, Output, ServeCmd};
use movie_explorer::{commands, server, Config, TmdbClient};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    // A missing .env file is normal; the key may come from the environment
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.is_cli_mode());

    let config = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => config.with_env(),
        Err(e) => {
            let output = Output::new(&cli);
            return output.error(format!("{:#}", e), ExitCode::Error).into();
        }
    };

    if cli.is_cli_mode() {
        run_cli(cli, &config).await.into()
    } else {
        let serve = match cli.command {
            Some(Command::Serve(cmd)) => cmd,
            _ => ServeCmd::default(),
        };
        run_server(serve, config).await.into()
    }
}

/// Log to stderr so JSON on stdout stays clean
fn init_tracing(cli_mode: bool) {
    let default_filter = if cli_mode {
        "movie_explorer=warn"
    } else {
        "movie_explorer=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, config: &Config) -> ExitCode {
    let output = Output::new(&cli);
    let client = TmdbClient::from_config(config);

    match cli.command {
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &client, &output).await,
        Some(Command::List(cmd)) => commands::list_cmd(cmd, &client, &output).await,
        Some(Command::Info(cmd)) => commands::info_cmd(cmd, &client, &output).await,
        Some(Command::Recommend(cmd)) => commands::recommend_cmd(cmd, &client, &output).await,
        // Serve and no-subcommand are handled by run_server
        Some(Command::Serve(_)) | None => ExitCode::Success,
    }
}

/// Launch the web UI
async fn run_server(cmd: ServeCmd, mut config: Config) -> ExitCode {
    if cmd.host.is_some() {
        config.host = cmd.host;
    }
    if cmd.port.is_some() {
        config.port = cmd.port;
    }

    let state = server::AppState::new(TmdbClient::from_config(&config));
    match server::serve(config.listen_addr(), state).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            error!("Server error: {:#}", e);
            ExitCode::Error
        }
    }
}

//! CLI - Command Line Interface for Movie Explorer
//!
//! Without a subcommand the web UI is launched. The other subcommands print
//! the same records the UI shows, as JSON, for scripting.
//!
//! # Examples
//!
//! ```bash
//! # Launch the web UI on http://localhost:8501
//! movie-explorer
//! movie-explorer serve --host 0.0.0.0 --port 8080
//!
//! # Query TMDB from the shell
//! movie-explorer search "the batman" --json
//! movie-explorer list top-rated --limit 5
//! movie-explorer info 550
//! movie-explorer recommend 550
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::IsTerminal;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::api::TmdbError;
use crate::models::Category;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// TMDB unreachable or returned an error
    NetworkError = 3,
    /// No API key configured, or the key was rejected
    MissingKey = 4,
    /// Movie not found
    NotFound = 5,
}

impl ExitCode {
    /// Exit code matching a TMDB failure
    pub fn for_error(err: &TmdbError) -> Self {
        match err {
            TmdbError::MissingKey | TmdbError::Unauthorized => ExitCode::MissingKey,
            TmdbError::NotFound => ExitCode::NotFound,
            _ => ExitCode::NetworkError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        i32::from(code as u8)
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// Movie Explorer - browse TMDB movies in your browser
///
/// Run without arguments to launch the web UI.
/// Use subcommands for scriptable lookups.
#[derive(Parser, Debug)]
#[command(
    name = "movie-explorer",
    version,
    about = "Netflix-style web browser for TMDB movie metadata",
    long_about = "Search movies, browse trending, popular and top rated lists, \
                  and open details with recommendations, all backed by TMDB.\n\n\
                  Requires TMDB_API_KEY in the environment or a .env file.\n\
                  Run without arguments to launch the web UI.",
    after_help = "EXAMPLES:\n\
                  movie-explorer                          Launch web UI on localhost:8501\n\
                  movie-explorer serve --port 8080        Launch on another port\n\
                  movie-explorer search \"fight club\"      Search from the shell\n\
                  movie-explorer info 550 --json          Movie details as JSON"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (omit to launch the web UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has a subcommand other than serve)
    pub fn is_cli_mode(&self) -> bool {
        !matches!(self.command, None | Some(Command::Serve(_)))
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Launch the web UI (default)
    Serve(ServeCmd),

    /// Search movies by title
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// Show a curated list (trending, popular, top-rated)
    #[command(visible_alias = "ls")]
    List(ListCmd),

    /// Get details for a movie
    #[command(visible_alias = "i")]
    Info(InfoCmd),

    /// Get TMDB's recommendations for a movie
    #[command(visible_alias = "rec")]
    Recommend(RecommendCmd),
}

/// Launch the web UI
#[derive(Args, Debug, Default)]
pub struct ServeCmd {
    /// Address to bind (default 127.0.0.1, use 0.0.0.0 for LAN access)
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to listen on (default 8501)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}

/// Search movies by query
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Search query (title, keywords)
    #[arg(required = true)]
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,

    /// Minimum release year
    #[arg(long)]
    pub year_from: Option<u16>,

    /// Maximum release year
    #[arg(long)]
    pub year_to: Option<u16>,
}

/// Show a curated list
#[derive(Args, Debug)]
pub struct ListCmd {
    /// Which list to show
    #[arg(value_enum, default_value = "trending")]
    pub category: CategoryArg,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

/// Curated list selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryArg {
    /// Trending today
    #[default]
    Trending,
    /// Popular right now
    Popular,
    /// All-time top rated
    #[value(alias = "top_rated")]
    TopRated,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Trending => Category::Trending,
            CategoryArg::Popular => Category::Popular,
            CategoryArg::TopRated => Category::TopRated,
        }
    }
}

/// Get detailed information about a movie
#[derive(Args, Debug)]
pub struct InfoCmd {
    /// TMDB movie ID (e.g., 550)
    #[arg(required = true)]
    pub id: String,
}

/// Get recommendations for a movie
#[derive(Args, Debug)]
pub struct RecommendCmd {
    /// TMDB movie ID (e.g., 550)
    #[arg(required = true)]
    pub id: String,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "10")]
    pub limit: usize,
}

/// Validate a TMDB movie ID (positive integer)
pub fn validate_tmdb_id(id: &str) -> Result<u64, &'static str> {
    match id.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err("Invalid TMDB ID (expected a positive number, e.g. 550)"),
    }
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }
}

impl JsonOutput<()> {
    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> Self {
        Self {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

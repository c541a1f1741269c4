//! Aoide: Spotify Playlist Analysis CLI Library
//!
//! This library backs a command-line client that authenticates against the
//! Spotify Web API using the OAuth2 client-credentials flow, imports a
//! playlist's track listing, and enriches tracks with audio-analysis feature
//! vectors from a secondary analysis service.
//!
//! # Modules
//!
//! - `analysis` - Track-analysis API client (per-track feature vectors)
//! - `cli` - Interactive command loop and terminal rendering
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by all API clients
//! - `provider` - Trait seams between the command loop and the API clients
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use aoide::{config, spotify};
//!
//! #[tokio::main]
//! async fn main() -> aoide::error::Result<()> {
//!     config::load_env();
//!     let cfg = config::Config::from_env()?;
//!     let mut client = spotify::playlist::SpotifyClient::new(&cfg)?;
//!     let playlist = client.get_playlist("37i9dQZF1DXcBWIGoYBM5M").await?;
//!     println!("{} tracks", playlist.tracks.len());
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod provider;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Importing playlist {}...", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Imported playlist with {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Reserved for unrecoverable
/// startup failures such as missing credentials; failures of individual
/// commands are reported with `warning!` so the command loop keeps running.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator for
/// recoverable issues: failed commands, partial results, or important
/// notices that don't require program termination.
///
/// # Example
///
/// ```
/// warning!("Failed to import playlist: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

//! # CLI Module
//!
//! This module provides the command-line interface layer for Aoide. It
//! implements the interactive read-eval-print loop, the closed command
//! set dispatched against the API clients, and the terminal rendering of
//! playlists and feature vectors.
//!
//! ## Command Set
//!
//! - `--import <id|link>` - Import a playlist by ID or share link
//! - `--print` - Print the tracks of the imported playlist
//! - `--vector` - Fetch audio feature vectors for every imported track
//! - `--help` - Show help information
//! - `--exit` - Exit the application
//!
//! The same commands are available as single-shot process flags; in that
//! mode they run once in the order import, vector, print.
//!
//! ## Session State
//!
//! The loop owns exactly one piece of state: the currently imported
//! playlist. `--print` and `--vector` operate on it and report a
//! user-visible message (never a crash) when nothing has been imported
//! yet. A successful `--import` replaces the previous playlist wholesale.
//!
//! ## Error Handling Philosophy
//!
//! Every error raised by the API clients is caught at the dispatch
//! boundary, converted to a concise message via the status macros, and
//! never terminates the loop. `--vector` applies partial-failure
//! semantics: per-track failures are collected and summarized while the
//! remaining tracks are still processed.

mod render;
mod repl;

pub use render::{print_help, print_tracks, print_vector_report};
pub use repl::{CommandLoop, CommandOutcome, TrackFailure, VectorReport, parse_command};

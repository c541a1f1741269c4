use std::io::Write;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncBufReadExt;

use crate::{
    cli::render,
    error::Result,
    info,
    provider::{FeatureProvider, PlaylistProvider},
    success,
    types::Playlist,
    warning,
};

/// Result of dispatching a single command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command completed (possibly with partial results).
    Ok,
    /// The command could not run or failed; the loop continues.
    Failed,
    /// The user asked to leave the loop.
    Exit,
}

/// One track whose feature fetch failed during `--vector`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackFailure {
    pub name: String,
    pub reason: String,
}

/// Summary of a `--vector` sweep over the current playlist.
#[derive(Debug, Clone)]
pub struct VectorReport {
    pub total: usize,
    pub fetched: usize,
    pub failures: Vec<TrackFailure>,
}

/// Splits a line of user input into a command and its arguments.
///
/// Returns `None` for empty or whitespace-only input.
pub fn parse_command(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;
    Some((command, parts.collect()))
}

/// The interactive command loop.
///
/// Generic over the two provider seams so tests can drive the loop with
/// stub implementations. State is the currently imported playlist;
/// commands that need one fail with a user-visible message until a
/// successful `--import` has run.
pub struct CommandLoop<P, F> {
    playlists: P,
    features: F,
    playlist: Option<Playlist>,
}

impl<P: PlaylistProvider, F: FeatureProvider> CommandLoop<P, F> {
    pub fn new(playlists: P, features: F) -> Self {
        CommandLoop {
            playlists,
            features,
            playlist: None,
        }
    }

    /// The currently imported playlist, if any.
    pub fn current(&self) -> Option<&Playlist> {
        self.playlist.as_ref()
    }

    /// Runs the read-eval-print loop until `--exit` or end of input.
    pub async fn run(&mut self) {
        println!("Welcome to Aoide Audio Analysis Tool!");
        println!("Type --help for available commands or --exit to quit.");
        println!();

        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            print!("aoide> ");
            let _ = std::io::stdout().flush();

            match lines.next_line().await {
                Ok(Some(line)) => {
                    let Some((command, args)) = parse_command(&line) else {
                        continue;
                    };
                    if self.dispatch(command, &args).await == CommandOutcome::Exit {
                        break;
                    }
                }
                // EOF on stdin ends the session like --exit
                Ok(None) | Err(_) => {
                    println!();
                    break;
                }
            }
        }
    }

    /// Executes one command against the session state.
    ///
    /// Unrecognized commands print a usage hint; no command ever
    /// terminates the loop except `--exit`.
    pub async fn dispatch(&mut self, command: &str, args: &[&str]) -> CommandOutcome {
        match command {
            "--help" => {
                render::print_help();
                CommandOutcome::Ok
            }
            "--import" => match args.first() {
                None => {
                    warning!("Please provide a Spotify playlist ID or share link.");
                    println!("Usage: --import <playlist>");
                    println!("Example: --import 37i9dQZF1DXcBWIGoYBM5M");
                    CommandOutcome::Failed
                }
                Some(&reference) => {
                    info!("Importing playlist: {}", reference);
                    let pb = spinner("Fetching playlist...");
                    let result = self.import(reference).await;
                    pb.finish_and_clear();
                    match result {
                        Ok(count) => {
                            success!("Successfully imported playlist with {} tracks!", count);
                            CommandOutcome::Ok
                        }
                        Err(e) => {
                            warning!("Failed to import playlist: {}", e);
                            CommandOutcome::Failed
                        }
                    }
                }
            },
            "--print" => match &self.playlist {
                None => {
                    warning!(
                        "No playlist imported. Use --import <playlist> to import a playlist first."
                    );
                    CommandOutcome::Failed
                }
                Some(playlist) => {
                    render::print_tracks(playlist);
                    CommandOutcome::Ok
                }
            },
            "--vector" => {
                if self.playlist.is_none() {
                    warning!(
                        "No playlist imported. Use --import <playlist> to import a playlist first."
                    );
                    return CommandOutcome::Failed;
                }
                let report = self.vector().await;
                match (&self.playlist, report) {
                    (Some(playlist), Some(report)) => {
                        render::print_vector_report(playlist, &report);
                        CommandOutcome::Ok
                    }
                    _ => CommandOutcome::Failed,
                }
            }
            "--exit" => {
                println!();
                println!("Thank you for using Aoide!");
                CommandOutcome::Exit
            }
            other => {
                warning!("Unknown command: {}", other);
                println!("Type --help for available commands.");
                CommandOutcome::Failed
            }
        }
    }

    /// Imports a playlist, replacing the current one on success.
    pub async fn import(&mut self, reference: &str) -> Result<usize> {
        let playlist = self.playlists.fetch_playlist(reference).await?;
        let count = playlist.tracks.len();
        self.playlist = Some(playlist);
        Ok(count)
    }

    /// Fetches feature vectors for every track of the current playlist.
    ///
    /// One request per track, strictly sequential. A failed fetch is
    /// recorded in the report and does not abort the sweep; successful
    /// fetches are attached to their tracks.
    pub async fn vector(&mut self) -> Option<VectorReport> {
        let playlist = self.playlist.as_mut()?;

        let total = playlist.tracks.len();
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );
        pb.set_message("Fetching audio features...");

        let mut failures = Vec::new();
        for track in playlist.tracks.iter_mut() {
            match self.features.fetch_features(&track.id).await {
                Ok(features) => track.features = Some(features),
                Err(e) => failures.push(TrackFailure {
                    name: track.name.clone(),
                    reason: e.to_string(),
                }),
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        Some(VectorReport {
            total,
            fetched: total - failures.len(),
            failures,
        })
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use async_trait::async_trait;

    use super::*;
    use crate::error::AoideError;
    use crate::types::{AudioFeatures, Track};

    fn test_track(id: &str, name: &str) -> Track {
        Track {
            id: id.to_string(),
            name: name.to_string(),
            artists: vec!["Artist".to_string()],
            album: "Album".to_string(),
            duration_ms: 180_000,
            features: None,
        }
    }

    fn test_playlist(id: &str, track_count: usize) -> Playlist {
        Playlist {
            id: id.to_string(),
            name: format!("Playlist {id}"),
            tracks: (1..=track_count)
                .map(|i| test_track(&format!("t{i}"), &format!("Track {i}")))
                .collect(),
        }
    }

    struct StubPlaylists {
        track_count: usize,
        calls: usize,
    }

    #[async_trait]
    impl PlaylistProvider for StubPlaylists {
        async fn fetch_playlist(&mut self, reference: &str) -> Result<Playlist> {
            self.calls += 1;
            Ok(test_playlist(reference, self.track_count))
        }
    }

    struct FailingPlaylists;

    #[async_trait]
    impl PlaylistProvider for FailingPlaylists {
        async fn fetch_playlist(&mut self, reference: &str) -> Result<Playlist> {
            Err(AoideError::NotFound(format!("playlist {reference}")))
        }
    }

    struct StubFeatures {
        fail_ids: HashSet<String>,
    }

    impl StubFeatures {
        fn reliable() -> Self {
            StubFeatures {
                fail_ids: HashSet::new(),
            }
        }

        fn failing_for(ids: &[&str]) -> Self {
            StubFeatures {
                fail_ids: ids.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    #[async_trait]
    impl FeatureProvider for StubFeatures {
        async fn fetch_features(&mut self, track_id: &str) -> Result<AudioFeatures> {
            if self.fail_ids.contains(track_id) {
                return Err(AoideError::RateLimited(format!("analysis of {track_id}")));
            }
            Ok(AudioFeatures {
                tempo: Some(120.0),
                energy: Some(0.8),
                danceability: Some(0.7),
                happiness: Some(0.6),
            })
        }
    }

    fn test_loop(
        track_count: usize,
        features: StubFeatures,
    ) -> CommandLoop<StubPlaylists, StubFeatures> {
        CommandLoop::new(
            StubPlaylists {
                track_count,
                calls: 0,
            },
            features,
        )
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_command("--import abc123"),
            Some(("--import", vec!["abc123"]))
        );
        assert_eq!(parse_command("--print"), Some(("--print", vec![])));
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   \t  "), None);
        assert_eq!(
            parse_command("  --import  a  b "),
            Some(("--import", vec!["a", "b"]))
        );
    }

    #[tokio::test]
    async fn test_print_before_import_fails_without_panic() {
        let mut cli = test_loop(3, StubFeatures::reliable());
        assert_eq!(cli.dispatch("--print", &[]).await, CommandOutcome::Failed);
        assert!(cli.current().is_none());
    }

    #[tokio::test]
    async fn test_vector_before_import_fails_without_panic() {
        let mut cli = test_loop(3, StubFeatures::reliable());
        assert_eq!(cli.dispatch("--vector", &[]).await, CommandOutcome::Failed);
    }

    #[tokio::test]
    async fn test_import_loads_playlist_and_prints_after() {
        let mut cli = test_loop(3, StubFeatures::reliable());
        assert_eq!(
            cli.dispatch("--import", &["abc123"]).await,
            CommandOutcome::Ok
        );
        let playlist = cli.current().unwrap();
        assert_eq!(playlist.id, "abc123");
        assert_eq!(playlist.tracks.len(), 3);
        assert_eq!(cli.dispatch("--print", &[]).await, CommandOutcome::Ok);
    }

    #[tokio::test]
    async fn test_reimport_replaces_playlist() {
        let mut cli = test_loop(2, StubFeatures::reliable());
        cli.dispatch("--import", &["first"]).await;
        cli.dispatch("--import", &["second"]).await;
        let playlist = cli.current().unwrap();
        assert_eq!(playlist.id, "second");
        assert_eq!(cli.playlists.calls, 2);
    }

    #[tokio::test]
    async fn test_failed_import_keeps_loop_alive() {
        let mut cli = CommandLoop::new(FailingPlaylists, StubFeatures::reliable());
        assert_eq!(
            cli.dispatch("--import", &["missing"]).await,
            CommandOutcome::Failed
        );
        assert!(cli.current().is_none());
    }

    #[tokio::test]
    async fn test_import_without_argument_fails() {
        let mut cli = test_loop(2, StubFeatures::reliable());
        assert_eq!(cli.dispatch("--import", &[]).await, CommandOutcome::Failed);
    }

    #[tokio::test]
    async fn test_vector_partial_failure_collects_and_continues() {
        let mut cli = test_loop(5, StubFeatures::failing_for(&["t2", "t4"]));
        cli.dispatch("--import", &["mix"]).await;
        // partial failure still counts as a completed command
        assert_eq!(cli.dispatch("--vector", &[]).await, CommandOutcome::Ok);

        let playlist = cli.current().unwrap();
        let populated = playlist
            .tracks
            .iter()
            .filter(|t| t.features.is_some())
            .count();
        assert_eq!(populated, 3);

        let report = {
            let mut cli2 = test_loop(5, StubFeatures::failing_for(&["t2", "t4"]));
            cli2.import("mix").await.unwrap();
            cli2.vector().await.unwrap()
        };
        assert_eq!(report.total, 5);
        assert_eq!(report.fetched, 3);
        assert_eq!(report.failures.len(), 2);
        let failed_names: Vec<&str> = report.failures.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(failed_names, vec!["Track 2", "Track 4"]);
    }

    #[tokio::test]
    async fn test_unknown_command_does_not_exit() {
        let mut cli = test_loop(1, StubFeatures::reliable());
        assert_eq!(
            cli.dispatch("--frobnicate", &[]).await,
            CommandOutcome::Failed
        );
        assert_eq!(cli.dispatch("--help", &[]).await, CommandOutcome::Ok);
    }

    #[tokio::test]
    async fn test_exit_outcome() {
        let mut cli = test_loop(1, StubFeatures::reliable());
        assert_eq!(cli.dispatch("--exit", &[]).await, CommandOutcome::Exit);
    }
}

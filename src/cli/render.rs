use tabled::Table;

use crate::{
    cli::repl::VectorReport,
    types::{FeatureTableRow, Playlist, TrackTableRow},
    utils, warning,
};

pub fn print_tracks(playlist: &Playlist) {
    if playlist.tracks.is_empty() {
        warning!("No tracks found in the current playlist.");
        return;
    }

    println!();
    println!(
        "Playlist: {} ({} tracks)",
        playlist.name,
        playlist.tracks.len()
    );

    let table_rows: Vec<TrackTableRow> = playlist
        .tracks
        .iter()
        .enumerate()
        .map(|(index, track)| TrackTableRow {
            position: index + 1,
            name: track.name.clone(),
            artist: track.primary_artist().to_string(),
            duration: utils::format_duration(track.duration_ms),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
    println!();
}

pub fn print_vector_report(playlist: &Playlist, report: &VectorReport) {
    let table_rows: Vec<FeatureTableRow> = playlist
        .tracks
        .iter()
        .filter_map(|track| {
            track.features.as_ref().map(|features| FeatureTableRow {
                name: track.name.clone(),
                tempo: utils::format_feature(features.tempo),
                energy: utils::format_feature(features.energy),
                danceability: utils::format_feature(features.danceability),
                happiness: utils::format_feature(features.happiness),
            })
        })
        .collect();

    if !table_rows.is_empty() {
        println!();
        let table = Table::new(table_rows);
        println!("{}", table);
        println!();
    }

    if report.failures.is_empty() {
        crate::success!("Fetched feature vectors for all {} tracks.", report.total);
    } else {
        warning!(
            "Fetched {} of {} feature vectors; {} track(s) failed:",
            report.fetched,
            report.total,
            report.failures.len()
        );
        for failure in &report.failures {
            println!("  - {}: {}", failure.name, failure.reason);
        }
    }
}

pub fn print_help() {
    println!();
    println!("Available Commands:");
    println!("-------------------");
    println!("  --import <playlist> - Import a Spotify playlist by ID or share link");
    println!("  --print             - Print track names and primary artist for the current playlist");
    println!("  --vector            - Fetch audio feature vectors for the imported tracks");
    println!("  --help              - Show help information");
    println!("  --exit              - Exit the application");
    println!();
    println!("Commands are case-sensitive. Use --exit or Ctrl+C to quit.");
    println!();
}

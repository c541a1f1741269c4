use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use aoide::{
    analysis::AnalysisClient,
    cli::{CommandLoop, CommandOutcome},
    config, error,
    spotify::playlist::SpotifyClient,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = env!("CARGO_PKG_NAME"),
  bin_name = env!("CARGO_PKG_NAME"),
  about = env!("CARGO_PKG_DESCRIPTION"),
  after_help = "Run without flags to start the interactive command loop.",
  styles = styles(),
)]
struct Cli {
    /// Import a Spotify playlist by ID or share link
    #[clap(long, value_name = "ID_OR_LINK")]
    import: Option<String>,

    /// Print the tracks of the imported playlist
    #[clap(long)]
    print: bool,

    /// Fetch audio feature vectors for every imported track
    #[clap(long)]
    vector: bool,
}

#[tokio::main]
async fn main() {
    config::load_env();

    let cli = Cli::parse();

    let cfg = match config::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    let spotify = match SpotifyClient::new(&cfg) {
        Ok(client) => client,
        Err(e) => error!("Cannot build Spotify client. Err: {}", e),
    };
    let analysis = match AnalysisClient::new(&cfg) {
        Ok(client) => client,
        Err(e) => error!("Cannot build analysis client. Err: {}", e),
    };

    let mut command_loop = CommandLoop::new(spotify, analysis);

    let single_shot = cli.import.is_some() || cli.print || cli.vector;
    if single_shot {
        let mut failed = false;

        if let Some(reference) = &cli.import {
            failed |= command_loop.dispatch("--import", &[reference.as_str()]).await
                == CommandOutcome::Failed;
        }
        if cli.vector {
            failed |= command_loop.dispatch("--vector", &[]).await == CommandOutcome::Failed;
        }
        if cli.print {
            failed |= command_loop.dispatch("--print", &[]).await == CommandOutcome::Failed;
        }

        if failed {
            std::process::exit(1);
        }
        return;
    }

    command_loop.run().await;
}

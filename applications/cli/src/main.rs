/// Digital Hitster - terminal front-end
use anyhow::Context;
use clap::{Parser, Subcommand};
use hitster_catalog::{validate_locators, CatalogClient, PlaylistSource};
use hitster_cli::{
    command::{Command, HELP},
    config::AppConfig,
    render,
};
use hitster_game::{GameSession, RandomPicker, TrackPicker};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hitster")]
#[command(about = "Digital Hitster: guess the year of random tracks", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog access token (overrides the config file)
    #[arg(long, global = true, env = "HITSTER_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Catalog API root (overrides the config file)
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive game
    Play {
        /// Playlist URLs, spotify:playlist: URIs or IDs
        playlists: Vec<String>,

        /// Seed the draw order for a replayable game
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Load playlists and report the pool without playing
    Check {
        /// Playlist URLs, spotify:playlist: URIs or IDs
        #[arg(required = true)]
        playlists: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they stay out of the game output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hitster=info,hitster_catalog=info,hitster_game=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(token) = cli.token {
        config.catalog.access_token = Some(token);
    }
    if let Some(api_base_url) = cli.api_base_url {
        config.catalog.api_base_url = api_base_url;
    }

    match cli.command {
        Commands::Play { playlists, seed } => {
            if let Some(seed) = seed {
                config.game.seed = Some(seed);
            }
            config.validate()?;
            play(&config, playlists).await?;
        }
        Commands::Check { playlists } => {
            config.validate()?;
            check(&config, playlists).await?;
        }
    }

    Ok(())
}

async fn check(config: &AppConfig, playlists: Vec<String>) -> anyhow::Result<()> {
    let locators = match validate_locators(&playlists) {
        Ok(locators) => locators,
        Err(issues) => anyhow::bail!(render::locator_issues(&issues)),
    };

    let client = CatalogClient::new(config.catalog_config())?;
    let batch = client.fetch_multiple_playlists(&locators).await;

    for playlist in &batch.playlists {
        println!("{} ({} tracks)", playlist.name, playlist.len());
    }
    for failure in &batch.failures {
        println!("{}", render::failure_line(failure));
    }
    println!("{} unique tracks", batch.tracks.len());

    Ok(())
}

async fn play(config: &AppConfig, playlists: Vec<String>) -> anyhow::Result<()> {
    let client = CatalogClient::new(config.catalog_config())?;
    let picker = match config.game.seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded draw order");
            RandomPicker::seeded(seed)
        }
        None => RandomPicker::from_entropy(),
    };
    let mut session = GameSession::with_picker(client, picker);

    if playlists.is_empty() {
        println!("Enter playlists with: load <playlist>...");
    } else {
        load(&mut session, &playlists).await;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Load(inputs) => load(&mut session, &inputs).await,
            Command::Draw => {
                if session.current_track().is_some() {
                    println!("Finish the current track first (reveal, then next)");
                    continue;
                }
                match session.draw_random_track() {
                    Some(track) => println!("{}", render::playing_line(&track)),
                    None => {
                        if let Some(message) = session.last_error() {
                            println!("{}", message);
                        } else {
                            println!("Load some playlists first");
                        }
                    }
                }
            }
            Command::Reveal => {
                session.reveal_current_track();
                match session.current_track() {
                    Some(track) => println!("{}", render::reveal_card(track)),
                    None => println!("Nothing is playing"),
                }
            }
            Command::Next => {
                session.next_track();
                println!("{}", render::stats_line(&session.stats()));
            }
            Command::Stats => println!("{}", render::stats_line(&session.stats())),
            Command::Reset => {
                session.reset();
                println!("Game reset. {}", render::stats_line(&session.stats()));
            }
            Command::Back => {
                session.unload();
                println!("Playlists cleared. Enter new ones with: load <playlist>...");
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }

        for event in session.drain_events() {
            tracing::debug!(?event, "Game event");
        }
    }

    Ok(())
}

async fn load<S, P>(session: &mut GameSession<S, P>, inputs: &[String])
where
    S: PlaylistSource,
    P: TrackPicker,
{
    let locators = match validate_locators(inputs) {
        Ok(locators) => locators,
        Err(issues) => {
            println!("{}", render::locator_issues(&issues));
            return;
        }
    };

    println!("Loading {} playlist(s)...", locators.len());
    match session.load(&locators).await {
        Ok(summary) => println!("{}", render::load_report(&summary)),
        Err(e) => {
            println!("{}", e);
            if let hitster_game::GameError::NoTracksFound { failures } = &e {
                for failure in failures {
                    println!("{}", render::failure_line(failure));
                }
            }
        }
    }
}

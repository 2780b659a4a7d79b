use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use elimination_wheel::clock::MonotonicClock;
use elimination_wheel::config::{GameConfig, HostConfig};
use elimination_wheel::handlers::{handle_command, handle_frame};
use elimination_wheel::protocol::{Command, Event};
use elimination_wheel::random::{RandomSource, RngSource};
use elimination_wheel::state::GameSession;
use elimination_wheel::types::GamePhase;

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Logs go to stderr so stdout stays a clean event stream
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "elimination_wheel=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let game_config = GameConfig::from_env();
    let host_config = HostConfig::from_env();

    let rng: Box<dyn RandomSource> = match host_config.seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            Box::new(RngSource::seeded(seed))
        }
        None => Box::new(RngSource::thread()),
    };
    let mut session =
        GameSession::with_sources(game_config, Box::new(MonotonicClock::default()), rng);

    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        tracing::info!("No participants on the command line, reading one per line from stdin");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => names.push(line),
                Ok(None) => break,
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    }

    for name in names {
        emit(handle_command(Command::AddParticipant { name }, &mut session));
    }

    match handle_command(Command::Start, &mut session) {
        Some(Event::Declined { code, msg }) => {
            emit(Some(Event::Declined { code, msg }));
            std::process::exit(1);
        }
        event => emit(event),
    }

    let mut frames = tokio::time::interval(Duration::from_millis(host_config.frame_interval_ms));
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while session.phase() == &GamePhase::Playing {
        match handle_command(Command::Spin, &mut session) {
            Some(Event::Declined { code, msg }) => {
                tracing::error!("Spin declined mid-game ({}): {}", code, msg);
                std::process::exit(1);
            }
            event => emit(event),
        }

        loop {
            frames.tick().await;
            if let Some(event) = handle_frame(&mut session) {
                emit(Some(event));
                break;
            }
        }
    }

    if let Some(winner) = session.winner() {
        tracing::info!("Winner: {}", winner);
    }
}

/// Print an event as one JSON line on stdout
fn emit(event: Option<Event>) {
    let Some(event) = event else { return };
    match serde_json::to_string(&event) {
        Ok(line) => println!("{}", line),
        Err(e) => tracing::error!("Failed to serialize event: {}", e),
    }
}

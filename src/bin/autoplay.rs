//! Plays 2048 games with a random-move policy.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --features cli --bin autoplay -- --games 10 --seed 7
//!
//! # Larger board, settings from TOML, coloured final boards
//! cargo run --release --features cli --bin autoplay -- --config board.toml --color
//!
//! # Per-move tracing
//! RUST_LOG=rust_2048=trace cargo run --features cli --bin autoplay -- --games 1
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rust_2048::{ColorScheme, GameConfig, GameRng, Session, TextRenderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "autoplay")]
#[command(about = "Play 2048 games with a random-move policy")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value = "1")]
    games: usize,

    /// Base seed; game i uses seed + i
    #[arg(long, default_value = "42")]
    seed: u64,

    /// TOML file with board settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board edge length (overrides the config file)
    #[arg(long)]
    size: Option<usize>,

    /// Colour scheme: original, blackwhite, bluered
    #[arg(long)]
    scheme: Option<ColorScheme>,

    /// Print boards with ANSI colours
    #[arg(long, default_value = "false")]
    color: bool,
}

fn load_config(args: &Args) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            GameConfig::from_toml_str(&content)?
        }
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config = config.with_size(size);
    }
    if let Some(scheme) = args.scheme {
        config = config.with_scheme(scheme);
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let renderer = if args.color {
        TextRenderer::colored()
    } else {
        TextRenderer::plain()
    };

    let mut best_score = 0u64;
    let mut best_tile = 0u32;
    let mut total_score = 0u64;

    for game in 0..args.games {
        let seed = args.seed.wrapping_add(game as u64);
        let mut session = Session::with_seed(config.clone(), seed)?;
        let mut policy = GameRng::new(seed).for_context("policy");

        while !session.is_game_over() {
            let legal = session.legal_moves();
            let Some(&direction) = policy.choose(&legal) else {
                break;
            };
            session.apply_move(direction);
        }

        println!("{}", renderer.render_session(&session));
        tracing::info!(
            game,
            seed,
            score = session.current_score(),
            moves = session.moves_made(),
            highest_tile = session.highest_tile(),
            "finished"
        );

        total_score += session.current_score();
        best_score = best_score.max(session.current_score());
        best_tile = best_tile.max(session.highest_tile());
    }

    if args.games > 0 {
        tracing::info!(
            games = args.games,
            best_score,
            best_tile,
            mean_score = total_score as f64 / args.games as f64,
            "summary"
        );
    }

    Ok(())
}

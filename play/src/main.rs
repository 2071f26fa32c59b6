#![warn(future_incompatible, rust_2018_compatibility, rust_2018_idioms, unused)]
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(clippy::all)]

use anyhow::{bail, Context, Result};
use brain::Brain;
use clap::{Parser, ValueEnum};
use common::halfway_house::FieldInfo;
use log::info;
use std::path::PathBuf;

use crate::{decisions::Decisions, recording::Recording};

mod decisions;
mod logging;
mod recording;

/// Replay a recorded match through a strategy, one tick at a time
#[derive(Parser)]
#[command(name = "play")]
#[command(version)]
struct Cli {
    /// CSV recording of tick packets
    #[arg(short, long)]
    recording: PathBuf,

    /// Which strategy to run
    #[arg(short, long, value_enum, default_value_t = StrategyName::Example2)]
    strategy: StrategyName,

    /// Which car in the recording we control
    #[arg(short, long, default_value = "0")]
    player_index: usize,

    /// Write each tick's decisions to this CSV file
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG still wins)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum StrategyName {
    #[value(name = "example")]
    Example,
    #[value(name = "example2")]
    Example2,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut recording = Recording::open(&cli.recording)?;
    if cli.player_index >= recording.num_players() {
        bail!(
            "player index {} is out of range; the recording has {} players",
            cli.player_index,
            recording.num_players(),
        );
    }

    let mut brain = match cli.strategy {
        StrategyName::Example => Brain::example(),
        StrategyName::Example2 => Brain::example2(),
    };
    brain.set_player_index(cli.player_index);
    info!(
        "replaying {} as player {} with {}",
        cli.recording.display(),
        cli.player_index,
        brain.strategy_name(),
    );

    let mut decisions = match &cli.out {
        Some(path) => Some(
            Decisions::create(path)
                .with_context(|| format!("could not create {}", path.display()))?,
        ),
        None => None,
    };

    // Recordings come from the standard arena.
    let field = FieldInfo::soccar();

    let mut ticks = 0;
    for packet in recording.packets() {
        let packet = packet?;
        logging::set_game_time(packet.GameInfo.TimeSeconds);

        let input = brain.tick(&field, &packet);
        if let Some(decisions) = &mut decisions {
            decisions
                .write(packet.GameInfo.TimeSeconds, &brain, &input)
                .context("could not write decisions")?;
        }
        ticks += 1;
    }

    if let Some(decisions) = &mut decisions {
        decisions.flush().context("could not write decisions")?;
    }
    info!("replayed {} ticks", ticks);
    Ok(())
}

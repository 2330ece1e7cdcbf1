//! Command-line argument definitions.

use cardtable_engine::betting::TurnRotation;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cardtable",
    version,
    about = "Deal a 52-card deck to 2-4 seats and run the betting table"
)]
pub struct CardtableCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal 13 cards to each seat and show who opens
    Deal {
        /// Number of seats (2-4); defaults to the configured value
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=4))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Seat players at a table and take betting actions from stdin
    Play {
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=4))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
        /// Append every applied action to this JSONL file
        #[arg(long)]
        log: Option<PathBuf>,
        /// Turn order after each action: seat-modulo or active-order
        #[arg(long)]
        rotation: Option<TurnRotation>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

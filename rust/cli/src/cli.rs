//! Command-line definitions for the `holdem` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Texas Hold'em table engine: play against bots, simulate, evaluate hands"
)]
pub struct HoldemCli {
    /// Log engine events at debug level on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play at a table against bots, reading actions from stdin
    Play {
        /// Seats at the table including yours (2-10)
        #[arg(long)]
        players: Option<usize>,
        #[arg(long, default_value_t = 1)]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Opponent strategy: baseline or random
        #[arg(long, default_value = "baseline")]
        bot: String,
    },
    /// Let bots play each other and report the results
    Sim {
        #[arg(long)]
        hands: u32,
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Append a JSONL hand history to this file
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, default_value = "baseline")]
        bot: String,
    },
    /// Deal one hand without betting and show every player's best hand
    Deal {
        #[arg(long, default_value_t = 2)]
        players: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate 5 to 7 cards, e.g. `holdem eval As Ks Qs Js Ts`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

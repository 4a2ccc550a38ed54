use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Round;
use crate::player::{PlayerAction, PlayerId};

/// What a logged chip movement was: a forced blind or a player decision.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    SmallBlind,
    BigBlind,
    Player(PlayerAction),
}

/// Records a single accepted action together with the pot it left behind.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Hand number within the game
    pub hand: u32,
    /// The betting round when this action occurred
    pub round: Round,
    pub player_id: PlayerId,
    pub kind: ActionKind,
    /// Chips moved from the stack by this action
    pub amount: u32,
    /// Pot size after the action
    pub pot: u32,
}

/// Complete record of a poker hand including all actions, board cards, and outcome.
/// Serialized to JSONL format for hand history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Identifier of the form `<game>-NNNNNN`
    pub hand_id: String,
    /// RNG seed of the game, when one was configured
    pub seed: Option<u64>,
    /// Chronological list of blinds and player actions
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    /// Hand result summary (winners and amounts)
    pub result: Option<String>,
    /// Timestamp when the hand was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Showdown information if hand went to showdown
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

pub fn format_hand_id(prefix: &str, seq: u32) -> String {
    format!("{}-{:06}", prefix, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends hand records to a JSON-lines file.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    written: u32,
}

/// Information about the showdown phase when hands are revealed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Players who won at least one pot
    pub winners: Vec<PlayerId>,
    /// Optional notes about the showdown (e.g. "split pot")
    #[serde(default)]
    pub notes: Option<String>,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            written: 0,
        })
    }

    /// Logger that serializes records but discards them.
    pub fn sink() -> Self {
        Self {
            writer: None,
            written: 0,
        }
    }

    pub fn written(&self) -> u32 {
        self.written
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        self.written += 1;
        Ok(())
    }
}

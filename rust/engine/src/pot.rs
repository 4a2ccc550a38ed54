use serde::{Deserialize, Serialize};

use crate::player::{Player, PlayerId};

/// One layer of the pot and the players who can win it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: u32,
    /// Eligible players in seat order
    pub eligible: Vec<PlayerId>,
}

/// Splits everything committed this hand into a main pot and side pots.
///
/// Layers are cut at each distinct contribution of a player still in the
/// hand. Folded players pay into every layer they reached but are never
/// eligible; chips they put in above the highest live contribution go to the
/// last pot.
pub fn compute_side_pots(players: &[Player]) -> Vec<SidePot> {
    let mut levels: Vec<u32> = players
        .iter()
        .filter(|p| p.in_hand() && p.total_bet() > 0)
        .map(|p| p.total_bet())
        .collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots = Vec::with_capacity(levels.len());
    let mut prev = 0u32;
    for &level in &levels {
        let amount: u32 = players
            .iter()
            .map(|p| p.total_bet().min(level) - p.total_bet().min(prev))
            .sum();
        let eligible = players
            .iter()
            .filter(|p| p.in_hand() && p.total_bet() >= level)
            .map(|p| p.id().to_string())
            .collect();
        pots.push(SidePot { amount, eligible });
        prev = level;
    }

    let leftover: u32 = players
        .iter()
        .map(|p| p.total_bet().saturating_sub(prev))
        .sum();
    if leftover > 0 {
        match pots.last_mut() {
            Some(last) => last.amount += leftover,
            None => pots.push(SidePot {
                amount: leftover,
                eligible: players
                    .iter()
                    .filter(|p| p.in_hand())
                    .map(|p| p.id().to_string())
                    .collect(),
            }),
        }
    }
    pots
}

/// Divides `amount` evenly between `winners`.
///
/// `winners` must already be ordered starting from the first seat after the
/// dealer button; the odd chips go one each to the earliest winners.
pub fn split_pot(amount: u32, winners: &[PlayerId]) -> Vec<(PlayerId, u32)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let n = winners.len() as u32;
    let share = amount / n;
    let remainder = (amount % n) as usize;
    winners
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let extra = u32::from(i < remainder);
            (id.clone(), share + extra)
        })
        .collect()
}

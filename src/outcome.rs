use serde::{Deserialize, Serialize};

use crate::card::Rank;
use crate::hand::{hand_value, is_blackjack};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Push,
    Pending,
}

impl Outcome {
    /// Whether the outcome settles the hand and may go into the ledger.
    pub fn is_final(self) -> bool {
        !matches!(self, Outcome::Pending)
    }
}

/// Settles a finished hand from the player's point of view.
///
/// Busts are checked before naturals: a busted player loses even when the
/// dealer also busts.
pub fn resolve(player: &[Rank], dealer: &[Rank]) -> Outcome {
    if player.is_empty() || dealer.is_empty() {
        return Outcome::Pending;
    }

    let (player_total, _) = hand_value(player);
    let (dealer_total, _) = hand_value(dealer);

    if player_total > 21 {
        return Outcome::Lose;
    }
    if dealer_total > 21 {
        return Outcome::Win;
    }

    match (is_blackjack(player), is_blackjack(dealer)) {
        (true, true) => return Outcome::Push,
        (true, false) => return Outcome::Win,
        (false, true) => return Outcome::Lose,
        (false, false) => {}
    }

    match player_total.cmp(&dealer_total) {
        std::cmp::Ordering::Greater => Outcome::Win,
        std::cmp::Ordering::Less => Outcome::Lose,
        std::cmp::Ordering::Equal => Outcome::Push,
    }
}

use log::debug;
use serde::{Deserialize, Serialize};

use crate::card::Rank;

pub const CARDS_PER_DECK: f64 = 52.0;
pub const MIN_DECKS_REMAINING: f64 = 0.5;

/// Hi-Lo count of everything observed since the last shoe reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountState {
    pub running_count: i32,
    pub cards_seen: usize,
    pub decks_in_shoe: u8,
    pub decks_remaining: f64,
    pub true_count: f64,
}

impl CountState {
    pub fn fresh(decks_in_shoe: u8) -> Self {
        update(&[], decks_in_shoe)
    }
}

/// Recomputes the count from the full card history of the shoe.
///
/// Decks remaining never drops below half a deck, so the true count is
/// always defined.
pub fn update(cards_seen: &[Rank], decks_in_shoe: u8) -> CountState {
    let running_count: i32 = cards_seen.iter().map(|card| card.hi_lo()).sum();
    let decks_remaining =
        (decks_in_shoe as f64 - cards_seen.len() as f64 / CARDS_PER_DECK).max(MIN_DECKS_REMAINING);
    let true_count = running_count as f64 / decks_remaining;

    let state = CountState {
        running_count,
        cards_seen: cards_seen.len(),
        decks_in_shoe,
        decks_remaining: round2(decks_remaining),
        true_count: round2(true_count),
    };
    debug!(
        "count: rc {} tc {:.2} over {} cards ({} decks left)",
        state.running_count, state.true_count, state.cards_seen, state.decks_remaining
    );
    state
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Favorable,
    Moderate,
    Neutral,
    Unfavorable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advantage {
    pub label: &'static str,
    pub severity: Severity,
}

/// Coarse betting advantage for a true count.
pub fn advantage(true_count: f64) -> Advantage {
    let (label, severity) = if true_count >= 3.0 {
        ("High", Severity::Favorable)
    } else if true_count >= 1.0 {
        ("Medium", Severity::Moderate)
    } else if true_count <= -2.0 {
        ("Very Low", Severity::Unfavorable)
    } else {
        ("Neutral", Severity::Neutral)
    };
    Advantage { label, severity }
}

/// Position of the advantage meter, two steps per true count point, on a
/// -10..=10 scale.
pub fn advantage_meter(true_count: f64) -> i8 {
    ((true_count * 2.0).trunc() as i32).clamp(-10, 10) as i8
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn test_empty_shoe() {
        let state = update(&[], 6);
        assert_eq!(state.running_count, 0);
        assert_eq!(state.true_count, 0.0);
        assert_eq!(state.decks_remaining, 6.0);
        assert_eq!(state.cards_seen, 0);
        assert_eq!(CountState::fresh(6), state);
    }

    #[test]
    fn test_mixed_cards_cancel() {
        let state = update(&[Two, Three, Ten, Ace], 1);
        assert_eq!(state.running_count, 0);
        assert_eq!(state.decks_remaining, 0.92);
        assert_eq!(state.true_count, 0.0);
    }

    #[test]
    fn test_true_count_uses_decks_remaining() {
        // 26 low cards from two decks: rc 26, 1.5 decks left
        let cards = vec![Five; 26];
        let state = update(&cards, 2);
        assert_eq!(state.running_count, 26);
        assert_eq!(state.decks_remaining, 1.5);
        assert_eq!(state.true_count, 17.33);
    }

    #[test]
    fn test_depleted_shoe_floors_at_half_deck() {
        let cards: Vec<Rank> = Rank::ALL.iter().flat_map(|&r| [r; 4]).collect();
        assert_eq!(cards.len(), 52);
        let state = update(&cards, 1);
        assert_eq!(state.decks_remaining, 0.5);
        assert_eq!(state.running_count, 0);

        let overdrawn = vec![King; 60];
        let state = update(&overdrawn, 1);
        assert_eq!(state.decks_remaining, 0.5);
        assert_eq!(state.true_count, -120.0);
    }

    #[test]
    fn test_update_is_idempotent() {
        let cards = [Ten, Four, Ace, Six, Six];
        assert_eq!(update(&cards, 6), update(&cards, 6));
    }

    #[test]
    fn test_advantage_thresholds() {
        assert_eq!(advantage(3.0).label, "High");
        assert_eq!(advantage(3.0).severity, Severity::Favorable);
        assert_eq!(advantage(2.99).label, "Medium");
        assert_eq!(advantage(1.0).label, "Medium");
        assert_eq!(advantage(0.99).label, "Neutral");
        assert_eq!(advantage(-1.99).label, "Neutral");
        assert_eq!(advantage(-2.0).label, "Very Low");
        assert_eq!(advantage(-2.0).severity, Severity::Unfavorable);
    }

    #[test]
    fn test_advantage_meter() {
        assert_eq!(advantage_meter(0.0), 0);
        assert_eq!(advantage_meter(1.7), 3);
        assert_eq!(advantage_meter(-1.7), -3);
        assert_eq!(advantage_meter(12.0), 10);
        assert_eq!(advantage_meter(-40.0), -10);
    }
}

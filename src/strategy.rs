use log::debug;
use serde::{Deserialize, Serialize};

use crate::card::Rank;
use crate::hand::hand_value;

pub const NEED_CARDS: &str = "Need cards to play";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Action {
    Hit,
    Stand,
    Double,
    Split,
    Surrender,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Hit => "Hit",
            Action::Stand => "Stand",
            Action::Double => "Double",
            Action::Split => "Split",
            Action::Surrender => "Surrender",
        }
    }
}

/// A play suggestion. `action` is `None` when there is nothing to advise on
/// yet; the rationale then says what input is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub action: Option<Action>,
    pub rationale: String,
}

impl Recommendation {
    pub fn unavailable(reason: &str) -> Self {
        Recommendation {
            action: None,
            rationale: reason.to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.action.is_some()
    }
}

/// Player totals `player.0..=player.1` against dealer values
/// `dealer.0..=dealer.1` (Ace is 11).
struct Band {
    player: (u32, u32),
    dealer: (u8, u8),
    action: Action,
}

const fn band(player: (u32, u32), dealer: (u8, u8), action: Action) -> Band {
    Band { player, dealer, action }
}

const ANY_DEALER: (u8, u8) = (2, 11);

const HARD_BANDS: &[Band] = &[
    band((5, 11), ANY_DEALER, Action::Hit),
    band((12, 12), (4, 6), Action::Stand),
    band((12, 12), (2, 3), Action::Hit),
    band((12, 12), (7, 11), Action::Hit),
    band((13, 16), (2, 6), Action::Stand),
    band((13, 16), (7, 11), Action::Hit),
    band((17, 21), ANY_DEALER, Action::Stand),
];

const SOFT_BANDS: &[Band] = &[
    band((13, 17), (2, 6), Action::Double),
    band((13, 17), (7, 11), Action::Hit),
    band((18, 18), (2, 2), Action::Stand),
    band((18, 18), (3, 6), Action::Double),
    band((18, 18), (7, 8), Action::Stand),
    band((18, 18), (9, 11), Action::Hit),
    band((19, 21), ANY_DEALER, Action::Stand),
];

/// Count-based index plays for hard hands, applied over the base table.
struct Deviation {
    total: u32,
    dealer: u8,
    min_true_count: f64,
    from: Action,
    to: Action,
}

const HARD_DEVIATIONS: &[Deviation] = &[
    Deviation { total: 16, dealer: 10, min_true_count: 2.0, from: Action::Hit, to: Action::Stand },
    Deviation { total: 15, dealer: 10, min_true_count: 2.0, from: Action::Hit, to: Action::Stand },
];

/// Basic-strategy play for `player` against `dealer_up_card`.
///
/// Pairs are played by their total: no split bands exist, so `can_split`
/// never produces [`Action::Split`].
pub fn recommend(
    player: &[Rank],
    dealer_up_card: Rank,
    true_count: f64,
    can_double: bool,
    can_split: bool,
) -> Recommendation {
    if player.is_empty() {
        return Recommendation::unavailable(NEED_CARDS);
    }

    let (total, is_soft) = hand_value(player);
    let dealer = dealer_up_card.value();
    let table = if is_soft { SOFT_BANDS } else { HARD_BANDS };

    let recommendation = match lookup_band(table, total, dealer, can_double) {
        Some(base) => {
            let kind = if is_soft { "Soft" } else { "Hard" };
            let deviation = if is_soft {
                None
            } else {
                find_deviation(total, dealer, true_count, base)
            };
            match deviation {
                Some(to) => Recommendation {
                    action: Some(to),
                    rationale: format!(
                        "{kind} {total} vs {}: {} (true count {true_count:.2} deviation)",
                        dealer_label(dealer),
                        to.label()
                    ),
                },
                None => Recommendation {
                    action: Some(base),
                    rationale: format!("{kind} {total} vs {}: {}", dealer_label(dealer), base.label()),
                },
            }
        }
        None => default_action(total),
    };

    debug!(
        "recommend {:?} vs {} (tc {:.2}, double {}, split {}) -> {:?}",
        player, dealer_up_card, true_count, can_double, can_split, recommendation.action
    );
    recommendation
}

fn lookup_band(table: &[Band], total: u32, dealer: u8, can_double: bool) -> Option<Action> {
    let band = table.iter().find(|b| {
        (b.player.0..=b.player.1).contains(&total) && (b.dealer.0..=b.dealer.1).contains(&dealer)
    })?;
    let mut action = band.action;
    if matches!(action, Action::Double) && !can_double {
        action = Action::Hit;
    }
    Some(action)
}

fn find_deviation(total: u32, dealer: u8, true_count: f64, base: Action) -> Option<Action> {
    HARD_DEVIATIONS
        .iter()
        .find(|d| d.total == total && d.dealer == dealer && d.from == base && true_count >= d.min_true_count)
        .map(|d| d.to)
}

fn default_action(total: u32) -> Recommendation {
    if total >= 17 {
        Recommendation {
            action: Some(Action::Stand),
            rationale: "High total, stand".to_string(),
        }
    } else {
        Recommendation {
            action: Some(Action::Hit),
            rationale: "Draw a card".to_string(),
        }
    }
}

fn dealer_label(value: u8) -> String {
    if value == 11 {
        "A".to_string()
    } else {
        value.to_string()
    }
}

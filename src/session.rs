use log::info;
use serde::Serialize;

use crate::{
    card::Rank,
    config::{validate_decks, ShoeConfig},
    counter::{self, Advantage, CountState},
    error::CoreError,
    hand::{hand_value, DealerHand, Hand},
    ledger::{SessionLedger, SessionStats},
    outcome::{resolve, Outcome},
    strategy::{recommend, Recommendation},
};

pub const SELECT_CARDS: &str = "Select your cards and the dealer card";

/// Everything the shell needs to render after a state change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub player_cards: Vec<Rank>,
    pub player_total: u32,
    pub is_soft: bool,
    pub dealer_up_card: Option<Rank>,
    pub table_cards: usize,
    pub count: CountState,
    pub advantage: Advantage,
    pub advantage_meter: i8,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandSummary {
    pub outcome: Outcome,
    pub player_total: u32,
    pub dealer_total: u32,
    pub stats: SessionStats,
}

/// One shoe's worth of state: cards seen on the table, the hand in
/// progress, and the win/loss ledger.
#[derive(Debug, Clone)]
pub struct Session {
    config: ShoeConfig,
    table_cards: Vec<Rank>,
    player: Hand,
    dealer: DealerHand,
    ledger: SessionLedger,
}

impl Session {
    pub fn new(config: ShoeConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Session {
            config,
            table_cards: Vec::new(),
            player: Hand::new(),
            dealer: DealerHand::default(),
            ledger: SessionLedger::new(),
        })
    }

    pub fn config(&self) -> &ShoeConfig {
        &self.config
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    pub fn table_cards(&self) -> &[Rank] {
        &self.table_cards
    }

    pub fn ledger(&self) -> &SessionLedger {
        &self.ledger
    }

    /// How many copies of one rank a group may hold: four per deck.
    pub fn max_per_rank(&self) -> usize {
        self.config.num_decks as usize * 4
    }

    pub fn mark_player_card(&mut self, card: Rank) -> bool {
        if self.player.count_of(card) >= self.max_per_rank() {
            return false;
        }
        self.player.push(card);
        true
    }

    pub fn unmark_player_card(&mut self, card: Rank) -> bool {
        self.player.remove(card)
    }

    pub fn mark_table_card(&mut self, card: Rank) -> bool {
        if self.table_count_of(card) >= self.max_per_rank() {
            return false;
        }
        self.table_cards.push(card);
        true
    }

    pub fn unmark_table_card(&mut self, card: Rank) -> bool {
        match self.table_cards.iter().position(|&c| c == card) {
            Some(pos) => {
                self.table_cards.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn set_dealer_up_card(&mut self, card: Option<Rank>) {
        self.dealer.up_card = card;
    }

    pub fn set_dealer_hole_card(&mut self, card: Option<Rank>) {
        self.dealer.hole_card = card;
    }

    /// Changes the shoe size without clearing what has been seen.
    pub fn set_decks(&mut self, num_decks: u8) -> Result<(), CoreError> {
        validate_decks(num_decks)?;
        self.config.num_decks = num_decks;
        Ok(())
    }

    /// Cards that feed the count. The hole card only counts once the hand
    /// is finished.
    pub fn cards_seen(&self) -> Vec<Rank> {
        self.player
            .cards()
            .iter()
            .chain(&self.table_cards)
            .copied()
            .chain(self.dealer.up_card)
            .collect()
    }

    pub fn count(&self) -> CountState {
        counter::update(&self.cards_seen(), self.config.num_decks)
    }

    pub fn analysis(&self) -> Analysis {
        let count = self.count();
        let (player_total, is_soft) = hand_value(self.player.cards());

        let recommendation = match self.dealer.up_card {
            Some(up_card) if !self.player.is_empty() => recommend(
                self.player.cards(),
                up_card,
                count.true_count,
                self.config.can_double,
                self.config.can_split,
            ),
            _ => Recommendation::unavailable(SELECT_CARDS),
        };

        Analysis {
            player_cards: self.player.cards().to_vec(),
            player_total,
            is_soft,
            dealer_up_card: self.dealer.up_card,
            table_cards: self.table_cards.len(),
            count,
            advantage: counter::advantage(count.true_count),
            advantage_meter: counter::advantage_meter(count.true_count),
            recommendation,
        }
    }

    /// Settles the hand against the dealer's two cards, records it, and
    /// moves every revealed card onto the table for counting. The table
    /// keeps its per-rank cap, so copies beyond it are dropped.
    pub fn finish_hand(&mut self) -> Result<HandSummary, CoreError> {
        if self.player.is_empty() {
            return Err(CoreError::MissingPlayerCards);
        }
        let up_card = self.dealer.up_card.ok_or(CoreError::MissingDealerUpCard)?;
        let hole_card = self.dealer.hole_card.ok_or(CoreError::MissingDealerHoleCard)?;

        let dealer_cards = [up_card, hole_card];
        let outcome = resolve(self.player.cards(), &dealer_cards);
        self.ledger.record(outcome)?;

        let summary = HandSummary {
            outcome,
            player_total: self.player.total(),
            dealer_total: hand_value(&dealer_cards).0,
            stats: self.ledger.into(),
        };

        for card in self.player.take().into_iter().chain(dealer_cards) {
            self.mark_table_card(card);
        }
        self.dealer.clear();

        info!(
            "hand finished: {:?} ({} vs {}), {} hands this shoe",
            summary.outcome, summary.player_total, summary.dealer_total, self.ledger.total_hands
        );
        Ok(summary)
    }

    /// Clears the hand in progress; the count and ledger carry on.
    pub fn reset_hand(&mut self) {
        self.player.clear();
        self.dealer.clear();
    }

    /// New shoe: the count starts over and so do the session statistics.
    pub fn reset_shoe(&mut self) {
        self.reset_hand();
        self.table_cards.clear();
        self.ledger.reset();
        info!("new shoe of {} decks", self.config.num_decks);
    }

    pub fn stats(&self) -> SessionStats {
        self.ledger.into()
    }

    fn table_count_of(&self, card: Rank) -> usize {
        self.table_cards.iter().filter(|&&c| c == card).count()
    }
}

impl Default for Session {
    fn default() -> Self {
        Session {
            config: ShoeConfig::default(),
            table_cards: Vec::new(),
            player: Hand::new(),
            dealer: DealerHand::default(),
            ledger: SessionLedger::new(),
        }
    }
}

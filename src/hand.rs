use serde::{Deserialize, Serialize};

use crate::card::Rank;

/// Total and softness of a set of cards. Every Ace starts at 11 and drops to
/// 1 while the hand would otherwise bust.
pub fn hand_value(hand: &[Rank]) -> (u32, bool) {
    let mut total: u32 = 0;
    let mut aces = 0;

    for &card in hand {
        total += card.value() as u32;
        if card.is_ace() { aces += 1; }
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    (total, aces > 0 && total <= 21)
}

pub fn is_blackjack(hand: &[Rank]) -> bool {
    hand.len() == 2 && hand_value(hand).0 == 21
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Rank>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: &[Rank]) -> Self {
        Hand { cards: cards.to_vec() }
    }

    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    pub fn push(&mut self, card: Rank) {
        self.cards.push(card);
    }

    /// Removes one copy of `card`, if present.
    pub fn remove(&mut self, card: Rank) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn count_of(&self, card: Rank) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn take(&mut self) -> Vec<Rank> {
        std::mem::take(&mut self.cards)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn total(&self) -> u32 {
        hand_value(&self.cards).0
    }

    pub fn is_soft(&self) -> bool {
        hand_value(&self.cards).1
    }

    pub fn is_natural(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }
}

/// The dealer's two cards. The hole card stays unknown until the hand is
/// resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerHand {
    pub up_card: Option<Rank>,
    pub hole_card: Option<Rank>,
}

impl DealerHand {
    pub fn cards(&self) -> Vec<Rank> {
        self.up_card.into_iter().chain(self.hole_card).collect()
    }

    pub fn clear(&mut self) {
        self.up_card = None;
        self.hole_card = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn test_hand_value_simple() {
        assert_eq!(hand_value(&[Two, Three]), (5, false));
    }

    #[test]
    fn test_hand_value_empty() {
        assert_eq!(hand_value(&[]), (0, false));
    }

    #[test]
    fn test_hand_value_face_cards() {
        assert_eq!(hand_value(&[King, Queen]), (20, false));
    }

    #[test]
    fn test_hand_value_soft_ace() {
        assert_eq!(hand_value(&[Ace, Six]), (17, true));
    }

    #[test]
    fn test_hand_value_hard_ace() {
        assert_eq!(hand_value(&[Ace, Six, Nine]), (16, false));
    }

    #[test]
    fn test_hand_value_multiple_aces() {
        assert_eq!(hand_value(&[Ace, Ace, Nine]), (21, true));
        assert_eq!(hand_value(&[Ace, Ace]), (12, true));
        assert_eq!(hand_value(&[Ace, Ace, Ace, Ace]), (14, true));
    }

    #[test]
    fn test_hand_value_bust_reports_minimum() {
        assert_eq!(hand_value(&[King, Queen, Five]), (25, false));
        assert_eq!(hand_value(&[Ace, King, Queen, Five]), (26, false));
    }

    #[test]
    fn test_hand_value_beyond_byte_range() {
        // eight decks allow far more cards than a byte can total
        assert_eq!(hand_value(&vec![King; 26]), (260, false));
        let mut cards = vec![Ace; 32];
        cards.extend(vec![Queen; 32]);
        assert_eq!(hand_value(&cards), (352, false));
        assert!(Hand::from_cards(&vec![King; 30]).total() > 255);
    }

    #[test]
    fn test_no_ace_hands_are_hard_face_sums() {
        for a in Rank::ALL.into_iter().filter(|r| !r.is_ace()) {
            for b in Rank::ALL.into_iter().filter(|r| !r.is_ace()) {
                let (total, soft) = hand_value(&[a, b]);
                assert_eq!(total, (a.value() + b.value()) as u32);
                assert!(!soft);
            }
        }
    }

    #[test]
    fn test_aces_pick_best_total() {
        // best total <= 21 over every Ace assignment, else the all-ones total
        for aces in 1..=4usize {
            for other in Rank::ALL.into_iter().filter(|r| !r.is_ace()) {
                let mut cards = vec![Ace; aces];
                cards.push(other);
                cards.push(other);
                let low = aces as u32 + 2 * other.value() as u32;
                let expected = if low + 10 <= 21 { low + 10 } else { low };
                assert_eq!(hand_value(&cards).0, expected, "{cards:?}");
            }
        }
    }

    #[test]
    fn test_is_blackjack() {
        assert!(is_blackjack(&[Ace, King]));
        assert!(!is_blackjack(&[Seven, Seven, Seven]));
        assert!(!is_blackjack(&[King, Queen]));
    }

    #[test]
    fn test_hand_struct() {
        let mut hand = Hand::new();
        hand.push(King);
        hand.push(Seven);
        assert_eq!(hand.total(), 17);
        assert!(!hand.is_soft());
        assert!(!hand.is_bust());
        hand.push(Nine);
        assert!(hand.is_bust());
        assert!(hand.remove(Nine));
        assert!(!hand.remove(Nine));
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn test_hand_count_of() {
        let hand = Hand::from_cards(&[Eight, Eight, Two]);
        assert_eq!(hand.count_of(Eight), 2);
        assert_eq!(hand.count_of(Ace), 0);
    }

    #[test]
    fn test_dealer_hand_cards() {
        let mut dealer = DealerHand { up_card: Some(Ten), hole_card: None };
        assert_eq!(dealer.cards(), vec![Ten]);
        dealer.hole_card = Some(Ace);
        assert_eq!(dealer.cards(), vec![Ten, Ace]);
        dealer.clear();
        assert!(dealer.cards().is_empty());
    }
}

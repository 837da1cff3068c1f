use serde::{Deserialize, Serialize};

use crate::{
    card::Rank,
    config::{default_true, validate_decks},
    counter::{self, CountState},
    error::CoreError,
    hand::hand_value,
    strategy::{self, Recommendation},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendInput {
    pub player_cards: Vec<Rank>,
    pub dealer_up_card: Rank,
    #[serde(default)]
    pub true_count: f64,
    #[serde(default = "default_true")]
    pub can_double: bool,
    #[serde(default = "default_true")]
    pub can_split: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountInput {
    #[serde(default)]
    pub cards_seen: Vec<Rank>,
    pub decks_in_shoe: u8,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandValue {
    pub total: u32,
    pub is_soft: bool,
}

pub fn evaluate(cards: &[Rank]) -> HandValue {
    let (total, is_soft) = hand_value(cards);
    HandValue { total, is_soft }
}

pub fn run_recommend(input: RecommendInput) -> Recommendation {
    strategy::recommend(
        &input.player_cards,
        input.dealer_up_card,
        input.true_count,
        input.can_double,
        input.can_split,
    )
}

pub fn run_count(input: CountInput) -> Result<CountState, CoreError> {
    validate_decks(input.decks_in_shoe)?;
    Ok(counter::update(&input.cards_seen, input.decks_in_shoe))
}

/// Turns an optional card label from the shell into a rank; blank means
/// "not selected".
pub fn optional_rank(label: Option<&str>) -> Result<Option<Rank>, CoreError> {
    match label.map(str::trim) {
        None | Some("") => Ok(None),
        Some(label) => label.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Action;

    #[test]
    fn test_recommend_input_defaults() {
        let input: RecommendInput =
            serde_json::from_str(r#"{"playerCards": ["A", "6"], "dealerUpCard": "5"}"#).unwrap();
        assert_eq!(input.true_count, 0.0);
        assert!(input.can_double);
        assert_eq!(run_recommend(input).action, Some(Action::Double));
    }

    #[test]
    fn test_recommend_input_rejects_bad_rank() {
        let parsed: Result<RecommendInput, _> =
            serde_json::from_str(r#"{"playerCards": ["1"], "dealerUpCard": "5"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_run_count_validates_decks() {
        let input: CountInput = serde_json::from_str(r#"{"decksInShoe": 9}"#).unwrap();
        assert_eq!(run_count(input), Err(CoreError::InvalidDeckCount(9)));

        let input: CountInput =
            serde_json::from_str(r#"{"cardsSeen": ["2", "3", "10", "A"], "decksInShoe": 1}"#).unwrap();
        let state = run_count(input).unwrap();
        assert_eq!(state.running_count, 0);
        assert_eq!(state.decks_remaining, 0.92);
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate(&[Rank::Ace, Rank::Six]), HandValue { total: 17, is_soft: true });
    }

    #[test]
    fn test_optional_rank() {
        assert_eq!(optional_rank(None), Ok(None));
        assert_eq!(optional_rank(Some("")), Ok(None));
        assert_eq!(optional_rank(Some("Q")), Ok(Some(Rank::Queen)));
        assert!(optional_rank(Some("X")).is_err());
    }
}

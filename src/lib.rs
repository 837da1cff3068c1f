use wasm_bindgen::prelude::*;

mod api;
pub mod card;
pub mod config;
pub mod counter;
pub mod error;
pub mod hand;
pub mod ledger;
pub mod logger;
pub mod outcome;
pub mod session;
pub mod strategy;

pub use api::{evaluate, HandValue};
pub use card::{parse_ranks, Rank};
pub use config::ShoeConfig;
pub use counter::{advantage, advantage_meter, update, Advantage, CountState, Severity};
pub use error::CoreError;
pub use hand::{hand_value, is_blackjack, DealerHand, Hand};
pub use ledger::{SessionLedger, SessionStats};
pub use outcome::{resolve, Outcome};
pub use session::{Analysis, HandSummary, Session};
pub use strategy::{recommend, Action, Recommendation};

#[wasm_bindgen]
pub fn init_logging(level: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::ConsoleLogger::install(logger::parse_level(level.as_deref()))
        .map_err(|err| JsValue::from_str(&format!("Logger setup failed: {err}")))
}

#[wasm_bindgen]
pub fn evaluate_hand(cards: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let cards: Vec<Rank> = serde_wasm_bindgen::from_value(cards.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    serde_wasm_bindgen::to_value(&api::evaluate(&cards))
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn resolve_hand(player: &JsValue, dealer: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let player: Vec<Rank> = serde_wasm_bindgen::from_value(player.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid player cards: {err}")))?;
    let dealer: Vec<Rank> = serde_wasm_bindgen::from_value(dealer.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid dealer cards: {err}")))?;

    serde_wasm_bindgen::to_value(&outcome::resolve(&player, &dealer))
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn recommend_play(params: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input: api::RecommendInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    serde_wasm_bindgen::to_value(&api::run_recommend(input))
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn update_count(params: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input: api::CountInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let state = api::run_count(input)
        .map_err(|err| JsValue::from_str(&format!("Count failed: {err}")))?;

    serde_wasm_bindgen::to_value(&state)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn betting_advantage(true_count: f64) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&counter::advantage(true_count))
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

/// Shoe-scoped state handed to the UI. JS owns it and drives every
/// transition through these methods.
#[wasm_bindgen]
pub struct AdvisorSession {
    inner: Session,
}

#[wasm_bindgen]
impl AdvisorSession {
    #[wasm_bindgen(constructor)]
    pub fn new(config: &JsValue) -> Result<AdvisorSession, JsValue> {
        console_error_panic_hook::set_once();
        let config: ShoeConfig = if config.is_undefined() || config.is_null() {
            ShoeConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config.clone())
                .map_err(|err| JsValue::from_str(&format!("Invalid config: {err}")))?
        };
        let inner = Session::new(config)
            .map_err(|err| JsValue::from_str(&format!("Session error: {err}")))?;
        Ok(AdvisorSession { inner })
    }

    pub fn mark_player_card(&mut self, rank: &str) -> Result<bool, JsValue> {
        Ok(self.inner.mark_player_card(parse_rank(rank)?))
    }

    pub fn unmark_player_card(&mut self, rank: &str) -> Result<bool, JsValue> {
        Ok(self.inner.unmark_player_card(parse_rank(rank)?))
    }

    pub fn mark_table_card(&mut self, rank: &str) -> Result<bool, JsValue> {
        Ok(self.inner.mark_table_card(parse_rank(rank)?))
    }

    pub fn unmark_table_card(&mut self, rank: &str) -> Result<bool, JsValue> {
        Ok(self.inner.unmark_table_card(parse_rank(rank)?))
    }

    pub fn set_dealer_up_card(&mut self, rank: Option<String>) -> Result<(), JsValue> {
        let card = api::optional_rank(rank.as_deref())
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.inner.set_dealer_up_card(card);
        Ok(())
    }

    pub fn set_dealer_hole_card(&mut self, rank: Option<String>) -> Result<(), JsValue> {
        let card = api::optional_rank(rank.as_deref())
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.inner.set_dealer_hole_card(card);
        Ok(())
    }

    pub fn set_decks(&mut self, num_decks: u8) -> Result<(), JsValue> {
        self.inner
            .set_decks(num_decks)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    pub fn analysis(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.analysis())
            .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
    }

    pub fn finish_hand(&mut self) -> Result<JsValue, JsValue> {
        let summary = self
            .inner
            .finish_hand()
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        serde_wasm_bindgen::to_value(&summary)
            .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
    }

    pub fn reset_hand(&mut self) {
        self.inner.reset_hand();
    }

    pub fn reset_shoe(&mut self) {
        self.inner.reset_shoe();
    }

    pub fn stats(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.stats())
            .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
    }
}

fn parse_rank(rank: &str) -> Result<Rank, JsValue> {
    rank.parse::<Rank>()
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Invalid card rank: {0}")]
    InvalidRank(String),

    #[error("Invalid deck count {0}: a shoe holds 1 to 8 decks")]
    InvalidDeckCount(u8),

    #[error("Cannot record a hand that is still pending")]
    PendingOutcome,

    #[error("No player cards to finish the hand with")]
    MissingPlayerCards,

    #[error("The dealer up card is missing")]
    MissingDealerUpCard,

    #[error("The dealer hole card must be selected to finish the hand")]
    MissingDealerHoleCard,

    #[error("Config error: {0}")]
    Config(String),
}

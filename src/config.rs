use serde::Deserialize;

use crate::error::CoreError;

pub const MIN_DECKS: u8 = 1;
pub const MAX_DECKS: u8 = 8;

fn default_num_decks() -> u8 {
    6
}

pub(crate) fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeConfig {
    #[serde(default = "default_num_decks")]
    pub num_decks: u8,
    #[serde(default = "default_true")]
    pub can_double: bool,
    #[serde(default = "default_true")]
    pub can_split: bool,
}

impl Default for ShoeConfig {
    fn default() -> Self {
        ShoeConfig {
            num_decks: default_num_decks(),
            can_double: true,
            can_split: true,
        }
    }
}

impl ShoeConfig {
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let config: ShoeConfig =
            serde_json::from_str(raw).map_err(|err| CoreError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_decks(self.num_decks)
    }
}

pub fn validate_decks(num_decks: u8) -> Result<(), CoreError> {
    if (MIN_DECKS..=MAX_DECKS).contains(&num_decks) {
        Ok(())
    } else {
        Err(CoreError::InvalidDeckCount(num_decks))
    }
}

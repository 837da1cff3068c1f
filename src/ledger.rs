use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::outcome::Outcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLedger {
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    pub total_hands: u32,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a settled hand. Pending hands are refused and leave the
    /// ledger untouched.
    pub fn record(&mut self, outcome: Outcome) -> Result<(), CoreError> {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Push => self.pushes += 1,
            Outcome::Pending => return Err(CoreError::PendingOutcome),
        }
        self.total_hands += 1;
        Ok(())
    }

    pub fn win_percentage(&self) -> f64 {
        if self.total_hands > 0 {
            (self.wins as f64 / self.total_hands as f64) * 100.0
        } else {
            0.0
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    #[serde(flatten)]
    pub ledger: SessionLedger,
    pub win_percentage: f64,
}

impl From<SessionLedger> for SessionStats {
    fn from(ledger: SessionLedger) -> Self {
        SessionStats {
            win_percentage: ledger.win_percentage(),
            ledger,
        }
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One court in a round: exactly 4 players in draw order.
/// The first two form team A, the last two form team B.
///
/// Serializes transparently as a plain array of names, so a persisted
/// schedule is a nested string array and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourtAssignment {
    pub players: Vec<String>,
}

impl CourtAssignment {
    pub fn team_a(&self) -> &[String] {
        &self.players[..2]
    }

    pub fn team_b(&self) -> &[String] {
        &self.players[2..]
    }
}

/// One complete cycle of court assignments covering all courts once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Round {
    pub courts: Vec<CourtAssignment>,
}

/// The full output of one generation run: rounds, in play order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    pub rounds: Vec<Round>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Please enter names for all {required} players")]
    IncompleteRoster { required: usize },
}

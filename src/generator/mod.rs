pub mod ledger;
pub mod rounds;
pub mod types;

pub use ledger::{partnership_counts, PartnerLedger};
pub use rounds::{generate_schedule, generate_schedule_with_rng, PLAYERS_PER_COURT};
pub use types::{CourtAssignment, GenerateError, Round, Schedule};

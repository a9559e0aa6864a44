use rand::Rng;

use super::ledger::PartnerLedger;
use super::types::{CourtAssignment, GenerateError, Round, Schedule};

/// Players per court: two teams of two.
pub const PLAYERS_PER_COURT: usize = 4;

/// Generates a schedule of `rounds` rounds of `courts` courts, drawing 4
/// players per court from the roster. Uses the ambient random source.
pub fn generate_schedule(
    roster: &[String],
    courts: usize,
    rounds: usize,
) -> Result<Schedule, GenerateError> {
    generate_schedule_with_rng(roster, courts, rounds, &mut rand::thread_rng())
}

/// Same as `generate_schedule`, but draws from the provided RNG so callers
/// and tests can pin the selection sequence.
pub fn generate_schedule_with_rng<R: Rng>(
    roster: &[String],
    courts: usize,
    rounds: usize,
    rng: &mut R,
) -> Result<Schedule, GenerateError> {
    let required = courts * PLAYERS_PER_COURT;

    // Blank slots don't count; names keep their entered form.
    let filled: Vec<String> = roster
        .iter()
        .filter(|p| !p.trim().is_empty())
        .cloned()
        .collect();
    if filled.len() != required {
        return Err(GenerateError::IncompleteRoster { required });
    }

    // The ledger records who has shared a court with whom across the whole
    // run. Selection below does not consult it; draws stay uniform.
    let mut ledger = PartnerLedger::new(&filled);

    let mut schedule_rounds = Vec::with_capacity(rounds);
    for _ in 0..rounds {
        let mut round_courts = Vec::with_capacity(courts);
        // Each round starts from the full roster as its available pool.
        let mut available = filled.clone();

        for _ in 0..courts {
            let mut court_players: Vec<String> = Vec::with_capacity(PLAYERS_PER_COURT);

            for _ in 0..PLAYERS_PER_COURT {
                if available.is_empty() {
                    // Pool exhausted mid-round: reset to the full roster.
                    // With a validated roster the pool empties exactly at the
                    // end of a round, so this cannot fire before the last draw
                    // of the last court.
                    available = filled.clone();
                }

                let index = rng.gen_range(0..available.len());
                let chosen = available.remove(index);

                for seated in &court_players {
                    ledger.record_partnership(&chosen, seated);
                }
                court_players.push(chosen);
            }

            round_courts.push(CourtAssignment {
                players: court_players,
            });
        }

        schedule_rounds.push(Round {
            courts: round_courts,
        });
    }

    Ok(Schedule {
        rounds: schedule_rounds,
    })
}

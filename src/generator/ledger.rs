use std::collections::{HashMap, HashSet};

use super::types::Schedule;

/// Per-run record of which players have shared a court so far.
///
/// The ledger is maintained while a schedule is generated but is not
/// consulted by the selection step: draws stay uniform-random over the
/// available pool, so repeat pairings are recorded, not prevented. The
/// counts surface through `partnership_counts` for display and stats.
#[derive(Debug, Clone)]
pub struct PartnerLedger {
    partners: HashMap<String, HashSet<String>>,
}

impl PartnerLedger {
    /// Create a fresh ledger with an empty partner set for every player.
    pub fn new(players: &[String]) -> Self {
        let partners = players
            .iter()
            .map(|p| (p.clone(), HashSet::new()))
            .collect();
        Self { partners }
    }

    /// Record that `a` and `b` shared a court. Symmetric.
    pub fn record_partnership(&mut self, a: &str, b: &str) {
        if a == b {
            return;
        }
        self.partners
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        self.partners
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
    }

    /// Everyone `player` has shared a court with so far.
    pub fn partners_of(&self, player: &str) -> Option<&HashSet<String>> {
        self.partners.get(player)
    }
}

/// Counts how many times each pair of players was seated on the same court.
///
/// Keys are (name, name) pairs with the lexicographically smaller name first,
/// so a pair is counted once regardless of draw order.
pub fn partnership_counts(schedule: &Schedule) -> HashMap<(String, String), u32> {
    let mut counts = HashMap::new();
    for round in &schedule.rounds {
        for court in &round.courts {
            for i in 0..court.players.len() {
                for j in (i + 1)..court.players.len() {
                    let a = &court.players[i];
                    let b = &court.players[j];
                    let key = if a <= b {
                        (a.clone(), b.clone())
                    } else {
                        (b.clone(), a.clone())
                    };
                    *counts.entry(key).or_insert(0) += 1;
                }
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::{partnership_counts, PartnerLedger};
    use crate::generator::types::{CourtAssignment, Round, Schedule};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_record_partnership_is_symmetric() {
        let mut ledger = PartnerLedger::new(&names(&["Anna", "Bram"]));
        ledger.record_partnership("Anna", "Bram");

        assert!(ledger.partners_of("Anna").unwrap().contains("Bram"));
        assert!(ledger.partners_of("Bram").unwrap().contains("Anna"));
    }

    #[test]
    fn test_record_partnership_ignores_self_pairing() {
        let mut ledger = PartnerLedger::new(&names(&["Anna"]));
        ledger.record_partnership("Anna", "Anna");
        assert!(ledger.partners_of("Anna").unwrap().is_empty());
    }

    #[test]
    fn test_partnership_counts_over_rounds() {
        // Anna and Bram share a court in both rounds, the rest only once.
        let schedule = Schedule {
            rounds: vec![
                Round {
                    courts: vec![CourtAssignment {
                        players: names(&["Anna", "Bram", "Cas", "Daan"]),
                    }],
                },
                Round {
                    courts: vec![CourtAssignment {
                        players: names(&["Bram", "Anna", "Eva", "Finn"]),
                    }],
                },
            ],
        };

        let counts = partnership_counts(&schedule);
        assert_eq!(
            counts[&("Anna".to_string(), "Bram".to_string())],
            2,
            "pair order within a court must not matter"
        );
        assert_eq!(counts[&("Cas".to_string(), "Daan".to_string())], 1);
        assert_eq!(counts[&("Anna".to_string(), "Eva".to_string())], 1);
        // 6 pairs per court, 2 courts, minus the merged Anna/Bram pair
        assert_eq!(counts.len(), 11);
    }
}

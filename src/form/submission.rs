use serde::Deserialize;

use crate::generator::PLAYERS_PER_COURT;

/// Setup request from the frontend: counts chosen on the setup step plus the
/// player names entered on the roster step.
#[derive(Deserialize)]
pub struct GenerateRequest {
    pub courts: usize,
    pub rounds: usize,
    pub players: Vec<String>,
}

/// Validates a setup request
pub fn validate_request(req: &GenerateRequest) -> Result<(), String> {
    // The setup page offers 1 through 5 for both selects
    if req.courts < 1 || req.courts > 5 {
        return Err("Number of courts must be between 1 and 5".to_string());
    }
    if req.rounds < 1 || req.rounds > 5 {
        return Err("Number of rounds must be between 1 and 5".to_string());
    }

    // The roster step renders exactly courts * 4 inputs
    let expected = req.courts * PLAYERS_PER_COURT;
    if req.players.len() != expected {
        return Err(format!(
            "Expected {} player slots, got {}",
            expected,
            req.players.len()
        ));
    }

    // Blank names are the generator's concern: it reports the required count
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_request, GenerateRequest};

    fn request(courts: usize, rounds: usize, player_count: usize) -> GenerateRequest {
        GenerateRequest {
            courts,
            rounds,
            players: (1..=player_count).map(|i| format!("Player {}", i)).collect(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_request(&request(5, 3, 20)).is_ok());
        assert!(validate_request(&request(1, 1, 4)).is_ok());
    }

    #[test]
    fn test_courts_out_of_range_rejected() {
        assert!(validate_request(&request(0, 3, 0)).is_err());
        assert!(validate_request(&request(6, 3, 24)).is_err());
    }

    #[test]
    fn test_rounds_out_of_range_rejected() {
        assert!(validate_request(&request(2, 0, 8)).is_err());
        assert!(validate_request(&request(2, 6, 8)).is_err());
    }

    #[test]
    fn test_player_count_mismatch_rejected() {
        let err = validate_request(&request(2, 2, 7)).unwrap_err();
        assert!(err.contains("8"), "message should cite the expected count: {}", err);
    }

    #[test]
    fn test_blank_names_are_not_the_forms_concern() {
        let mut req = request(1, 1, 4);
        req.players[2] = String::new();
        assert!(validate_request(&req).is_ok());
    }
}

use std::fs;
use std::path::Path;

use crate::generator::Schedule;

/// Writes the schedule to `path` as JSON. The file holds the schedule's
/// serialized form and nothing else, so a reload sees the exact structure
/// that was generated.
pub fn save_snapshot<P: AsRef<Path>>(
    schedule: &Schedule,
    path: P,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(schedule)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads the last saved schedule back. Returns `None` if no snapshot exists.
pub fn load_snapshot<P: AsRef<Path>>(
    path: P,
) -> Result<Option<Schedule>, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(path)?;
    let schedule = serde_json::from_str(&json)?;
    Ok(Some(schedule))
}

/// Removes the snapshot file. Succeeds if there was nothing to remove.
pub fn clear_snapshot<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::{clear_snapshot, load_snapshot, save_snapshot};
    use crate::generator::{CourtAssignment, Round, Schedule};
    use std::path::PathBuf;

    fn temp_path(label: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("padel-snapshot-{}-{}.json", label, std::process::id()));
        path
    }

    fn sample_schedule() -> Schedule {
        Schedule {
            rounds: vec![Round {
                courts: vec![CourtAssignment {
                    players: vec![
                        "Anna".to_string(),
                        "Bram".to_string(),
                        "Cas".to_string(),
                        "Daan".to_string(),
                    ],
                }],
            }],
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_path("roundtrip");
        let schedule = sample_schedule();

        save_snapshot(&schedule, &path).unwrap();
        let reloaded = load_snapshot(&path).unwrap().unwrap();
        clear_snapshot(&path).unwrap();

        assert_eq!(schedule, reloaded);
    }

    #[test]
    fn test_load_without_snapshot_is_none() {
        let path = temp_path("absent");
        assert!(load_snapshot(&path).unwrap().is_none());
    }

    #[test]
    fn test_clear_is_safe_to_repeat() {
        let path = temp_path("clear");
        save_snapshot(&sample_schedule(), &path).unwrap();

        clear_snapshot(&path).unwrap();
        assert!(load_snapshot(&path).unwrap().is_none());
        // A second clear has nothing to remove
        clear_snapshot(&path).unwrap();
    }
}

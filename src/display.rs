use std::fs::File;
use std::io::Write;

use chrono::Local;

use crate::generator::{partnership_counts, Schedule};

/// Formats a two-player team as a single display string
pub fn format_team(team: &[String]) -> String {
    team.join(" & ")
}

/// Prints the full schedule in a readable format
pub fn print_schedule(schedule: &Schedule) {
    for (round_index, round) in schedule.rounds.iter().enumerate() {
        println!("\n=== Round {} ===", round_index + 1);
        for (court_index, court) in round.courts.iter().enumerate() {
            println!(
                "  Court {}: {} vs {}",
                court_index + 1,
                format_team(court.team_a()),
                format_team(court.team_b())
            );
        }
    }
}

/// Prints pairs that ended up on the same court more than once
pub fn print_partnership_summary(schedule: &Schedule) {
    let counts = partnership_counts(schedule);
    let mut repeats: Vec<((String, String), u32)> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect();
    repeats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    if repeats.is_empty() {
        println!("\nNo repeated pairings.");
        return;
    }

    println!("\nRepeated pairings:");
    for ((a, b), count) in repeats {
        println!("  {} + {}: {} times on the same court", a, b, count);
    }
}

/// Writes the schedule to a text file, one court per line
pub fn write_schedule_to_file(
    schedule: &Schedule,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;

    writeln!(file, "** Padel schedule **")?;
    writeln!(file, "Generated {}", Local::now().format("%Y-%m-%d %H:%M"))?;

    for (round_index, round) in schedule.rounds.iter().enumerate() {
        writeln!(file, "\nRound {}", round_index + 1)?;
        for (court_index, court) in round.courts.iter().enumerate() {
            writeln!(
                file,
                "  Court {}: {} vs {}",
                court_index + 1,
                format_team(court.team_a()),
                format_team(court.team_b())
            )?;
        }
    }

    Ok(())
}

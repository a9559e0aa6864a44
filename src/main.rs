mod display;
mod form;
mod generator;
mod roster;
mod snapshot;
mod web;

use display::{print_partnership_summary, print_schedule, write_schedule_to_file};
use generator::generate_schedule;
use roster::load_roster;
use snapshot::save_snapshot;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Check if we should run in web mode
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let port = args
            .get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        let snapshot_path = std::env::var("SNAPSHOT_PATH")
            .unwrap_or_else(|_| "padel_schedule.json".to_string());

        println!("Starting web server on port {}...", port);
        println!("Snapshot file: {}", snapshot_path);
        println!("Access the site at http://localhost:{}", port);

        web::start_server(port, snapshot_path.into()).await?;
        return Ok(());
    }

    // CLI mode: roster CSV plus optional court and round counts
    let csv_path = args.get(1).map(String::as_str).unwrap_or("data/players.csv");
    let courts = args.get(2).and_then(|c| c.parse().ok()).unwrap_or(5);
    let rounds = args.get(3).and_then(|r| r.parse().ok()).unwrap_or(3);

    println!("Loading roster from {}...", csv_path);
    let roster = load_roster(csv_path)?;
    println!("Loaded {} roster slots", roster.len());

    println!(
        "\n=== Generating {} rounds on {} courts ===",
        rounds, courts
    );
    let schedule = generate_schedule(&roster, courts, rounds)?;

    print_schedule(&schedule);
    print_partnership_summary(&schedule);

    println!("\n=== Writing Schedule to Files ===");
    write_schedule_to_file(&schedule, "schedule_rounds.txt")?;
    save_snapshot(&schedule, "padel_schedule.json")?;
    println!("Schedule saved to:");
    println!("  - schedule_rounds.txt");
    println!("  - padel_schedule.json");

    Ok(())
}

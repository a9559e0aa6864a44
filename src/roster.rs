use csv::Reader;
use std::path::Path;

/// Loads a roster of player names from a CSV file.
///
/// The name column is located by header match (any header containing "name",
/// case-insensitive), falling back to the first column. Values are trimmed.
/// Rows with a blank name are kept as empty slots so the generator can report
/// how many names are still missing.
pub fn load_roster<P: AsRef<Path>>(csv_path: P) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut reader = Reader::from_path(csv_path)?;

    let headers = reader.headers()?;
    let name_col = headers
        .iter()
        .position(|h| h.to_lowercase().contains("name"))
        .unwrap_or(0);

    let mut roster = Vec::new();
    for result in reader.records() {
        let record = result?;
        let name = record.get(name_col).unwrap_or("").trim().to_string();
        roster.push(name);
    }

    Ok(roster)
}

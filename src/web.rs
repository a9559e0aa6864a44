use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use actix_files::Files;
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::form::{validate_request, GenerateRequest};
use crate::generator::{generate_schedule, partnership_counts, Schedule};
use crate::snapshot::{clear_snapshot, load_snapshot, save_snapshot};

// In-memory storage for the last generated schedule, mirrored to a JSON
// snapshot on disk so a restart picks it up again
pub struct AppState {
    pub schedule: Mutex<Option<Schedule>>,
    pub snapshot_path: PathBuf,
}

#[derive(Serialize)]
pub struct StatsResponse {
    appearances: HashMap<String, u32>,
    repeat_pairings: Vec<RepeatPairing>,
}

#[derive(Serialize)]
pub struct RepeatPairing {
    pair: [String; 2],
    count: u32,
}

// Generate endpoint: validate the setup request, run the generator, store
// and snapshot the result
async fn generate(
    req: web::Json<GenerateRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if let Err(message) = validate_request(&req) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": message
        })));
    }

    match generate_schedule(&req.players, req.courts, req.rounds) {
        Ok(schedule) => {
            if let Err(e) = save_snapshot(&schedule, &state.snapshot_path) {
                eprintln!("Failed to write snapshot: {}", e);
            }
            let response = HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "generated_at": Utc::now().to_rfc3339(),
                "schedule": &schedule
            }));
            *state.schedule.lock().unwrap() = Some(schedule);
            Ok(response)
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": e.to_string()
        }))),
    }
}

// Schedule endpoint: the last generated schedule, if any
async fn get_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    let schedule = state.schedule.lock().unwrap();

    if let Some(ref schedule) = *schedule {
        Ok(HttpResponse::Ok().json(schedule))
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "No schedule available"})))
    }
}

// Stats endpoint: appearance counts and pairs seated together more than once
async fn get_stats(state: web::Data<AppState>) -> Result<HttpResponse> {
    let schedule = state.schedule.lock().unwrap();

    if let Some(ref schedule) = *schedule {
        let mut appearances: HashMap<String, u32> = HashMap::new();
        for round in &schedule.rounds {
            for court in &round.courts {
                for player in &court.players {
                    *appearances.entry(player.clone()).or_insert(0) += 1;
                }
            }
        }

        let counts = partnership_counts(schedule);
        let mut repeat_pairings: Vec<RepeatPairing> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|((a, b), count)| RepeatPairing {
                pair: [a, b],
                count,
            })
            .collect();
        repeat_pairings.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.pair.cmp(&b.pair)));

        Ok(HttpResponse::Ok().json(StatsResponse {
            appearances,
            repeat_pairings,
        }))
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "No schedule available"})))
    }
}

// Reset endpoint: discard the held schedule and the snapshot
async fn reset(state: web::Data<AppState>) -> Result<HttpResponse> {
    *state.schedule.lock().unwrap() = None;
    if let Err(e) = clear_snapshot(&state.snapshot_path) {
        eprintln!("Failed to remove snapshot: {}", e);
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}

// HTML page handler
async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

pub async fn start_server(port: u16, snapshot_path: PathBuf) -> std::io::Result<()> {
    // Pick up the last schedule from disk, like the results page does on load
    let initial_schedule = match load_snapshot(&snapshot_path) {
        Ok(schedule) => schedule,
        Err(e) => {
            eprintln!("Ignoring unreadable snapshot: {}", e);
            None
        }
    };

    let app_state = web::Data::new(AppState {
        schedule: Mutex::new(initial_schedule),
        snapshot_path,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static"))
            .route("/", web::get().to(index))
            .route("/api/generate", web::post().to(generate))
            .route("/api/schedule", web::get().to(get_schedule))
            .route("/api/stats", web::get().to(get_stats))
            .route("/api/reset", web::post().to(reset))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

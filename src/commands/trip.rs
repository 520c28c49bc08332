//! Trip Commands
//!
//! Loading trips and recording itinerary moves.

use log::info;
use plan_core::{MoveRequest, Trip};
use serde::Serialize;

use super::latency;

/// Canned response of the trip list endpoint
const MOCK_TRIPS: &str = include_str!("../../fixtures/trips.json");

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct PersistMoveArgs<'a> {
    #[serde(rename = "tripId")]
    trip_id: &'a str,
    #[serde(flatten)]
    request: &'a MoveRequest,
}

// ========================
// Commands
// ========================

/// Decode a trip list payload; plans are validated while decoding
pub fn parse_trips(json: &str) -> Result<Vec<Trip>, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

pub async fn list_trips(latency_ms: u32) -> Result<Vec<Trip>, String> {
    latency(latency_ms).await;
    parse_trips(MOCK_TRIPS)
}

pub async fn persist_move(latency_ms: u32, trip_id: &str, request: &MoveRequest) -> Result<(), String> {
    let body = serde_json::to_string(&PersistMoveArgs { trip_id, request }).map_err(|e| e.to_string())?;
    latency(latency_ms).await;
    info!("[API] persist_move {}", body);
    Ok(())
}

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use climate_core::{ClimateStore, parse_date};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

/// Shared state handed to every handler. The store is pool-backed and cheap
/// to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: ClimateStore,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/:start", get(temps_from_start))
        .route("/api/v1.0/:start/:end", get(temps_between))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> &'static str {
    "Available Routes:\n\
     /api/v1.0/precipitation\n\
     /api/v1.0/stations\n\
     /api/v1.0/tobs\n\
     /api/v1.0/<start>\n\
     /api/v1.0/<start>/<end>\n"
}

/// Precipitation for the 365-day window ending at the latest recorded date,
/// as a map of date to value.
///
/// Rows arrive in ascending date order with the row id as tie break, so when
/// several stations report on the same date the last inserted row wins.
async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, ApiError> {
    let latest = state.store.latest_date().await?;
    let start = ClimateStore::window_start(latest);

    let rows = state.store.precipitation_since(start).await?;

    let mut by_date = BTreeMap::new();
    for row in rows {
        by_date.insert(row.date, row.prcp);
    }

    Ok(Json(by_date))
}

type StationTuple = (i64, String, String, Option<f64>, Option<f64>, Option<f64>);

/// All stations as `(id, code, name, latitude, longitude, elevation)` tuples.
async fn stations(State(state): State<AppState>) -> Result<Json<Vec<StationTuple>>, ApiError> {
    let list = state.store.stations_list().await?;

    let tuples = list
        .into_iter()
        .map(|s| (s.id, s.station, s.name, s.latitude, s.longitude, s.elevation))
        .collect();

    Ok(Json(tuples))
}

/// Temperature observations for the 365-day window, one object per row with
/// the date keyed to the temperature plus the recording station.
async fn tobs(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let latest = state.store.latest_date().await?;
    let start = ClimateStore::window_start(latest);

    let rows = state.store.temps_since(start).await?;

    let objects = rows
        .into_iter()
        .map(|row| {
            let mut obj = serde_json::Map::new();
            obj.insert(row.date, json!(row.tobs));
            obj.insert("Station".to_string(), json!(row.station));
            Value::Object(obj)
        })
        .collect();

    Ok(Json(objects))
}

/// TMIN/TAVG/TMAX from `start` through the latest recorded date.
async fn temps_from_start(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let start = parse_path_date(&start)?;
    let end = state.store.latest_date().await?;

    summarize(&state.store, start, end).await
}

/// TMIN/TAVG/TMAX between `start` and `end` inclusive.
async fn temps_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let start = parse_path_date(&start)?;
    let end = parse_path_date(&end)?;

    summarize(&state.store, start, end).await
}

/// Path segments are opaque strings; validate them at the boundary instead of
/// letting malformed input leak into date comparisons.
fn parse_path_date(raw: &str) -> Result<NaiveDate, ApiError> {
    parse_date(raw).map_err(|_| ApiError::InvalidDate(raw.to_string()))
}

async fn summarize(
    store: &ClimateStore,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Json<Vec<Value>>, ApiError> {
    let summary = store
        .aggregate_temps(start, end)
        .await?
        .ok_or(ApiError::NoData)?;

    Ok(Json(vec![
        json!({ "start_date": start.to_string(), "end_date": end.to_string() }),
        json!({ "Observation": "TMIN", "Temperature": summary.tmin }),
        json!({ "Observation": "TAVG", "Temperature": summary.tavg }),
        json!({ "Observation": "TMAX", "Temperature": summary.tmax }),
    ]))
}

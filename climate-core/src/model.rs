use serde::Serialize;
use sqlx::FromRow;

/// A fixed weather-recording location. Reference data, loaded read-only
/// from the `station` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Station {
    pub id: i64,
    /// Station code, e.g. "USC00519397".
    pub station: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// One precipitation reading: the date (always `YYYY-MM-DD`) and the
/// recorded value, which the dataset leaves null on dry-gauge days.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PrecipReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// One temperature observation (TOBS) with the station that recorded it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TempObservation {
    pub date: String,
    pub tobs: f64,
    pub station: String,
}

/// Min/avg/max temperature over a date range.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TempSummary {
    pub tmin: f64,
    pub tavg: f64,
    pub tmax: f64,
}

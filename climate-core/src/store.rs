use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::StoreError;
use crate::model::{PrecipReading, Station, TempObservation, TempSummary};

/// Length of the rolling observation window, in days.
///
/// The window is a fixed 365-day offset from the latest recorded date, not a
/// calendar year: across a leap day the window start shifts by one day.
pub const WINDOW_DAYS: i64 = 365;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read-only access to the climate observation database.
///
/// Wraps a `SqlitePool`; every query checks its own connection out of the
/// pool, so the store can be shared freely across concurrent requests.
#[derive(Debug, Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    /// Open the database at `path` read-only.
    ///
    /// The schema is an external artifact: this never creates or migrates
    /// tables, and a missing file is an error rather than an empty database.
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new().filename(path).read_only(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|source| StoreError::Unavailable {
                path: PathBuf::from(path),
                source,
            })?;

        tracing::debug!(path = %path.display(), "opened climate database read-only");

        Ok(Self { pool })
    }

    /// Wrap an existing pool. Used by tests with in-memory databases.
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The maximum date present across all measurements.
    pub async fn latest_date(&self) -> Result<NaiveDate, StoreError> {
        let max: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;

        let raw = max.ok_or(StoreError::EmptyDataset)?;
        parse_date(&raw).map_err(|_| StoreError::MalformedDate(raw))
    }

    /// Start of the rolling window ending at `latest`: exactly 365 days
    /// earlier, regardless of leap years.
    pub fn window_start(latest: NaiveDate) -> NaiveDate {
        latest - Duration::days(WINDOW_DAYS)
    }

    /// Precipitation readings with date >= `start`, ascending by date.
    ///
    /// Duplicate dates (one row per station) are preserved here; the tie
    /// break on `id` makes "the last row for a date" deterministic for
    /// callers that collapse the sequence into a per-date mapping.
    pub async fn precipitation_since(
        &self,
        start: NaiveDate,
    ) -> Result<Vec<PrecipReading>, StoreError> {
        let rows = sqlx::query_as::<_, PrecipReading>(
            "SELECT date, prcp FROM measurement WHERE date >= ? ORDER BY date ASC, id ASC",
        )
        .bind(start.format(DATE_FORMAT).to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// All stations, deduplicated by station code, newest id first.
    pub async fn stations_list(&self) -> Result<Vec<Station>, StoreError> {
        let rows = sqlx::query_as::<_, Station>(
            "SELECT id, station, name, latitude, longitude, elevation \
             FROM station GROUP BY station ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Temperature observations with date >= `start`, ascending by date,
    /// each paired with the station that recorded it. No deduplication.
    pub async fn temps_since(
        &self,
        start: NaiveDate,
    ) -> Result<Vec<TempObservation>, StoreError> {
        let rows = sqlx::query_as::<_, TempObservation>(
            "SELECT date, tobs, station FROM measurement \
             WHERE date >= ? ORDER BY date ASC, id ASC",
        )
        .bind(start.format(DATE_FORMAT).to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// TMIN/TAVG/TMAX over `start <= date <= end` inclusive.
    ///
    /// Returns `Ok(None)` when no rows fall in the range, including the
    /// `start > end` case; an empty range is not an error.
    pub async fn aggregate_temps(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<TempSummary>, StoreError> {
        let (tmin, tavg, tmax): (Option<f64>, Option<f64>, Option<f64>) = sqlx::query_as(
            "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement \
             WHERE date >= ? AND date <= ?",
        )
        .bind(start.format(DATE_FORMAT).to_string())
        .bind(end.format(DATE_FORMAT).to_string())
        .fetch_one(&self.pool)
        .await?;

        match (tmin, tavg, tmax) {
            (Some(tmin), Some(tavg), Some(tmax)) => Ok(Some(TempSummary { tmin, tavg, tmax })),
            _ => Ok(None),
        }
    }
}

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
}

//! The main entry point for producing bike availability forecasts.
//!
//! A [`Forecaster`] loads the two pre-trained regression models (one per
//! [`Horizon`]), builds a feature row from the execution time and a weather
//! snapshot, and writes three timestamped records: the current availability,
//! the 1-hour-ahead forecast, and the 1-day-ahead forecast.

use crate::error::BikecastError;
use crate::features::feature_frame;
use crate::model::store::{ModelStore, DEFAULT_MODEL_DIR};
use crate::stream::writer::{Stream, StreamExt};
use crate::types::bikes::BikeFrame;
use crate::types::forecast::Forecast;
use crate::types::horizon::Horizon;
use crate::types::weather::WeatherFrame;
use bon::bon;
use chrono::{DateTime, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Tz;
use log::{info, warn};
use polars::prelude::DataFrame;
use std::path::PathBuf;

/// Field carrying the stringified execution timestamp in every record.
pub const FIELD_EXECUTION_TIMESTAMP: &str = "timestamp_ny_execution";
/// Field carrying the current bike count in the first record.
pub const FIELD_REAL_N_BIKES: &str = "real_n_bikes";

/// The forecasting client.
///
/// Construction loads both horizon models eagerly, so a misconfigured model
/// directory fails at startup rather than at the first forecast.
///
/// # Examples
///
/// ```no_run
/// # use bikecast::{BikecastError, Forecaster};
/// # async fn run() -> Result<(), BikecastError> {
/// // Reads ML_1h_Forecast.bin and ML_1day_Forecast.bin from ./MLModels.
/// let forecaster = Forecaster::new().await?;
/// # Ok(())
/// # }
/// ```
pub struct Forecaster {
    store: ModelStore,
}

#[bon]
impl Forecaster {
    /// Creates a forecaster reading models from the given directory.
    ///
    /// # Errors
    ///
    /// Returns [`BikecastError::Model`] when either model file cannot be read
    /// or decoded.
    pub async fn with_model_folder(model_folder: PathBuf) -> Result<Self, BikecastError> {
        let store = ModelStore::new(&model_folder);
        for horizon in Horizon::all() {
            store.get(horizon).await?;
        }
        Ok(Self { store })
    }

    /// Creates a forecaster reading models from [`DEFAULT_MODEL_DIR`].
    pub async fn new() -> Result<Self, BikecastError> {
        Self::with_model_folder(PathBuf::from(DEFAULT_MODEL_DIR)).await
    }

    /// Produces the forecast for one horizon.
    ///
    /// The forecasted count is the current count plus the model's prediction
    /// truncated to an integer; the target timestamp is the execution time
    /// plus the horizon's offset.
    pub async fn forecast(
        &self,
        horizon: Horizon,
        execution: DateTime<Tz>,
        current_bikes: i64,
        features: &DataFrame,
    ) -> Result<Forecast, BikecastError> {
        let model = self.store.get(horizon).await?;
        let predicted = model.predict(features)?;

        Ok(Forecast {
            horizon,
            execution: execution.fixed_offset(),
            target: (execution + horizon.offset()).fixed_offset(),
            bikes: current_bikes + predicted as i64,
        })
    }

    /// Forecasts bike availability and writes three records.
    ///
    /// Writes the current availability to `current`, the 1-hour-ahead
    /// forecast to `one_hour`, and the 1-day-ahead forecast to `one_day`.
    /// Every record carries the stringified execution timestamp; the
    /// forecast records are stamped with their target time.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.bikes(&BikeFrame)`: **Required.** The current availability snapshot.
    /// * `.weather(&WeatherFrame)`: **Required.** The weather snapshot; its
    ///   `"NextDay"` row feeds the feature frame.
    /// * `.current(&mut dyn Stream)`: **Required.** Sink for the current count.
    /// * `.one_hour(&mut dyn Stream)`: **Required.** Sink for the 1-hour forecast.
    /// * `.one_day(&mut dyn Stream)`: **Required.** Sink for the 1-day forecast.
    /// * `.at(DateTime<Tz>)`: Optional. A fixed execution timestamp. Defaults
    ///   to the current time in America/New_York.
    ///
    /// If either snapshot is empty there is nothing to predict from: the call
    /// logs a warning, writes nothing, and returns `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns [`BikecastError::Model`] when a model rejects the feature
    /// frame, [`BikecastError::Stream`] when a sink write fails, and
    /// snapshot-level errors when a required column or the `"NextDay"` row
    /// is missing.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use bikecast::{BikecastError, BikeFrame, Forecaster, MemoryStream, WeatherFrame};
    /// # async fn run(
    /// #     bikes: BikeFrame,
    /// #     weather: WeatherFrame,
    /// # ) -> Result<(), BikecastError> {
    /// let forecaster = Forecaster::new().await?;
    /// let mut current = MemoryStream::new();
    /// let mut one_hour = MemoryStream::new();
    /// let mut one_day = MemoryStream::new();
    ///
    /// forecaster
    ///     .write_forecasts()
    ///     .bikes(&bikes)
    ///     .weather(&weather)
    ///     .current(&mut current)
    ///     .one_hour(&mut one_hour)
    ///     .one_day(&mut one_day)
    ///     .call()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn write_forecasts(
        &self,
        bikes: &BikeFrame,
        weather: &WeatherFrame,
        current: &mut dyn Stream,
        one_hour: &mut dyn Stream,
        one_day: &mut dyn Stream,
        at: Option<DateTime<Tz>>,
    ) -> Result<(), BikecastError> {
        // Nothing to predict from; skip without writing.
        if bikes.is_empty() || weather.is_empty() {
            warn!("Empty bike or weather snapshot, skipping forecast");
            return Ok(());
        }

        let execution_ny = at.unwrap_or_else(|| Utc::now().with_timezone(&New_York));
        let features = feature_frame(&execution_ny, weather)?;
        let current_bikes = bikes.total_available()?;

        let forecast_1h = self
            .forecast(Horizon::OneHour, execution_ny, current_bikes, &features)
            .await?;
        let forecast_1d = self
            .forecast(Horizon::OneDay, execution_ny, current_bikes, &features)
            .await?;

        let execution = execution_ny.fixed_offset();
        let execution_text = execution.to_rfc3339();

        current
            .buffer()
            .timestamp(execution)
            .value(FIELD_EXECUTION_TIMESTAMP, execution_text.as_str())
            .value(FIELD_REAL_N_BIKES, current_bikes)
            .write()?;

        one_hour
            .buffer()
            .timestamp(forecast_1h.target)
            .value(FIELD_EXECUTION_TIMESTAMP, execution_text.as_str())
            .value(Horizon::OneHour.forecast_field(), forecast_1h.bikes)
            .write()?;

        one_day
            .buffer()
            .timestamp(forecast_1d.target)
            .value(FIELD_EXECUTION_TIMESTAMP, execution_text.as_str())
            .value(Horizon::OneDay.forecast_field(), forecast_1d.bikes)
            .write()?;

        info!(
            "NY time {}: {} bikes now, forecast 1h {}, forecast 1 day {}",
            execution_ny, current_bikes, forecast_1h.bikes, forecast_1d.bikes
        );

        Ok(())
    }
}

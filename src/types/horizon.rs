//! Defines the forecast horizons served by the crate and the per-horizon
//! metadata (model file, output field, feature columns, time offset).

use crate::features::{COL_DAYOFWEEK, COL_FEELSLIKE_24, COL_HOUR, COL_WIND_24};
use chrono::Duration;
use std::fmt;

/// The lead time of a bike availability forecast.
///
/// Each horizon is backed by its own pre-trained regression model and maps to
/// its own output stream. The two horizons differ in the feature columns their
/// models were trained on: the 1-hour model only looks at the clock, while the
/// 1-day model also reads the next-day weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizon {
    /// Forecast for one hour from the execution time.
    OneHour,
    /// Forecast for twenty-four hours from the execution time.
    OneDay,
}

impl Horizon {
    /// All horizons, in write order (1 hour first).
    pub fn all() -> [Horizon; 2] {
        [Horizon::OneHour, Horizon::OneDay]
    }

    /// The offset between the execution time and the forecast target time.
    pub fn offset(&self) -> Duration {
        match self {
            Horizon::OneHour => Duration::hours(1),
            Horizon::OneDay => Duration::hours(24),
        }
    }

    /// File stem of the serialized model backing this horizon.
    pub(crate) fn model_file_stem(&self) -> &'static str {
        match self {
            Horizon::OneHour => "ML_1h_Forecast",
            Horizon::OneDay => "ML_1day_Forecast",
        }
    }

    /// Name of the forecast field written to this horizon's output stream.
    pub fn forecast_field(&self) -> &'static str {
        match self {
            Horizon::OneHour => "forecast_1h",
            Horizon::OneDay => "forecast_1d",
        }
    }

    /// The feature columns this horizon's model was trained on, in training
    /// order.
    pub fn feature_columns(&self) -> &'static [&'static str] {
        match self {
            Horizon::OneHour => &[COL_HOUR, COL_DAYOFWEEK],
            Horizon::OneDay => &[COL_HOUR, COL_DAYOFWEEK, COL_WIND_24, COL_FEELSLIKE_24],
        }
    }
}

/// Formats a `Horizon` using its short label.
///
/// # Examples
///
/// ```
/// use bikecast::Horizon;
///
/// assert_eq!(format!("{}", Horizon::OneHour), "1h");
/// assert_eq!(Horizon::OneDay.to_string(), "1day");
/// ```
impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Horizon::OneHour => write!(f, "1h"),
            Horizon::OneDay => write!(f, "1day"),
        }
    }
}

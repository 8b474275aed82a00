use crate::types::horizon::Horizon;
use chrono::{DateTime, FixedOffset};

/// One produced bike availability forecast.
///
/// `target` is `execution + horizon.offset()`; `bikes` is the current count
/// plus the model's prediction truncated to an integer.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// The lead time this forecast was produced for.
    pub horizon: Horizon,
    /// When the forecast was produced (New York local time).
    pub execution: DateTime<FixedOffset>,
    /// The moment the forecast is about.
    pub target: DateTime<FixedOffset>,
    /// Forecasted number of available bikes.
    pub bikes: i64,
}

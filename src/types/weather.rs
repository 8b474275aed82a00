//! The weather snapshot wrapper and the extraction of its next-day row.

use crate::error::BikecastError;
use polars::prelude::*;
use std::path::Path;

/// Column holding the forecast tag of each weather row.
pub const COL_FORECAST_TAG: &str = "TAG__Forecast";
/// Column holding the feels-like temperature in degrees Celsius.
pub const COL_FEELSLIKE_TEMP_C: &str = "feelslike_temp_c";
/// Column holding the wind speed in km/h.
pub const COL_WIND_KPH: &str = "wind_kph";
/// Column holding the textual weather condition.
pub const COL_CONDITION: &str = "condition";

/// Forecast tag of the row read for feature construction.
pub const NEXT_DAY_TAG: &str = "NextDay";

/// A snapshot of weather forecasts, one row per forecast tag.
///
/// The underlying `DataFrame` must carry the [`COL_FORECAST_TAG`],
/// [`COL_FEELSLIKE_TEMP_C`], [`COL_WIND_KPH`] and [`COL_CONDITION`] columns.
/// Only the row tagged [`NEXT_DAY_TAG`] is ever read.
#[derive(Debug, Clone)]
pub struct WeatherFrame {
    /// The underlying Polars DataFrame containing the weather rows.
    pub frame: DataFrame,
}

/// The next-day weather fields read from a [`WeatherFrame`].
#[derive(Debug, Clone, PartialEq)]
pub struct NextDayWeather {
    pub feelslike_temp_c: f64,
    pub wind_kph: f64,
    pub condition: String,
}

impl WeatherFrame {
    /// Wraps an existing `DataFrame` of weather rows.
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Reads a weather snapshot from a headered CSV file.
    pub fn read_csv(path: &Path) -> Result<Self, BikecastError> {
        Ok(Self::new(read_snapshot_csv(path)?))
    }

    /// Whether the snapshot holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    /// Extracts the single row tagged [`NEXT_DAY_TAG`].
    ///
    /// # Errors
    ///
    /// Returns [`BikecastError::ForecastTagNotFound`] when no row carries the
    /// tag, [`BikecastError::AmbiguousForecastTag`] when several do, and
    /// column-level errors when the row is missing a required field.
    pub fn next_day(&self) -> Result<NextDayWeather, BikecastError> {
        let filtered = self
            .frame
            .clone()
            .lazy()
            .filter(col(COL_FORECAST_TAG).eq(lit(NEXT_DAY_TAG)))
            .collect()?;

        if filtered.height() == 0 {
            return Err(BikecastError::ForecastTagNotFound {
                tag: NEXT_DAY_TAG.to_string(),
            });
        } else if filtered.height() > 1 {
            return Err(BikecastError::AmbiguousForecastTag {
                tag: NEXT_DAY_TAG.to_string(),
                count: filtered.height(),
            });
        }

        Ok(NextDayWeather {
            feelslike_temp_c: get_row_float(&filtered, COL_FEELSLIKE_TEMP_C)?,
            wind_kph: get_row_float(&filtered, COL_WIND_KPH)?,
            condition: get_row_str(&filtered, COL_CONDITION)?,
        })
    }
}

/// Reads a headered snapshot CSV into a DataFrame.
pub(crate) fn read_snapshot_csv(path: &Path) -> Result<DataFrame, BikecastError> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| BikecastError::SnapshotRead(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| BikecastError::SnapshotRead(path.to_path_buf(), e))
}

/// Retrieves a column by name from a snapshot DataFrame.
pub(crate) fn get_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, BikecastError> {
    df.column(name)
        .map_err(|e| BikecastError::ColumnNotFound(name.to_string(), e))
}

/// Extracts a float from row 0 of the named column, casting if needed.
pub(crate) fn get_row_float(df: &DataFrame, name: &str) -> Result<f64, BikecastError> {
    get_column(df, name)?
        .cast(&DataType::Float64)?
        .f64()?
        .get(0)
        .ok_or_else(|| BikecastError::MissingValue {
            column: name.to_string(),
        })
}

/// Extracts a string from row 0 of the named column.
fn get_row_str(df: &DataFrame, name: &str) -> Result<String, BikecastError> {
    get_column(df, name)?
        .str()?
        .get(0)
        .map(str::to_string)
        .ok_or_else(|| BikecastError::MissingValue {
            column: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_snapshot() -> WeatherFrame {
        WeatherFrame::new(
            df!(
                COL_FORECAST_TAG => ["NextHour", "NextDay"],
                COL_FEELSLIKE_TEMP_C => [9.0, 12.5],
                COL_WIND_KPH => [7.0, 20.0],
                COL_CONDITION => ["Cloudy", "Sunny"],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_next_day_picks_tagged_row() {
        let next_day = two_row_snapshot().next_day().unwrap();
        assert_eq!(
            next_day,
            NextDayWeather {
                feelslike_temp_c: 12.5,
                wind_kph: 20.0,
                condition: "Sunny".to_string(),
            }
        );
    }

    #[test]
    fn test_next_day_missing_tag() {
        let weather = WeatherFrame::new(
            df!(
                COL_FORECAST_TAG => ["NextHour"],
                COL_FEELSLIKE_TEMP_C => [9.0],
                COL_WIND_KPH => [7.0],
                COL_CONDITION => ["Cloudy"],
            )
            .unwrap(),
        );

        let err = weather.next_day().unwrap_err();
        assert!(matches!(err, BikecastError::ForecastTagNotFound { .. }));
    }

    #[test]
    fn test_next_day_duplicate_tag() {
        let weather = WeatherFrame::new(
            df!(
                COL_FORECAST_TAG => ["NextDay", "NextDay"],
                COL_FEELSLIKE_TEMP_C => [9.0, 12.5],
                COL_WIND_KPH => [7.0, 20.0],
                COL_CONDITION => ["Cloudy", "Sunny"],
            )
            .unwrap(),
        );

        let err = weather.next_day().unwrap_err();
        assert!(matches!(
            err,
            BikecastError::AmbiguousForecastTag { count: 2, .. }
        ));
    }

    #[test]
    fn test_next_day_accepts_integer_temperatures() {
        // CSV-read snapshots may parse whole-number fields as integers.
        let weather = WeatherFrame::new(
            df!(
                COL_FORECAST_TAG => ["NextDay"],
                COL_FEELSLIKE_TEMP_C => [12i64],
                COL_WIND_KPH => [20i64],
                COL_CONDITION => ["Sunny"],
            )
            .unwrap(),
        );

        let next_day = weather.next_day().unwrap();
        assert_eq!(next_day.feelslike_temp_c, 12.0);
        assert_eq!(next_day.wind_kph, 20.0);
    }

    #[test]
    fn test_empty_snapshot() {
        let weather = WeatherFrame::new(DataFrame::empty());
        assert!(weather.is_empty());
    }
}

//! Builds the single-row feature frame the regression models predict from.
//!
//! The frame combines a calendar decomposition of the execution timestamp
//! with the next-day fields of the weather snapshot. Column names follow the
//! schema the models were trained against.

use crate::error::BikecastError;
use crate::types::weather::WeatherFrame;
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use polars::prelude::*;

pub const COL_YEAR: &str = "year";
pub const COL_MONTH: &str = "month";
pub const COL_DAY: &str = "day";
pub const COL_HOUR: &str = "hour";
pub const COL_MINUTE: &str = "minute";
/// Day of week, 0 for Monday through 6 for Sunday.
pub const COL_DAYOFWEEK: &str = "dayofweek";
/// Next-day feels-like temperature, degrees Celsius.
pub const COL_FEELSLIKE_24: &str = "feelslike_temp_c_24";
/// Next-day wind speed, km/h.
pub const COL_WIND_24: &str = "wind_kph_24";
/// Next-day textual weather condition.
pub const COL_CONDITION_24: &str = "condition_24";

/// Builds the single-row feature frame for the given execution moment.
///
/// Calendar columns are derived from `moment` as-is, so callers are expected
/// to pass a timestamp already converted to the zone the models were trained
/// in (New York local time for the shipped models).
///
/// # Errors
///
/// Fails when the weather snapshot has no usable next-day row; see
/// [`WeatherFrame::next_day`].
pub fn feature_frame<T: TimeZone>(
    moment: &DateTime<T>,
    weather: &WeatherFrame,
) -> Result<DataFrame, BikecastError> {
    let next_day = weather.next_day()?;

    let frame = df!(
        COL_YEAR => [moment.year()],
        COL_MONTH => [moment.month() as i32],
        COL_DAY => [moment.day() as i32],
        COL_HOUR => [moment.hour() as i32],
        COL_MINUTE => [moment.minute() as i32],
        COL_DAYOFWEEK => [moment.weekday().num_days_from_monday() as i32],
        COL_FEELSLIKE_24 => [next_day.feelslike_temp_c],
        COL_WIND_24 => [next_day.wind_kph],
        // Present in the training schema; neither model reads it.
        COL_CONDITION_24 => [next_day.condition.as_str()],
    )?;

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::weather::{
        COL_CONDITION, COL_FEELSLIKE_TEMP_C, COL_FORECAST_TAG, COL_WIND_KPH,
    };
    use chrono_tz::America::New_York;

    fn sample_weather() -> WeatherFrame {
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

    fn get_i32(df: &DataFrame, name: &str) -> i32 {
        df.column(name).unwrap().i32().unwrap().get(0).unwrap()
    }

    #[test]
    fn test_calendar_decomposition() {
        // 2023-04-07 was a Friday.
        let moment = New_York.with_ymd_and_hms(2023, 4, 7, 14, 15, 0).unwrap();
        let frame = feature_frame(&moment, &sample_weather()).unwrap();

        assert_eq!(frame.height(), 1);
        assert_eq!(get_i32(&frame, COL_YEAR), 2023);
        assert_eq!(get_i32(&frame, COL_MONTH), 4);
        assert_eq!(get_i32(&frame, COL_DAY), 7);
        assert_eq!(get_i32(&frame, COL_HOUR), 14);
        assert_eq!(get_i32(&frame, COL_MINUTE), 15);
        assert_eq!(get_i32(&frame, COL_DAYOFWEEK), 4);
    }

    #[test]
    fn test_monday_is_zero() {
        let moment = New_York.with_ymd_and_hms(2024, 5, 6, 0, 0, 0).unwrap();
        let frame = feature_frame(&moment, &sample_weather()).unwrap();
        assert_eq!(get_i32(&frame, COL_DAYOFWEEK), 0);
    }

    #[test]
    fn test_next_day_weather_columns() {
        let moment = New_York.with_ymd_and_hms(2023, 4, 7, 14, 15, 0).unwrap();
        let frame = feature_frame(&moment, &sample_weather()).unwrap();

        let feelslike = frame
            .column(COL_FEELSLIKE_24)
            .unwrap()
            .f64()
            .unwrap()
            .get(0)
            .unwrap();
        let wind = frame.column(COL_WIND_24).unwrap().f64().unwrap().get(0).unwrap();
        let condition = frame
            .column(COL_CONDITION_24)
            .unwrap()
            .str()
            .unwrap()
            .get(0)
            .unwrap();

        assert_eq!(feelslike, 12.5);
        assert_eq!(wind, 20.0);
        assert_eq!(condition, "Sunny");
    }

    #[test]
    fn test_missing_next_day_row_fails() {
        let weather = WeatherFrame::new(
            df!(
                COL_FORECAST_TAG => ["NextHour"],
                COL_FEELSLIKE_TEMP_C => [9.0],
                COL_WIND_KPH => [7.0],
                COL_CONDITION => ["Cloudy"],
            )
            .unwrap(),
        );

        let moment = New_York.with_ymd_and_hms(2023, 4, 7, 14, 15, 0).unwrap();
        assert!(feature_frame(&moment, &weather).is_err());
    }
}

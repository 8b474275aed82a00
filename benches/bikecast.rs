use bikecast::{
    feature_frame, Horizon, RegressionModel, WeatherFrame, COL_CONDITION, COL_FEELSLIKE_TEMP_C,
    COL_FORECAST_TAG, COL_WIND_KPH,
};
use chrono::TimeZone;
use chrono_tz::America::New_York;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polars::df;

fn bench_forecast(c: &mut Criterion) {
    let weather = WeatherFrame::new(
        df!(
            COL_FORECAST_TAG => ["NextHour", "NextDay"],
            COL_FEELSLIKE_TEMP_C => [9.0, 12.5],
            COL_WIND_KPH => [7.0, 20.0],
            COL_CONDITION => ["Cloudy", "Sunny"],
        )
        .unwrap(),
    );
    let moment = New_York.with_ymd_and_hms(2024, 5, 6, 14, 15, 0).unwrap();
    let features = feature_frame(&moment, &weather).unwrap();
    let model = RegressionModel::new(
        "ML_1day_Forecast",
        Horizon::OneDay
            .feature_columns()
            .iter()
            .map(|&column| column.to_string())
            .collect(),
        vec![1.0, 1.0, 1.0, 1.0],
        0.5,
    )
    .unwrap();

    c.bench_function("feature_frame", |b| {
        b.iter(|| feature_frame(black_box(&moment), &weather))
    });
    c.bench_function("predict", |b| b.iter(|| model.predict(black_box(&features))));
}

criterion_group!(benches, bench_forecast);
criterion_main!(benches);

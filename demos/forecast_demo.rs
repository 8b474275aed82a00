use bikecast::{
    BikeFrame, Forecaster, Horizon, JsonLinesStream, ModelStore, RegressionModel, WeatherFrame,
    COL_CONDITION, COL_FEELSLIKE_TEMP_C, COL_FORECAST_TAG, COL_TOTAL_BIKES, COL_WIND_KPH,
};
use polars::df;
use std::io;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Lay out a model directory the way a training run would.
    let model_dir = tempfile::tempdir()?;
    write_demo_models(&ModelStore::new(model_dir.path())).await?;

    let bikes = BikeFrame::new(df!(COL_TOTAL_BIKES => [412i64])?);
    let weather = WeatherFrame::new(df!(
        COL_FORECAST_TAG => ["NextHour", "NextDay"],
        COL_FEELSLIKE_TEMP_C => [9.0, 12.5],
        COL_WIND_KPH => [7.0, 20.0],
        COL_CONDITION => ["Cloudy", "Sunny"],
    )?);

    let forecaster = Forecaster::with_model_folder(model_dir.path().to_path_buf()).await?;

    let mut current = JsonLinesStream::new(io::stdout());
    let mut one_hour = JsonLinesStream::new(io::stdout());
    let mut one_day = JsonLinesStream::new(io::stdout());

    forecaster
        .write_forecasts()
        .bikes(&bikes)
        .weather(&weather)
        .current(&mut current)
        .one_hour(&mut one_hour)
        .one_day(&mut one_day)
        .call()
        .await?;

    Ok(())
}

async fn write_demo_models(store: &ModelStore) -> Result<(), Box<dyn std::error::Error>> {
    let one_hour = RegressionModel::new(
        "ML_1h_Forecast",
        columns(Horizon::OneHour),
        vec![-0.8, 2.5],
        6.0,
    )?;
    let one_day = RegressionModel::new(
        "ML_1day_Forecast",
        columns(Horizon::OneDay),
        vec![-0.6, 1.9, -0.4, 1.1],
        12.0,
    )?;

    store.save(Horizon::OneHour, &one_hour).await?;
    store.save(Horizon::OneDay, &one_day).await?;
    Ok(())
}

fn columns(horizon: Horizon) -> Vec<String> {
    horizon
        .feature_columns()
        .iter()
        .map(|&column| column.to_string())
        .collect()
}

//! Mean forecast of annual electricity sales with Student's t intervals.
//!
//! Run with: RUST_LOG=debug cargo run --example mean_forecast

use timeseries_forecast::core::{Forecast, ForecastConfig, TimeSeries};
use timeseries_forecast::models::baseline::MeanForecast;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Mean forecast ===\n");

    // 1. Annual electricity sales, South Australia 1989-2008 (GWh)
    let sales = TimeSeries::annual(
        1989,
        vec![
            2354.34, 2379.71, 2318.52, 2468.99, 2386.09, 2569.47, 2575.72, 2762.72, 2844.50,
            3000.70, 3108.10, 3357.50, 3075.70, 3180.60, 3221.60, 3176.20, 3430.60, 3527.48,
            3637.89, 3655.00,
        ],
    )
    .unwrap();
    println!("{}\n", sales);

    // 2. Smooth with a centered 4-year moving average
    println!("--- Centered moving average (2x4) ---");
    let smoothed = sales.centered_moving_average(4).unwrap();
    for (time, value) in smoothed.observation_times().iter().zip(smoothed.values()) {
        println!("  {}: {:.2}", time.format("%Y"), value);
    }

    // 3. Forecast five years at 90% confidence
    println!("\n--- Forecast with 90% prediction intervals ---");
    let config = ForecastConfig::default().with_steps(5).with_alpha(0.1);
    let forecast = MeanForecast::with_config(&sales, config).unwrap();

    println!("{:>6} {:>12} {:>12} {:>12}", "year", "Lower", "Forecast", "Upper");
    println!("{:-<46}", "");
    for (i, time) in forecast.forecast().observation_times().iter().enumerate() {
        println!(
            "{:>6} {:>12.2} {:>12.2} {:>12.2}",
            time.format("%Y"),
            forecast.lower_prediction_values().at(i).unwrap(),
            forecast.forecast().at(i).unwrap(),
            forecast.upper_prediction_values().at(i).unwrap()
        );
    }
}

//! Simulate a random walk, inspect its autocorrelation and forecast it.
//!
//! Run with: RUST_LOG=debug cargo run --example random_walk

use rand::rngs::StdRng;
use rand::SeedableRng;
use timeseries_forecast::core::{Forecast, ForecastConfig, TimeSeries};
use timeseries_forecast::models::baseline::{RandomWalk, RandomWalkForecast};
use timeseries_forecast::models::Model;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Random walk ===\n");

    // 1. Draw 120 standard Gaussian increments and accumulate them
    let mut rng = StdRng::seed_from_u64(2024);
    let increments = RandomWalk::simulate_standard(120, &mut rng).unwrap();
    let levels: Vec<f64> = increments
        .time_series()
        .values()
        .iter()
        .scan(100.0, |level, e| {
            *level += e;
            Some(*level)
        })
        .collect();
    let walk = TimeSeries::monthly(2010, 1, levels).unwrap();
    println!("{}\n", walk);

    // 2. Levels are strongly autocorrelated, their differences are not
    println!("--- Autocorrelation ---");
    let acf_levels = walk.acf_plot_data(5);
    let acf_diffs = walk.difference_once().unwrap().acf_plot_data(5);
    println!(
        "  white noise bounds: [{:.3}, {:.3}]",
        acf_diffs.lower_bound, acf_diffs.upper_bound
    );
    for lag in acf_levels.lags.iter().skip(1) {
        println!(
            "  lag {}: levels {:>7.3}  differences {:>7.3}",
            lag, acf_levels.acf[*lag], acf_diffs.acf[*lag]
        );
    }

    // 3. Forecast six months ahead
    println!("\n--- Forecast with 95% prediction intervals ---");
    let config = ForecastConfig::default().with_steps(6);
    let forecast = RandomWalkForecast::with_config(&walk, config).unwrap();
    for step in 1..=forecast.steps() {
        let interval = forecast.prediction_interval(step).unwrap();
        println!(
            "  h={}: {:.2} in {}",
            step,
            forecast.forecast().at(step - 1).unwrap(),
            interval
        );
    }
}

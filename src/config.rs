// src/config.rs

use std::env;
use std::str::FromStr;

use dotenvy::dotenv;

use crate::interpretation::{EngineSettings, zscore::PopulationParams};

#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub engine: EngineSettings,
}

/// Reads and parses an env var, falling back to `default` when it is unset
/// or does not parse.
fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unparsable {}={:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let port = parse_var("APP_PORT", 3000u16);

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let defaults = EngineSettings::default();

        let mean = parse_var("TPA_POPULATION_MEAN", defaults.population.mean);
        let mut std_dev = parse_var("TPA_POPULATION_STDDEV", defaults.population.std_dev);
        if !(std_dev > 0.0 && std_dev.is_finite()) {
            tracing::warn!(
                "TPA_POPULATION_STDDEV must be positive, using {}",
                defaults.population.std_dev
            );
            std_dev = defaults.population.std_dev;
        }

        let default_minimum_score =
            parse_var("TPA_DEFAULT_MINIMUM_SCORE", defaults.default_minimum_score).min(100);

        Self {
            rust_log,
            port,
            cors_origins,
            engine: EngineSettings {
                population: PopulationParams { mean, std_dev },
                default_minimum_score,
            },
        }
    }
}

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Analysis, Config, ProfitRankBonusParams, Strategies};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the configuration file,
/// deserializes it into our strongly-typed `Config` struct, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from("config.toml")
}

/// Loads the configuration from an explicit path. Every field has a default,
/// so a partial file only needs to name what it overrides.
pub fn load_config_from(path: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(path))
        // Optionally, one could add environment variables here as well.
        // .add_source(config::Environment::with_prefix("SALESBOARD"));
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_config_encodes_documented_bonus_tiers() {
        let config = Config::default();
        assert_eq!(config.analysis.top_products_limit, 10);
        assert_eq!(config.strategies.profit_rank_bonus.first_place_rate, dec!(0.15));
        assert_eq!(config.strategies.profit_rank_bonus.podium_rate, dec!(0.10));
        assert_eq!(config.strategies.profit_rank_bonus.default_rate, dec!(0.05));
    }
}

use strategies::StrategyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid input data: {0}")]
    InvalidData(String),

    #[error("Invalid analysis options: {0}")]
    InvalidStrategy(String),

    #[error("Purchase record references unknown seller id '{0}'")]
    UnknownSeller(String),

    #[error("Line item references unknown product sku '{0}'")]
    UnknownSku(String),

    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

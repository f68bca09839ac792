use thiserror::Error;

/// Main error type for the wallet CLI
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Gateway error: {0}")]
    GatewayError(String),

    #[error("Gateway call timed out after {0} seconds")]
    GatewayTimeout(u64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

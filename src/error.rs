//! Error types for the LiPayKripto SDK

use thiserror::Error;

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, LiPayError>;

/// Fallback message used when the gateway supplies no `error` field
pub const DEFAULT_ERROR_MESSAGE: &str = "unknown error";

/// Main error type for LiPayKripto operations
#[derive(Error, Debug)]
pub enum LiPayError {
    /// Token exchange did not yield a bearer token
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Payment endpoint refused to create the payment request
    #[error("Payment creation failed: {message}")]
    PaymentCreation { message: String },

    /// Withdraw endpoint refused to create the withdrawal request
    #[error("Withdrawal creation failed: {message}")]
    WithdrawalCreation { message: String },

    /// Gateway answered with an HTTP error status
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Network-level failure (connection, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("Response format error: {0}")]
    ResponseFormat(#[from] serde_json::Error),

    /// Coin type outside the supported set
    #[error("Unsupported coin type: {coin}")]
    UnsupportedCoin { coin: String },
}

impl LiPayError {
    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a payment creation error
    pub fn payment_creation(message: impl Into<String>) -> Self {
        Self::PaymentCreation {
            message: message.into(),
        }
    }

    /// Create a withdrawal creation error
    pub fn withdrawal_creation(message: impl Into<String>) -> Self {
        Self::WithdrawalCreation {
            message: message.into(),
        }
    }

    /// Create an API error from a status code and server message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an unsupported coin error
    pub fn unsupported_coin(coin: impl Into<String>) -> Self {
        Self::UnsupportedCoin { coin: coin.into() }
    }
}

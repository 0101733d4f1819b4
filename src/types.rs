//! Core types for the LiPayKripto gateway API

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::LiPayError;

/// Default production endpoint of the gateway
pub const DEFAULT_API_URL: &str = "https://lipaykripto.com/api";

/// Default request timeout applied to every call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the gateway client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the gateway API
    pub api_url: String,
    /// Request timeout applied to every call
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration against a custom base URL
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Crypto currencies the gateway pays withdrawals out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoinType {
    Trx,
    Usdt,
    Eth,
}

impl CoinType {
    /// Wire identifier, always uppercase
    pub fn as_str(&self) -> &'static str {
        match self {
            CoinType::Trx => "TRX",
            CoinType::Usdt => "USDT",
            CoinType::Eth => "ETH",
        }
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoinType {
    type Err = LiPayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TRX" => Ok(CoinType::Trx),
            "USDT" => Ok(CoinType::Usdt),
            "ETH" => Ok(CoinType::Eth),
            _ => Err(LiPayError::unsupported_coin(s)),
        }
    }
}

/// Credential exchange request for the token endpoint
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

/// Token endpoint response; `token` is absent when the exchange failed
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: Option<String>,
    pub error: Option<String>,
}

/// Payment creation request
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequest {
    /// Payment amount in TRY
    #[serde(rename = "tryAmount")]
    pub try_amount: Decimal,
    /// Caller-supplied transaction reference
    #[serde(rename = "paymentId")]
    pub payment_id: String,
    /// Callback URL notified on payment status changes
    #[serde(rename = "webhookUrl")]
    pub webhook_url: String,
}

impl PaymentRequest {
    /// Create a new payment request
    pub fn new(
        amount: Decimal,
        payment_id: impl Into<String>,
        webhook_url: impl Into<String>,
    ) -> Self {
        Self {
            try_amount: amount,
            payment_id: payment_id.into(),
            webhook_url: webhook_url.into(),
        }
    }
}

/// Payment creation response.
///
/// Only `success`, `paymentUrl` and `error` are typed; everything else the
/// gateway returns is preserved in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    #[serde(default)]
    pub success: bool,
    /// URL to redirect the end user to
    #[serde(rename = "paymentUrl", skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Withdrawal request.
///
/// Wire field names follow the gateway's withdraw endpoint; they are
/// independent of the payment payload's names. The `signature` field carries
/// the HMAC-SHA256 digest computed over the other fields, which is the only
/// authentication this endpoint uses.
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawRequest {
    /// Withdrawal amount in TRY
    pub try_amount: Decimal,
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "requestId")]
    pub request_id: String,
    /// Destination wallet address
    pub wallet_address: String,
    /// Coin to pay out in, uppercase on the wire
    pub coin_type: CoinType,
    /// Callback URL notified on withdrawal status changes
    pub webhook_url: String,
    /// ISO-8601 creation timestamp, caller-supplied and passed through as-is
    pub created_at: String,
    /// Lowercase hex HMAC-SHA256 over the canonical field concatenation
    pub signature: String,
}

/// Withdrawal creation response; untyped fields are preserved in `extra`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Current UTC time as an ISO-8601 string suitable for `created_at`
pub fn current_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

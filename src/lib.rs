//! # lipaykripto - LiPayKripto payment gateway SDK
//!
//! A Rust client for the LiPayKripto payment gateway. The library covers the
//! two outbound operations the gateway exposes to merchants: creating a
//! fiat-to-crypto payment request and creating a crypto withdrawal request.
//!
//! ```no_run
//! use lipaykripto::{CoinType, LiPayClient};
//!
//! # async fn demo() -> lipaykripto::Result<()> {
//! let client = LiPayClient::new("YOUR_CLIENT_ID", "YOUR_CLIENT_SECRET");
//!
//! // Payment: token exchange then an authorized payment call
//! let payment = client
//!     .create_payment("100.0".parse().unwrap(), "ORDER123", "https://example.com/webhook")
//!     .await?;
//! println!("payment url: {:?}", payment.payment_url);
//!
//! // Withdrawal: a single HMAC-signed call
//! let withdraw = client
//!     .create_withdraw(
//!         "250.0".parse().unwrap(),
//!         "WD-1001",
//!         "TXYZa1b2c3",
//!         CoinType::Usdt,
//!         "https://example.com/webhook",
//!         &lipaykripto::current_timestamp(),
//!     )
//!     .await?;
//! println!("withdraw accepted: {}", withdraw.success);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod crypto;
pub mod error;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::LiPayClient;
pub use error::{LiPayError, Result};
pub use types::*;

/// Current version of the lipaykripto library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

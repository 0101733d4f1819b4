//! Gateway client for payment and withdrawal requests

use rust_decimal::Decimal;

use crate::crypto;
use crate::error::{LiPayError, Result, DEFAULT_ERROR_MESSAGE};
use crate::transport::Transport;
use crate::types::{
    ClientConfig, CoinType, PaymentRequest, PaymentResponse, TokenRequest, TokenResponse,
    WithdrawRequest, WithdrawResponse,
};

/// Token exchange endpoint
pub const TOKEN_PATH: &str = "/auth/token";
/// Payment creation endpoint
pub const PAYMENT_PATH: &str = "/external-payment-request";
/// Withdrawal endpoint
pub const WITHDRAW_PATH: &str = "/withdraw";

/// Client for the LiPayKripto gateway API.
///
/// Holds the merchant credentials and the base URL. Every operation computes
/// its token, signature and request body fresh, so one client can be shared
/// across concurrent tasks; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct LiPayClient {
    client_id: String,
    client_secret: String,
    transport: Transport,
}

impl LiPayClient {
    /// Create a client against the production gateway.
    ///
    /// Credentials are stored as given; malformed credentials surface as an
    /// authentication failure from the gateway, not as a local error.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self::with_config(client_id, client_secret, ClientConfig::default())
    }

    /// Create a client with a custom base URL or timeout
    pub fn with_config(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        config: ClientConfig,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            transport: Transport::new(config.api_url, config.timeout),
        }
    }

    /// Base URL of the gateway this client talks to
    pub fn api_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Create a payment request.
    ///
    /// Exchanges the stored credentials for a short-lived bearer token, then
    /// submits the payment call authorized with that token. The token is not
    /// reused across calls. On success the full response body is returned; it
    /// contains at minimum the `paymentUrl` to redirect the end user to.
    ///
    /// The amount is passed through uninspected; the gateway is authoritative
    /// for amount validation.
    pub async fn create_payment(
        &self,
        amount: Decimal,
        payment_id: &str,
        webhook_url: &str,
    ) -> Result<PaymentResponse> {
        let token = self.fetch_token().await?;

        let request = PaymentRequest::new(amount, payment_id, webhook_url);
        let response: PaymentResponse = self
            .transport
            .post_json(PAYMENT_PATH, &request, Some(&token))
            .await?;

        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
            return Err(LiPayError::payment_creation(message));
        }

        Ok(response)
    }

    /// Create a withdrawal request.
    ///
    /// The call is authenticated by an HMAC-SHA256 signature embedded in the
    /// payload instead of a bearer token. `created_at` must be an ISO-8601
    /// timestamp; it is passed through unvalidated, and a timestamp the
    /// gateway disagrees with manifests as a signature mismatch on the server
    /// side. See [`crate::types::current_timestamp`].
    pub async fn create_withdraw(
        &self,
        amount: Decimal,
        request_id: &str,
        wallet_address: &str,
        coin_type: CoinType,
        webhook_url: &str,
        created_at: &str,
    ) -> Result<WithdrawResponse> {
        let base = crypto::withdraw_signature_base(
            &amount,
            &self.client_id,
            request_id,
            wallet_address,
            coin_type,
            webhook_url,
            created_at,
        );
        let signature = crypto::hmac_sha256_hex(&self.client_secret, &base);

        let request = WithdrawRequest {
            try_amount: amount,
            client_id: self.client_id.clone(),
            request_id: request_id.to_string(),
            wallet_address: wallet_address.to_string(),
            coin_type,
            webhook_url: webhook_url.to_string(),
            created_at: created_at.to_string(),
            signature,
        };

        let response: WithdrawResponse = self
            .transport
            .post_json(WITHDRAW_PATH, &request, None)
            .await?;

        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
            return Err(LiPayError::withdrawal_creation(message));
        }

        Ok(response)
    }

    /// Exchange the stored credentials for a short-lived bearer token
    async fn fetch_token(&self) -> Result<String> {
        let request = TokenRequest {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        };

        let TokenResponse { token, error } = self
            .transport
            .post_json(TOKEN_PATH, &request, None)
            .await?;

        token.ok_or_else(|| {
            let message = error.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
            LiPayError::authentication(message)
        })
    }
}

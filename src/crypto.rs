//! Request signing for withdrawal calls

use hmac::{Hmac, Mac};
use rust_decimal::Decimal;
use sha2::Sha256;

use crate::types::CoinType;

type HmacSha256 = Hmac<Sha256>;

/// Build the canonical signing input for a withdrawal request.
///
/// The field order is fixed by the gateway: amount, client id, request id,
/// wallet address, uppercased coin type, webhook URL, creation timestamp.
/// The server recomputes the digest from the transmitted fields in the same
/// order, so any reordering or omission is rejected as a signature mismatch.
/// The amount is rendered with the same `Display` form that goes on the wire.
pub fn withdraw_signature_base(
    amount: &Decimal,
    client_id: &str,
    request_id: &str,
    wallet_address: &str,
    coin_type: CoinType,
    webhook_url: &str,
    created_at: &str,
) -> String {
    format!(
        "{}{}{}{}{}{}{}",
        amount,
        client_id,
        request_id,
        wallet_address,
        coin_type.as_str(),
        webhook_url,
        created_at
    )
}

/// HMAC-SHA256 over `message` keyed by `secret`, encoded as lowercase hex
pub fn hmac_sha256_hex(secret: &str, message: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

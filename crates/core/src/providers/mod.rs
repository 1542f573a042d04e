pub mod registry;
pub mod rpc;
pub mod traits;

// API provider implementations
pub mod coingecko;
pub mod helius;

use serde_json::Value;

use crate::errors::CoreError;

/// Decode a raw response body. Text that is not JSON at all is a
/// `CoreError::Deserialization`; a JSON value of the wrong shape is left to
/// each provider's parser.
pub fn decode_body(text: &str) -> Result<Value, CoreError> {
    Ok(serde_json::from_str(text)?)
}

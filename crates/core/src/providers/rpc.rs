//! JSON-RPC 2.0 envelope shared by every Solana/Helius call.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;

pub const JSONRPC_VERSION: &str = "2.0";

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P: Serialize> {
    pub jsonrpc: &'static str,
    pub id: &'a str,
    pub method: &'a str,
    pub params: P,
}

impl<'a, P: Serialize> RpcRequest<'a, P> {
    pub fn new(id: &'a str, method: &'a str, params: P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// Unwrap a JSON-RPC response body into its typed `result`.
///
/// An `error` member becomes `CoreError::Api`; a missing or mistyped
/// `result` becomes `CoreError::MalformedResponse`.
pub fn parse_response<T: DeserializeOwned>(
    provider: &str,
    method: &str,
    mut body: Value,
) -> Result<T, CoreError> {
    if let Some(error) = body.get("error").filter(|e| !e.is_null()) {
        let message = match serde_json::from_value::<RpcErrorObject>(error.clone()) {
            Ok(err) => format!("{method} failed with code {}: {}", err.code, err.message),
            Err(_) => format!("{method} failed: {error}"),
        };
        return Err(CoreError::api(provider, message));
    }

    let result = body
        .get_mut("result")
        .map(Value::take)
        .ok_or_else(|| CoreError::malformed(provider, format!("{method}: missing `result`")))?;

    serde_json::from_value(result)
        .map_err(|e| CoreError::malformed(provider, format!("{method}: unexpected result shape: {e}")))
}

use thiserror::Error;

/// Unified error type for the entire wallet-dashboard-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Malformed response ({provider}): {message}")]
    MalformedResponse {
        provider: String,
        message: String,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid account address: {0}")]
    InvalidAddress(String),

    // ── Session / Presentation ──────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error("Load cancelled")]
    Cancelled,
}

impl CoreError {
    /// Shorthand for a `MalformedResponse` raised by a named provider.
    pub fn malformed(provider: &str, message: impl Into<String>) -> Self {
        CoreError::MalformedResponse {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// Shorthand for an `Api` error raised by a named provider.
    pub fn api(provider: &str, message: impl Into<String>) -> Self {
        CoreError::Api {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // The RPC endpoint carries the api key as a query parameter and
        // reqwest errors embed the full URL.
        CoreError::Network(redact_query(&e.to_string()))
    }
}

impl From<futures::future::Aborted> for CoreError {
    fn from(_: futures::future::Aborted) -> Self {
        CoreError::Cancelled
    }
}

/// Replace everything after the first `?` with a placeholder.
pub(crate) fn redact_query(msg: &str) -> String {
    match msg.find('?') {
        Some(idx) => format!("{}?<query redacted>", &msg[..idx]),
        None => msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_api_key_in_url() {
        let msg = "error sending request for url (https://rpc.example/?api-key=secret)";
        let out = redact_query(msg);
        assert!(!out.contains("secret"));
        assert_eq!(out, "error sending request for url (https://rpc.example/?<query redacted>");
    }

    #[test]
    fn leaves_plain_messages_alone() {
        assert_eq!(redact_query("connection reset"), "connection reset");
    }
}

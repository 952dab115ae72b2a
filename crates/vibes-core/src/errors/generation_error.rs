/// Text generation subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("{provider} timed out after {secs}s")]
    Timeout { provider: String, secs: u64 },

    #[error("provider returned {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },
}

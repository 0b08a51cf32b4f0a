/// Errors produced while building actions from dynamic options or decoding
/// inbound payloads.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing key: {0}")]
    MissingKey(String),

    #[error("unsupported shape for `{field}`: expected {expected}")]
    UnsupportedShape {
        field: &'static str,
        expected: &'static str,
    },

    #[error("invalid options for `{action}`: {source}")]
    InvalidOptions {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown action: {0}")]
    UnknownAction(String),
}

impl Error {
    pub(crate) fn missing(key: &str) -> Self {
        Error::MissingKey(key.to_string())
    }
}

// Client error types for the Consul SDK

/// Errors that can occur during Consul client operations
#[derive(Debug, thiserror::Error)]
pub enum ConsulError {
    /// The agent answered with a status code other than 200 OK.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// A 200 response was missing a required field or header.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ConsulError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConsulError::UnexpectedStatus {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected status 500: internal error");

        let err = ConsulError::MalformedResponse("missing X-Consul-Index header".to_string());
        assert_eq!(
            err.to_string(),
            "malformed response: missing X-Consul-Index header"
        );
    }
}

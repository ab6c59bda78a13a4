use thiserror::Error;

/// Everything that can go wrong while fetching one product attribute.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{}", error_chain(.source))]
    Network {
        address: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request failed to {address}")]
    Status {
        address: String,
        status: reqwest::StatusCode,
    },
    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("there were no shipping elements")]
    NoShippingElements,
    #[error("product record is missing field: {0}")]
    MissingField(&'static str),
    #[error("fetch task did not complete: {0}")]
    Task(String),
}

/// Joins an error and all of its causes, outermost first.
///
/// reqwest only names the failed URL in its own message; the reason
/// (refused connection, DNS failure, ...) lives further down the chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut cause = std::error::Error::source(err);
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = std::error::Error::source(inner);
    }
    message
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid load mode: {0} (expected `concurrent` or `sequential`)")]
    InvalidLoadMode(String),
    #[error("Invalid error policy: {0} (expected `exit` or `propagate`)")]
    InvalidErrorPolicy(String),
}

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum BadsecError {
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Response arrived with a status code other than 200.
    #[error("request to {path} failed: unexpected status code {status}")]
    UnexpectedStatus {
        /// Status code of the rejected response.
        status: u16,
        /// Request path, for attribution in logs.
        path: String,
    },
    /// Every attempt in the retry budget failed; wraps the last failure.
    #[error("request failed after {attempts} attempts")]
    RetriesExhausted {
        /// Number of attempts made, equal to the configured budget.
        attempts: u32,
        /// The failure observed on the final attempt.
        #[source]
        source: Box<BadsecError>,
    },
    /// Auth response carried no usable `Badsec-Authentication-Token` header.
    #[error("auth response is missing the Badsec-Authentication-Token header")]
    MissingTokenHeader,
    /// Retry budget must allow at least one attempt.
    #[error("allowed retries must be at least 1, got {0}")]
    InvalidRetryBudget(u32),
}

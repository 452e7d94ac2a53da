use reqwest::header::HeaderMap;

/// Normalized result of one successful request.
#[derive(Clone, Debug)]
pub struct Response {
    /// Response headers. `HeaderMap` lookups are case-insensitive.
    pub headers: HeaderMap,
    /// Fully drained response body, chunk order preserved.
    pub body: String,
}

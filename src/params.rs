use std::collections::HashMap;

use reqwest::Method;

/// Parameters for one HTTP request against the BADSEC service.
///
/// Headers stay plain strings so call sites can augment them freely before
/// dispatch; an invalid name or value surfaces at send time as a transport
/// error rather than panicking here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestParams {
    /// Target host, without scheme.
    pub host: String,
    /// Target port.
    pub port: u16,
    /// Request path, including the leading slash.
    pub path: String,
    /// HTTP method.
    pub method: Method,
    /// Request headers, name to value.
    pub headers: HashMap<String, String>,
}

impl RequestParams {
    /// Builds GET request parameters.
    pub fn get(host: impl Into<String>, port: u16, path: impl Into<String>) -> Self {
        Self::with_method(Method::GET, host, port, path)
    }

    /// Builds HEAD request parameters.
    pub fn head(host: impl Into<String>, port: u16, path: impl Into<String>) -> Self {
        Self::with_method(Method::HEAD, host, port, path)
    }

    fn with_method(
        method: Method,
        host: impl Into<String>,
        port: u16,
        path: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            path: path.into(),
            method,
            headers: HashMap::new(),
        }
    }

    /// Adds a header, replacing any previous value under the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Formats the full request URL.
    ///
    /// Example: `RequestParams::get("0.0.0.0", 8888, "/users")` →
    /// `"http://0.0.0.0:8888/users"`
    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use crate::RequestParams;

    #[test]
    fn constructors_set_method() {
        let get = RequestParams::get("localhost", 8888, "/users");
        let head = RequestParams::head("localhost", 8888, "/auth");
        assert_eq!(get.method, Method::GET);
        assert_eq!(head.method, Method::HEAD);
    }

    #[test]
    fn url_formatting() {
        let params = RequestParams::get("0.0.0.0", 8888, "/users");
        assert_eq!(params.url(), "http://0.0.0.0:8888/users");
    }

    #[test]
    fn with_header_replaces_existing_value() {
        let params = RequestParams::get("localhost", 8888, "/users")
            .with_header("X-Request-Checksum", "aaa")
            .with_header("X-Request-Checksum", "bbb");
        assert_eq!(
            params.headers.get("X-Request-Checksum").map(String::as_str),
            Some("bbb")
        );
    }
}

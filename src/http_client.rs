/// A simple wrapper around `reqwest::Client` used to perform the HTTP
/// round-trips of the Reporting API.
///
/// The client carries no configuration of its own: timeouts, TLS and
/// connection reuse are left to the transport's defaults, and every call
/// is a single independent GET. Clones share the underlying connection
/// pool.
#[derive(Debug, Clone)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
}

impl HTTPClient {
    pub(crate) fn new() -> HTTPClient {
        HTTPClient { client: reqwest::Client::new() }
    }

    /// Issues a GET against `url` and returns the raw response body.
    ///
    /// The body is returned unmodified whatever its content; transport
    /// failures propagate as the `reqwest` error that raised them.
    pub(crate) async fn get_text(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client.get(url).send().await?.text().await
    }
}

use strum_macros::{Display, EnumIter};

/// Serialization formats the Reporting API can answer in.
///
/// The `Display` output is the exact wire value of the `format` argument.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Default)]
#[strum(serialize_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
    Csv,
    Tsv,
    Html,
    Rss,
}

/// Connection settings for a Piwik server.
///
/// Holds everything a request needs besides its operation-specific
/// arguments: the endpoint URL, the authentication token (empty string
/// means unauthenticated) and the response format. All three stay
/// mutable for the lifetime of the client.
#[derive(Debug, Clone)]
pub struct PiwikConfig {
    /// Base URL of the Reporting API endpoint, e.g. `"https://stats.example.org/index.php"`.
    piwik_url: String,
    /// Authentication token appended to every request as `token_auth`.
    token_auth: String,
    /// Format the server should serialize its replies in.
    format: ResponseFormat,
}

impl PiwikConfig {
    pub fn new(piwik_url: &str, token_auth: &str, format: ResponseFormat) -> PiwikConfig {
        PiwikConfig {
            piwik_url: String::from(piwik_url),
            token_auth: String::from(token_auth),
            format,
        }
    }

    pub fn piwik_url(&self) -> &str { self.piwik_url.as_str() }
    pub fn set_piwik_url(&mut self, piwik_url: &str) { self.piwik_url = String::from(piwik_url); }

    pub fn token_auth(&self) -> &str { self.token_auth.as_str() }
    pub fn set_token_auth(&mut self, token_auth: &str) { self.token_auth = String::from(token_auth); }

    pub fn format(&self) -> ResponseFormat { self.format }
    pub fn set_format(&mut self, format: ResponseFormat) { self.format = format; }
}

/// Reply of `UsersManager.getTokenAuth`: `{"value": "<token>"}`.
///
/// Error replies carry `result`/`message` instead of `value`, so the
/// field stays `None` for them and the credential flow leaves the
/// configured token untouched.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct TokenAuthResponse {
    #[serde(default)]
    pub(crate) value: Option<String>,
}

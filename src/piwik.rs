use md5::{Digest, Md5};

use crate::config::{PiwikConfig, ResponseFormat};
use crate::http_client::HTTPClient;
use crate::http_request::request_common::{
    API_MODULE, ReportingRequestType, append_query, encode_query, merge_fixed_args,
    push_if_present,
};
use crate::http_request::sites_manager::{
    GetAllSitesIdRequest, GetAllSitesRequest, GetSitesIdFromSiteUrlRequest,
};
use crate::http_request::users_manager::{
    AccessLevel, AddUserRequest, DeleteUserRequest, GetSitesAccessFromUserRequest,
    GetTokenAuthRequest, GetUserRequest, GetUsersAccessFromSiteRequest,
    GetUsersSitesFromAccessRequest, GetUsersWithSiteAccessRequest, SetUserAccessRequest,
    UpdateUserRequest, UserExistsRequest,
};
use crate::http_response::token_auth::TokenAuthResponse;
use crate::{event, warn};

/// Client for the Piwik Reporting API.
///
/// One method per remote operation: each call builds the endpoint URL
/// from the configured connection settings, performs a single GET and
/// returns the raw response body as-is. The body's shape depends on the
/// configured [`ResponseFormat`]; interpreting it, including spotting the
/// API's `{"result":"error",...}` replies, is left to the caller.
///
/// The configuration stays mutable between calls, but the client is not
/// meant for concurrent mutation from several tasks; clone it instead.
#[derive(Debug, Clone)]
pub struct Piwik {
    config: PiwikConfig,
    http: HTTPClient,
}

impl Piwik {
    /// Constructs a client for the Reporting API at `piwik_url`.
    ///
    /// An empty `token_auth` means unauthenticated; most operations will
    /// then be rejected remotely.
    pub fn new(piwik_url: &str, token_auth: &str, format: ResponseFormat) -> Piwik {
        Piwik {
            config: PiwikConfig::new(piwik_url, token_auth, format),
            http: HTTPClient::new(),
        }
    }

    pub fn piwik_url(&self) -> &str { self.config.piwik_url() }
    pub fn set_piwik_url(&mut self, piwik_url: &str) { self.config.set_piwik_url(piwik_url); }

    pub fn token_auth(&self) -> &str { self.config.token_auth() }
    pub fn set_token_auth(&mut self, token_auth: &str) { self.config.set_token_auth(token_auth); }

    pub fn format(&self) -> ResponseFormat { self.config.format() }
    pub fn set_format(&mut self, format: ResponseFormat) { self.config.set_format(format); }

    /// Builds the full endpoint URL for a request: operation arguments
    /// first, then the fixed `module`/`method`/`format`/`token_auth`
    /// keys, values percent-encoded and appended after a literal `?`.
    fn endpoint_url<R: ReportingRequestType>(&self, request: &R) -> String {
        let mut args = request.query_args();
        merge_fixed_args(&mut args, [
            ("module", String::from(API_MODULE)),
            ("method", String::from(request.method())),
            ("format", self.config.format().to_string()),
            ("token_auth", String::from(self.config.token_auth())),
        ]);
        append_query(self.config.piwik_url(), &encode_query(&args))
    }

    /// Performs one request/response round-trip and returns the raw body.
    async fn ask<R: ReportingRequestType>(&self, request: &R) -> Result<String, reqwest::Error> {
        let url = self.endpoint_url(request);
        event!("GET {url}");
        self.http.get_text(&url).await
    }

    // SitesManager operations

    pub async fn sites_manager_get_all_sites(&self) -> Result<String, reqwest::Error> {
        self.ask(&GetAllSitesRequest).await
    }

    pub async fn sites_manager_get_all_sites_id(&self) -> Result<String, reqwest::Error> {
        self.ask(&GetAllSitesIdRequest).await
    }

    pub async fn sites_manager_get_sites_id_from_site_url(
        &self,
        url: &str,
    ) -> Result<String, reqwest::Error> {
        self.ask(&GetSitesIdFromSiteUrlRequest { url: String::from(url) }).await
    }

    // UsersManager operations

    /// Creates a user.
    ///
    /// # Arguments
    /// * `user_login` – Login of the new user.
    /// * `password` – Its password, in clear.
    /// * `email` – Its email address.
    /// * `alias` – Optional display alias; `None` and `Some("")` are both
    ///   left out of the request.
    pub async fn users_manager_add_user(
        &self,
        user_login: &str,
        password: &str,
        email: &str,
        alias: Option<&str>,
    ) -> Result<String, reqwest::Error> {
        self.ask(&AddUserRequest {
            user_login: String::from(user_login),
            password: String::from(password),
            email: String::from(email),
            alias: alias.map(String::from),
        })
        .await
    }

    pub async fn users_manager_get_user(&self, user_login: &str) -> Result<String, reqwest::Error> {
        self.ask(&GetUserRequest { user_login: String::from(user_login) }).await
    }

    /// Updates a user. Absent fields keep their current server-side value.
    pub async fn users_manager_update_user(
        &self,
        user_login: &str,
        password: Option<&str>,
        email: Option<&str>,
        alias: Option<&str>,
    ) -> Result<String, reqwest::Error> {
        self.ask(&UpdateUserRequest {
            user_login: String::from(user_login),
            password: password.map(String::from),
            email: email.map(String::from),
            alias: alias.map(String::from),
        })
        .await
    }

    pub async fn users_manager_delete_user(
        &self,
        user_login: &str,
    ) -> Result<String, reqwest::Error> {
        self.ask(&DeleteUserRequest { user_login: String::from(user_login) }).await
    }

    /// Looks up a user's auth token. `md5_password` must already be the
    /// lowercase hex MD5 digest of the password.
    pub async fn users_manager_get_token_auth(
        &self,
        user_login: &str,
        md5_password: &str,
    ) -> Result<String, reqwest::Error> {
        self.ask(&GetTokenAuthRequest {
            user_login: String::from(user_login),
            md5_password: String::from(md5_password),
        })
        .await
    }

    /// Grants `access` on every site in `id_sites` to a user.
    pub async fn users_manager_set_user_access(
        &self,
        user_login: &str,
        access: AccessLevel,
        id_sites: &[u32],
    ) -> Result<String, reqwest::Error> {
        self.ask(&SetUserAccessRequest {
            user_login: String::from(user_login),
            access,
            id_sites: id_sites.to_vec(),
        })
        .await
    }

    pub async fn users_manager_get_users_sites_from_access(
        &self,
        access: AccessLevel,
    ) -> Result<String, reqwest::Error> {
        self.ask(&GetUsersSitesFromAccessRequest { access }).await
    }

    pub async fn users_manager_get_users_access_from_site(
        &self,
        id_site: u32,
    ) -> Result<String, reqwest::Error> {
        self.ask(&GetUsersAccessFromSiteRequest { id_site }).await
    }

    pub async fn users_manager_get_users_with_site_access(
        &self,
        id_site: u32,
        access: AccessLevel,
    ) -> Result<String, reqwest::Error> {
        self.ask(&GetUsersWithSiteAccessRequest { id_site, access }).await
    }

    pub async fn users_manager_get_sites_access_from_user(
        &self,
        user_login: &str,
    ) -> Result<String, reqwest::Error> {
        self.ask(&GetSitesAccessFromUserRequest { user_login: String::from(user_login) }).await
    }

    pub async fn users_manager_user_exists(
        &self,
        user_login: &str,
    ) -> Result<String, reqwest::Error> {
        self.ask(&UserExistsRequest { user_login: String::from(user_login) }).await
    }

    /// Refreshes the configured auth token from a login/password pair.
    ///
    /// Asks `UsersManager.getTokenAuth` through a transient clone of the
    /// client forced to the `json` format, so the live format setting is
    /// untouched. When `password_is_clear` the password is MD5-hashed
    /// first, as the remote API expects hashed passwords.
    ///
    /// When the reply carries no `value` field (an error reply, or a body
    /// that is not JSON at all) the configured token is left unchanged
    /// and no error is raised; only transport failures propagate.
    pub async fn set_token_auth_from_credentials(
        &mut self,
        user_login: &str,
        password: &str,
        password_is_clear: bool,
    ) -> Result<(), reqwest::Error> {
        let md5_password =
            if password_is_clear { md5_hex(password) } else { String::from(password) };
        let mut transient = self.clone();
        transient.set_format(ResponseFormat::Json);
        let body = transient.users_manager_get_token_auth(user_login, &md5_password).await?;
        match serde_json::from_str::<TokenAuthResponse>(&body) {
            Ok(TokenAuthResponse { value: Some(token) }) => self.set_token_auth(&token),
            _ => warn!("token lookup for {user_login} returned no value, keeping current token"),
        }
        Ok(())
    }

    /// Builds a "log me in" URL for the remote `Login.logme` action.
    ///
    /// Visiting the returned URL authenticates a browser session
    /// directly, bypassing the login form. This is a plain URL builder:
    /// no request is performed and none of the Reporting API's fixed
    /// keys (`module=API`, `method`, `token_auth`) are attached.
    ///
    /// `redirect_url` is only included when non-empty, `id_site` only
    /// when non-zero.
    pub fn get_logme_url(
        &self,
        login: &str,
        password: &str,
        redirect_url: Option<&str>,
        id_site: Option<u32>,
        password_is_clear: bool,
    ) -> String {
        let mut args = vec![
            ("module", String::from("Login")),
            ("action", String::from("logme")),
            ("login", String::from(login)),
            (
                "password",
                if password_is_clear { md5_hex(password) } else { String::from(password) },
            ),
        ];
        push_if_present(&mut args, "url", redirect_url);
        if let Some(id_site) = id_site {
            if id_site != 0 {
                args.push(("idSite", id_site.to_string()));
            }
        }
        append_query(self.config.piwik_url(), &encode_query(&args))
    }
}

/// Lowercase hex MD5 digest, the password hashing the remote API expects.
fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::{Piwik, md5_hex};
    use crate::config::ResponseFormat;
    use crate::http_request::sites_manager::GetAllSitesRequest;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn client() -> Piwik {
        Piwik::new("http://x/piwik", "T", ResponseFormat::Json)
    }

    /// Serves exactly one canned HTTP response on a random local port and
    /// returns the base URL to reach it.
    async fn spawn_one_shot(body: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            let reply = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn endpoint_url_has_stable_fixed_key_order() {
        assert_eq!(
            client().endpoint_url(&GetAllSitesRequest),
            "http://x/piwik?module=API&method=SitesManager.getAllSites&format=json&token_auth=T"
        );
    }

    #[test]
    fn endpoint_url_tracks_config_mutation() {
        let mut piwik = client();
        piwik.set_format(ResponseFormat::Xml);
        piwik.set_token_auth("other");
        piwik.set_piwik_url("https://stats.example.org/index.php");
        assert_eq!(
            piwik.endpoint_url(&GetAllSitesRequest),
            "https://stats.example.org/index.php?module=API&method=SitesManager.getAllSites&format=xml&token_auth=other"
        );
    }

    #[test]
    fn md5_hex_is_lowercase_digest() {
        assert_eq!(md5_hex("secret"), "5ebe2294ecd0e0f08eab7690d2a6ee69");
    }

    #[test]
    fn logme_url_hashes_clear_password() {
        let url = client().get_logme_url("bob", "secret", None, None, true);
        assert_eq!(
            url,
            "http://x/piwik?module=Login&action=logme&login=bob&password=5ebe2294ecd0e0f08eab7690d2a6ee69"
        );
        assert!(!url.contains("token_auth"));
        assert!(!url.contains("module=API"));
        assert!(!url.contains("method="));
    }

    #[test]
    fn logme_url_keeps_hashed_password_as_is() {
        let url = client().get_logme_url(
            "bob",
            "5ebe2294ecd0e0f08eab7690d2a6ee69",
            None,
            None,
            false,
        );
        assert!(url.ends_with("password=5ebe2294ecd0e0f08eab7690d2a6ee69"));
    }

    #[test]
    fn logme_url_optional_args() {
        let piwik = client();
        let bare = piwik.get_logme_url("bob", "secret", None, Some(0), true);
        assert!(!bare.contains("idSite"));
        assert!(!bare.contains("url="));

        let full =
            piwik.get_logme_url("bob", "secret", Some("http://a/?next=1 "), Some(5), true);
        assert!(full.contains("url=http%3A%2F%2Fa%2F%3Fnext%3D1%20"));
        assert!(full.ends_with("idSite=5"));
    }

    #[tokio::test]
    async fn operations_return_the_raw_body() {
        let base_url = spawn_one_shot(r#"[{"idsite":"1","name":"Example"}]"#).await;
        let piwik = Piwik::new(&base_url, "T", ResponseFormat::Json);
        let body = piwik.sites_manager_get_all_sites().await.unwrap();
        assert_eq!(body, r#"[{"idsite":"1","name":"Example"}]"#);
    }

    #[tokio::test]
    async fn credentials_flow_sets_token_from_value_field() {
        let base_url = spawn_one_shot(r#"{"value":"abc"}"#).await;
        let mut piwik = Piwik::new(&base_url, "old", ResponseFormat::Xml);
        piwik.set_token_auth_from_credentials("bob", "secret", true).await.unwrap();
        assert_eq!(piwik.token_auth(), "abc");
        // The transient clone, not the live client, was forced to json.
        assert_eq!(piwik.format(), ResponseFormat::Xml);
    }

    #[tokio::test]
    async fn credentials_flow_keeps_token_on_error_reply() {
        let base_url = spawn_one_shot(r#"{"result":"error","message":"bad login"}"#).await;
        let mut piwik = Piwik::new(&base_url, "old", ResponseFormat::Json);
        piwik.set_token_auth_from_credentials("bob", "nope", true).await.unwrap();
        assert_eq!(piwik.token_auth(), "old");
    }

    #[tokio::test]
    async fn credentials_flow_keeps_token_on_malformed_body() {
        let base_url = spawn_one_shot("<html>not json</html>").await;
        let mut piwik = Piwik::new(&base_url, "old", ResponseFormat::Json);
        piwik.set_token_auth_from_credentials("bob", "secret", true).await.unwrap();
        assert_eq!(piwik.token_auth(), "old");
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        // Nothing listens on this port.
        let piwik = Piwik::new("http://127.0.0.1:1/piwik", "T", ResponseFormat::Json);
        assert!(piwik.sites_manager_get_all_sites().await.is_err());
    }
}

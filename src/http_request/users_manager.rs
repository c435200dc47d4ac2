use super::request_common::{ReportingRequestType, push_if_present};
use strum_macros::Display;

/// Access levels a user can hold on a tracked site.
///
/// The `Display` output is the exact wire value of the `access` argument.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum AccessLevel {
    /// May consult the site's data.
    View,
    /// May administrate the site.
    Admin,
    /// No access to the site at all.
    NoAccess,
}

/// Request type for `UsersManager.addUser`.
#[derive(Debug)]
pub struct AddUserRequest {
    pub user_login: String,
    /// Password of the new user, in clear.
    pub password: String,
    pub email: String,
    /// Optional display alias, omitted from the query when absent or empty.
    pub alias: Option<String>,
}

impl ReportingRequestType for AddUserRequest {
    fn method(&self) -> &'static str { "UsersManager.addUser" }
    fn query_args(&self) -> Vec<(&'static str, String)> {
        let mut args = vec![
            ("userLogin", self.user_login.clone()),
            ("password", self.password.clone()),
            ("email", self.email.clone()),
        ];
        push_if_present(&mut args, "alias", self.alias.as_deref());
        args
    }
}

/// Request type for `UsersManager.getUser`.
#[derive(Debug)]
pub struct GetUserRequest {
    pub user_login: String,
}

impl ReportingRequestType for GetUserRequest {
    fn method(&self) -> &'static str { "UsersManager.getUser" }
    fn query_args(&self) -> Vec<(&'static str, String)> {
        vec![("userLogin", self.user_login.clone())]
    }
}

/// Request type for `UsersManager.updateUser`.
///
/// Every field besides the login is optional; absent and empty fields are
/// left out of the query and keep their current value on the server.
#[derive(Debug)]
pub struct UpdateUserRequest {
    pub user_login: String,
    pub password: Option<String>,
    pub email: Option<String>,
    pub alias: Option<String>,
}

impl ReportingRequestType for UpdateUserRequest {
    fn method(&self) -> &'static str { "UsersManager.updateUser" }
    fn query_args(&self) -> Vec<(&'static str, String)> {
        let mut args = vec![("userLogin", self.user_login.clone())];
        push_if_present(&mut args, "password", self.password.as_deref());
        push_if_present(&mut args, "email", self.email.as_deref());
        push_if_present(&mut args, "alias", self.alias.as_deref());
        args
    }
}

/// Request type for `UsersManager.deleteUser`.
#[derive(Debug)]
pub struct DeleteUserRequest {
    pub user_login: String,
}

impl ReportingRequestType for DeleteUserRequest {
    fn method(&self) -> &'static str { "UsersManager.deleteUser" }
    fn query_args(&self) -> Vec<(&'static str, String)> {
        vec![("userLogin", self.user_login.clone())]
    }
}

/// Request type for `UsersManager.getTokenAuth`.
#[derive(Debug)]
pub struct GetTokenAuthRequest {
    pub user_login: String,
    /// The user's password, already MD5-hashed (lowercase hex).
    pub md5_password: String,
}

impl ReportingRequestType for GetTokenAuthRequest {
    fn method(&self) -> &'static str { "UsersManager.getTokenAuth" }
    fn query_args(&self) -> Vec<(&'static str, String)> {
        vec![
            ("userLogin", self.user_login.clone()),
            ("md5Password", self.md5_password.clone()),
        ]
    }
}

/// Request type for `UsersManager.setUserAccess`.
#[derive(Debug)]
pub struct SetUserAccessRequest {
    pub user_login: String,
    pub access: AccessLevel,
    /// Site ids the access level applies to, sent as one comma-joined value.
    pub id_sites: Vec<u32>,
}

impl ReportingRequestType for SetUserAccessRequest {
    fn method(&self) -> &'static str { "UsersManager.setUserAccess" }
    fn query_args(&self) -> Vec<(&'static str, String)> {
        let id_sites =
            self.id_sites.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
        vec![
            ("userLogin", self.user_login.clone()),
            ("access", self.access.to_string()),
            ("idSites", id_sites),
        ]
    }
}

/// Request type for `UsersManager.getUsersSitesFromAccess`.
#[derive(Debug)]
pub struct GetUsersSitesFromAccessRequest {
    pub access: AccessLevel,
}

impl ReportingRequestType for GetUsersSitesFromAccessRequest {
    fn method(&self) -> &'static str { "UsersManager.getUsersSitesFromAccess" }
    fn query_args(&self) -> Vec<(&'static str, String)> {
        vec![("access", self.access.to_string())]
    }
}

/// Request type for `UsersManager.getUsersAccessFromSite`.
#[derive(Debug)]
pub struct GetUsersAccessFromSiteRequest {
    pub id_site: u32,
}

impl ReportingRequestType for GetUsersAccessFromSiteRequest {
    fn method(&self) -> &'static str { "UsersManager.getUsersAccessFromSite" }
    fn query_args(&self) -> Vec<(&'static str, String)> {
        vec![("idSite", self.id_site.to_string())]
    }
}

/// Request type for `UsersManager.getUsersWithSiteAccess`.
#[derive(Debug)]
pub struct GetUsersWithSiteAccessRequest {
    pub id_site: u32,
    pub access: AccessLevel,
}

impl ReportingRequestType for GetUsersWithSiteAccessRequest {
    fn method(&self) -> &'static str { "UsersManager.getUsersWithSiteAccess" }
    fn query_args(&self) -> Vec<(&'static str, String)> {
        vec![
            ("idSite", self.id_site.to_string()),
            ("access", self.access.to_string()),
        ]
    }
}

/// Request type for `UsersManager.getSitesAccessFromUser`.
#[derive(Debug)]
pub struct GetSitesAccessFromUserRequest {
    pub user_login: String,
}

impl ReportingRequestType for GetSitesAccessFromUserRequest {
    fn method(&self) -> &'static str { "UsersManager.getSitesAccessFromUser" }
    fn query_args(&self) -> Vec<(&'static str, String)> {
        vec![("userLogin", self.user_login.clone())]
    }
}

/// Request type for `UsersManager.userExists`.
#[derive(Debug)]
pub struct UserExistsRequest {
    pub user_login: String,
}

impl ReportingRequestType for UserExistsRequest {
    fn method(&self) -> &'static str { "UsersManager.userExists" }
    fn query_args(&self) -> Vec<(&'static str, String)> {
        vec![("userLogin", self.user_login.clone())]
    }
}

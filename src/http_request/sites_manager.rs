use super::request_common::ReportingRequestType;

/// Request type for `SitesManager.getAllSites`.
#[derive(Debug)]
pub struct GetAllSitesRequest;

impl ReportingRequestType for GetAllSitesRequest {
    fn method(&self) -> &'static str { "SitesManager.getAllSites" }
}

/// Request type for `SitesManager.getAllSitesId`.
#[derive(Debug)]
pub struct GetAllSitesIdRequest;

impl ReportingRequestType for GetAllSitesIdRequest {
    fn method(&self) -> &'static str { "SitesManager.getAllSitesId" }
}

/// Request type for `SitesManager.getSitesIdFromSiteUrl`.
#[derive(Debug)]
pub struct GetSitesIdFromSiteUrlRequest {
    /// URL of the tracked website to look up.
    pub url: String,
}

impl ReportingRequestType for GetSitesIdFromSiteUrlRequest {
    fn method(&self) -> &'static str { "SitesManager.getSitesIdFromSiteUrl" }
    fn query_args(&self) -> Vec<(&'static str, String)> {
        vec![("url", self.url.clone())]
    }
}

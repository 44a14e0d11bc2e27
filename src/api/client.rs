use crate::api::models::ReleaseInfo;
use crate::api::query::ReleaseQuery;
use crate::error::{LatteError, Result};
use attohttpc::Session;
use log::debug;

pub const RELEASE_API_BASE: &str = "https://api.adoptopenjdk.net";
pub const API_VERSION: &str = "v2";
const USER_AGENT: &str = concat!("latte/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) session: Session,
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        let mut session = Session::new();
        session.header("User-Agent", USER_AGENT);
        session.proxy_settings(attohttpc::ProxySettings::from_env());

        Self {
            session,
            base_url: RELEASE_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Fetch the latest release matching `query`.
    ///
    /// Single attempt. Network and service failures propagate to the caller;
    /// the suggestion UI has no sensible fallback content to show instead.
    pub fn latest_release(&self, query: &ReleaseQuery) -> Result<ReleaseInfo> {
        let url = format!(
            "{}/{API_VERSION}/info/releases/{}",
            self.base_url, query.jdk_version
        );
        debug!(
            "Requesting release information: {url} (impl={}, arch={}, os={})",
            query.jvm_impl, query.arch, query.os
        );

        let response = self
            .session
            .get(&url)
            .param("openjdk_impl", &query.jvm_impl)
            .param("arch", &query.arch)
            .param("os", &query.os)
            .param("type", &query.package_type)
            .param("release", &query.release)
            .send()
            .map_err(|e| {
                LatteError::ReleaseFetch(format!(
                    "Network error connecting to release API {API_VERSION}: {e}. Please check your internet connection and try again."
                ))
            })?;

        if !response.is_success() {
            let status = response.status();
            let error_msg = match status.as_u16() {
                404 => format!(
                    "No release found for {} on release API {API_VERSION}. The distribution name may be wrong or the API endpoint may have changed.",
                    query.jdk_version
                ),
                500..=599 => format!(
                    "Server error occurred on release API {API_VERSION}. Please try again later."
                ),
                _ => format!(
                    "HTTP error ({}) from release API {API_VERSION}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown error")
                ),
            };
            return Err(LatteError::ReleaseFetch(error_msg));
        }

        let body = response.text().map_err(|e| {
            LatteError::ReleaseFetch(format!("Failed to read response body: {e}"))
        })?;

        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => Ok(ReleaseInfo(value)),
            Err(e) => {
                debug!("Failed to parse as JSON: {e}");
                Err(LatteError::ReleaseFetch(format!(
                    "Invalid JSON response from release API {API_VERSION}: {e}"
                )))
            }
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

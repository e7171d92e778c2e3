//! Upstream proxy vendors and session release.
//!
//! A [`Provider`] describes the commercial vendor a proxy was leased from
//! and is shared read-only across every proxy it provisioned. The only
//! wired integration is GeoNode; unknown providers are a no-op.

use crate::error::Error;

use log::debug;
use serde::Serialize;

/// Known provider integrations. Anything other than `GeoNode` makes
/// session release a no-op returning `Ok(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderName {
    None,
    GeoNode,
}

/// GeoNode service tiers, used as the release endpoint path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    PremiumResidential,
    UnmeteredResidential,
    SharedDatacenter,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::PremiumResidential => "RESIDENTIAL-PREMIUM",
            Service::UnmeteredResidential => "RESIDENTIAL-UNMETERED",
            Service::SharedDatacenter => "SHARED-DATACENTER",
        }
    }
}

/// A commercial proxy vendor account. Immutable after construction and
/// shared by reference across all proxies leased from it.
#[derive(Debug, Clone)]
pub struct Provider {
    pub name: ProviderName,
    pub service_type: String,
    pub username: String,
    pub password: String,
}

impl Provider {
    pub fn new(
        name: ProviderName,
        service_type: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name,
            service_type: service_type.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

/// One leased session to free: the proxy port plus the session id embedded
/// in its username, if any.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseData {
    pub port: u16,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Serialize)]
struct ReleasePayload {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    data: Vec<ReleaseData>,
    #[serde(rename = "releaseAll")]
    release_all: bool,
}

/// Extract the `session-<id>-` fragment from a proxy username.
pub(crate) fn session_id_from_username(username: &str) -> Option<String> {
    let rest = username.split("session-").nth(1)?;
    let id = rest.split('-').next().unwrap_or("");
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Ask the provider's monitor API to free the given sessions.
///
/// `Ok(true)` strictly means HTTP 200; any other status is a soft failure
/// reported as `Ok(false)`. Build and transport errors are hard failures.
/// Cancellation is the caller's: dropping the future aborts the request.
pub(crate) async fn release(
    provider: &Provider,
    release_all: bool,
    data: Vec<ReleaseData>,
) -> Result<bool, Error> {
    let url = format!(
        "https://monitor.geonode.com/sessions/release/{}",
        provider.service_type
    );
    debug!(
        "releasing {} session(s) via {url}",
        if release_all {
            "all".to_string()
        } else {
            data.len().to_string()
        }
    );
    let client = reqwest::Client::builder()
        .build()
        .map_err(Error::ProviderRelease)?;
    let response = client
        .put(&url)
        .basic_auth(&provider.username, Some(&provider.password))
        .json(&ReleasePayload { data, release_all })
        .send()
        .await
        .map_err(Error::ProviderRelease)?;
    Ok(response.status() == reqwest::StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_includes_session_and_port() {
        let payload = ReleasePayload {
            data: vec![ReleaseData {
                port: 9000,
                session_id: Some("abc123".to_string()),
            }],
            release_all: false,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"data": [{"port": 9000, "sessionId": "abc123"}], "releaseAll": false})
        );
    }

    #[test]
    fn payload_omits_empty_fields() {
        let payload = ReleasePayload {
            data: vec![ReleaseData {
                port: 9000,
                session_id: None,
            }],
            release_all: false,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"data": [{"port": 9000}], "releaseAll": false})
        );

        let payload = ReleasePayload {
            data: Vec::new(),
            release_all: true,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"releaseAll": true})
        );
    }

    #[test]
    fn extracts_session_id_from_username() {
        assert_eq!(
            session_id_from_username("customer-acme-session-x9f2-country-us"),
            Some("x9f2".to_string())
        );
        assert_eq!(session_id_from_username("plain-user"), None);
        assert_eq!(session_id_from_username("ends-with-session-"), None);
    }

    #[test]
    fn service_tier_names() {
        assert_eq!(Service::PremiumResidential.as_str(), "RESIDENTIAL-PREMIUM");
        assert_eq!(
            Service::UnmeteredResidential.as_str(),
            "RESIDENTIAL-UNMETERED"
        );
        assert_eq!(Service::SharedDatacenter.as_str(), "SHARED-DATACENTER");
    }
}

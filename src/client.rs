//! Blocking client for the remote blueprint graph endpoint.

use crate::error::FetchError;
use crate::wire::GraphPayload;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::error;

/// Fetches graph payloads from a blueprint service.
///
/// One fetch per page session: there is no retry, refetch or timeout policy
/// here. A failed fetch is terminal for the load and simply leaves the
/// session unloaded.
pub struct GraphClient {
    base_url: String,
    http: Client,
}

impl GraphClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Fetches and decodes one blueprint graph payload.
    ///
    /// Missing payload sections are warned about and left empty; only
    /// transport failures, non-2xx responses and undecodable bodies error.
    pub fn fetch_graph(
        &self,
        account_id: &str,
        blueprint_id: &str,
    ) -> Result<GraphPayload, FetchError> {
        let url = format!(
            "{}/api/v1/{}/actions/blueprints/{}/graph",
            self.base_url, account_id, blueprint_id
        );

        let response = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .inspect_err(|err| error!(error = %err, "graph request failed"))?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "graph endpoint returned an error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let payload: GraphPayload = response
            .json()
            .inspect_err(|err| error!(error = %err, "failed to decode graph payload"))?;
        payload.warn_missing_sections();
        Ok(payload)
    }
}

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use roadmap_core::model::RoadmapDocument;

use crate::error::LoadError;
use crate::loader::RoadmapFetch;
use crate::session::SessionContext;

/// HTTP client for the roadmap fetch service.
///
/// One call per view mount: `GET {base_url}/api/roadmap/{user_id}`. No retry,
/// no timeout, no cancellation; the caller's session discards late results.
#[derive(Clone)]
pub struct RoadmapClient {
    client: Client,
    base_url: Url,
}

impl RoadmapClient {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, user_id: &str) -> Result<Url, LoadError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| LoadError::fetch_with_fallback(None))?
            .pop_if_empty()
            .extend(["api", "roadmap", user_id]);
        Ok(url)
    }
}

#[async_trait]
impl RoadmapFetch for RoadmapClient {
    async fn fetch_roadmap(
        &self,
        session: &SessionContext,
    ) -> Result<RoadmapDocument, LoadError> {
        let url = self.endpoint(session.user_id())?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|_| LoadError::fetch_with_fallback(None))?;

        if !response.status().is_success() {
            let message = response
                .json::<ServiceErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(LoadError::fetch_with_fallback(message));
        }

        let records = response
            .json::<Vec<RoadmapRecord>>()
            .await
            .map_err(|_| LoadError::InvalidData)?;
        document_from_records(records)
    }
}

/// One element of the service's response array. The roadmap may be null.
#[derive(Debug, Deserialize)]
struct RoadmapRecord {
    #[serde(default)]
    roadmap: Option<RoadmapDocument>,
}

/// Error payloads optionally carry a human-readable message.
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    message: Option<String>,
}

/// The service replies with an ordered sequence of records and only the first
/// is meaningful. An empty sequence, a missing or null roadmap, or a document
/// failing the shape check are all `InvalidData`.
fn document_from_records(records: Vec<RoadmapRecord>) -> Result<RoadmapDocument, LoadError> {
    let document = records
        .into_iter()
        .next()
        .and_then(|record| record.roadmap)
        .ok_or(LoadError::InvalidData)?;
    document.validate().map_err(|_| LoadError::InvalidData)?;
    Ok(document)
}

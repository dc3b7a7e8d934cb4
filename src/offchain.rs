//! Off-chain metadata document resolution.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::core::{MetadataError, MetadataResult};

/// Fetches the JSON document behind a metadata URI.
///
/// The URI comes from on-chain data and is untrusted; implementations should
/// expect arbitrary hosts and arbitrary bodies. No allow-listing is applied.
pub trait UriFetcher {
    fn fetch_json(&self, uri: &str) -> MetadataResult<Value>;
}

impl<T: UriFetcher + ?Sized> UriFetcher for &T {
    fn fetch_json(&self, uri: &str) -> MetadataResult<Value> {
        (**self).fetch_json(uri)
    }
}

/// Plain HTTP GET fetcher. No retries beyond the agent's transport defaults.
pub struct HttpUriFetcher {
    agent: ureq::Agent,
}

impl HttpUriFetcher {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .timeout_read(Duration::from_secs(30))
            .build();

        Self { agent }
    }
}

impl Default for HttpUriFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl UriFetcher for HttpUriFetcher {
    fn fetch_json(&self, uri: &str) -> MetadataResult<Value> {
        debug!("fetching off-chain document: {}", uri);

        let response = self
            .agent
            .get(uri)
            .call()
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        response
            .into_json()
            .map_err(|e| MetadataError::MalformedDocument(e.to_string()))
    }
}

/// Resolve the image URL from the document at `uri`.
pub fn resolve_image<U: UriFetcher>(fetcher: &U, uri: &str) -> MetadataResult<String> {
    let document = fetcher.fetch_json(uri)?;

    document
        .get("image")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            MetadataError::MalformedDocument(format!("no image field in document at {}", uri))
        })
}

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid backend URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("GET {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {path} returned HTTP {status}")]
    Status { path: String, status: u16 },
}

/// The console server, seen only through GET requests on paths such as
/// `/users/massive/delete/<ids>/True`.
pub trait Backend {
    fn get(&self, path: &str) -> impl Future<Output = Result<String, BackendError>>;
}

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        Url::parse(base_url).map_err(|source| BackendError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(BackendError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Paths are already encoded, so they are appended verbatim.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Backend for HttpBackend {
    async fn get(&self, path: &str) -> Result<String, BackendError> {
        let url = self.url_for(path);
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| BackendError::Request {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| BackendError::Request {
            path: path.to_string(),
            source,
        })
    }
}

/// Offline backend: remembers every path and answers from canned bodies.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    requests: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<BTreeMap<String, String>>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(&self, path: &str, body: &str) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_string(), body.to_string());
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Backend for RecordingBackend {
    async fn get(&self, path: &str) -> Result<String, BackendError> {
        debug!(%path, "recorded GET");
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
        let body = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
            .unwrap_or_default();
        Ok(body)
    }
}

/// Backend chosen from the configuration.
#[derive(Clone, Debug)]
pub enum ConsoleBackend {
    Http(HttpBackend),
    Recording(RecordingBackend),
}

impl Backend for ConsoleBackend {
    async fn get(&self, path: &str) -> Result<String, BackendError> {
        match self {
            Self::Http(backend) => backend.get(path).await,
            Self::Recording(backend) => backend.get(path).await,
        }
    }
}

/// Issues the request and drops the answer. Failures are logged only.
pub async fn fire_and_forget<B: Backend>(backend: &B, path: &str) {
    if let Err(err) = backend.get(path).await {
        warn!(error = %err, %path, "request failed");
    }
}

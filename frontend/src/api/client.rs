use log::{debug, warn};
use reqwest::{header::HeaderMap, Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, ApiResult, Envelope, ListPayload},
    config,
    utils::storage as storage_utils,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let Some(token) = storage_utils::get_item(storage_utils::ACCESS_TOKEN_KEY) else {
            return headers;
        };
        match format!("Bearer {}", token).parse() {
            Ok(value) => {
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
            Err(_) => warn!("Ignoring malformed access token"),
        }
        headers
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            storage_utils::remove_item(storage_utils::ACCESS_TOKEN_KEY);
        }
    }

    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        self.client
            .request(method, format!("{}{}", base_url, path))
            .headers(self.auth_headers())
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<(StatusCode, String), ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        debug!("{} {}", request.method(), request.url());

        #[cfg(test)]
        {
            if let Some(responder) = find_mock(request.url().as_str()) {
                let mock = responder.respond(&request)?;
                let status = StatusCode::from_u16(mock.status)
                    .map_err(|e| ApiError::unknown(format!("Invalid mock status: {}", e)))?;
                return Ok((status, mock.body.to_string()));
            }
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok((status, body))
    }

    /// Sends the request and decodes the envelope into a typed reply.
    pub(crate) async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let (status, body) = self.dispatch(builder).await?;
        Self::handle_unauthorized_status(status);
        decode_body(status, &body)
    }

    pub(crate) async fn send_list<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> ApiResult<Vec<T>> {
        self.send::<ListPayload<T>>(builder)
            .await
            .map(|reply| reply.map(|list| list.0))
    }

    /// For calls whose success payload is never read; any `data` is accepted.
    pub(crate) async fn send_unit(&self, builder: RequestBuilder) -> ApiResult<()> {
        self.send::<serde_json::Value>(builder)
            .await
            .map(|reply| reply.map(|_| ()))
    }
}

/// Backends answer failures with an envelope too; only fall back to the
/// HTTP status when the body is not one.
pub(crate) fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> ApiResult<T> {
    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) => envelope.decode(),
        Err(e) if status.is_success() => Err(ApiError::request_failed(format!(
            "Failed to parse response: {}",
            e
        ))),
        Err(_) => Err(ApiError::request_failed(format!(
            "Request failed with status {}",
            status
        ))),
    }
}

#[cfg(test)]
#[derive(Clone, Debug)]
pub struct MockResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

#[cfg(test)]
impl MockResponse {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }
}

#[cfg(test)]
pub trait TestResponder: Send + Sync {
    fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
}

#[cfg(test)]
type MockRegistry = std::sync::Mutex<Vec<(String, std::sync::Arc<dyn TestResponder>)>>;

#[cfg(test)]
fn mock_registry() -> &'static MockRegistry {
    static MOCKS: std::sync::OnceLock<MockRegistry> = std::sync::OnceLock::new();
    MOCKS.get_or_init(|| std::sync::Mutex::new(Vec::new()))
}

#[cfg(test)]
pub fn register_mock(base_url: String, responder: std::sync::Arc<dyn TestResponder>) {
    if let Ok(mut mocks) = mock_registry().lock() {
        mocks.retain(|(url, _)| url != &base_url);
        mocks.push((base_url, responder));
    }
}

#[cfg(test)]
fn find_mock(url: &str) -> Option<std::sync::Arc<dyn TestResponder>> {
    let mocks = mock_registry().lock().ok()?;
    mocks
        .iter()
        .filter(|(base, _)| url.starts_with(base.as_str()))
        .max_by_key(|(base, _)| base.len())
        .map(|(_, responder)| responder.clone())
}

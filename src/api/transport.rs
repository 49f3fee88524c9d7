use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

use super::error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Status and body of a finished request, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends the mutating POST for a row action.
#[async_trait(?Send)]
pub trait Transport {
    async fn post(&self, url: Url, token: &str) -> ApiResult<RawResponse>;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> ApiResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn post(&self, url: Url, token: &str) -> ApiResult<RawResponse> {
        let request = self
            .client
            .post(url)
            .header(CSRF_HEADER, token)
            .header(CONTENT_TYPE, "application/json");

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_same_origin();

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

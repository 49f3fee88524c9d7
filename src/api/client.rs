use reqwest::Url;
use serde::Deserialize;

use crate::models::ActionResult;

use super::error::ApiError;
use super::transport::{ApiResult, Transport};

/// Issues row action requests and decodes the JSON envelope.
#[derive(Clone)]
pub struct ActionClient<T> {
    transport: T,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl<T: Transport> ActionClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST to `target` and return the decoded envelope.
    ///
    /// Fails without touching the network when the token is missing or the
    /// URL cannot be resolved to the page's origin. A decoded envelope may
    /// still carry `success: false`; that is for the caller to report.
    pub async fn perform(
        &self,
        base_url: Option<&str>,
        target: &str,
        token: Option<&str>,
    ) -> ApiResult<ActionResult> {
        let token = token.ok_or(ApiError::MissingToken)?;
        let url = resolve_url(base_url, target)?;

        log::debug!("POST {url}");
        let response = self.transport.post(url, token).await?;

        if !response.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(|body| body.message)
                .filter(|message| !message.trim().is_empty());
            return Err(ApiError::ServerError {
                status: response.status,
                message,
            });
        }

        serde_json::from_str::<ActionResult>(&response.body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse action response: {}", e))
        })
    }
}

/// Resolve `target` against the page URL and keep it on the same origin.
pub fn resolve_url(base_url: Option<&str>, target: &str) -> ApiResult<Url> {
    let target = target.trim();
    let Some(base) = base_url else {
        return Url::parse(target).map_err(|e| ApiError::InvalidUrl(format!("{target}: {e}")));
    };

    let base = Url::parse(base).map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))?;
    let url = base
        .join(target)
        .map_err(|e| ApiError::InvalidUrl(format!("{target}: {e}")))?;

    if url.origin() != base.origin() {
        return Err(ApiError::CrossOrigin(url.to_string()));
    }
    Ok(url)
}

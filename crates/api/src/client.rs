//! Reading envelopes from `reqwest` responses.
//!
//! Thin async wrappers: collect the body, then hand it to the codec.

use jsonresp_core::{ErrorInfo, JsonRespError, PageDetails};
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("jsonresp: failed to receive response body: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Response(#[from] JsonRespError),
}

impl ClientError {
    /// The error the server reported in its envelope, if any.
    pub fn api_error(&self) -> Option<&ErrorInfo> {
        match self {
            ClientError::Response(err) => err.api_error(),
            ClientError::Transport(_) => None,
        }
    }
}

pub async fn read_response_page<T>(
    response: reqwest::Response,
) -> Result<(T, Option<PageDetails>), ClientError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.bytes().await?;
    tracing::debug!(%status, len = body.len(), "Decoding response envelope");

    Ok(jsonresp_core::read_response_page(&body[..])?)
}

pub async fn read_response<T>(response: reqwest::Response) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    read_response_page(response).await.map(|(data, _)| data)
}

/// Best-effort: `None` if the body can't be received or holds no error.
pub async fn read_error(response: reqwest::Response) -> Option<ErrorInfo> {
    match response.bytes().await {
        Ok(body) => jsonresp_core::read_error(&body[..]),
        Err(err) => {
            tracing::debug!(error = %err, "Failed to receive error body");
            None
        }
    }
}

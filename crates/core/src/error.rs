use crate::envelope::ErrorInfo;

/// Low-level failure while producing a response body.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum JsonRespError {
    #[error("jsonresp: failed to write error: {0}")]
    WriteError(#[source] EncodeError),

    #[error("jsonresp: failed to write response: {0}")]
    WriteResponse(#[source] EncodeError),

    #[error("jsonresp: failed to read response: {0}")]
    ReadResponse(#[source] serde_json::Error),

    #[error("jsonresp: failed to unmarshal response: {0}")]
    Unmarshal(#[source] serde_json::Error),

    /// The envelope carried an `error` object. This is the server's answer,
    /// not a codec failure.
    #[error(transparent)]
    Api(#[from] ErrorInfo),
}

impl JsonRespError {
    /// The embedded API error, if the envelope carried one.
    pub fn api_error(&self) -> Option<&ErrorInfo> {
        match self {
            JsonRespError::Api(info) => Some(info),
            _ => None,
        }
    }
}

//! Writing envelopes to an HTTP response and reading them back.
//!
//! Writers take any [`ResponseWriter`]; readers take any [`io::Read`]. Both
//! sides are synchronous and hold no state between calls.

use std::io::{Read, Write};

use http::header::{HeaderValue, CONTENT_TYPE};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::value::RawValue;

use crate::envelope::{Envelope, ErrorInfo, ErrorOnlyEnvelope, PageDetails, RawEnvelope};
use crate::error::{EncodeError, JsonRespError};

/// The writable half of an HTTP response: headers, status, then body.
pub trait ResponseWriter: Write {
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Set the response status. Must be called before the body is written.
    fn write_header(&mut self, status: StatusCode);
}

impl<W: ResponseWriter + ?Sized> ResponseWriter for &mut W {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        (**self).headers_mut()
    }

    fn write_header(&mut self, status: StatusCode) {
        (**self).write_header(status)
    }
}

fn encode<W, S>(w: &mut W, value: &S, code: StatusCode) -> Result<(), EncodeError>
where
    W: ResponseWriter + ?Sized,
    S: Serialize + ?Sized,
{
    w.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    w.write_header(code);

    // Marshal fully before touching the body so a failure never leaves a
    // truncated document behind.
    let mut body = serde_json::to_vec(value)?;
    body.push(b'\n');
    w.write_all(&body)?;
    Ok(())
}

/// Decode the first JSON value in `r`, ignoring anything after it.
fn decode_first<D, R>(r: R) -> Result<D, serde_json::Error>
where
    D: DeserializeOwned,
    R: Read,
{
    serde_json::Deserializer::from_reader(r)
        .into_iter::<D>()
        .next()
        .unwrap_or_else(|| {
            Err(<serde_json::Error as serde::de::Error>::custom(
                "EOF while parsing a value",
            ))
        })
}

/// Write an error envelope `{"error":{"code","message"}}` with status `code`.
pub fn write_error<W>(w: &mut W, message: &str, code: StatusCode) -> Result<(), JsonRespError>
where
    W: ResponseWriter + ?Sized,
{
    let error = ErrorInfo::new(code, message);
    encode(w, &Envelope::error(&error), code).map_err(JsonRespError::WriteError)
}

/// Write `data`, plus `page` when supplied, with status `code`.
pub fn write_response_page<W, T>(
    w: &mut W,
    data: &T,
    page: Option<&PageDetails>,
    code: StatusCode,
) -> Result<(), JsonRespError>
where
    W: ResponseWriter + ?Sized,
    T: Serialize + ?Sized,
{
    encode(w, &Envelope::data(data, page), code).map_err(JsonRespError::WriteResponse)
}

pub fn write_response<W, T>(w: &mut W, data: &T, code: StatusCode) -> Result<(), JsonRespError>
where
    W: ResponseWriter + ?Sized,
    T: Serialize + ?Sized,
{
    write_response_page(w, data, None, code)
}

/// Write `data` with `200 OK`, turning a failure into a 500 [`ErrorInfo`]
/// for the caller to report instead of a raw codec error.
pub fn safe_write_response<W, T>(w: &mut W, data: &T) -> Option<ErrorInfo>
where
    W: ResponseWriter + ?Sized,
    T: Serialize + ?Sized,
{
    match write_response(w, data, StatusCode::OK) {
        Ok(()) => None,
        Err(err) => {
            tracing::error!(error = %err, "Failed to write JSON response");
            Some(ErrorInfo::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                err.to_string(),
            ))
        }
    }
}

/// Read a paged envelope and decode its `data` into `T`.
///
/// An envelope carrying `"error"` yields [`JsonRespError::Api`] and `data`
/// is never decoded. Use `T = serde::de::IgnoredAny` to only check for
/// errors and collect the page.
pub fn read_response_page<T, R>(r: R) -> Result<(T, Option<PageDetails>), JsonRespError>
where
    T: DeserializeOwned,
    R: Read,
{
    let envelope: RawEnvelope = decode_first(r).map_err(JsonRespError::ReadResponse)?;

    if let Some(error) = envelope.error {
        return Err(error.into());
    }

    let raw = envelope.data.as_deref().map_or("null", RawValue::get);
    let data = serde_json::from_str(raw).map_err(JsonRespError::Unmarshal)?;

    Ok((data, envelope.page))
}

pub fn read_response<T, R>(r: R) -> Result<T, JsonRespError>
where
    T: DeserializeOwned,
    R: Read,
{
    read_response_page(r).map(|(data, _)| data)
}

/// Best-effort extraction of the `"error"` object.
///
/// Returns `None` both when the body has no error and when it cannot be
/// parsed at all; this never fails.
pub fn read_error<R: Read>(r: R) -> Option<ErrorInfo> {
    match decode_first::<ErrorOnlyEnvelope, _>(r) {
        Ok(envelope) => envelope.error,
        Err(err) => {
            tracing::debug!(error = %err, "Body is not an error envelope");
            None
        }
    }
}

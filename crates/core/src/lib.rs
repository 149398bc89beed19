//! Uniform JSON envelope for HTTP API responses.
//!
//! Handlers write `{ "data": ..., "page": ... }` or `{ "error": ... }` with
//! the matching status code; clients read the same shape back into typed
//! values or an [`ErrorInfo`] they can match on.

pub mod codec;
pub mod envelope;
pub mod error;
pub mod recorder;

pub use codec::{
    read_error, read_response, read_response_page, safe_write_response, write_error,
    write_response, write_response_page, ResponseWriter,
};
pub use envelope::{Envelope, ErrorInfo, PageDetails};
pub use error::{EncodeError, JsonRespError};
pub use recorder::ResponseRecorder;

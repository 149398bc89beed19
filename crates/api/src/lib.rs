//! HTTP integration for the jsonresp envelope.
//!
//! Server side: axum response types that write through the envelope codec.
//! Client side: reqwest helpers that read it back. The binary entrypoint is a
//! small demo server built from the same pieces.

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod routes;

//! Signed submission client for the B12 application endpoint.
//!
//! One run performs a single linear pass:
//! - build the applicant payload with a fresh UTC timestamp
//! - canonicalize it to a deterministic byte string
//! - compute HMAC-SHA256 over those exact bytes with the shared secret
//! - POST the bytes with the signature header
//! - return the response body as the submission receipt

mod client;
mod config;
mod error;
mod payload;
pub mod sign;

pub use client::SubmitClient;
pub use config::{Applicant, DEFAULT_SUBMISSION_URL, SubmitConfig};
pub use error::{Error, Kind};
pub use payload::{SubmissionPayload, canonical_bytes, generate_timestamp};
pub use sign::{SIGNATURE_HEADER, Signature};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::Result;
use crate::config::Applicant;
use crate::error::Error;

/// Applicant record submitted to the application endpoint.
///
/// Constructed fresh per run, canonicalized once, signed, sent, discarded.
#[derive(Clone, Debug, Serialize)]
pub struct SubmissionPayload {
    pub timestamp: String,
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub repository_link: String,
    pub action_run_link: String,
}

impl SubmissionPayload {
    /// Stamps an applicant record with the given submission timestamp.
    #[must_use]
    pub fn new(applicant: &Applicant, timestamp: String) -> Self {
        Self {
            timestamp,
            name: applicant.name.clone(),
            email: applicant.email.clone(),
            resume_link: applicant.resume_link.clone(),
            repository_link: applicant.repository_link.clone(),
            action_run_link: applicant.action_run_link.clone(),
        }
    }
}

/// ISO 8601 UTC timestamp with millisecond precision and a `Z` suffix.
#[must_use]
pub fn generate_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serializes a payload to its canonical byte encoding: keys sorted
/// lexicographically at every nesting level, compact separators, UTF-8.
///
/// These bytes are both the request body and the MAC input; the signature
/// is only valid over exactly this sequence.
pub fn canonical_bytes<T: Serialize>(payload: &T) -> Result<Vec<u8>> {
    // serde_json's object map is keyed on a BTreeMap, so re-encoding
    // through Value yields sorted keys regardless of construction order.
    let value = serde_json::to_value(payload).map_err(Error::canonicalize)?;
    serde_json::to_vec(&value).map_err(Error::canonicalize)
}

use secrecy::SecretString;
use url::Url;

use crate::Result;
use crate::error::Error;

/// Fixed production endpoint. `B12_SUBMISSION_URL` overrides it, which is
/// how the test suite points the client at a local server.
pub const DEFAULT_SUBMISSION_URL: &str = "https://b12.io/apply/submission";

const SECRET_VAR: &str = "B12_SECRET";
const NAME_VAR: &str = "B12_NAME";
const EMAIL_VAR: &str = "B12_EMAIL";
const RESUME_LINK_VAR: &str = "B12_RESUME_LINK";
const REPOSITORY_LINK_VAR: &str = "B12_REPOSITORY_LINK";
const ACTION_RUN_LINK_VAR: &str = "B12_ACTION_RUN_LINK";
const ENDPOINT_VAR: &str = "B12_SUBMISSION_URL";

/// Applicant fields pulled from the CI environment.
#[derive(Clone, Debug)]
pub struct Applicant {
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub repository_link: String,
    pub action_run_link: String,
}

/// Submission configuration resolved from environment variables.
#[derive(Clone, Debug)]
pub struct SubmitConfig {
    pub endpoint: Url,
    pub secret: SecretString,
    pub applicant: Applicant,
}

impl SubmitConfig {
    /// Reads configuration from the process environment.
    ///
    /// Every `B12_*` variable except the endpoint override is required; a
    /// missing or empty value is a configuration error, raised before any
    /// network activity.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let secret = SecretString::from(required(&lookup, SECRET_VAR)?);

        let applicant = Applicant {
            name: required(&lookup, NAME_VAR)?,
            email: required(&lookup, EMAIL_VAR)?,
            resume_link: required(&lookup, RESUME_LINK_VAR)?,
            repository_link: required(&lookup, REPOSITORY_LINK_VAR)?,
            action_run_link: required(&lookup, ACTION_RUN_LINK_VAR)?,
        };

        let endpoint = match lookup(ENDPOINT_VAR) {
            Some(raw) if !raw.trim().is_empty() => Url::parse(raw.trim())
                .map_err(|e| Error::config(format!("invalid {ENDPOINT_VAR}: {e}")))?,
            _ => Url::parse(DEFAULT_SUBMISSION_URL)?,
        };

        Ok(Self {
            endpoint,
            secret,
            applicant,
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    lookup(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::config(format!("{name} environment variable is not set")))
}

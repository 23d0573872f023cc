//! Endpoint descriptors.
//!
//! # Responsibilities
//! - Decode one raw `[[endpoints]]` entry into an [`EndpointSpec`]
//! - Apply per-endpoint defaults (name falls back to the URL, status to 200)
//! - Reject entries that cannot be checked (missing or invalid URL)

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::config::schema::EndpointEntry;

/// Status expected from an endpoint when none is configured.
pub const DEFAULT_EXPECTED_STATUS: u16 = 200;

/// Errors for an endpoint entry that cannot be checked.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// A required field is missing or a field has the wrong type.
    #[error("invalid endpoint entry: {0}")]
    Invalid(#[from] toml::de::Error),

    /// The `url` field is not an absolute URL.
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Deserialize)]
struct EndpointFields {
    url: String,
    name: Option<String>,
    #[serde(default = "default_expected_status")]
    expected_status: u16,
}

fn default_expected_status() -> u16 {
    DEFAULT_EXPECTED_STATUS
}

/// A named HTTP resource to health-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    pub name: String,
    /// The URL exactly as configured, used in reports.
    pub url: String,
    /// Parsed form of `url`, used for requests.
    pub target: Url,
    pub expected_status: u16,
}

impl EndpointSpec {
    /// Create a spec named after its URL, expecting `200`.
    pub fn parse(url: &str) -> Result<Self, EndpointError> {
        let target = Url::parse(url).map_err(|source| EndpointError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        Ok(Self {
            name: url.to_string(),
            url: url.to_string(),
            target,
            expected_status: DEFAULT_EXPECTED_STATUS,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_expected_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Decode a raw config entry.
    pub fn from_entry(entry: &EndpointEntry) -> Result<Self, EndpointError> {
        let fields: EndpointFields = entry.as_value().clone().try_into()?;
        let mut spec = Self::parse(&fields.url)?.with_expected_status(fields.expected_status);
        if let Some(name) = fields.name {
            spec.name = name;
        }

        Ok(spec)
    }
}

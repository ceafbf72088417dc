//! Credential records and their second-resolution UTC timestamps.
//!
//! A credential is two store-managed timestamps (`created`, `modified`)
//! plus an open map of caller-supplied string fields (`username`,
//! `password`, `description`, and anything else).  In JSON the fields are
//! flattened next to the timestamps:
//!
//! ```text
//! {"created": "2024-01-02 03:04:05", "modified": "...", "username": "...", ...}
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{PmanError, Result};

/// Text form of every timestamp in a vault.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Field names owned by the store; callers cannot set them.
pub const RESERVED_FIELDS: [&str; 2] = ["created", "modified"];

/// Caller-supplied credential fields, keyed by field name.
pub type CredentialFields = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Timestamp
// ---------------------------------------------------------------------------

/// A UTC instant truncated to whole seconds.
///
/// Ordering is chronological, which for `YYYY-MM-DD HH:MM:SS` text is
/// also lexicographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Current UTC time, truncated to the second.
    pub fn now() -> Self {
        Self(Utc::now().naive_utc().trunc_subsecs(0))
    }

    /// Whole days elapsed between `self` and `now` (negative if `self` is later).
    pub fn age_days(&self, now: Timestamp) -> i64 {
        (now.0 - self.0).num_days()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = PmanError;

    /// Parse the exact `YYYY-MM-DD HH:MM:SS` form.  Anything that would not
    /// print back identically (missing zero padding, fractional seconds)
    /// is rejected.
    fn from_str(s: &str) -> Result<Self> {
        let parsed = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map_err(|e| PmanError::InvalidFormat(format!("bad timestamp '{s}': {e}")))?;
        let ts = Self(parsed);
        if ts.to_string() != s {
            return Err(PmanError::InvalidFormat(format!(
                "timestamp '{s}' is not in YYYY-MM-DD HH:MM:SS form"
            )));
        }
        Ok(ts)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Credential
// ---------------------------------------------------------------------------

/// A single stored credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    created: Timestamp,
    modified: Timestamp,
    #[serde(flatten)]
    fields: CredentialFields,
}

impl Credential {
    /// Build a record, dropping any reserved keys from `fields`.
    pub(crate) fn new(created: Timestamp, modified: Timestamp, mut fields: CredentialFields) -> Self {
        for reserved in RESERVED_FIELDS {
            fields.remove(reserved);
        }
        Self {
            created,
            modified,
            fields,
        }
    }

    /// When this name was first stored.
    pub fn created(&self) -> Timestamp {
        self.created
    }

    /// When this record was last written.
    pub fn modified(&self) -> Timestamp {
        self.modified
    }

    /// Caller-supplied fields (never contains `created`/`modified`).
    pub fn fields(&self) -> &CredentialFields {
        &self.fields
    }

    /// Look up a caller-supplied field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn username(&self) -> &str {
        self.field("username").unwrap_or_default()
    }

    pub fn password(&self) -> &str {
        self.field("password").unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.field("description").unwrap_or_default()
    }

    /// Fields other than username/password/description.
    pub fn extra_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), "username" | "password" | "description"))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

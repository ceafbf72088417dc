//! The in-memory credential vault.
//!
//! `Vault` maps credential names to `Credential` records.  It knows
//! nothing about files or keys: persistence goes through `format`
//! (bytes) and `file` (disk).

use std::collections::BTreeMap;

use zeroize::Zeroizing;

use super::credential::{Credential, CredentialFields, Timestamp};
use crate::errors::{PmanError, Result};

/// Named credentials, kept sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vault {
    entries: BTreeMap<String, Credential>,
}

impl Vault {
    /// Create an empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// All credential names in ascending order.
    pub fn list(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Fetch a credential by name.
    pub fn get(&self, name: &str) -> Result<&Credential> {
        self.entries
            .get(name)
            .ok_or_else(|| PmanError::CredentialNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names containing `substr`, ignoring case, in ascending order.
    ///
    /// An empty `substr` matches every name.
    pub fn search(&self, substr: &str) -> Vec<String> {
        let needle = substr.to_lowercase();
        self.entries
            .keys()
            .filter(|name| name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, credential)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Credential)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Add or replace a credential, stamping it with the current time.
    pub fn set(&mut self, name: &str, fields: CredentialFields) -> Result<()> {
        self.set_at(name, fields, Timestamp::now())
    }

    /// `set` with an explicit clock reading.
    ///
    /// A new name gets `created == modified == now`.  An existing name
    /// keeps its original `created`; any `created`/`modified` in `fields`
    /// is ignored.
    pub fn set_at(&mut self, name: &str, fields: CredentialFields, now: Timestamp) -> Result<()> {
        validate_name(name)?;

        let created = self.entries.get(name).map_or(now, Credential::created);
        // created <= modified even if the clock stepped backwards.
        let modified = now.max(created);

        tracing::debug!(credential = name, replaced = self.contains(name), "set credential");
        self.entries
            .insert(name.to_string(), Credential::new(created, modified, fields));
        Ok(())
    }

    /// Delete a credential.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        self.entries
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| PmanError::CredentialNotFound(name.to_string()))
    }

    /// Store a record exactly as given, timestamps included.
    pub(crate) fn insert_verbatim(&mut self, name: &str, credential: Credential) {
        self.entries.insert(name.to_string(), credential);
    }

    // ------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------

    /// Encode the whole vault as a JSON object of name -> record.
    ///
    /// The returned buffer holds plaintext secrets and is wiped on drop.
    pub fn serialize(&self) -> Result<Zeroizing<Vec<u8>>> {
        serde_json::to_vec(&self.entries)
            .map(Zeroizing::new)
            .map_err(|e| PmanError::InvalidFormat(format!("cannot encode vault: {e}")))
    }

    /// Decode a vault produced by `serialize`.
    ///
    /// Either the whole payload is valid or nothing is returned.
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let entries: BTreeMap<String, Credential> = serde_json::from_slice(bytes)
            .map_err(|e| PmanError::InvalidFormat(format!("vault JSON: {e}")))?;

        for (name, cred) in &entries {
            validate_name(name).map_err(|e| PmanError::InvalidFormat(e.to_string()))?;
            if cred.created() > cred.modified() {
                return Err(PmanError::InvalidFormat(format!(
                    "credential '{name}' was modified ({}) before it was created ({})",
                    cred.modified(),
                    cred.created()
                )));
            }
        }

        Ok(Self { entries })
    }
}

/// Credential names must be non-empty and free of control characters.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(PmanError::InvalidCredentialName(
            "credential name cannot be empty".into(),
        ));
    }
    if name.chars().any(char::is_control) {
        return Err(PmanError::InvalidCredentialName(format!(
            "credential name {name:?} contains control characters"
        )));
    }
    Ok(())
}

//! Reconciling two vaults, last-modified wins.
//!
//! For each name in `source` (in sorted order):
//!
//! - missing from `destination`: copy the record verbatim -> `Add`
//! - identical in both: nothing, not even a log entry
//! - `destination.modified < source.modified`: take the source's fields
//!   through `Vault::set`, so the destination keeps its `created` and gets
//!   a fresh `modified` -> `Update`
//! - otherwise (destination newer, or same second): keep destination -> `Skip`
//!
//! Ties going to the destination is a policy choice; callers rely on it.

use std::fmt;

use super::credential::Timestamp;
use super::store::Vault;
use crate::errors::Result;

/// One decision taken by `merge`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// Name was only in the source; copied over unchanged.
    Add { name: String },

    /// Source was newer; destination now carries the source's fields.
    Update {
        name: String,
        destination_modified: Timestamp,
        source_modified: Timestamp,
    },

    /// Destination was newer or equally new; left alone.
    Skip {
        name: String,
        destination_modified: Timestamp,
        source_modified: Timestamp,
    },
}

impl MergeAction {
    pub fn name(&self) -> &str {
        match self {
            Self::Add { name } | Self::Update { name, .. } | Self::Skip { name, .. } => name,
        }
    }

    /// `"add"`, `"update"` or `"skip"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Update { .. } => "update",
            Self::Skip { .. } => "skip",
        }
    }

    /// `(destination_modified, source_modified)`; `None` for `Add`.
    pub fn timestamps(&self) -> Option<(Timestamp, Timestamp)> {
        match self {
            Self::Add { .. } => None,
            Self::Update {
                destination_modified,
                source_modified,
                ..
            }
            | Self::Skip {
                destination_modified,
                source_modified,
                ..
            } => Some((*destination_modified, *source_modified)),
        }
    }
}

impl fmt::Display for MergeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.timestamps() {
            None => write!(f, "{}: {}", self.kind(), self.name()),
            Some((dst, src)) => write!(
                f,
                "{}: {} [local={dst}, other={src}]",
                self.kind(),
                self.name()
            ),
        }
    }
}

/// Merge `source` into `destination` in place and return what happened.
///
/// Each entry is applied on its own; if one fails, the entries before it
/// stay merged and the failing entry is left untouched.
pub fn merge(destination: &mut Vault, source: &Vault) -> Result<Vec<MergeAction>> {
    let mut actions = Vec::new();

    for (name, theirs) in source.iter() {
        if !destination.contains(name) {
            tracing::debug!(credential = name, "merge: add");
            destination.insert_verbatim(name, theirs.clone());
            actions.push(MergeAction::Add {
                name: name.to_string(),
            });
            continue;
        }

        let ours = destination.get(name)?;

        if ours == theirs {
            continue;
        }

        let destination_modified = ours.modified();
        let source_modified = theirs.modified();

        if destination_modified < source_modified {
            tracing::debug!(credential = name, %destination_modified, %source_modified, "merge: update");
            destination.set(name, theirs.fields().clone())?;
            actions.push(MergeAction::Update {
                name: name.to_string(),
                destination_modified,
                source_modified,
            });
        } else {
            tracing::debug!(credential = name, %destination_modified, %source_modified, "merge: skip");
            actions.push(MergeAction::Skip {
                name: name.to_string(),
                destination_modified,
                source_modified,
            });
        }
    }

    Ok(actions)
}

//! Core data types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped fixture document: string keys to arbitrary JSON values.
pub type Document = Map<String, Value>;

/// Column lists read from a veil map file.
///
/// Both lists are optional in the source document and default to empty.
/// Order is kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VeilMap {
    pub deidentify: Vec<String>,
    pub timeshift: Vec<String>,
}

/// Partially-specified map as decoded from disk, before it is laid over a base.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct VeilMapPatch {
    #[serde(default)]
    pub deidentify: Option<Vec<String>>,
    #[serde(default)]
    pub timeshift: Option<Vec<String>>,
}

impl VeilMap {
    /// Replace each list the patch names; leave the others untouched.
    pub(crate) fn apply(mut self, patch: VeilMapPatch) -> Self {
        if let Some(deidentify) = patch.deidentify {
            self.deidentify = deidentify;
        }
        if let Some(timeshift) = patch.timeshift {
            self.timeshift = timeshift;
        }
        self
    }
}

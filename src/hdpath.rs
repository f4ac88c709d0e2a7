//! Candidate Derivation Paths
//!
//! A `CandidatePath` is a base template with one trailing child index
//! appended, e.g. `44'/60'/0'` + index 1 = `44'/60'/0'/1`. The string form
//! is what gets reported to the operator; the component form (BIP32 child
//! numbers, hardened marked with the high bit) is what the device adapter
//! sends over the wire.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::{harden, is_hardened};
use crate::error::ResolveError;

/// One fully-formed derivation path candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePath(String);

impl CandidatePath {
    /// Build a candidate from a base template and a trailing child index.
    pub fn new(template: &str, index: u32) -> Self {
        CandidatePath(format!("{}/{}", template, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the path into BIP32 child numbers for the device.
    ///
    /// Segments are `/`-separated decimal indexes; a trailing `'` marks a
    /// hardened child. A leading `m/` prefix is tolerated and skipped.
    pub fn components(&self) -> Result<Vec<u32>, ResolveError> {
        let mut components = Vec::new();
        for segment in self.0.split('/') {
            if segment == "m" && components.is_empty() {
                continue;
            }
            let (raw, hardened) = match segment.strip_suffix('\'') {
                Some(stripped) => (stripped, true),
                None => (segment, false),
            };
            let index: u32 = raw
                .parse()
                .map_err(|_| ResolveError::Path(format!("bad segment '{}' in {}", segment, self.0)))?;
            // a raw index must not already carry the hardened marker
            if is_hardened(index) {
                return Err(ResolveError::Path(format!(
                    "segment '{}' out of range in {}",
                    segment, self.0
                )));
            }
            components.push(if hardened { harden(index) } else { index });
        }
        if components.is_empty() {
            return Err(ResolveError::Path(format!("empty path '{}'", self.0)));
        }
        Ok(components)
    }
}

impl fmt::Display for CandidatePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for CandidatePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

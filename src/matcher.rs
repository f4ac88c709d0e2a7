//! Path Matcher
//!
//! Walks the candidate sequence in order for one target address and returns
//! the first candidate whose derived address matches.
//!
//! Two contractual behaviors worth calling out:
//!
//! - Comparison ignores case. Hex addresses carry mixed-case checksums
//!   (EIP-55); the casing must not affect identity here.
//! - A failed lookup means "this candidate does not match", nothing more.
//!   The failure is logged and the scan continues with the next candidate.
//!   This holds even if the device died mid-run: the remaining candidates
//!   each fail and the target ends up "No paths found", with the warn-level
//!   log trail showing why.

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::constants::NO_PATHS_FOUND;
use crate::hdpath::CandidatePath;
use crate::oracle::AddressOracle;
use crate::telemetry::truncate_hex;

/// Outcome of one target's search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// First candidate (in sequence order) that derives the target address
    Found(CandidatePath),
    /// Every candidate was tried; none matched
    NotFound,
}

impl Serialize for MatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MatchResult::Found(path) => path.serialize(serializer),
            MatchResult::NotFound => serializer.serialize_str(NO_PATHS_FOUND),
        }
    }
}

/// Linear scan over `candidates`, short-circuiting on the first match.
///
/// Never queries past the first match, never queries twice for the same
/// candidate, and never fails: lookup errors are absorbed as non-matches.
pub async fn find_path<O: AddressOracle>(
    target: &str,
    candidates: &[CandidatePath],
    oracle: &mut O,
) -> MatchResult {
    for candidate in candidates {
        debug!(path = %candidate, "probing candidate path");
        match oracle.resolve(candidate).await {
            Ok(derived) => {
                debug!(
                    path = %candidate,
                    address = %truncate_hex(&derived, 16),
                    "device answered"
                );
                if derived.eq_ignore_ascii_case(target) {
                    return MatchResult::Found(candidate.clone());
                }
            }
            Err(err) => {
                warn!(path = %candidate, error = %err, "lookup failed, treating as non-match");
            }
        }
    }
    MatchResult::NotFound
}

//! Batch Runner
//!
//! Applies the matcher to every target address, strictly in input order and
//! strictly one at a time. The oracle wraps a single exclusive device
//! session, so there is no parallelism to be had across candidates or
//! targets - one total order of device calls per run, by design.

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::InputError;
use crate::hdpath::CandidatePath;
use crate::matcher::{find_path, MatchResult};
use crate::oracle::AddressOracle;

/// One target's line in the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Target address as given, whitespace-trimmed
    pub address: String,
    pub result: MatchResult,
}

/// Completed run: one entry per target, in input order.
///
/// Duplicate targets each get their own entry (each was searched
/// independently); rendering to a JSON object collapses them, which is
/// harmless because their results are identical by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
}

impl Report {
    /// Render as a pretty-printed JSON object, address -> path or sentinel,
    /// keys in input order.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        let mut map = Map::with_capacity(self.entries.len());
        for entry in &self.entries {
            map.insert(entry.address.clone(), serde_json::to_value(&entry.result)?);
        }
        serde_json::to_string_pretty(&Value::Object(map))
    }
}

/// Split and trim the operator's comma-separated address list.
///
/// Empty fragments (doubled commas, trailing comma) are skipped; a list
/// with no usable fragment at all is an input error, caught before any
/// search space is generated.
pub fn parse_targets(addresses: &str) -> Result<Vec<String>, InputError> {
    let targets: Vec<String> = addresses
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if targets.is_empty() {
        return Err(InputError::NoTargets);
    }
    Ok(targets)
}

/// Validate the index depth before the search space is generated.
///
/// Negative depths are fine (they yield an empty space, never an error),
/// but a depth past u32::MAX cannot map to device child indexes and would
/// otherwise be quietly narrowed - reject it up front with a clear message.
pub fn validate_depth(depth: i64) -> Result<i64, InputError> {
    if depth > u32::MAX as i64 {
        return Err(InputError::DepthTooLarge(depth));
    }
    Ok(depth)
}

/// Search every target against the shared candidate sequence.
///
/// One target's search completes before the next begins; `targets` order
/// is preserved in the report.
pub async fn run<O: AddressOracle>(
    targets: &[String],
    candidates: &[CandidatePath],
    oracle: &mut O,
) -> Report {
    let mut entries = Vec::with_capacity(targets.len());
    for target in targets {
        debug!(address = %target, "searching address");
        let result = find_path(target, candidates, oracle).await;
        match &result {
            MatchResult::Found(path) => info!(address = %target, path = %path, "path found"),
            MatchResult::NotFound => info!(address = %target, "no path found"),
        }
        entries.push(ReportEntry {
            address: target.clone(),
            result,
        });
    }
    Report { entries }
}

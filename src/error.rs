//! Error Types
//!
//! Three failure classes with different propagation rules:
//!
//! - `SessionError`: the device session could not be opened at all. Fatal,
//!   aborts the run before any matching begins.
//! - `ResolveError`: one address lookup failed. Absorbed by the matcher,
//!   which treats the candidate as non-matching and moves on.
//! - `InputError`: bad operator input, rejected before the search space is
//!   even generated.

use std::fmt;
use std::time::Duration;

/// The device session could not be established.
#[derive(Debug)]
pub enum SessionError {
    /// No HID backend available on this host
    Hid(String),
    /// HID backend is up but no supported device could be opened
    NoDevice(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionError::Hid(e) => write!(f, "HID backend unavailable: {}", e),
            SessionError::NoDevice(e) => {
                write!(f, "no device session: {} (is the device connected and unlocked?)", e)
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// A single address lookup failed.
///
/// The matcher maps every variant to "this candidate does not match" by
/// contract; none of these abort a search.
#[derive(Debug)]
pub enum ResolveError {
    /// The candidate path string could not be parsed into BIP32 components
    Path(String),
    /// Transport-level I/O failure talking to the device
    Transport(String),
    /// The device answered with a non-success status word
    /// (locked screen, wrong app, path rejected by firmware, ...)
    Device(u16),
    /// The device did not answer within the configured window
    Timeout(Duration),
    /// The device answered but the payload was not a well-formed address
    Malformed(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResolveError::Path(s) => write!(f, "invalid derivation path: {}", s),
            ResolveError::Transport(e) => write!(f, "transport error: {}", e),
            ResolveError::Device(sw) => write!(f, "device returned status 0x{:04x}", sw),
            ResolveError::Timeout(d) => write!(f, "device did not answer within {:?}", d),
            ResolveError::Malformed(s) => write!(f, "malformed device answer: {}", s),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Operator input was rejected before any search began.
#[derive(Debug)]
pub enum InputError {
    /// The address list contained nothing but separators and whitespace
    NoTargets,
    /// Index depth larger than any child index the device could accept
    DepthTooLarge(i64),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputError::NoTargets => {
                write!(f, "no target addresses given (the list is empty after trimming)")
            }
            InputError::DepthTooLarge(depth) => {
                write!(f, "index depth {} exceeds the supported maximum {}", depth, u32::MAX)
            }
        }
    }
}

impl std::error::Error for InputError {}

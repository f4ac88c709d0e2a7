/// Derivation Path and Device Protocol Constants
///
/// These constants ensure consistent handling of the search space and the
/// Ethereum app's APDU protocol across the codebase. All path and protocol
/// logic should use these constants instead of magic numbers.

/// Base derivation path templates, in search priority order.
///
/// The order is significant: when more than one candidate could produce the
/// same address, the first template in this list wins. Overridable via
/// `search.base_paths` in config.toml.
pub const DEFAULT_BASE_PATHS: [&str; 5] = [
    "44'/60'/0'",         // Ledger (ETH)
    "44'/60'/160720'/0'", // Ledger (ETC)
    "44'/60'/0'/0",       // TREZOR (ETH)
    "44'/61'/0'/0",       // TREZOR (ETC)
    "44'/60'/1'/0",       // MEW - "Your Custom Path"
];

/// How many trailing indexes to search along each base path when
/// --index-depth is not given. Overridable via `search.index_depth` in
/// config.toml.
pub const DEFAULT_INDEX_DEPTH: i64 = 5;

/// How long to wait for a single device exchange before giving up on that
/// candidate. Overridable via `device.timeout_secs` in config.toml.
pub const DEFAULT_DEVICE_TIMEOUT_SECS: u64 = 30;

/// Sentinel value reported for a target address no candidate path produced.
pub const NO_PATHS_FOUND: &str = "No paths found";

/// BIP32 hardened derivation marker (high bit of the child index)
pub const HARDENED_BIT: u32 = 0x8000_0000;

/// Ethereum app APDU class byte
pub const CLA_ETH: u8 = 0xE0;

/// GET ETH PUBLIC ADDRESS instruction
pub const INS_GET_ADDRESS: u8 = 0x02;

/// P1: return the address without on-screen confirmation
pub const P1_RETURN_ADDRESS: u8 = 0x00;

/// P2: do not return the chain code
pub const P2_NO_CHAINCODE: u8 = 0x00;

/// APDU status word for success
pub const SW_OK: u16 = 0x9000;

/// Check if a child index already carries the hardened marker
#[inline]
pub fn is_hardened(index: u32) -> bool {
    index & HARDENED_BIT != 0
}

/// Apply the hardened marker to a raw child index
#[inline]
pub fn harden(index: u32) -> u32 {
    index | HARDENED_BIT
}

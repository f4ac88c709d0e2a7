//! Address Oracle Interface
//!
//! The one seam between the search logic and the hardware. An oracle owns
//! an exclusive device session: it is opened once per run, every lookup
//! goes through the same instance, and the session is released when the
//! oracle is dropped.
//!
//! `resolve` takes `&mut self` on purpose - the underlying session is
//! single-consumer, so the type system forbids two lookups in flight.

use crate::error::ResolveError;
use crate::hdpath::CandidatePath;

/// Resolves a derivation path to the address the device derives for it.
pub trait AddressOracle {
    /// Ask the device which address lives at `path`.
    ///
    /// Any failure (locked device, wrong app, rejected path, transport
    /// fault, timeout) comes back as a `ResolveError`; callers decide what
    /// a failure means - the matcher treats it as "does not match".
    fn resolve(
        &mut self,
        path: &CandidatePath,
    ) -> impl std::future::Future<Output = Result<String, ResolveError>> + Send;
}

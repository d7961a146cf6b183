pub mod crypto_erase;
pub mod dod;
pub mod gutmann;
pub mod nist;
pub mod pass;
pub mod random;
pub mod registry;
pub mod zero;


use crate::crypto::secure_rng::EntropySource;
use crate::error::WipeResult;

// Re-export the plan generators
pub use crypto_erase::CryptoEraseWipe;
pub use dod::{DoDEceWipe, DoDWipe};
pub use gutmann::GutmannWipe;
pub use nist::NistWipe;
pub use pass::{Pass, PassKind, Pattern, Plan};
pub use random::RandomWipe;
pub use registry::Method;
pub use zero::FillWipe;

/// Produces the ordered pass plan for one wipe method.
///
/// Generators are stateless: the shape of the plan never depends on the
/// call. Only `cryptographic-erase` draws from `rng`, to derive its
/// pattern; every other generator ignores it.
pub trait PlanGenerator: Send + Sync {
    /// Canonical lowercase method name
    fn name(&self) -> &'static str;

    /// Whether the file is unlinked after all passes succeed
    fn delete_after(&self) -> bool {
        true
    }

    fn plan(&self, rng: &dyn EntropySource) -> WipeResult<Plan>;
}

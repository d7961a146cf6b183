// Simulated cryptographic erase
//
// A fresh 32-byte key is drawn, its SHA-256 digest becomes a single tiled
// overwrite pattern, and the key is zeroed. The file is never encrypted with
// the key, so this is a one-pass hash-derived overwrite and carries no
// cryptographic-erase-grade guarantee.

use super::pass::{Pass, Pattern, Plan};
use super::PlanGenerator;
use crate::crypto::ephemeral_key::EphemeralKey;
use crate::crypto::secure_rng::EntropySource;
use crate::error::{WipeError, WipeResult};

pub struct CryptoEraseWipe;

impl CryptoEraseWipe {
    pub const PASS_COUNT: usize = 1;
}

impl PlanGenerator for CryptoEraseWipe {
    fn name(&self) -> &'static str {
        "cryptographic-erase"
    }

    fn plan(&self, rng: &dyn EntropySource) -> WipeResult<Plan> {
        let key = EphemeralKey::generate(rng)
            .map_err(|source| WipeError::RandomSource { pass: None, source })?;
        let digest = key.into_digest();

        tracing::debug!("derived overwrite pattern from ephemeral key, key zeroed");

        let passes = vec![Pass::Fixed(Pattern::from_table(&digest))];
        Ok(Plan::new(passes, self.delete_after()))
    }
}

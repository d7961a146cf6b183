// Ephemeral key material for the simulated cryptographic erase.
//
// The key lives only inside one plan-generation call. It is zeroed by
// `ZeroizeOnDrop` on every exit path, including early returns and unwinding.

use super::secure_rng::{EntropySource, RngError};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const KEY_LEN: usize = 32;

#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EphemeralKey {
    bytes: [u8; KEY_LEN],
}

impl EphemeralKey {
    /// Draw a fresh key from a secure random source
    pub fn generate(rng: &dyn EntropySource) -> Result<Self, RngError> {
        let mut key = Self {
            bytes: [0u8; KEY_LEN],
        };
        rng.fill_bytes(&mut key.bytes)?;
        Ok(key)
    }

    /// SHA-256 digest of the key
    pub fn digest(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&Sha256::digest(self.bytes));
        out
    }

    /// Derive the digest and destroy the key in one step
    pub fn into_digest(mut self) -> [u8; 32] {
        let digest = self.digest();
        self.zeroize();
        digest
    }

    #[cfg(test)]
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for EphemeralKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EphemeralKey([REDACTED])")
    }
}

use ring::rand::{SecureRandom, SystemRandom};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// Failure of a cryptographically secure random source.
///
/// A source that cannot deliver bytes is reported, never replaced by a
/// weaker generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source_name}: {reason}")]
pub struct RngError {
    pub source_name: String,
    pub reason: String,
}

impl RngError {
    pub fn new(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}

/// Trait for entropy sources
pub trait EntropySource: Send + Sync {
    /// Fill buffer with random bytes
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RngError>;
    /// Get source name for logging
    fn name(&self) -> &str;
}

/// Ring-based system random (uses OS facilities)
pub struct RingSystemRNG {
    rng: SystemRandom,
}

impl Default for RingSystemRNG {
    fn default() -> Self {
        Self::new()
    }
}

impl RingSystemRNG {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl EntropySource for RingSystemRNG {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RngError> {
        self.rng
            .fill(dest)
            .map_err(|_| RngError::new(self.name(), "SystemRandom::fill failed"))
    }

    fn name(&self) -> &str {
        "RingSystemRNG"
    }
}

/// `rand`'s OS-backed generator (getrandom on Linux, BCryptGenRandom on Windows)
#[derive(Default)]
pub struct OsRngSource;

impl EntropySource for OsRngSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RngError> {
        use rand::RngCore;
        rand::rngs::OsRng
            .try_fill_bytes(dest)
            .map_err(|e| RngError::new(self.name(), e.to_string()))
    }

    fn name(&self) -> &str {
        "OsRng"
    }
}

/// FIPS 140-2 continuous random number generator test
pub(crate) struct ContinuousTest {
    last_block: Option<[u8; Self::BLOCK]>,
    failure_count: u64,
}

impl ContinuousTest {
    const BLOCK: usize = 16;

    pub(crate) fn new() -> Self {
        Self {
            last_block: None,
            failure_count: 0,
        }
    }

    pub(crate) fn test(&mut self, data: &[u8]) -> bool {
        // Blocks shorter than 16 bytes collide too often to be meaningful
        if data.len() < Self::BLOCK {
            return true;
        }

        let mut block = [0u8; Self::BLOCK];
        block.copy_from_slice(&data[..Self::BLOCK]);

        if self.last_block == Some(block) {
            self.failure_count += 1;
            tracing::error!(
                failures = self.failure_count,
                "FIPS 140-2 continuous test failed: identical blocks detected"
            );
            return false;
        }

        self.last_block = Some(block);
        true
    }
}

/// A single entropy source guarded by the FIPS 140-2 continuous test.
///
/// Every request is forwarded to the wrapped source; output whose leading
/// 16-byte block repeats the previous request's is rejected.
pub struct SecureRNG {
    source: Box<dyn EntropySource>,
    continuous_test: Mutex<ContinuousTest>,
}

impl Default for SecureRNG {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureRNG {
    /// Secure RNG backed by the operating system via ring
    pub fn new() -> Self {
        Self::with_source(Box::new(RingSystemRNG::new()))
    }

    pub fn with_source(source: Box<dyn EntropySource>) -> Self {
        Self {
            source,
            continuous_test: Mutex::new(ContinuousTest::new()),
        }
    }

    /// Calculate Shannon entropy of data, in bits per byte
    pub fn calculate_entropy(data: &[u8]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }

        let mut counts = [0u64; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }

        let length = data.len() as f64;
        let mut entropy = 0.0;

        for &count in &counts {
            if count > 0 {
                let probability = count as f64 / length;
                entropy -= probability * probability.log2();
            }
        }

        entropy
    }
}

impl EntropySource for SecureRNG {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RngError> {
        self.source.fill_bytes(dest)?;

        let mut test = self
            .continuous_test
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !test.test(dest) {
            return Err(RngError::new(
                self.source.name(),
                "FIPS 140-2 continuous test failed",
            ));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        self.source.name()
    }
}

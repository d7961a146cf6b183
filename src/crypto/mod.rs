pub mod ephemeral_key;
pub mod secure_rng;


// Re-export
pub use ephemeral_key::EphemeralKey;
pub use secure_rng::{EntropySource, OsRngSource, RingSystemRNG, RngError, SecureRNG};

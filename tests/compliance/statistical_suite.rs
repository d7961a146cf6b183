/// Statistical checks on random pass output
///
/// Random passes must be drawn from a cryptographically secure source.
/// These tests run the simplified NIST SP 800-22 checks (monobit, entropy,
/// longest run) over data produced by the RNG and by the engine itself.
use crate::common::scratch_file::ScratchFile;
use crate::common::test_helpers::{calculate_entropy, verify_randomness};
use file_shred::crypto::{EntropySource, OsRngSource, RingSystemRNG, SecureRNG};
use file_shred::{OverwriteEngine, Pass, Plan, WipeConfig};

// ==================== SOURCE TESTS ====================

#[test]
fn test_default_rng_passes_suite() {
    let mut data = vec![0u8; 64 * 1024];
    SecureRNG::new().fill_bytes(&mut data).unwrap();
    assert_eq!(verify_randomness(&data), Some(true));
}

#[test]
fn test_ring_source_passes_suite() {
    let rng = SecureRNG::with_source(Box::new(RingSystemRNG::new()));
    let mut data = vec![0u8; 64 * 1024];
    rng.fill_bytes(&mut data).unwrap();
    assert_eq!(verify_randomness(&data), Some(true));
}

#[test]
fn test_os_rng_source_passes_suite() {
    let rng = SecureRNG::with_source(Box::new(OsRngSource));
    let mut data = vec![0u8; 64 * 1024];
    rng.fill_bytes(&mut data).unwrap();
    assert_eq!(verify_randomness(&data), Some(true));
}

// ==================== NEGATIVE CONTROLS ====================

#[test]
fn test_suite_rejects_constant_data() {
    assert_eq!(verify_randomness(&vec![0x00; 8192]), Some(false));
    assert_eq!(verify_randomness(&vec![0xFF; 8192]), Some(false));
}

#[test]
fn test_suite_rejects_counter_pattern() {
    // Flat byte histogram and balanced bits, but every byte repeats 8 times
    let data: Vec<u8> = (0..8192u32).map(|i| (i / 8) as u8).collect();
    assert_eq!(verify_randomness(&data), Some(false));
}

#[test]
fn test_suite_needs_enough_data() {
    assert_eq!(verify_randomness(&[0u8; 999]), None);
}

// ==================== ENGINE OUTPUT ====================

#[test]
fn test_random_pass_output_passes_suite() {
    let size = 128 * 1024;
    let scratch = ScratchFile::with_size(size).unwrap();
    let mut file = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open(scratch.path())
        .unwrap();

    let engine = OverwriteEngine::new(WipeConfig::default());
    engine
        .execute_plan(&mut file, size as u64, &Plan::new(vec![Pass::Random], true))
        .unwrap();

    let contents = scratch.contents().unwrap();
    assert_eq!(verify_randomness(&contents), Some(true));
    assert!(calculate_entropy(&contents) > 7.99);
}

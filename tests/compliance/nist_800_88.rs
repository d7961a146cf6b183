/// NIST 800-88 Rev. 1 Compliance Tests
///
/// Checks the `nist` clear sequence and the single-pass
/// `cryptographic-erase` method against the guideline's expectations:
/// - nist: 0x00, 0xFF, random, each covering the whole file
/// - cryptographic-erase: one pass derived from a fresh 32-byte key
/// - Every pass is durably synced before the next one begins
use crate::common::scratch_file::ScratchFile;
use crate::common::test_helpers::verify_pattern;
use file_shred::algorithms::{CryptoEraseWipe, NistWipe};
use file_shred::crypto::SecureRNG;
use file_shred::{secure_delete, Method, Pass, PassKind, WipeConfig, WipeOrchestrator};

// ==================== SEQUENCE TESTS ====================

#[test]
fn test_nist_pass_constants() {
    assert_eq!(NistWipe::PASS_1_PATTERN, 0x00);
    assert_eq!(NistWipe::PASS_2_PATTERN, 0xFF);
    assert_eq!(NistWipe::PASS_COUNT, 3);
}

#[test]
fn test_nist_pass_sequence() {
    let plan = Method::Nist.plan(&SecureRNG::new()).unwrap();
    assert_eq!(
        plan.passes(),
        &[Pass::byte(0x00), Pass::byte(0xFF), Pass::Random]
    );
    assert!(plan.delete_after());
}

#[test]
fn test_nist_end_to_end_with_verification() {
    let scratch = ScratchFile::with_size(50_000).unwrap();
    let orchestrator = WipeOrchestrator::new(WipeConfig {
        verify: true,
        ..WipeConfig::default()
    });

    let outcome = orchestrator.secure_delete(scratch.path(), "NIST").unwrap();

    assert_eq!(outcome.method, Method::Nist);
    assert_eq!(outcome.report.total_bytes(), 150_000);
    assert!(!scratch.exists());
}

// ==================== CRYPTOGRAPHIC ERASE TESTS ====================

#[test]
fn test_crypto_erase_single_fixed_pass() {
    let plan = Method::CryptographicErase.plan(&SecureRNG::new()).unwrap();

    assert_eq!(plan.len(), CryptoEraseWipe::PASS_COUNT);
    assert_eq!(plan.shape(), vec![PassKind::Fixed]);
    assert_eq!(plan.passes()[0].pattern().unwrap().len(), 32);
}

#[test]
fn test_crypto_erase_key_is_fresh_per_invocation() {
    let rng = SecureRNG::new();
    let first = Method::CryptographicErase.plan(&rng).unwrap();
    let second = Method::CryptographicErase.plan(&rng).unwrap();

    assert_ne!(first, second, "each invocation must derive a new key");
}

#[test]
fn test_crypto_erase_tiles_digest_over_large_file() {
    let scratch = ScratchFile::with_size(10_000).unwrap();
    let plan = Method::CryptographicErase.plan(&SecureRNG::new()).unwrap();
    let digest = plan.passes()[0].pattern().unwrap().as_bytes().to_vec();

    let mut file = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open(scratch.path())
        .unwrap();
    file_shred::OverwriteEngine::default()
        .execute_plan(&mut file, 10_000, &plan)
        .unwrap();

    assert!(verify_pattern(scratch.path(), &digest).unwrap());
}

#[test]
fn test_crypto_erase_removes_file() {
    let scratch = ScratchFile::with_size(4096).unwrap();
    let outcome = secure_delete(scratch.path(), "cryptographic-erase").unwrap();

    assert!(outcome.removed);
    assert_eq!(outcome.report.pass_count(), 1);
    assert!(!scratch.exists());
}

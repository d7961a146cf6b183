/// DoD 5220.22-M Compliance Tests
///
/// These tests validate that the `dod` and `dod-ece` methods follow the
/// Department of Defense 5220.22-M overwrite sequences.
///
/// Standard Requirements:
/// - dod: 0x00, 0xFF, random (exactly 3 passes)
/// - dod-ece: 0xF6, 0x00, 0xFF, random, 0x00, 0xFF, random (exactly 7 passes)
/// - Every pass covers the entire file
use crate::common::scratch_file::ScratchFile;
use crate::common::test_helpers::calculate_entropy;
use file_shred::algorithms::{DoDEceWipe, DoDWipe};
use file_shred::crypto::SecureRNG;
use file_shred::{Method, OverwriteEngine, Pass, PassKind, WipeConfig};

// ==================== PATTERN COMPLIANCE TESTS ====================

#[test]
fn test_dod_pattern_constants() {
    assert_eq!(DoDWipe::PASS_1_PATTERN, 0x00, "pass 1 must write 0x00");
    assert_eq!(DoDWipe::PASS_2_PATTERN, 0xFF, "pass 2 must write 0xFF");
    assert_eq!(DoDWipe::PASS_COUNT, 3, "dod requires exactly 3 passes");
}

#[test]
fn test_dod_pass_sequence_order() {
    let plan = Method::Dod.plan(&SecureRNG::new()).unwrap();
    assert_eq!(
        plan.passes(),
        &[Pass::byte(0x00), Pass::byte(0xFF), Pass::Random]
    );
}

#[test]
fn test_dod_ece_pass_sequence_order() {
    let plan = Method::DodEce.plan(&SecureRNG::new()).unwrap();
    assert_eq!(plan.len(), DoDEceWipe::PASS_COUNT);
    assert_eq!(
        plan.passes(),
        &[
            Pass::byte(0xF6),
            Pass::byte(0x00),
            Pass::byte(0xFF),
            Pass::Random,
            Pass::byte(0x00),
            Pass::byte(0xFF),
            Pass::Random,
        ]
    );
}

// ==================== COVERAGE TESTS ====================

fn open_rw(fixture: &ScratchFile) -> std::fs::File {
    std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open(fixture.path())
        .unwrap()
}

#[test]
fn test_each_dod_pass_covers_entire_file() {
    let size = 3 * 4096 + 123;
    let fixture = ScratchFile::with_size(size).unwrap();
    let mut file = open_rw(&fixture);

    let engine = OverwriteEngine::new(WipeConfig {
        verify: true,
        ..WipeConfig::default()
    });
    let plan = Method::Dod.plan(&SecureRNG::new()).unwrap();
    let report = engine.execute_plan(&mut file, size as u64, &plan).unwrap();

    assert_eq!(report.pass_count(), 3);
    for pass in &report.passes {
        assert_eq!(pass.bytes_written, size as u64, "pass {}", pass.index);
    }
    assert_eq!(report.passes[2].kind, PassKind::Random);
}

#[test]
fn test_dod_final_pass_is_random() {
    let size = 256 * 1024;
    let fixture = ScratchFile::with_size(size).unwrap();
    let mut file = open_rw(&fixture);

    let plan = Method::Dod.plan(&SecureRNG::new()).unwrap();
    OverwriteEngine::default()
        .execute_plan(&mut file, size as u64, &plan)
        .unwrap();

    let contents = fixture.contents().unwrap();
    assert_eq!(contents.len(), size);
    assert!(
        calculate_entropy(&contents) > 7.9,
        "final random pass should leave high-entropy data"
    );
}

/// Common test utilities
///
/// This module provides shared functionality for integration tests including:
/// - Scratch files with known contents
/// - On-disk content checks
pub mod scratch_file;

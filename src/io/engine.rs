// Multi-pass overwrite engine

use super::buffer::ChunkBuffer;
use super::metrics::{PassStats, PlanReport};
use super::platform_specific::DurableSync;
use crate::algorithms::pass::{Pass, Pattern, Plan};
use crate::crypto::secure_rng::{EntropySource, SecureRNG};
use crate::error::{WipeError, WipeResult};
use crate::WipeConfig;
use std::io::{Read, Seek, SeekFrom, Write};
use std::time::Instant;

/// Anything the engine can overwrite: seekable, writable, flushable to the
/// device, and readable for optional verification
pub trait WipeTarget: Read + Write + Seek + DurableSync {}

impl<T: Read + Write + Seek + DurableSync + ?Sized> WipeTarget for T {}

/// Executes pass plans against an open target.
///
/// For every pass the engine seeks to offset 0, writes exactly `size` bytes
/// in bounded chunks and then forces a durability flush before the next pass
/// begins. The first failure aborts the plan; bytes already written stay in
/// place.
pub struct OverwriteEngine {
    config: WipeConfig,
    rng: Box<dyn EntropySource>,
}

impl Default for OverwriteEngine {
    fn default() -> Self {
        Self::new(WipeConfig::default())
    }
}

impl OverwriteEngine {
    /// Engine backed by the OS secure random source
    pub fn new(config: WipeConfig) -> Self {
        Self::with_rng(config, Box::new(SecureRNG::new()))
    }

    pub fn with_rng(config: WipeConfig, rng: Box<dyn EntropySource>) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &WipeConfig {
        &self.config
    }

    pub fn rng(&self) -> &dyn EntropySource {
        self.rng.as_ref()
    }

    /// Run a single pass over `[0, size)`. `index` is the 1-based pass
    /// number used in errors.
    pub fn execute_pass<T: WipeTarget + ?Sized>(
        &self,
        target: &mut T,
        size: u64,
        pass: &Pass,
        index: usize,
    ) -> WipeResult<PassStats> {
        let mut buffer = ChunkBuffer::new(self.config.effective_chunk_size());
        self.run_pass(target, size, pass, index, &mut buffer)
    }

    /// Run every pass of `plan` in order over `[0, size)`
    pub fn execute_plan<T: WipeTarget + ?Sized>(
        &self,
        target: &mut T,
        size: u64,
        plan: &Plan,
    ) -> WipeResult<PlanReport> {
        let mut buffer = ChunkBuffer::new(self.config.effective_chunk_size());
        let mut report = PlanReport::new(size);
        let total = plan.len();

        for (i, pass) in plan.passes().iter().enumerate() {
            let index = i + 1;
            tracing::debug!(pass = index, total, pattern = %pass, "starting pass");

            let stats = self.run_pass(target, size, pass, index, &mut buffer)?;

            tracing::debug!(
                pass = index,
                total,
                elapsed = %humantime::format_duration(stats.elapsed),
                "pass synced"
            );
            report.record(stats);
        }

        tracing::info!(
            passes = total,
            size,
            rng = self.rng.name(),
            "plan complete: {}",
            report
        );
        Ok(report)
    }

    fn run_pass<T: WipeTarget + ?Sized>(
        &self,
        target: &mut T,
        size: u64,
        pass: &Pass,
        index: usize,
        buffer: &mut ChunkBuffer,
    ) -> WipeResult<PassStats> {
        let start = Instant::now();

        target
            .seek(SeekFrom::Start(0))
            .map_err(|source| WipeError::Seek {
                pass: index,
                source,
            })?;

        let mut offset = 0u64;
        match pass {
            Pass::Fixed(pattern) => {
                // One tiled chunk serves the whole pass
                let chunk = buffer.tile(pattern);
                while offset < size {
                    let len = (size - offset).min(chunk.len() as u64) as usize;
                    write_chunk(target, &chunk[..len], index, offset)?;
                    offset += len as u64;
                }
            }
            Pass::Random => {
                let capacity = buffer.capacity() as u64;
                while offset < size {
                    let len = (size - offset).min(capacity) as usize;
                    let chunk = buffer.random(len, self.rng.as_ref()).map_err(|source| {
                        WipeError::RandomSource {
                            pass: Some(index),
                            source,
                        }
                    })?;
                    write_chunk(target, chunk, index, offset)?;
                    offset += len as u64;
                }
            }
        }

        target
            .flush()
            .and_then(|_| target.sync_durable())
            .map_err(|source| WipeError::Sync {
                pass: index,
                source,
            })?;

        if self.config.verify {
            if let Pass::Fixed(pattern) = pass {
                verify_pattern(target, size, pattern, index, buffer.capacity())?;
            }
        }

        Ok(PassStats {
            index,
            kind: pass.kind(),
            bytes_written: offset,
            elapsed: start.elapsed(),
        })
    }
}

fn write_chunk<T: WipeTarget + ?Sized>(
    target: &mut T,
    chunk: &[u8],
    pass: usize,
    offset: u64,
) -> WipeResult<()> {
    target.write_all(chunk).map_err(|source| WipeError::Write {
        pass,
        offset,
        source,
    })
}

/// Read `[0, size)` back and compare it with the tiled pattern
fn verify_pattern<T: WipeTarget + ?Sized>(
    target: &mut T,
    size: u64,
    pattern: &Pattern,
    pass: usize,
    chunk_size: usize,
) -> WipeResult<()> {
    let read_back = |source| WipeError::ReadBack { pass, source };

    target.seek(SeekFrom::Start(0)).map_err(read_back)?;

    let expected = pattern.as_bytes();
    let mut data = vec![0u8; chunk_size];
    let mut offset = 0u64;

    while offset < size {
        let len = (size - offset).min(chunk_size as u64) as usize;
        target.read_exact(&mut data[..len]).map_err(read_back)?;

        for (i, &found) in data[..len].iter().enumerate() {
            let position = offset + i as u64;
            let want = expected[(position % expected.len() as u64) as usize];
            if found != want {
                return Err(WipeError::Verification {
                    pass,
                    offset: position,
                    expected: want,
                    found,
                });
            }
        }
        offset += len as u64;
    }

    tracing::debug!(pass, bytes = size, "pattern verified");
    Ok(())
}

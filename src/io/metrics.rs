// Per-pass I/O metrics collected by the engine

use crate::algorithms::pass::PassKind;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Outcome of one completed pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassStats {
    /// 1-based pass index
    pub index: usize,
    pub kind: PassKind,
    pub bytes_written: u64,
    pub elapsed: Duration,
}

/// Summary of a completed plan, produced once at the end
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanReport {
    pub size: u64,
    pub passes: Vec<PassStats>,
}

impl PlanReport {
    pub fn new(size: u64) -> Self {
        Self {
            size,
            passes: Vec::new(),
        }
    }

    pub fn record(&mut self, stats: PassStats) {
        self.passes.push(stats);
    }

    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    pub fn total_bytes(&self) -> u64 {
        self.passes.iter().map(|p| p.bytes_written).sum()
    }

    pub fn elapsed(&self) -> Duration {
        self.passes.iter().map(|p| p.elapsed).sum()
    }

    /// Average throughput in bytes per second
    pub fn throughput_bps(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.total_bytes() as f64 / secs) as u64
        } else {
            0
        }
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Round to milliseconds so humantime output stays short
        let elapsed = Duration::from_millis(self.elapsed().as_millis() as u64);
        write!(
            f,
            "{} passes, {} bytes each, {} total in {} ({} B/s)",
            self.pass_count(),
            self.size,
            self.total_bytes(),
            humantime::format_duration(elapsed),
            self.throughput_bps()
        )
    }
}

// Gutmann - 35 passes ending in a run of random data
//
// Fixed passes target the MFM and RLL encodings of older drives. The file is
// overwritten but not removed afterwards.

use super::pass::{Pass, Pattern, Plan};
use super::PlanGenerator;
use crate::crypto::secure_rng::EntropySource;
use crate::error::WipeResult;

pub struct GutmannWipe;

impl GutmannWipe {
    pub const PASS_COUNT: usize = 35;

    /// Trailing passes of random data
    pub const TRAILING_RANDOM: usize = 5;

    /// Pass table in execution order; `None` is a random pass
    pub const PATTERNS: [Option<&'static [u8]>; 35] = [
        Some(&[0x55]),
        Some(&[0xAA]),
        // MFM rotations, cycled once fully
        Some(&[0x92, 0x49, 0x24]),
        Some(&[0x49, 0x24, 0x92]),
        Some(&[0x24, 0x92, 0x49]),
        Some(&[0x92, 0x49, 0x24]),
        // 0x00 through 0xFF in steps of 0x11
        Some(&[0x00]),
        Some(&[0x11]),
        Some(&[0x22]),
        Some(&[0x33]),
        Some(&[0x44]),
        Some(&[0x55]),
        Some(&[0x66]),
        Some(&[0x77]),
        Some(&[0x88]),
        Some(&[0x99]),
        Some(&[0xAA]),
        Some(&[0xBB]),
        Some(&[0xCC]),
        Some(&[0xDD]),
        Some(&[0xEE]),
        Some(&[0xFF]),
        // RLL (2,7)
        Some(&[0x92, 0x49, 0x24]),
        Some(&[0x49, 0x24, 0x92]),
        Some(&[0x24, 0x92, 0x49]),
        Some(&[0x6D, 0xB6, 0xDB]),
        Some(&[0xB6, 0xDB, 0x6D]),
        Some(&[0xDB, 0x6D, 0xB6]),
        Some(&[0x00]),
        Some(&[0xFF]),
        None,
        None,
        None,
        None,
        None,
    ];
}

impl PlanGenerator for GutmannWipe {
    fn name(&self) -> &'static str {
        "gutmann"
    }

    // Gutmann leaves the file in place after overwriting. Every other
    // method unlinks; this asymmetry is kept as observed behavior.
    fn delete_after(&self) -> bool {
        false
    }

    fn plan(&self, _rng: &dyn EntropySource) -> WipeResult<Plan> {
        let passes = Self::PATTERNS
            .iter()
            .map(|entry| match entry {
                Some(bytes) => Pass::Fixed(Pattern::from_table(bytes)),
                None => Pass::Random,
            })
            .collect();
        Ok(Plan::new(passes, self.delete_after()))
    }
}

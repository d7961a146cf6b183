use super::pass::{Pass, Plan};
use super::PlanGenerator;
use crate::crypto::secure_rng::EntropySource;
use crate::error::WipeResult;

/// DoD 5220.22-M, 3-pass
pub struct DoDWipe;

impl DoDWipe {
    /// DoD 5220.22-M standard pass 1 pattern (all zeros)
    pub const PASS_1_PATTERN: u8 = 0x00;

    /// DoD 5220.22-M standard pass 2 pattern (all ones)
    pub const PASS_2_PATTERN: u8 = 0xFF;

    /// DoD 5220.22-M requires exactly 3 passes
    pub const PASS_COUNT: usize = 3;
}

impl PlanGenerator for DoDWipe {
    fn name(&self) -> &'static str {
        "dod"
    }

    fn plan(&self, _rng: &dyn EntropySource) -> WipeResult<Plan> {
        Ok(Plan::new(
            vec![
                Pass::byte(Self::PASS_1_PATTERN),
                Pass::byte(Self::PASS_2_PATTERN),
                Pass::Random,
            ],
            self.delete_after(),
        ))
    }
}

/// DoD 5220.22-M ECE, 7-pass
///
/// A leading 0xF6 pass, then the 3-pass sequence run twice with the random
/// pass last.
pub struct DoDEceWipe;

impl DoDEceWipe {
    pub const PASS_COUNT: usize = 7;

    /// Fixed patterns in pass order; `None` is a random pass
    pub const PATTERNS: [Option<u8>; 7] = [
        Some(0xF6),
        Some(0x00),
        Some(0xFF),
        None,
        Some(0x00),
        Some(0xFF),
        None,
    ];
}

impl PlanGenerator for DoDEceWipe {
    fn name(&self) -> &'static str {
        "dod-ece"
    }

    fn plan(&self, _rng: &dyn EntropySource) -> WipeResult<Plan> {
        let passes = Self::PATTERNS
            .iter()
            .map(|pattern| match pattern {
                Some(byte) => Pass::byte(*byte),
                None => Pass::Random,
            })
            .collect();
        Ok(Plan::new(passes, self.delete_after()))
    }
}

// Zero/One Fill - three passes of a single constant byte
//
// Fast and simple. Useful for quick sanitization where a standard-named
// method is not required.

use super::pass::{Pass, Plan};
use super::PlanGenerator;
use crate::crypto::secure_rng::EntropySource;
use crate::error::WipeResult;

pub struct FillWipe {
    name: &'static str,
    pattern: u8,
}

impl FillWipe {
    /// Number of identical passes
    pub const PASS_COUNT: usize = 3;

    pub const ZERO: FillWipe = FillWipe {
        name: "zero-fill",
        pattern: 0x00,
    };

    pub const ONE: FillWipe = FillWipe {
        name: "one-fill",
        pattern: 0xFF,
    };

    pub fn pattern(&self) -> u8 {
        self.pattern
    }
}

impl PlanGenerator for FillWipe {
    fn name(&self) -> &'static str {
        self.name
    }

    fn plan(&self, _rng: &dyn EntropySource) -> WipeResult<Plan> {
        let passes = (0..Self::PASS_COUNT)
            .map(|_| Pass::byte(self.pattern))
            .collect();
        Ok(Plan::new(passes, self.delete_after()))
    }
}

// NIST SP 800-88 overwrite: zeros, ones, then random data

use super::pass::{Pass, Plan};
use super::PlanGenerator;
use crate::crypto::secure_rng::EntropySource;
use crate::error::WipeResult;

pub struct NistWipe;

impl NistWipe {
    pub const PASS_1_PATTERN: u8 = 0x00;
    pub const PASS_2_PATTERN: u8 = 0xFF;
    pub const PASS_COUNT: usize = 3;
}

impl PlanGenerator for NistWipe {
    fn name(&self) -> &'static str {
        "nist"
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

use super::pass::{Pass, Plan};
use super::PlanGenerator;
use crate::crypto::secure_rng::EntropySource;
use crate::error::WipeResult;

pub struct RandomWipe;

impl RandomWipe {
    pub const PASS_COUNT: usize = 3;
}

impl PlanGenerator for RandomWipe {
    fn name(&self) -> &'static str {
        "random"
    }

    fn plan(&self, _rng: &dyn EntropySource) -> WipeResult<Plan> {
        Ok(Plan::new(
            vec![Pass::Random; Self::PASS_COUNT],
            self.delete_after(),
        ))
    }
}

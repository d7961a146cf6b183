// Method registry: maps a case-insensitive method name to its plan generator

use super::crypto_erase::CryptoEraseWipe;
use super::dod::{DoDEceWipe, DoDWipe};
use super::gutmann::GutmannWipe;
use super::nist::NistWipe;
use super::pass::Plan;
use super::random::RandomWipe;
use super::zero::FillWipe;
use super::PlanGenerator;
use crate::crypto::secure_rng::EntropySource;
use crate::error::{WipeError, WipeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    ZeroFill,
    OneFill,
    Random,
    Nist,
    Dod,
    DodEce,
    Gutmann,
    CryptographicErase,
}

impl Method {
    pub const ALL: [Method; 8] = [
        Method::ZeroFill,
        Method::OneFill,
        Method::Random,
        Method::Nist,
        Method::Dod,
        Method::DodEce,
        Method::Gutmann,
        Method::CryptographicErase,
    ];

    pub fn generator(&self) -> &'static dyn PlanGenerator {
        match self {
            Method::ZeroFill => &FillWipe::ZERO,
            Method::OneFill => &FillWipe::ONE,
            Method::Random => &RandomWipe,
            Method::Nist => &NistWipe,
            Method::Dod => &DoDWipe,
            Method::DodEce => &DoDEceWipe,
            Method::Gutmann => &GutmannWipe,
            Method::CryptographicErase => &CryptoEraseWipe,
        }
    }

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        self.generator().name()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Method::ZeroFill => "3 passes of 0x00",
            Method::OneFill => "3 passes of 0xFF",
            Method::Random => "3 passes of secure random data",
            Method::Nist => "NIST 800-88: 0x00, 0xFF, random",
            Method::Dod => "DoD 5220.22-M: 0x00, 0xFF, random",
            Method::DodEce => "DoD 5220.22-M ECE: 7 passes",
            Method::Gutmann => "Gutmann: 35 passes, file is kept",
            Method::CryptographicErase => "simulated crypto erase: 1 key-derived pass",
        }
    }

    pub fn delete_after(&self) -> bool {
        self.generator().delete_after()
    }

    pub fn plan(&self, rng: &dyn EntropySource) -> WipeResult<Plan> {
        self.generator().plan(rng)
    }
}

impl FromStr for Method {
    type Err = WipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        Method::ALL
            .into_iter()
            .find(|method| method.name() == wanted)
            .ok_or_else(|| WipeError::UnknownMethod(s.to_string()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Pass and plan model shared by every wipe method

use crate::crypto::secure_rng::{EntropySource, RngError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty repeating byte pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<u8>);

impl Pattern {
    /// Returns `None` for an empty pattern
    pub fn new(bytes: impl Into<Vec<u8>>) -> Option<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            None
        } else {
            Some(Self(bytes))
        }
    }

    pub fn byte(value: u8) -> Self {
        Self(vec![value])
    }

    /// For built-in tables and digests, which are never empty
    pub(crate) fn from_table(bytes: &[u8]) -> Self {
        debug_assert!(!bytes.is_empty());
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Tile the pattern across `buf`: byte `i` becomes `pattern[i % len]`
    pub fn tile_into(&self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(self.0.len()) {
            chunk.copy_from_slice(&self.0[..chunk.len()]);
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "0x{:02X}", byte)?;
        }
        Ok(())
    }
}

/// One full overwrite of the target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pass {
    Fixed(Pattern),
    Random,
}

/// Shape of a pass without its content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassKind {
    Fixed,
    Random,
}

impl Pass {
    pub fn byte(value: u8) -> Self {
        Pass::Fixed(Pattern::byte(value))
    }

    pub fn kind(&self) -> PassKind {
        match self {
            Pass::Fixed(_) => PassKind::Fixed,
            Pass::Random => PassKind::Random,
        }
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        match self {
            Pass::Fixed(pattern) => Some(pattern),
            Pass::Random => None,
        }
    }

    /// Fill `buf` with this pass's content
    pub fn fill(&self, buf: &mut [u8], rng: &dyn EntropySource) -> Result<(), RngError> {
        match self {
            Pass::Fixed(pattern) => {
                pattern.tile_into(buf);
                Ok(())
            }
            Pass::Random => rng.fill_bytes(buf),
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Fixed(pattern) => pattern.fmt(f),
            Pass::Random => f.write_str("random"),
        }
    }
}

/// Ordered passes for one method plus its finalization policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    passes: Vec<Pass>,
    delete_after: bool,
}

impl Plan {
    pub fn new(passes: Vec<Pass>, delete_after: bool) -> Self {
        Self {
            passes,
            delete_after,
        }
    }

    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Whether the directory entry is removed once every pass succeeded
    pub fn delete_after(&self) -> bool {
        self.delete_after
    }

    /// Pass kinds in order, independent of random content
    pub fn shape(&self) -> Vec<PassKind> {
        self.passes.iter().map(Pass::kind).collect()
    }
}

// Reusable bounded write buffer for one wipe invocation

use crate::algorithms::pass::Pattern;
use crate::crypto::secure_rng::{EntropySource, RngError};

/// Chunk size used when none is configured
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Write buffer owned by a single engine call.
///
/// The allocation is made once and reused for every chunk of every pass, so
/// peak memory stays at one chunk regardless of file size.
pub struct ChunkBuffer {
    data: Vec<u8>,
    capacity: usize,
}

impl ChunkBuffer {
    /// Create a buffer of `capacity` bytes (at least 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Chunk length used for `pattern`.
    ///
    /// Rounded down to a whole number of pattern repetitions so that every
    /// chunk starts at pattern offset 0, which keeps the tiling aligned to
    /// absolute file offsets. Never shorter than the pattern itself.
    pub fn tiled_len(&self, pattern: &Pattern) -> usize {
        let len = pattern.len();
        if len >= self.capacity {
            len
        } else {
            self.capacity - self.capacity % len
        }
    }

    /// Tile `pattern` across the buffer and return the tiled chunk
    pub fn tile(&mut self, pattern: &Pattern) -> &[u8] {
        let len = self.tiled_len(pattern);
        self.data.clear();
        self.data.resize(len, 0);
        pattern.tile_into(&mut self.data);
        &self.data
    }

    /// Regenerate `len` random bytes (capped at capacity) and return them
    pub fn random(&mut self, len: usize, rng: &dyn EntropySource) -> Result<&[u8], RngError> {
        let len = len.min(self.capacity);
        self.data.clear();
        self.data.resize(len, 0);
        rng.fill_bytes(&mut self.data)?;
        Ok(&self.data)
    }
}

/// Scratch file fixtures for wipe tests
///
/// Each fixture owns its own temporary directory so that removal by the
/// wipe can be observed without racing other tests.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Byte used to fill fixtures so leftovers are easy to spot
#[allow(dead_code)]
pub const FILL_BYTE: u8 = 0xAB;

pub struct ScratchFile {
    path: PathBuf,
    dir: TempDir,
}

#[allow(dead_code)]
impl ScratchFile {
    /// File of `size` bytes filled with [`FILL_BYTE`]
    pub fn with_size(size: usize) -> std::io::Result<Self> {
        Self::with_bytes(&vec![FILL_BYTE; size])
    }

    /// File holding exactly `contents`
    pub fn with_bytes(contents: &[u8]) -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join("secret.dat");
        let mut file = fs::File::create(&path)?;
        file.write_all(contents)?;
        file.sync_all()?;
        Ok(Self { path, dir })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the fixture
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn contents(&self) -> std::io::Result<Vec<u8>> {
        fs::read(&self.path)
    }
}

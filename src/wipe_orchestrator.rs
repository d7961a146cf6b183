// Wipe Orchestrator - validates the target, builds the plan and finalizes
//
// This module is the entry point for secure deletion: it resolves the method,
// opens the file, hands the plan to the overwrite engine and removes the
// directory entry when the method asks for it.

use crate::algorithms::Method;
use crate::error::{WipeError, WipeResult};
use crate::io::{OverwriteEngine, PlanReport};
use crate::WipeConfig;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Result of a successful secure deletion
#[derive(Debug, Clone, Serialize)]
pub struct WipeOutcome {
    pub path: PathBuf,
    pub method: Method,
    pub report: PlanReport,
    /// False only for methods that keep the overwritten file (gutmann)
    pub removed: bool,
}

/// Drives one secure deletion at a time
pub struct WipeOrchestrator {
    engine: OverwriteEngine,
}

impl Default for WipeOrchestrator {
    fn default() -> Self {
        Self::new(WipeConfig::default())
    }
}

impl WipeOrchestrator {
    pub fn new(config: WipeConfig) -> Self {
        Self {
            engine: OverwriteEngine::new(config),
        }
    }

    /// Overwrite `path` with the passes of `method` and finalize it.
    ///
    /// Validation happens before anything is opened: the path must exist
    /// and be a regular file, then the method name is resolved. On any
    /// overwrite failure the file is left in place, partially overwritten.
    pub fn secure_delete(&self, path: impl AsRef<Path>, method: &str) -> WipeResult<WipeOutcome> {
        let path = path.as_ref();
        preflight(path)?;
        let method = Method::from_str(method)?;
        self.run(path, method)
    }

    /// Same as [`secure_delete`](Self::secure_delete) with an already
    /// resolved method
    pub fn delete_with(&self, path: &Path, method: Method) -> WipeResult<WipeOutcome> {
        preflight(path)?;
        self.run(path, method)
    }

    fn run(&self, path: &Path, method: Method) -> WipeResult<WipeOutcome> {
        let plan = method.plan(self.engine.rng())?;

        tracing::info!(
            path = %path.display(),
            method = %method,
            passes = plan.len(),
            "starting secure deletion"
        );

        let mut file = OpenOptions::new()
            .write(true)
            .read(self.engine.config().verify)
            .open(path)
            .map_err(|source| WipeError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        // Size from the open handle so it matches what we overwrite
        let size = file
            .metadata()
            .map_err(|source| WipeError::Stat {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        let result = self.engine.execute_plan(&mut file, size, &plan);
        drop(file);

        let report = match result {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    method = %method,
                    pass = ?e.pass_index(),
                    "overwrite failed, file left partially overwritten: {}",
                    e
                );
                return Err(e);
            }
        };

        let removed = plan.delete_after();
        if removed {
            fs::remove_file(path).map_err(|source| WipeError::Unlink {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), method = %method, "{}; file removed", report);
        } else {
            tracing::warn!(
                path = %path.display(),
                method = %method,
                "{}; file overwritten but kept in place",
                report
            );
        }

        Ok(WipeOutcome {
            path: path.to_path_buf(),
            method,
            report,
            removed,
        })
    }
}

/// The target must exist and be a regular file. Symlinks are followed.
fn preflight(path: &Path) -> WipeResult<()> {
    let metadata = fs::metadata(path).map_err(|source| WipeError::Stat {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(WipeError::InvalidTarget {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Securely delete `path` with the named method and default settings
pub fn secure_delete(path: impl AsRef<Path>, method: &str) -> WipeResult<WipeOutcome> {
    WipeOrchestrator::default().secure_delete(path, method)
}

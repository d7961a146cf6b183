// Platform-specific durability flush

use std::fs::File;
use std::io;

/// Commit previously written bytes to the storage device, not just the
/// page cache
pub trait DurableSync {
    fn sync_durable(&mut self) -> io::Result<()>;
}

impl<T: DurableSync + ?Sized> DurableSync for &mut T {
    fn sync_durable(&mut self) -> io::Result<()> {
        (**self).sync_durable()
    }
}

// ============= LINUX / BSD / WINDOWS =============

#[cfg(not(target_os = "macos"))]
impl DurableSync for File {
    fn sync_durable(&mut self) -> io::Result<()> {
        // fsync(2) on Unix, FlushFileBuffers on Windows
        self.sync_all()
    }
}

// ============= MACOS IMPLEMENTATION =============

#[cfg(target_os = "macos")]
impl DurableSync for File {
    fn sync_durable(&mut self) -> io::Result<()> {
        use std::os::unix::io::AsRawFd;

        // fsync on macOS stops at the drive's write cache; F_FULLFSYNC does not
        let fd = self.as_raw_fd();
        let ret = unsafe { libc::fcntl(fd, libc::F_FULLFSYNC) };
        if ret == 0 {
            return Ok(());
        }

        let err = io::Error::last_os_error();
        match err.raw_os_error() {
            Some(libc::ENOTSUP) | Some(libc::EINVAL) => {
                tracing::debug!("F_FULLFSYNC unsupported on this filesystem, using fsync");
                self.sync_all()
            }
            _ => Err(err),
        }
    }
}

/// Get platform name
pub fn platform_name() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        "Linux"
    }
    #[cfg(target_os = "macos")]
    {
        "macOS"
    }
    #[cfg(target_os = "windows")]
    {
        "Windows"
    }
    #[cfg(target_os = "freebsd")]
    {
        "FreeBSD"
    }
    #[cfg(not(any(
        target_os = "linux",
        target_os = "macos",
        target_os = "windows",
        target_os = "freebsd"
    )))]
    {
        "Generic"
    }
}

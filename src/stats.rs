use std::{
    ffi::CString,
    io,
    mem,
    os::unix::ffi::OsStrExt,
    path::Path,
};

#[cfg(target_os = "macos")]
use crate::error::Error;

/// Block counts of one file system, with the semantics of statvfs
#[derive(Debug, Clone, Copy)]
pub struct Stats {
    /// size of a block, in bytes
    pub bsize: u64,
    /// number of blocks
    pub blocks: u64,
    /// number of free blocks
    pub bfree: u64,
    /// number of free blocks for unprivileged users
    pub bavail: u64,
}

#[derive(Debug, snafu::Snafu, Clone, Copy, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum StatsError {
    #[snafu(display("Could not stat mount point"))]
    Unreachable { errno: i32 },

    #[snafu(display("Unconsistent stats"))]
    Unconsistent,
}

impl Stats {
    pub fn read(path: &Path) -> Result<Self, StatsError> {
        let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
            return Err(StatsError::Unreachable {
                errno: libc::EINVAL,
            });
        };
        unsafe {
            let mut statvfs = mem::MaybeUninit::<libc::statvfs>::uninit();
            let code = libc::statvfs(c_path.as_ptr(), statvfs.as_mut_ptr());
            if code != 0 {
                // the filesystem wasn't found, or it's a strange one,
                // for example a docker one or a disconnected remote one
                return Err(StatsError::Unreachable {
                    errno: io::Error::last_os_error().raw_os_error().unwrap_or(0),
                });
            }
            let statvfs = statvfs.assume_init();

            // f_frsize is the unit of the block counts; some file
            // systems leave it at zero and only fill f_bsize
            let bsize = if statvfs.f_frsize > 0 {
                statvfs.f_frsize as u64
            } else {
                statvfs.f_bsize as u64
            };
            let blocks = statvfs.f_blocks as u64;
            let bfree = statvfs.f_bfree as u64;
            let bavail = statvfs.f_bavail as u64;
            if bsize == 0 || blocks == 0 || bfree > blocks || bavail > blocks {
                // unconsistent or void data
                return Err(StatsError::Unconsistent);
            }
            Ok(Stats {
                bsize,
                blocks,
                bfree,
                bavail,
            })
        }
    }
    pub fn total(&self) -> u64 {
        self.bsize * self.blocks
    }
    /// free bytes of the whole file system, not just what an
    /// unprivileged user may still fill (see `available` for that)
    pub fn free(&self) -> u64 {
        self.bsize * self.bfree
    }
    pub fn available(&self) -> u64 {
        self.bsize * self.bavail
    }
    /// used bytes, computed from the free count so that
    /// used + free is exactly the total
    pub fn used(&self) -> u64 {
        self.total() - self.free()
    }
}

#[cfg(target_os = "macos")]
impl StatsError {
    pub(crate) fn into_error(
        self,
        path: &Path,
    ) -> Error {
        match self {
            StatsError::Unreachable { errno } => {
                let source = io::Error::from_raw_os_error(errno);
                match source.kind() {
                    io::ErrorKind::NotFound => Error::NotFound {
                        path: path.to_path_buf(),
                    },
                    io::ErrorKind::PermissionDenied => Error::PermissionDenied {
                        path: path.to_path_buf(),
                    },
                    io::ErrorKind::NotADirectory => Error::NotADirectory {
                        path: path.to_path_buf(),
                    },
                    _ => Error::CantStat {
                        source,
                        path: path.to_path_buf(),
                    },
                }
            }
            StatsError::Unconsistent => Error::UnexpectedFormat,
        }
    }
}

#[test]
fn test_byte_arithmetic() {
    let stats = Stats {
        bsize: 4096,
        blocks: 1000,
        bfree: 250,
        bavail: 200,
    };
    assert_eq!(stats.total(), 4_096_000);
    assert_eq!(stats.free(), 1_024_000);
    assert_eq!(stats.available(), 819_200);
    assert_eq!(stats.used(), 3_072_000);
    assert_eq!(stats.used() + stats.free(), stats.total());
}

#[test]
fn test_read_root() {
    // statvfs works even where the root fs is excluded from listings
    let stats = Stats::read(Path::new("/")).unwrap();
    assert!(stats.total() > 0);
    assert!(stats.used() <= stats.total());
}

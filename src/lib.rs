//! Usage of mounted disks and volumes: query one path, or enumerate
//! the drives of the host with their total/used/free bytes, type,
//! and mount options.

mod drive;
mod error;
mod fs_type;
mod list_options;
mod mount_entry;
#[cfg(unix)]
mod stats;
mod sys;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod unsupported;

#[cfg(target_os = "linux")]
use linux as platform;
#[cfg(target_os = "macos")]
use macos as platform;
#[cfg(target_os = "windows")]
use windows as platform;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
use unsupported as platform;

pub use {
    drive::{Drive, DriveType, HumanizeOptions},
    error::{Error, Result},
    fs_type::FileSystemType,
    list_options::ListOptions,
    mount_entry::MountEntry,
};

#[cfg(target_os = "linux")]
pub use linux::ParseMountEntryError;
#[cfg(unix)]
pub use stats::{Stats, StatsError};

use std::path::{Path, PathBuf};

/// read the usage of the file system holding the given path
///
/// The path must exist and be a directory.
pub fn get<P: AsRef<Path>>(path: P) -> Result<Drive> {
    platform::get(path.as_ref())
}

/// read all the mounted drives, with their usage statistics
pub fn list_drives(options: &ListOptions) -> Result<Vec<Drive>> {
    platform::list_drives(options)
}

/// read the mount points of all the mounted drives
pub fn list_drive_paths() -> Result<Vec<PathBuf>> {
    platform::list_drive_paths()
}

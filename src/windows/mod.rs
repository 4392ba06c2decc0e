use {
    crate::{
        error::*,
        *,
    },
    snafu::prelude::*,
    std::{
        iter,
        os::windows::ffi::OsStrExt,
        path::{
            Path,
            PathBuf,
        },
    },
    windows::{
        Win32::Storage::FileSystem::GetDiskFreeSpaceExW,
        core::PCWSTR,
    },
};

/// usage of the volume holding the given path
///
/// Only the sizes are known here: label, type, and options are
/// left at their neutral values.
pub fn get(path: &Path) -> Result<Drive> {
    sys::check_dir(path)?;
    let path_wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(iter::once(0)) // null terminator
        .collect();
    let mut available: u64 = 0;
    let mut total: u64 = 0;
    let mut free: u64 = 0;
    unsafe {
        GetDiskFreeSpaceExW(
            PCWSTR(path_wide.as_ptr()),
            Some(&mut available),
            Some(&mut total),
            Some(&mut free),
        )
    }
    .context(WindowsApiSnafu {
        api: "GetDiskFreeSpaceExW",
    })?;
    let used = total.saturating_sub(free);
    Ok(Drive {
        label: String::new(),
        mount: path.to_path_buf(),
        total,
        used,
        free,
        percent: drive::percent(used, total),
        drive_type: DriveType::Internal,
        file_system_type: FileSystemType::Unknown,
        options: Vec::new(),
    })
}

/// there's no drive enumeration here yet
pub fn list_drives(_options: &ListOptions) -> Result<Vec<Drive>> {
    Err(Error::Unsupported)
}

pub fn list_drive_paths() -> Result<Vec<PathBuf>> {
    Err(Error::Unsupported)
}

mod diskutil;

use {
    crate::*,
    lazy_regex::*,
    std::{
        ffi::CStr,
        io,
        os::raw::c_char,
        path::{
            Path,
            PathBuf,
        },
    },
};

/// mount points under which only snapshots (Time Machine style) live
static SNAPSHOT_MOUNT_PREFIXES: &[&str] = &[
    "/Volumes/com.apple.TimeMachine.localsnapshots",
    "/Volumes/.timemachine",
];

/// Read all the mounted drives and their usage statistics.
///
/// The sizes come with the getfsstat snapshot, no per-mount call
/// is needed.
pub fn list_drives(options: &ListOptions) -> Result<Vec<Drive>> {
    let mut drives = Vec::new();
    let mut seen_sources: Vec<String> = Vec::new();
    for fs in read_fs_stats()? {
        let flags = fs.f_flags;
        if flags & (libc::MNT_AUTOMOUNTED as u32) != 0 {
            continue;
        }
        let source = c_chars_to_string(&fs.f_mntfromname);
        let mount_point = c_chars_to_string(&fs.f_mntonname);
        let fs_type = c_chars_to_string(&fs.f_fstypename);
        if fs_type::is_virtual_fs_type(&fs_type) {
            continue;
        }
        if SNAPSHOT_MOUNT_PREFIXES
            .iter()
            .any(|prefix| mount_point.starts_with(prefix))
        {
            continue;
        }
        // partitions mounted anywhere else than / or /Volumes are
        // firmlinked system volumes and other noise
        let network = fs_type::is_network_fs_type(&fs_type);
        if regex_is_match!(r"^/dev/disk\d+s\d+", &source)
            && mount_point != "/"
            && !mount_point.starts_with("/Volumes/")
            && !network
        {
            continue;
        }
        if seen_sources.contains(&source) {
            continue;
        }
        seen_sources.push(source.clone());

        let bsize = fs.f_bsize as u64;
        let total = fs.f_blocks * bsize;
        let free = fs.f_bfree * bsize;
        let used = total.saturating_sub(free);
        if total == 0 && used == 0 && free == 0 {
            continue;
        }
        let label = friendly_label(&mount_point, &source);
        let entry = MountEntry {
            source,
            mount_point: PathBuf::from(mount_point),
            fs_type,
            options: flag_options(flags),
        };
        let drive = Drive::new(entry, total, used, free, label);
        if options.keeps(&drive) {
            drives.push(drive);
        }
    }
    Ok(drives)
}

pub fn list_drive_paths() -> Result<Vec<PathBuf>> {
    let options = ListOptions::default().include_network(true);
    Ok(list_drives(&options)?
        .into_iter()
        .map(|drive| drive.mount)
        .collect())
}

/// usage of the file system holding the given path
///
/// Only the sizes are reliably known here; diskutil may provide a
/// better name but its failures don't matter.
pub fn get(path: &Path) -> Result<Drive> {
    sys::check_dir(path)?;
    let stats = Stats::read(path).map_err(|e| e.into_error(path))?;
    let (total, used, free) = (stats.total(), stats.used(), stats.free());
    let mut label = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    if let Ok(metadata) = diskutil::read_volume_metadata(path) {
        if let Some(name) = metadata.volume_name {
            label = name;
        }
    }
    Ok(Drive {
        label,
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

/// snapshot the mount table, BSD style
fn read_fs_stats() -> Result<Vec<libc::statfs>> {
    unsafe {
        // first call to get the number of filesystems
        let count = libc::getfsstat(std::ptr::null_mut(), 0, libc::MNT_NOWAIT);
        if count < 0 {
            return Err(Error::CantReadMountTable {
                source: io::Error::last_os_error(),
            });
        }
        let mut buf: Vec<libc::statfs> = Vec::with_capacity(count as usize);
        let buf_size = (count as usize * std::mem::size_of::<libc::statfs>()) as libc::c_int;
        let count = libc::getfsstat(buf.as_mut_ptr(), buf_size, libc::MNT_NOWAIT);
        if count < 0 {
            return Err(Error::CantReadMountTable {
                source: io::Error::last_os_error(),
            });
        }
        buf.set_len(count as usize);
        Ok(buf)
    }
}

fn c_chars_to_string(chars: &[c_char]) -> String {
    unsafe { CStr::from_ptr(chars.as_ptr()) }
        .to_string_lossy()
        .to_string()
}

/// render the BSD mount flags as option tokens, mount table style
fn flag_options(flags: u32) -> Vec<String> {
    let mut options = Vec::new();
    let has = |flag: libc::c_int| flags & (flag as u32) != 0;
    options.push(if has(libc::MNT_RDONLY) { "ro" } else { "rw" }.to_string());
    if has(libc::MNT_NOSUID) {
        options.push("nosuid".to_string());
    }
    if has(libc::MNT_NODEV) {
        options.push("nodev".to_string());
    }
    if has(libc::MNT_NOEXEC) {
        options.push("noexec".to_string());
    }
    if has(libc::MNT_DONTBROWSE) {
        options.push("hidden".to_string());
    }
    options
}

/// a human friendly name for a volume
///
/// The root volume gets the host name and /Volumes entries their
/// directory name. Remote sources keep the last segment of their
/// URL, anything else its mount point.
fn friendly_label(
    mount_point: &str,
    source: &str,
) -> String {
    if mount_point == "/" {
        if let Some(host) = host_name() {
            return host;
        }
    }
    if mount_point.starts_with("/Volumes/") {
        if let Some(name) = mount_point.rsplit('/').next().filter(|name| !name.is_empty()) {
            return name.to_string();
        }
    }
    if let Some((_, name)) = regex_captures!(r"^[a-zA-Z][a-zA-Z0-9+.\-]*:/.*?([^/:]+)/?$", source) {
        return name.to_string();
    }
    mount_point.to_string()
}

fn host_name() -> Option<String> {
    let mut buf = [0 as c_char; 256];
    let code = unsafe { libc::gethostname(buf.as_mut_ptr(), buf.len()) };
    (code == 0).then(|| c_chars_to_string(&buf))
}

#[test]
fn test_friendly_label() {
    assert_eq!(friendly_label("/Volumes/USB DISK", "/dev/disk4s1"), "USB DISK");
    assert_eq!(
        friendly_label("/Volumes/backups", "nfs://server/exports/backups"),
        "backups"
    );
    assert_eq!(friendly_label("/private/tmp/mnt", "server:/exports/data"), "data");
    assert_eq!(friendly_label("/some/mount", "/dev/disk2s1"), "/some/mount");
}

#[test]
fn test_flag_options() {
    let options = flag_options((libc::MNT_RDONLY | libc::MNT_NOSUID | libc::MNT_NODEV) as u32);
    assert_eq!(options, vec!["ro", "nosuid", "nodev"]);
    assert_eq!(flag_options(0), vec!["rw"]);
}

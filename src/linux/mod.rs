mod label;
mod read_mount_table;

pub use read_mount_table::ParseMountEntryError;

use {
    crate::*,
    label::*,
    read_mount_table::*,
    std::{
        fs,
        path::{
            Path,
            PathBuf,
        },
    },
};

/// Read all the mounted drives and their usage statistics
pub fn list_drives(options: &ListOptions) -> Result<Vec<Drive>> {
    let labels = read_labels().unwrap_or_default();
    let mut drives = Vec::new();
    for entry in read_mount_table()? {
        // a mount whose stats can't be read is skipped, not fatal
        let Ok(stats) = Stats::read(&entry.mount_point) else {
            continue;
        };
        let (total, used, free) = (stats.total(), stats.used(), stats.free());
        if total == 0 && used == 0 && free == 0 {
            continue;
        }
        let label = volume_label(&entry, &labels);
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

/// usage of the drive holding the given path
///
/// There's no per-path query primitive here: the path must be the
/// mount point of one of the listed drives.
pub fn get(path: &Path) -> Result<Drive> {
    sys::check_dir(path)?;
    let path = fs::canonicalize(path).map_err(|source| Error::CantStat {
        source,
        path: path.to_path_buf(),
    })?;
    let options = ListOptions::default().include_network(true);
    list_drives(&options)?
        .into_iter()
        .find(|drive| drive.mount == path)
        .ok_or(Error::NotFound { path })
}

/// the best name we can show for a mounted volume: its label when
/// the system knows one, else the device name, else the mount point
fn volume_label(
    entry: &MountEntry,
    labels: &[Labelling],
) -> String {
    labels
        .iter()
        .find(|labelling| labelling.fs_name == entry.source && !labelling.label.is_empty())
        .map(|labelling| labelling.label.clone())
        .or_else(|| base_name(Path::new(&entry.source)))
        .or_else(|| base_name(&entry.mount_point))
        .unwrap_or_else(|| entry.mount_point.display().to_string())
}

fn base_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().to_string())
}

#[test]
fn test_volume_label() {
    let labels = vec![Labelling {
        label: "Data".to_string(),
        fs_name: "/dev/sdb1".to_string(),
    }];
    fn entry(
        source: &str,
        mount_point: &str,
    ) -> MountEntry {
        MountEntry {
            source: source.to_string(),
            mount_point: mount_point.into(),
            fs_type: "ext4".to_string(),
            options: Vec::new(),
        }
    }
    assert_eq!(volume_label(&entry("/dev/sdb1", "/data"), &labels), "Data");
    assert_eq!(volume_label(&entry("/dev/sda1", "/boot"), &labels), "sda1");
    assert_eq!(volume_label(&entry("overlay", "/"), &labels), "overlay");
    assert_eq!(
        volume_label(&entry("server:/export", "/mnt/nfs"), &labels),
        "export"
    );
    // nothing usable on either side: show the mount point as is
    assert_eq!(volume_label(&entry("/", "/"), &labels), "/");
}

#[test]
fn test_get_errors() {
    match get(Path::new("/unlikely_to_exist_path_12345")) {
        Err(Error::NotFound { .. }) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain_file");
    fs::write(&file, b"not a directory").unwrap();
    match get(&file) {
        Err(Error::NotADirectory { .. }) => {}
        other => panic!("expected NotADirectory, got {other:?}"),
    }
}

#[test]
fn test_list_and_get_consistency() {
    let options = ListOptions::default().include_network(true);
    let drives = list_drives(&options).unwrap();
    for drive in &drives {
        assert!(!drive.mount.as_os_str().is_empty());
        assert!(drive.total > 0);
        assert!(drive.used <= drive.total);
        assert_eq!(drive.used + drive.free, drive.total);
        assert!(!drive.label.is_empty());
        if !drive.mount.is_dir() {
            // single files can be bind mounted (containers do this)
            continue;
        }
        // a listed mount point must resolve back to the same drive
        let got = get(&drive.mount).unwrap();
        assert_eq!(got.mount, drive.mount);
        assert_eq!(got.total, drive.total);
    }
}

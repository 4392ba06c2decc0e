use {
    crate::FileSystemType,
    std::path::PathBuf,
};

#[cfg(unix)]
use crate::{
    fs_type,
    MountEntry,
};

/// the type of a drive, depending on where its storage lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveType {
    Internal,
    Network,
}

/// A mounted volume and its usage statistics.
///
/// This is an immutable snapshot, computed fresh on every query.
#[derive(Debug, Clone)]
pub struct Drive {
    /// a best effort human friendly name, eg "Macintosh HD" or "sda1"
    pub label: String,
    /// where the volume is attached in the hierarchy, eg "/"
    pub mount: PathBuf,
    /// total size, in bytes
    pub total: u64,
    /// used bytes, including file system metadata
    pub used: u64,
    /// free bytes
    pub free: u64,
    /// share of the total which is used, in percents (0 when the
    /// total is unknown)
    pub percent: f64,
    pub drive_type: DriveType,
    pub file_system_type: FileSystemType,
    /// mount option tokens, eg "rw" or "nosuid", in mount table order
    /// (may be empty)
    pub options: Vec<String>,
}

/// How to render byte counts as strings
#[derive(Debug, Clone, Copy)]
pub struct HumanizeOptions {
    pub decimal_places: usize,
    pub with_suffix: bool,
}

impl Default for HumanizeOptions {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            with_suffix: true,
        }
    }
}

impl HumanizeOptions {
    pub fn decimal_places(
        mut self,
        v: usize,
    ) -> Self {
        self.decimal_places = v;
        self
    }
    pub fn with_suffix(
        mut self,
        v: bool,
    ) -> Self {
        self.with_suffix = v;
        self
    }
}

impl Drive {
    /// build a drive from a mount table entry and its byte counts,
    /// classifying the file system and deriving the drive type
    #[cfg(unix)]
    pub(crate) fn new(
        entry: MountEntry,
        total: u64,
        used: u64,
        free: u64,
        label: String,
    ) -> Self {
        let drive_type = if fs_type::is_network_fs_type(&entry.fs_type) {
            DriveType::Network
        } else {
            DriveType::Internal
        };
        Self {
            label,
            mount: entry.mount_point,
            total,
            used,
            free,
            percent: percent(used, total),
            drive_type,
            file_system_type: FileSystemType::parse(&entry.fs_type),
            options: entry.options,
        }
    }
    /// human readable total, used, and free sizes
    pub fn humanize(
        &self,
        options: HumanizeOptions,
    ) -> (String, String, String) {
        (
            humanize_bytes(self.total, options),
            humanize_bytes(self.used, options),
            humanize_bytes(self.free, options),
        )
    }
}

pub(crate) fn percent(
    used: u64,
    total: u64,
) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * used as f64 / total as f64
    }
}

/// render a byte count with binary (1024 based) units.
///
/// Values under 1024 render as a plain integer. A `decimal_places`
/// of 0 is bumped to 1: callers asking for no decimals still get one.
fn humanize_bytes(
    bytes: u64,
    options: HumanizeOptions,
) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return if options.with_suffix {
            format!("{} B", bytes)
        } else {
            bytes.to_string()
        };
    }
    let decimals = if options.decimal_places == 0 {
        1
    } else {
        options.decimal_places
    };
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    let value = format!("{:.*}", decimals, bytes as f64 / div as f64);
    if options.with_suffix {
        format!("{} {}B", value, b"KMGTPEZY"[exp] as char)
    } else {
        value
    }
}

#[test]
fn test_humanize_bytes() {
    let options = HumanizeOptions::default();
    assert_eq!(humanize_bytes(0, options), "0 B");
    assert_eq!(humanize_bytes(1023, options), "1023 B");
    assert_eq!(humanize_bytes(1024, options), "1.00 KB");
    assert_eq!(humanize_bytes(1536, options.decimal_places(1)), "1.5 KB");
    assert_eq!(humanize_bytes(10 * 1024 * 1024, options), "10.00 MB");
    assert_eq!(humanize_bytes(3 * 1024 * 1024 * 1024, options), "3.00 GB");
    assert_eq!(humanize_bytes(1024, options.with_suffix(false)), "1.00");
    assert_eq!(humanize_bytes(512, options.with_suffix(false)), "512");
    assert_eq!(humanize_bytes(u64::MAX, options), "16.00 EB");
}

#[test]
fn test_humanize_zero_decimals_quirk() {
    // asking for 0 decimal places gives 1
    let options = HumanizeOptions::default().decimal_places(0);
    assert_eq!(humanize_bytes(1536, options), "1.5 KB");
    assert_eq!(humanize_bytes(1024, options), "1.0 KB");
}

#[test]
fn test_percent() {
    assert_eq!(percent(50, 200), 25.0);
    assert_eq!(percent(200, 200), 100.0);
    assert_eq!(percent(0, 0), 0.0); // guarded division
}

#[test]
fn test_drive_humanize() {
    let drive = Drive {
        label: "data".to_string(),
        mount: "/data".into(),
        total: 2048,
        used: 1024,
        free: 1024,
        percent: 50.0,
        drive_type: DriveType::Internal,
        file_system_type: FileSystemType::Ext4,
        options: vec!["rw".to_string()],
    };
    let (total, used, free) = drive.humanize(HumanizeOptions::default());
    assert_eq!(total, "2.00 KB");
    assert_eq!(used, "1.00 KB");
    assert_eq!(free, "1.00 KB");
}

use std::fmt;

/// A file system type we know how to classify.
///
/// Anything absent from the table maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSystemType {
    Apfs,
    Hfs,
    ExFat,
    Ntfs,
    Fat32,
    Ext4,
    Nfs,
    Smbfs,
    Afpfs,
    Autofs,
    WebDav,
    Sshfs,
    Unknown,
}

static FS_TYPES: &[(&str, FileSystemType)] = &[
    ("apfs", FileSystemType::Apfs),
    ("hfs", FileSystemType::Hfs),
    ("exfat", FileSystemType::ExFat),
    ("ntfs", FileSystemType::Ntfs),
    ("fat32", FileSystemType::Fat32),
    ("ext4", FileSystemType::Ext4),
    ("nfs", FileSystemType::Nfs),
    ("smbfs", FileSystemType::Smbfs),
    ("afpfs", FileSystemType::Afpfs),
    ("autofs", FileSystemType::Autofs),
    ("webdav", FileSystemType::WebDav),
    ("sshfs", FileSystemType::Sshfs),
];

/// file system types backed by a remote server
static NETWORK_FS_TYPES: &[&str] = &["nfs", "nfs4", "smbfs", "cifs", "webdav", "afpfs"];

/// virtual or pseudo file systems, with no real backing storage,
/// which nobody wants in a drive listing
static VIRTUAL_FS_TYPES: &[&str] = &[
    "proc",
    "sysfs",
    "tmpfs",
    "devtmpfs",
    "devpts",
    "cgroup",
    "cgroup2",
    "securityfs",
    "pstore",
    "efivarfs",
    "debugfs",
    "tracefs",
    "rpc_pipefs",
    "overlay",
    "squashfs",
    "devfs",
    "autofs",
];

impl FileSystemType {
    /// classify a raw file system type as found in mount metadata
    pub fn parse(raw: &str) -> Self {
        let raw = raw.to_lowercase();
        FS_TYPES
            .iter()
            .find(|(name, _)| *name == raw)
            .map_or(Self::Unknown, |(_, fs_type)| *fs_type)
    }
    pub fn name(self) -> &'static str {
        match self {
            Self::Apfs => "APFS",
            Self::Hfs => "HFS",
            Self::ExFat => "ExFAT",
            Self::Ntfs => "NTFS",
            Self::Fat32 => "FAT32",
            Self::Ext4 => "Ext4",
            Self::Nfs => "NFS",
            Self::Smbfs => "SMBFS",
            Self::Afpfs => "AFPFS",
            Self::Autofs => "Autofs",
            Self::WebDav => "WebDAV",
            Self::Sshfs => "SSHFS",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FileSystemType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<&str> for FileSystemType {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// whether the raw type designates a file system served over the network
#[cfg(unix)]
pub fn is_network_fs_type(raw: &str) -> bool {
    NETWORK_FS_TYPES.contains(&raw.to_lowercase().as_str())
}

#[cfg(unix)]
pub fn is_virtual_fs_type(raw: &str) -> bool {
    VIRTUAL_FS_TYPES.contains(&raw)
}

#[test]
fn test_parse() {
    assert_eq!(FileSystemType::parse("ntfs"), FileSystemType::Ntfs);
    assert_eq!(FileSystemType::parse("NTFS"), FileSystemType::Ntfs);
    assert_eq!(FileSystemType::parse("apfs"), FileSystemType::Apfs);
    assert_eq!(FileSystemType::parse("ExFAT"), FileSystemType::ExFat);
    assert_eq!(FileSystemType::parse("zzz"), FileSystemType::Unknown);
    assert_eq!(FileSystemType::parse(""), FileSystemType::Unknown);
    assert_eq!(FileSystemType::from("ext4"), FileSystemType::Ext4);
}

#[cfg(unix)]
#[test]
fn test_network_fs_types() {
    for raw in ["nfs", "nfs4", "smbfs", "cifs", "webdav", "afpfs", "NFS"] {
        assert!(is_network_fs_type(raw), "{raw} should be network");
    }
    assert!(!is_network_fs_type("ext4"));
    assert!(!is_network_fs_type("apfs"));
    assert!(!is_network_fs_type("sshfs"));
}

#[cfg(unix)]
#[test]
fn test_virtual_fs_types() {
    assert!(is_virtual_fs_type("proc"));
    assert!(is_virtual_fs_type("overlay"));
    assert!(is_virtual_fs_type("autofs"));
    assert!(!is_virtual_fs_type("ext4"));
    assert!(!is_virtual_fs_type("nfs"));
}

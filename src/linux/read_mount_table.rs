use {
    crate::{
        error::*,
        *,
    },
    snafu::prelude::*,
    std::{
        path::PathBuf,
        str::FromStr,
    },
};

#[derive(Debug, Snafu)]
#[snafu(display("Could not parse {line} as a mount entry"))]
pub struct ParseMountEntryError {
    line: String,
}

impl FromStr for MountEntry {
    type Err = ParseMountEntryError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        (|| {
            // fields are source, mount point, fs type, options, then two
            // dump/pass digits nobody uses (see `man 5 fstab`)
            let mut tokens = line.split_whitespace();
            let source = sys::decode_string(tokens.next()?);
            let mount_point = PathBuf::from(sys::decode_string(tokens.next()?));
            let fs_type = tokens.next()?.to_string();
            let options = tokens.next()?.split(',').map(str::to_string).collect();
            Some(Self {
                source,
                mount_point,
                fs_type,
                options,
            })
        })()
        .with_context(|| ParseMountEntrySnafu { line })
    }
}

/// parse a whole mount table, excluding virtual file systems and
/// keeping only the first entry of each source device (bind mounts
/// and multiply-mounted devices come as duplicated sources)
pub fn parse_mount_table(content: &str) -> Vec<MountEntry> {
    let mut entries: Vec<MountEntry> = Vec::new();
    for line in content.trim().lines() {
        let Ok(entry) = line.parse::<MountEntry>() else {
            continue;
        };
        if fs_type::is_virtual_fs_type(&entry.fs_type) {
            continue;
        }
        if entries.iter().any(|e| e.source == entry.source) {
            continue;
        }
        entries.push(entry);
    }
    entries
}

/// read the live mount table
pub fn read_mount_table() -> Result<Vec<MountEntry>, Error> {
    let content = sys::read_file("/proc/mounts").context(CantReadMountTableSnafu)?;
    Ok(parse_mount_table(&content))
}

#[test]
fn test_from_str() {
    let entry = MountEntry::from_str("/dev/nvme0n1p2 /boot ext4 rw,relatime 0 0").unwrap();
    assert_eq!(&entry.source, "/dev/nvme0n1p2");
    assert_eq!(entry.mount_point, PathBuf::from("/boot"));
    assert_eq!(&entry.fs_type, "ext4");
    assert_eq!(entry.options_string(), "rw,relatime");

    let entry =
        MountEntry::from_str(r"/dev/sdb1 /media/dys/USB\040DISK vfat rw,nosuid,uid=1000 0 0")
            .unwrap();
    assert_eq!(entry.mount_point, PathBuf::from("/media/dys/USB DISK"));
    assert!(entry.has_option("nosuid"));
    assert_eq!(entry.option_value("uid"), Some("1000"));

    assert!(MountEntry::from_str("/dev/sda1 /mnt").is_err());
}

#[test]
fn test_parse_mount_table() {
    static TABLE: &str = "\
proc /proc proc rw,nosuid,nodev,noexec,relatime 0 0
sysfs /sys sysfs rw,nosuid,nodev,noexec,relatime 0 0
/dev/nvme0n1p2 / ext4 rw,relatime 0 0
/dev/nvme0n1p2 /mnt/bind ext4 rw,relatime 0 0
/dev/nvme0n1p1 /boot/efi vfat rw,relatime,fmask=0077 0 0
tmpfs /run tmpfs rw,nosuid,nodev,mode=755 0 0
server:/export /mnt/nfs nfs4 rw,relatime,vers=4.2 0 0
";
    let entries = parse_mount_table(TABLE);
    let sources: Vec<&str> = entries.iter().map(|e| e.source.as_str()).collect();
    // virtual file systems are gone, and the bind mount of nvme0n1p2
    // lost to the first occurrence of its device
    assert_eq!(
        sources,
        vec!["/dev/nvme0n1p2", "/dev/nvme0n1p1", "server:/export"]
    );
    assert_eq!(entries[0].mount_point, PathBuf::from("/"));
    assert_eq!(entries[1].options_string(), "rw,relatime,fmask=0077");
    assert_eq!(&entries[2].fs_type, "nfs4");
}

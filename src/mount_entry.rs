use std::path::PathBuf;

/// One entry of the mount table: a device (or pseudo device)
/// attached at a mount point
#[derive(Debug, Clone)]
pub struct MountEntry {
    /// the source device, eg "/dev/sda1", or a pseudo source
    /// like "tmpfs" or "server:/export"
    pub source: String,
    /// where the entry is attached in the hierarchy
    pub mount_point: PathBuf,
    /// the raw file system type, eg "ext4" or "nfs4"
    pub fs_type: String,
    /// mount option tokens, in mount table order
    pub options: Vec<String>,
}

impl MountEntry {
    /// whether an option is present, either bare ("rw") or
    /// valued ("compress=zstd:3")
    pub fn has_option(
        &self,
        name: &str,
    ) -> bool {
        self.options.iter().any(|option| {
            option == name
                || option
                    .strip_prefix(name)
                    .is_some_and(|rest| rest.starts_with('='))
        })
    }
    /// the value of a `name=value` option
    pub fn option_value(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.options
            .iter()
            .find_map(|option| option.strip_prefix(name)?.strip_prefix('='))
    }
    pub fn options_string(&self) -> String {
        self.options.join(",")
    }
}

#[test]
fn test_option_helpers() {
    let entry = MountEntry {
        source: "/dev/sdb1".to_string(),
        mount_point: "/home/dys/dev".into(),
        fs_type: "btrfs".to_string(),
        options: ["rw", "noatime", "compress=zstd:3"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };
    assert!(entry.has_option("rw"));
    assert!(entry.has_option("noatime"));
    assert!(entry.has_option("compress"));
    assert!(!entry.has_option("r"));
    assert!(!entry.has_option("relatime"));
    assert_eq!(entry.option_value("compress"), Some("zstd:3"));
    assert_eq!(entry.option_value("rw"), None);
    assert_eq!(entry.option_value("thing"), None);
    assert_eq!(entry.options_string(), "rw,noatime,compress=zstd:3");
}

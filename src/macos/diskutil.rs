use {
    crate::error::*,
    lazy_regex::*,
    snafu::prelude::*,
    std::{
        path::Path,
        process,
    },
};

/// what diskutil knows about a volume and we care about
#[derive(Debug, Default)]
pub struct VolumeMetadata {
    pub volume_name: Option<String>,
}

/// ask diskutil about the volume holding the given path
///
/// diskutil is slow and may be missing: callers treat any failure
/// as "no metadata".
pub fn read_volume_metadata(path: &Path) -> Result<VolumeMetadata> {
    let exe = "diskutil";
    let output = process::Command::new(exe)
        .arg("info")
        .arg(path)
        .output()
        .with_context(|_| CantExecuteSnafu { exe })?;
    let output = std::str::from_utf8(&output.stdout).map_err(|_| Error::UnexpectedFormat)?;
    Ok(parse_info(output))
}

fn parse_info(output: &str) -> VolumeMetadata {
    let mut metadata = VolumeMetadata::default();
    for line in output.lines() {
        let Some((_, key, value)) = regex_captures!(r"^\s+([^:]+):\s+(.+)$", line) else {
            continue;
        };
        if key == "Volume Name" && !value.is_empty() && !value.starts_with("Not applicable") {
            metadata.volume_name = Some(value.to_string());
        }
    }
    metadata
}

#[test]
fn test_parse_info() {
    static OUTPUT: &str = "\
   Device Identifier:         disk3s1s1
   Device Node:               /dev/disk3s1s1
   Whole:                     No
   Part of Whole:             disk3

   Volume Name:               Macintosh HD
   Mounted:                   Yes
   Mount Point:               /

   File System Personality:   APFS
   Type (Bundle):             apfs
";
    let metadata = parse_info(OUTPUT);
    assert_eq!(metadata.volume_name.as_deref(), Some("Macintosh HD"));

    let metadata = parse_info("   Volume Name:               Not applicable (no file system)\n");
    assert_eq!(metadata.volume_name, None);

    let metadata = parse_info("");
    assert_eq!(metadata.volume_name, None);
}

use {
    crate::error::*,
    std::{
        fs,
        io,
        path::Path,
    },
};

#[cfg(target_os = "linux")]
use lazy_regex::*;

/// read a system file into a string
#[cfg(target_os = "linux")]
pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    use std::io::Read;
    let mut file = fs::File::open(path.as_ref())?;
    let mut buf = String::new();
    file.read_to_string(&mut buf)?;
    Ok(buf)
}

/// decode ascii-octal and hex encoded characters.
///
/// This is necessary because the kernel escapes some chars in the
/// mount table and in device labels. For example the mount point
/// `/media/dys/USB DISK` is listed as `/media/dys/USB\040DISK`,
/// and a label `BIG DISK` appears in /dev/disk/by-label as
/// `BIG\x20DISK`.
#[cfg(target_os = "linux")]
pub fn decode_string<S: AsRef<str>>(s: S) -> String {
    let s = regex_replace_all!(r#"\\([01][0-7][0-7])"#, s.as_ref(), |_, n: &str| {
        let c = u8::from_str_radix(n, 8).unwrap() as char;
        c.to_string()
    });
    let s = regex_replace_all!(r#"\\x([0-9a-fA-F]{2})"#, &s, |_, n: &str| {
        let c = u8::from_str_radix(n, 16).unwrap() as char;
        c.to_string()
    });
    s.to_string()
}

/// check that the path exists and is a directory
pub fn check_dir(path: &Path) -> Result<()> {
    let md = fs::metadata(path).map_err(|e| match e.kind() {
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
            source: e,
            path: path.to_path_buf(),
        },
    })?;
    if md.is_dir() {
        Ok(())
    } else {
        NotADirectorySnafu { path }.fail()
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_decode_string() {
    assert_eq!(
        decode_string(r"/media/dys/USB\040DISK"),
        "/media/dys/USB DISK"
    );
    assert_eq!(decode_string(r"BIG\x20DISK"), "BIG DISK");
    assert_eq!(decode_string("/plain/path"), "/plain/path");
    assert_eq!(decode_string(r"tab\011here"), "tab\there");
}

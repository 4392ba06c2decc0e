use {
    crate::*,
    std::path::{
        Path,
        PathBuf,
    },
};

pub fn get(_path: &Path) -> Result<Drive> {
    Err(Error::Unsupported)
}

pub fn list_drives(_options: &ListOptions) -> Result<Vec<Drive>> {
    Err(Error::Unsupported)
}

pub fn list_drive_paths() -> Result<Vec<PathBuf>> {
    Err(Error::Unsupported)
}

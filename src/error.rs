use std::path::PathBuf;

/// ldu error type
#[derive(Debug, snafu::Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("No such path: {path:?}"))]
    NotFound { path: PathBuf },

    #[snafu(display("Not a directory: {path:?}"))]
    NotADirectory { path: PathBuf },

    #[snafu(display("Permission denied on {path:?}"))]
    PermissionDenied { path: PathBuf },

    #[snafu(display("Could not read the mount table"))]
    CantReadMountTable { source: std::io::Error },

    #[snafu(display("Could not stat {path:?}"))]
    CantStat {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("Couldn't execute {exe}"))]
    CantExecute { source: std::io::Error, exe: String },

    #[snafu(display("Unexpected format"))]
    UnexpectedFormat,

    #[snafu(display("Not supported on this platform"))]
    Unsupported,

    #[cfg(target_os = "windows")]
    #[snafu(display("Error while calling {api}"))]
    WindowsApi {
        source: windows::core::Error,
        api: String,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

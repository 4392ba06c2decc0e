use crate::{
    DriveType,
    FileSystemType,
};

#[cfg(unix)]
use crate::Drive;

/// Filters for a drive enumeration.
///
/// Network backed drives are left out of listings unless
/// `include_network` is set or the drive type filter explicitly
/// asks for them. Platforms without enumeration honor no filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    pub filter_drive_type: Option<DriveType>,
    pub filter_file_system_type: Option<FileSystemType>,
    pub include_network: bool,
}

impl ListOptions {
    pub fn filter_drive_type(
        mut self,
        v: DriveType,
    ) -> Self {
        self.filter_drive_type = Some(v);
        self
    }
    pub fn filter_file_system_type(
        mut self,
        v: FileSystemType,
    ) -> Self {
        self.filter_file_system_type = Some(v);
        self
    }
    pub fn include_network(
        mut self,
        v: bool,
    ) -> Self {
        self.include_network = v;
        self
    }

    #[cfg(unix)]
    pub(crate) fn keeps(
        &self,
        drive: &Drive,
    ) -> bool {
        if drive.drive_type == DriveType::Network && !self.network_wanted() {
            return false;
        }
        if self
            .filter_drive_type
            .is_some_and(|drive_type| drive_type != drive.drive_type)
        {
            return false;
        }
        if self
            .filter_file_system_type
            .is_some_and(|fs_type| fs_type != drive.file_system_type)
        {
            return false;
        }
        true
    }
    #[cfg(unix)]
    fn network_wanted(&self) -> bool {
        self.include_network || self.filter_drive_type == Some(DriveType::Network)
    }
}

#[cfg(unix)]
#[test]
fn test_keeps() {
    fn drive(
        drive_type: DriveType,
        file_system_type: FileSystemType,
    ) -> Drive {
        Drive {
            label: "disk".to_string(),
            mount: "/mnt/disk".into(),
            total: 1000,
            used: 400,
            free: 600,
            percent: 40.0,
            drive_type,
            file_system_type,
            options: Vec::new(),
        }
    }
    let internal = drive(DriveType::Internal, FileSystemType::Ext4);
    let network = drive(DriveType::Network, FileSystemType::Nfs);

    assert!(ListOptions::default().keeps(&internal));
    assert!(!ListOptions::default().keeps(&network));
    assert!(ListOptions::default().include_network(true).keeps(&network));

    // asking for network drives implies including them
    let only_network = ListOptions::default().filter_drive_type(DriveType::Network);
    assert!(only_network.keeps(&network));
    assert!(!only_network.keeps(&internal));

    let only_ext4 = ListOptions::default().filter_file_system_type(FileSystemType::Ext4);
    assert!(only_ext4.keeps(&internal));
    assert!(!only_ext4.keeps(&drive(DriveType::Internal, FileSystemType::Fat32)));
}

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use error_stack::{Report, ResultExt};
use kernel::interface::storage::LibraryStorage;
use kernel::prelude::entity::Library;
use kernel::KernelError;

use crate::env_or;
use crate::error::{ConvertError, DriverError};

pub use self::{csv_file::*, json_file::*};

mod csv_file;
mod json_file;
mod row;

static LIBRARY_DATA_FORMAT: &str = "LIBRARY_DATA_FORMAT";
static LIBRARY_DATA_PATH: &str = "LIBRARY_DATA_PATH";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FileFormat {
    Json,
    Csv,
}

impl FileFormat {
    fn default_path(&self) -> &'static str {
        match self {
            FileFormat::Json => "library.json",
            FileFormat::Csv => "library.csv",
        }
    }
}

impl FromStr for FileFormat {
    type Err = DriverError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(DriverError::UnknownFormat(s.to_string())),
        }
    }
}

/// File storage in the format chosen by configuration.
#[derive(Debug, Clone)]
pub enum FileStorage {
    Json(JsonFileStorage),
    Csv(CsvFileStorage),
}

impl FileStorage {
    pub fn new(format: FileFormat, path: impl Into<PathBuf>) -> Self {
        match format {
            FileFormat::Json => Self::Json(JsonFileStorage::new(path)),
            FileFormat::Csv => Self::Csv(CsvFileStorage::new(path)),
        }
    }

    /// Reads `LIBRARY_DATA_FORMAT` (`json` by default) and `LIBRARY_DATA_PATH`.
    pub fn from_env() -> error_stack::Result<Self, DriverError> {
        let format = env_or(LIBRARY_DATA_FORMAT, "json")?;
        let format = FileFormat::from_str(&format)
            .map_err(Report::new)
            .attach_printable_lazy(|| format!("Env {} is invalid", LIBRARY_DATA_FORMAT))?;
        let path = env_or(LIBRARY_DATA_PATH, format.default_path())?;
        tracing::debug!("Using {:?} storage at {}", format, path);
        Ok(Self::new(format, path))
    }
}

impl LibraryStorage for FileStorage {
    fn import_data(&self) -> error_stack::Result<Library, KernelError> {
        match self {
            FileStorage::Json(storage) => storage.import_data(),
            FileStorage::Csv(storage) => storage.import_data(),
        }
    }

    fn export_data(&self, library: &Library) -> error_stack::Result<(), KernelError> {
        match self {
            FileStorage::Json(storage) => storage.export_data(library),
            FileStorage::Csv(storage) => storage.export_data(library),
        }
    }
}

pub(in crate::storage) fn read_file(path: &Path) -> error_stack::Result<Vec<u8>, KernelError> {
    fs::read(path)
        .convert_error(KernelError::DataImport)
        .attach_printable_lazy(|| format!("Path: {}", path.display()))
}

/// Replaces the file at `path` by writing a sibling `.tmp` file and renaming it into place,
/// so the previous content survives a failed write.
pub(in crate::storage) fn write_file(
    path: &Path,
    bytes: &[u8],
) -> error_stack::Result<(), KernelError> {
    let mut temporary = OsString::from(path.as_os_str());
    temporary.push(".tmp");
    let temporary = PathBuf::from(temporary);

    let written = fs::write(&temporary, bytes).and_then(|_| fs::rename(&temporary, path));
    if written.is_err() {
        // The tmp file may not exist at all; nothing else to clean up.
        let _ = fs::remove_file(&temporary);
    }
    written
        .convert_error(KernelError::DataExport)
        .attach_printable_lazy(|| format!("Path: {}", path.display()))
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::{FileFormat, FileStorage};

    #[test]
    fn parse_format() {
        assert_eq!(FileFormat::from_str("json").ok(), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_str(" CSV ").ok(), Some(FileFormat::Csv));
        assert!(FileFormat::from_str("xml").is_err());
    }

    #[test]
    fn csv_storage_derives_users_path() {
        let storage = FileStorage::new(FileFormat::Csv, "data/library.csv");
        let FileStorage::Csv(storage) = storage else {
            panic!("expected csv storage");
        };
        assert_eq!(storage.users_path().to_str(), Some("data/library_users.csv"));
    }
}

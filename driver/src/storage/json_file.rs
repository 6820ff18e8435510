use std::path::PathBuf;

use error_stack::ResultExt;
use kernel::interface::storage::LibraryStorage;
use kernel::prelude::entity::Library;
use kernel::KernelError;

use crate::error::ConvertError;
use crate::storage::row::LibraryDocument;
use crate::storage::{read_file, write_file};

/// Stores the catalog as a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LibraryStorage for JsonFileStorage {
    fn import_data(&self) -> error_stack::Result<Library, KernelError> {
        let bytes = read_file(&self.path)?;
        let document: LibraryDocument = serde_json::from_slice(&bytes)
            .convert_error(KernelError::InvalidData)
            .attach_printable_lazy(|| format!("Path: {}", self.path.display()))?;
        let library = Library::try_from(document)?;
        tracing::debug!(
            "Imported {} publications and {} users from {}",
            library.publications().len(),
            library.users().len(),
            self.path.display()
        );
        Ok(library)
    }

    fn export_data(&self, library: &Library) -> error_stack::Result<(), KernelError> {
        let document = LibraryDocument::from(library);
        let bytes = serde_json::to_vec_pretty(&document).convert_error(KernelError::DataExport)?;
        write_file(&self.path, &bytes)?;
        tracing::debug!(
            "Exported {} publications and {} users to {}",
            document.publications.len(),
            document.users.len(),
            self.path.display()
        );
        Ok(())
    }
}

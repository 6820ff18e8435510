use kernel::interface::storage::{DependOnLibraryStorage, LibraryStorage};
use kernel::prelude::entity::Library;
use kernel::KernelError;

use crate::service::DependOnLibrary;

pub trait LoadLibraryService: DependOnLibraryStorage {
    /// Imports the persisted catalog. Missing or invalid data yields an empty library.
    fn load_library(&self) -> Library {
        match self.library_storage().import_data() {
            Ok(library) => {
                tracing::info!(
                    "Imported {} publications and {} users",
                    library.publications().len(),
                    library.users().len()
                );
                library
            }
            Err(report) => {
                tracing::warn!("Starting with an empty library: {:?}", report);
                Library::new()
            }
        }
    }
}

impl<T> LoadLibraryService for T where T: DependOnLibraryStorage {}

pub trait SaveLibraryService: DependOnLibrary + DependOnLibraryStorage {
    fn save_library(&self) -> error_stack::Result<(), KernelError> {
        self.library_storage().export_data(self.library())?;
        tracing::info!("Exported library");
        Ok(())
    }
}

impl<T> SaveLibraryService for T where T: DependOnLibrary + DependOnLibraryStorage {}

use crate::entity::Library;
use crate::KernelError;

/// Whole-file persistence of a [`Library`].
///
/// Implementations never substitute an empty library on failure; they either
/// return a valid library or an error with [`KernelError::DataImport`] or
/// [`KernelError::InvalidData`] as the current context.
pub trait LibraryStorage: 'static + Sync + Send {
    fn import_data(&self) -> error_stack::Result<Library, KernelError>;
    fn export_data(&self, library: &Library) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnLibraryStorage: 'static + Sync + Send {
    type LibraryStorage: LibraryStorage;
    fn library_storage(&self) -> &Self::LibraryStorage;
}

impl<T> DependOnLibraryStorage for T
where
    T: LibraryStorage,
{
    type LibraryStorage = T;
    fn library_storage(&self) -> &Self::LibraryStorage {
        self
    }
}

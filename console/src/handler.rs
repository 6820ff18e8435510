use application::service::{DependOnLibrary, LoadLibraryService};
use driver::storage::FileStorage;
use kernel::interface::storage::DependOnLibraryStorage;
use kernel::prelude::entity::Library;

/// The catalog of one console run together with the storage it came from.
pub struct Session {
    storage: FileStorage,
    library: Library,
}

impl Session {
    pub fn init(storage: FileStorage) -> Self {
        let library = storage.load_library();
        Self { storage, library }
    }
}

impl DependOnLibrary for Session {
    fn library(&self) -> &Library {
        &self.library
    }

    fn library_mut(&mut self) -> &mut Library {
        &mut self.library
    }
}

impl DependOnLibraryStorage for Session {
    type LibraryStorage = FileStorage;
    fn library_storage(&self) -> &Self::LibraryStorage {
        &self.storage
    }
}

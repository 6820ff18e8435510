use std::path::{Path, PathBuf};

use error_stack::ResultExt;
use kernel::interface::storage::LibraryStorage;
use kernel::prelude::entity::Library;
use kernel::KernelError;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ConvertError;
use crate::storage::row::LibraryDocument;
use crate::storage::{read_file, write_file};

/// Stores publications and users as two CSV files next to each other.
///
/// For `library.csv` the users land in `library_users.csv`.
#[derive(Debug, Clone)]
pub struct CsvFileStorage {
    publications_path: PathBuf,
    users_path: PathBuf,
}

impl CsvFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let publications_path = path.into();
        let mut users_file = publications_path
            .file_stem()
            .map(|stem| stem.to_os_string())
            .unwrap_or_default();
        users_file.push("_users");
        if let Some(extension) = publications_path.extension() {
            users_file.push(".");
            users_file.push(extension);
        }
        let users_path = publications_path.with_file_name(users_file);
        Self {
            publications_path,
            users_path,
        }
    }

    pub fn publications_path(&self) -> &Path {
        &self.publications_path
    }

    pub fn users_path(&self) -> &Path {
        &self.users_path
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> error_stack::Result<Vec<T>, KernelError> {
    let bytes = read_file(path)?;
    csv::Reader::from_reader(bytes.as_slice())
        .deserialize::<T>()
        .collect::<Result<Vec<_>, _>>()
        .convert_error(KernelError::InvalidData)
        .attach_printable_lazy(|| format!("Path: {}", path.display()))
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> error_stack::Result<(), KernelError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).convert_error(KernelError::DataExport)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| error.into_error())
        .convert_error(KernelError::DataExport)?;
    write_file(path, &bytes)
}

impl LibraryStorage for CsvFileStorage {
    fn import_data(&self) -> error_stack::Result<Library, KernelError> {
        let document = LibraryDocument {
            publications: read_rows(&self.publications_path)?,
            users: read_rows(&self.users_path)?,
        };
        let library = Library::try_from(document)?;
        tracing::debug!(
            "Imported {} publications from {} and {} users from {}",
            library.publications().len(),
            self.publications_path.display(),
            library.users().len(),
            self.users_path.display()
        );
        Ok(library)
    }

    fn export_data(&self, library: &Library) -> error_stack::Result<(), KernelError> {
        let document = LibraryDocument::from(library);
        write_rows(&self.publications_path, &document.publications)?;
        write_rows(&self.users_path, &document.users)?;
        tracing::debug!(
            "Exported {} publications to {} and {} users to {}",
            document.publications.len(),
            self.publications_path.display(),
            document.users.len(),
            self.users_path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use kernel::interface::storage::LibraryStorage;
    use kernel::prelude::entity::{
        Book, BookAuthor, BookIsbn, BookPages, BookReleaseYear, Library, LibraryUser, Magazine,
        MagazineLanguage, MagazineRelease, Publication, PublicationTitle, Publisher,
        UserFirstName, UserLastName, UserNationalId,
    };
    use kernel::KernelError;

    use super::CsvFileStorage;

    #[test]
    fn round_trip() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().unwrap();
        let storage = CsvFileStorage::new(dir.path().join("library.csv"));

        let mut library = Library::new();
        library.add_publication(Publication::Book(Book::new(
            PublicationTitle::new("Pan Tadeusz, czyli ostatni zajazd"),
            Publisher::new("Ossolineum"),
            BookAuthor::new("Adam Mickiewicz"),
            BookReleaseYear::new(1834),
            BookPages::new(400u32),
            BookIsbn::new("8304048912"),
        )))?;
        library.add_publication(Publication::Magazine(Magazine::new(
            PublicationTitle::new("Wired"),
            Publisher::new("Conde Nast"),
            MagazineRelease::from_calendar(2022, 12, 1).unwrap(),
            MagazineLanguage::new("en"),
        )))?;
        library.add_user(LibraryUser::new(
            UserFirstName::new("Anna"),
            UserLastName::new("Nowak"),
            UserNationalId::new("22222222222"),
        ))?;

        storage.export_data(&library)?;
        assert!(storage.publications_path().exists());
        assert!(storage.users_path().exists());

        let imported = storage.import_data()?;
        assert_eq!(imported, library);
        Ok(())
    }

    #[test]
    fn empty_text_round_trip() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().unwrap();
        let storage = CsvFileStorage::new(dir.path().join("library.csv"));

        let mut library = Library::new();
        library.add_publication(Publication::Book(Book::new(
            PublicationTitle::new("Dune"),
            Publisher::new(""),
            BookAuthor::new(""),
            BookReleaseYear::new(1965),
            BookPages::new(412u32),
            BookIsbn::new(""),
        )))?;
        library.add_publication(Publication::Magazine(Magazine::new(
            PublicationTitle::new("Wired"),
            Publisher::new("Conde Nast"),
            MagazineRelease::from_calendar(2023, 5, 1).unwrap(),
            MagazineLanguage::new(""),
        )))?;
        library.add_user(LibraryUser::new(
            UserFirstName::new(""),
            UserLastName::new("Nowak"),
            UserNationalId::new("22222222222"),
        ))?;

        storage.export_data(&library)?;
        assert_eq!(storage.import_data()?, library);
        Ok(())
    }

    #[test]
    fn empty_library_round_trip() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().unwrap();
        let storage = CsvFileStorage::new(dir.path().join("library.csv"));
        storage.export_data(&Library::new())?;
        assert_eq!(storage.import_data()?, Library::new());
        Ok(())
    }

    #[test]
    fn missing_users_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CsvFileStorage::new(dir.path().join("library.csv"));
        fs::write(storage.publications_path(), "").unwrap();
        let report = storage.import_data().unwrap_err();
        assert_eq!(report.current_context(), &KernelError::DataImport);
    }

    #[test]
    fn unknown_kind() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CsvFileStorage::new(dir.path().join("library.csv"));
        fs::write(
            storage.publications_path(),
            "kind,title,publisher,year,author,pages,isbn,month,day,language\n\
             comic,Tintin,Casterman,1930,,,,,,\n",
        )
        .unwrap();
        fs::write(storage.users_path(), "").unwrap();
        let report = storage.import_data().unwrap_err();
        assert_eq!(report.current_context(), &KernelError::InvalidData);
    }
}

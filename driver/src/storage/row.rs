use error_stack::{Report, ResultExt};
use serde::{Deserialize, Serialize};

use kernel::prelude::entity::{
    Book, BookAuthor, BookIsbn, BookPages, BookReleaseYear, DestructBook, DestructLibraryUser,
    DestructMagazine, Library, LibraryUser, Magazine, MagazineLanguage, MagazineRelease,
    Publication, PublicationTitle, Publisher, UserFirstName, UserLastName, UserNationalId,
};
use kernel::KernelError;

use crate::error::ConvertError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum PublicationKind {
    Book,
    Magazine,
}

/// Flat persisted form of a [`Publication`]. Columns that do not apply to the variant stay empty.
///
/// Text columns are plain strings: an empty CSV cell reads back as `""`, never as absent,
/// so empty text survives a round trip. `kind` decides which columns are read.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub(crate) struct PublicationRow {
    kind: PublicationKind,
    title: String,
    publisher: String,
    year: i32,
    #[serde(default)]
    author: String,
    pages: Option<u32>,
    #[serde(default)]
    isbn: String,
    month: Option<u8>,
    day: Option<u8>,
    #[serde(default)]
    language: String,
}

impl From<&Publication> for PublicationRow {
    fn from(value: &Publication) -> Self {
        match value.clone() {
            Publication::Book(book) => {
                let DestructBook {
                    title,
                    publisher,
                    author,
                    year,
                    pages,
                    isbn,
                } = book.into_destruct();
                Self {
                    kind: PublicationKind::Book,
                    title: title.into(),
                    publisher: publisher.into(),
                    year: year.into(),
                    author: author.into(),
                    pages: Some(pages.into()),
                    isbn: isbn.into(),
                    month: None,
                    day: None,
                    language: String::new(),
                }
            }
            Publication::Magazine(magazine) => {
                let DestructMagazine {
                    title,
                    publisher,
                    release,
                    language,
                } = magazine.into_destruct();
                Self {
                    kind: PublicationKind::Magazine,
                    title: title.into(),
                    publisher: publisher.into(),
                    year: release.year(),
                    author: String::new(),
                    pages: None,
                    isbn: String::new(),
                    month: Some(release.month()),
                    day: Some(release.day()),
                    language: language.into(),
                }
            }
        }
    }
}

fn required<T>(value: Option<T>, title: &str, field: &str) -> error_stack::Result<T, KernelError> {
    value.ok_or_else(|| {
        Report::new(KernelError::InvalidData)
            .attach_printable(format!("Publication `{}` is missing field `{}`", title, field))
    })
}

impl TryFrom<PublicationRow> for Publication {
    type Error = Report<KernelError>;
    fn try_from(value: PublicationRow) -> Result<Self, Self::Error> {
        let title = value.title;
        match value.kind {
            PublicationKind::Book => {
                let pages = required(value.pages, &title, "pages")?;
                Ok(Publication::Book(Book::new(
                    PublicationTitle::new(title),
                    Publisher::new(value.publisher),
                    BookAuthor::new(value.author),
                    BookReleaseYear::new(value.year),
                    BookPages::new(pages),
                    BookIsbn::new(value.isbn),
                )))
            }
            PublicationKind::Magazine => {
                let month = required(value.month, &title, "month")?;
                let day = required(value.day, &title, "day")?;
                let release = MagazineRelease::from_calendar(value.year, month, day)
                    .convert_error(KernelError::InvalidData)
                    .attach_printable_lazy(|| format!("Publication `{}` has no valid date", title))?;
                Ok(Publication::Magazine(Magazine::new(
                    PublicationTitle::new(title),
                    Publisher::new(value.publisher),
                    release,
                    MagazineLanguage::new(value.language),
                )))
            }
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub(crate) struct UserRow {
    first_name: String,
    last_name: String,
    national_id: String,
}

impl From<&LibraryUser> for UserRow {
    fn from(value: &LibraryUser) -> Self {
        let DestructLibraryUser {
            first_name,
            last_name,
            national_id,
        } = value.clone().into_destruct();
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            national_id: national_id.into(),
        }
    }
}

impl From<UserRow> for LibraryUser {
    fn from(value: UserRow) -> Self {
        LibraryUser::new(
            UserFirstName::new(value.first_name),
            UserLastName::new(value.last_name),
            UserNationalId::new(value.national_id),
        )
    }
}

/// The whole catalog as written to storage, ordered by title and by national id.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub(crate) struct LibraryDocument {
    pub(crate) publications: Vec<PublicationRow>,
    pub(crate) users: Vec<UserRow>,
}

impl From<&Library> for LibraryDocument {
    fn from(value: &Library) -> Self {
        let publications = value
            .sorted_publications(Publication::compare_by_title)
            .into_iter()
            .map(PublicationRow::from)
            .collect();
        let users = value
            .sorted_users(|a, b| a.national_id().as_ref().cmp(b.national_id().as_ref()))
            .into_iter()
            .map(UserRow::from)
            .collect();
        Self {
            publications,
            users,
        }
    }
}

impl TryFrom<LibraryDocument> for Library {
    type Error = Report<KernelError>;
    fn try_from(value: LibraryDocument) -> Result<Self, Self::Error> {
        let mut library = Library::new();
        for row in value.publications {
            let publication = Publication::try_from(row)?;
            library
                .add_publication(publication)
                .change_context(KernelError::InvalidData)?;
        }
        for row in value.users {
            library
                .add_user(LibraryUser::from(row))
                .change_context(KernelError::InvalidData)?;
        }
        Ok(library)
    }
}

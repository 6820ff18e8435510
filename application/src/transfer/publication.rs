use kernel::prelude::entity::{
    Book, BookAuthor, BookIsbn, BookPages, BookReleaseYear, DestructBook, DestructMagazine,
    Magazine, MagazineLanguage, MagazineRelease, Publication, PublicationTitle, Publisher,
};
use time::Date;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub title: String,
    pub publisher: String,
    pub author: String,
    pub year: i32,
    pub pages: u32,
    pub isbn: String,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            title,
            publisher,
            author,
            year,
            pages,
            isbn,
        } = value.into_destruct();
        Self {
            title: title.into(),
            publisher: publisher.into(),
            author: author.into(),
            year: year.into(),
            pages: pages.into(),
            isbn: isbn.into(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MagazineDto {
    pub title: String,
    pub publisher: String,
    pub release: Date,
    pub language: String,
}

impl From<Magazine> for MagazineDto {
    fn from(value: Magazine) -> Self {
        let DestructMagazine {
            title,
            publisher,
            release,
            language,
        } = value.into_destruct();
        Self {
            title: title.into(),
            publisher: publisher.into(),
            release: release.into(),
            language: language.into(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PublicationDto {
    Book(BookDto),
    Magazine(MagazineDto),
}

impl From<Publication> for PublicationDto {
    fn from(value: Publication) -> Self {
        match value {
            Publication::Book(book) => Self::Book(BookDto::from(book)),
            Publication::Magazine(magazine) => Self::Magazine(MagazineDto::from(magazine)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookDto {
    pub title: String,
    pub publisher: String,
    pub author: String,
    pub year: i32,
    pub pages: u32,
    pub isbn: String,
}

impl From<CreateBookDto> for Book {
    fn from(value: CreateBookDto) -> Self {
        Book::new(
            PublicationTitle::new(value.title),
            Publisher::new(value.publisher),
            BookAuthor::new(value.author),
            BookReleaseYear::new(value.year),
            BookPages::new(value.pages),
            BookIsbn::new(value.isbn),
        )
    }
}

#[derive(Debug, Clone)]
pub struct CreateMagazineDto {
    pub title: String,
    pub publisher: String,
    pub release: Date,
    pub language: String,
}

impl From<CreateMagazineDto> for Magazine {
    fn from(value: CreateMagazineDto) -> Self {
        Magazine::new(
            PublicationTitle::new(value.title),
            Publisher::new(value.publisher),
            MagazineRelease::new(value.release),
            MagazineLanguage::new(value.language),
        )
    }
}

#[derive(Debug, Clone)]
pub struct FindPublicationDto {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct RemovePublicationDto {
    pub title: String,
}

mod author;
mod isbn;
mod pages;
mod year;

pub use self::{author::*, isbn::*, pages::*, year::*};
use crate::entity::{PublicationTitle, Publisher};
use destructure::Destructure;
use std::cmp::Ordering;
use std::fmt::Display;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    title: PublicationTitle,
    publisher: Publisher,
    author: BookAuthor,
    year: BookReleaseYear,
    pages: BookPages,
    isbn: BookIsbn,
}

impl Book {
    pub fn new(
        title: PublicationTitle,
        publisher: Publisher,
        author: BookAuthor,
        year: BookReleaseYear,
        pages: BookPages,
        isbn: BookIsbn,
    ) -> Self {
        Self {
            title,
            publisher,
            author,
            year,
            pages,
            isbn,
        }
    }

    pub fn compare_by_title(a: &Book, b: &Book) -> Ordering {
        a.title.cmp_ignore_case(&b.title)
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; {}; {}; {}; {}; {}",
            self.title.as_ref(),
            self.publisher.as_ref(),
            self.year.as_ref(),
            self.author.as_ref(),
            self.pages.as_ref(),
            self.isbn.as_ref()
        )
    }
}

mod publisher;
mod title;

pub use self::{publisher::*, title::*};
use crate::entity::{Book, Magazine};
use std::cmp::Ordering;
use std::fmt::Display;

/// A catalog item. The title is its identity inside a [`Library`](crate::entity::Library).
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Publication {
    Book(Book),
    Magazine(Magazine),
}

impl Publication {
    pub fn title(&self) -> &PublicationTitle {
        match self {
            Publication::Book(book) => book.title(),
            Publication::Magazine(magazine) => magazine.title(),
        }
    }

    pub fn compare_by_title(a: &Publication, b: &Publication) -> Ordering {
        a.title().cmp_ignore_case(b.title())
    }
}

impl From<Book> for Publication {
    fn from(book: Book) -> Self {
        Self::Book(book)
    }
}

impl From<Magazine> for Publication {
    fn from(magazine: Magazine) -> Self {
        Self::Magazine(magazine)
    }
}

impl Display for Publication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Publication::Book(book) => Display::fmt(book, f),
            Publication::Magazine(magazine) => Display::fmt(magazine, f),
        }
    }
}

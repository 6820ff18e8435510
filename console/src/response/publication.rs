use application::transfer::{BookDto, MagazineDto, PublicationDto};

use crate::controller::Exhaust;

fn book_line(book: BookDto) -> String {
    format!(
        "Book: {}; author: {}; publisher: {}; released: {}; pages: {}; ISBN: {}",
        book.title, book.author, book.publisher, book.year, book.pages, book.isbn
    )
}

fn magazine_line(magazine: MagazineDto) -> String {
    format!(
        "Magazine: {}; publisher: {}; released: {}; language: {}",
        magazine.title, magazine.publisher, magazine.release, magazine.language
    )
}

pub struct BookPresenter;

impl Exhaust<()> for BookPresenter {
    type To = String;
    fn emit(&self, _: ()) -> Self::To {
        "Book added".to_string()
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = Vec<String>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        if input.is_empty() {
            return vec!["No books in the library".to_string()];
        }
        input.into_iter().map(book_line).collect()
    }
}

pub struct MagazinePresenter;

impl Exhaust<()> for MagazinePresenter {
    type To = String;
    fn emit(&self, _: ()) -> Self::To {
        "Magazine added".to_string()
    }
}

impl Exhaust<Vec<MagazineDto>> for MagazinePresenter {
    type To = Vec<String>;
    fn emit(&self, input: Vec<MagazineDto>) -> Self::To {
        if input.is_empty() {
            return vec!["No magazines in the library".to_string()];
        }
        input.into_iter().map(magazine_line).collect()
    }
}

pub struct PublicationPresenter;

impl Exhaust<Option<PublicationDto>> for PublicationPresenter {
    type To = String;
    fn emit(&self, input: Option<PublicationDto>) -> Self::To {
        match input {
            Some(PublicationDto::Book(book)) => book_line(book),
            Some(PublicationDto::Magazine(magazine)) => magazine_line(magazine),
            None => "No publication with such title".to_string(),
        }
    }
}

/// Removal matches on title alone, so the message does not name a variant.
impl Exhaust<bool> for PublicationPresenter {
    type To = String;
    fn emit(&self, removed: bool) -> Self::To {
        if removed {
            "Publication deleted".to_string()
        } else {
            "No publication with such title".to_string()
        }
    }
}

#[cfg(test)]
mod test {
    use crate::controller::Exhaust;

    use super::PublicationPresenter;

    #[test]
    fn removal_message_names_no_variant() {
        assert_eq!(PublicationPresenter.emit(true), "Publication deleted");
        assert_eq!(PublicationPresenter.emit(false), "No publication with such title");
    }
}

use kernel::prelude::entity::{Book, Magazine, Publication};
use kernel::KernelError;

use crate::service::DependOnLibrary;
use crate::transfer::{
    BookDto, CreateBookDto, CreateMagazineDto, FindPublicationDto, MagazineDto, PublicationDto,
    RemovePublicationDto,
};

pub trait PublicationService: DependOnLibrary {
    fn add_book(&mut self, dto: CreateBookDto) -> error_stack::Result<(), KernelError> {
        let book = Book::from(dto);
        tracing::info!("Adding book {}", book);
        self.library_mut().add_publication(Publication::Book(book))
    }

    fn add_magazine(&mut self, dto: CreateMagazineDto) -> error_stack::Result<(), KernelError> {
        let magazine = Magazine::from(dto);
        tracing::info!("Adding magazine {}", magazine);
        self.library_mut()
            .add_publication(Publication::Magazine(magazine))
    }

    fn remove_publication(&mut self, dto: RemovePublicationDto) -> bool {
        let removed = self.library_mut().remove_publication_by_title(&dto.title);
        tracing::info!("Removing publication `{}`: {}", dto.title, removed);
        removed
    }

    fn find_publication(&self, dto: FindPublicationDto) -> Option<PublicationDto> {
        self.library()
            .find_publication_by_title(&dto.title)
            .cloned()
            .map(PublicationDto::from)
    }

    fn get_books(&self) -> Vec<BookDto> {
        self.library()
            .sorted_books(Book::compare_by_title)
            .into_iter()
            .cloned()
            .map(BookDto::from)
            .collect()
    }

    fn get_magazines(&self) -> Vec<MagazineDto> {
        self.library()
            .sorted_magazines(Magazine::compare_by_title)
            .into_iter()
            .cloned()
            .map(MagazineDto::from)
            .collect()
    }
}

impl<T> PublicationService for T where T: DependOnLibrary {}

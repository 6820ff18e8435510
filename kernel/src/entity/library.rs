use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use error_stack::Report;
use vodca::References;

use crate::entity::{Book, LibraryUser, Magazine, Publication, PublicationTitle, UserNationalId};
use crate::KernelError;

/// The catalog aggregate: publications keyed by title, users keyed by national id.
///
/// Uniqueness of both keys holds as long as the catalog is only changed through
/// the `add_*` and `remove_*` methods. The maps themselves are exposed read-only.
#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct Library {
    publications: HashMap<PublicationTitle, Publication>,
    users: HashMap<UserNationalId, LibraryUser>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_publication_by_title(&self, title: &str) -> Option<&Publication> {
        self.publications.get(title)
    }

    pub fn add_publication(
        &mut self,
        publication: Publication,
    ) -> error_stack::Result<(), KernelError> {
        match self.publications.entry(publication.title().clone()) {
            Entry::Occupied(entry) => Err(Report::new(KernelError::DuplicateTitle)
                .attach_printable(format!("Title: {}", entry.key().as_ref()))),
            Entry::Vacant(entry) => {
                entry.insert(publication);
                Ok(())
            }
        }
    }

    /// Removes the publication sharing the given one's title, whichever variant either is.
    pub fn remove_publication(&mut self, publication: &Publication) -> bool {
        self.remove_publication_by_title(publication.title().as_ref())
    }

    pub fn remove_publication_by_title(&mut self, title: &str) -> bool {
        self.publications.remove(title).is_some()
    }

    pub fn add_user(&mut self, user: LibraryUser) -> error_stack::Result<(), KernelError> {
        match self.users.entry(user.national_id().clone()) {
            Entry::Occupied(entry) => Err(Report::new(KernelError::DuplicateUser)
                .attach_printable(format!("National id: {}", entry.key().as_ref()))),
            Entry::Vacant(entry) => {
                entry.insert(user);
                Ok(())
            }
        }
    }

    pub fn sorted_publications<F>(&self, mut compare: F) -> Vec<&Publication>
    where
        F: FnMut(&Publication, &Publication) -> Ordering,
    {
        let mut list = self.publications.values().collect::<Vec<_>>();
        list.sort_by(|a, b| compare(*a, *b));
        list
    }

    pub fn sorted_books<F>(&self, mut compare: F) -> Vec<&Book>
    where
        F: FnMut(&Book, &Book) -> Ordering,
    {
        let mut list = self
            .publications
            .values()
            .filter_map(|publication| match publication {
                Publication::Book(book) => Some(book),
                Publication::Magazine(_) => None,
            })
            .collect::<Vec<_>>();
        list.sort_by(|a, b| compare(*a, *b));
        list
    }

    pub fn sorted_magazines<F>(&self, mut compare: F) -> Vec<&Magazine>
    where
        F: FnMut(&Magazine, &Magazine) -> Ordering,
    {
        let mut list = self
            .publications
            .values()
            .filter_map(|publication| match publication {
                Publication::Magazine(magazine) => Some(magazine),
                Publication::Book(_) => None,
            })
            .collect::<Vec<_>>();
        list.sort_by(|a, b| compare(*a, *b));
        list
    }

    pub fn sorted_users<F>(&self, mut compare: F) -> Vec<&LibraryUser>
    where
        F: FnMut(&LibraryUser, &LibraryUser) -> Ordering,
    {
        let mut list = self.users.values().collect::<Vec<_>>();
        list.sort_by(|a, b| compare(*a, *b));
        list
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{
        Book, BookAuthor, BookIsbn, BookPages, BookReleaseYear, Library, LibraryUser, Magazine,
        MagazineLanguage, MagazineRelease, Publication, PublicationTitle, Publisher,
        UserFirstName, UserLastName, UserNationalId,
    };
    use crate::KernelError;

    fn book(title: &str, author: &str) -> Publication {
        Publication::Book(Book::new(
            PublicationTitle::new(title),
            Publisher::new("Helion"),
            BookAuthor::new(author),
            BookReleaseYear::new(2019),
            BookPages::new(320u32),
            BookIsbn::new("9788328354327"),
        ))
    }

    fn magazine(title: &str) -> Publication {
        Publication::Magazine(Magazine::new(
            PublicationTitle::new(title),
            Publisher::new("Future"),
            MagazineRelease::from_calendar(2024, 3, 12).unwrap(),
            MagazineLanguage::new("en"),
        ))
    }

    fn user(first: &str, last: &str, id: &str) -> LibraryUser {
        LibraryUser::new(
            UserFirstName::new(first),
            UserLastName::new(last),
            UserNationalId::new(id),
        )
    }

    #[test]
    fn duplicate_title_keeps_original() -> error_stack::Result<(), KernelError> {
        let mut library = Library::new();
        let original = book("Dune", "Frank Herbert");
        library.add_publication(original.clone())?;

        let report = library
            .add_publication(book("Dune", "Someone Else"))
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::DuplicateTitle);

        let report = library.add_publication(magazine("Dune")).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::DuplicateTitle);

        assert_eq!(library.publications().len(), 1);
        assert_eq!(library.find_publication_by_title("Dune"), Some(&original));
        Ok(())
    }

    #[test]
    fn duplicate_user() -> error_stack::Result<(), KernelError> {
        let mut library = Library::new();
        library.add_user(user("Jan", "Kowalski", "11111111111"))?;
        let report = library
            .add_user(user("Anna", "Nowak", "11111111111"))
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::DuplicateUser);
        assert_eq!(
            library.users().get("11111111111").map(|u| u.last_name().as_ref().as_str()),
            Some("Kowalski")
        );
        Ok(())
    }

    #[test]
    fn remove_absent_publication() -> error_stack::Result<(), KernelError> {
        let mut library = Library::new();
        library.add_publication(book("Dune", "Frank Herbert"))?;
        assert!(!library.remove_publication(&book("Solaris", "Stanislaw Lem")));
        assert_eq!(library.publications().len(), 1);
        Ok(())
    }

    #[test]
    fn remove_present_publication() -> error_stack::Result<(), KernelError> {
        let mut library = Library::new();
        library.add_publication(book("Dune", "Frank Herbert"))?;
        assert!(library.remove_publication(&book("Dune", "Frank Herbert")));
        assert!(library.find_publication_by_title("Dune").is_none());
        assert!(!library.remove_publication_by_title("Dune"));
        Ok(())
    }

    #[test]
    fn remove_matches_title_across_variants() -> error_stack::Result<(), KernelError> {
        let mut library = Library::new();
        library.add_publication(book("Wired", "Various"))?;
        assert!(library.remove_publication(&magazine("Wired")));
        assert!(library.publications().is_empty());
        Ok(())
    }

    #[test]
    fn find_is_exact_match() -> error_stack::Result<(), KernelError> {
        let mut library = Library::new();
        library.add_publication(book("Dune", "Frank Herbert"))?;
        assert!(library.find_publication_by_title("dune").is_none());
        assert!(library.find_publication_by_title("Dune").is_some());
        Ok(())
    }

    #[test]
    fn sorted_publications_ignore_case() -> error_stack::Result<(), KernelError> {
        let mut library = Library::new();
        library.add_publication(book("banana", "A"))?;
        library.add_publication(magazine("Apple"))?;
        library.add_publication(book("cherry", "C"))?;

        let titles = library
            .sorted_publications(Publication::compare_by_title)
            .into_iter()
            .map(|p| p.title().as_ref().clone())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
        assert_eq!(library.publications().len(), 3);
        Ok(())
    }

    #[test]
    fn sorted_by_variant() -> error_stack::Result<(), KernelError> {
        let mut library = Library::new();
        library.add_publication(book("Solaris", "Stanislaw Lem"))?;
        library.add_publication(magazine("Wired"))?;
        library.add_publication(book("dune", "Frank Herbert"))?;
        library.add_publication(magazine("Linux Format"))?;

        let books = library
            .sorted_books(Book::compare_by_title)
            .into_iter()
            .map(|b| b.title().as_ref().clone())
            .collect::<Vec<_>>();
        assert_eq!(books, vec!["dune", "Solaris"]);

        let magazines = library
            .sorted_magazines(Magazine::compare_by_title)
            .into_iter()
            .map(|m| m.title().as_ref().clone())
            .collect::<Vec<_>>();
        assert_eq!(magazines, vec!["Linux Format", "Wired"]);
        Ok(())
    }

    #[test]
    fn sorted_users_by_last_name() -> error_stack::Result<(), KernelError> {
        let mut library = Library::new();
        library.add_user(user("Jan", "nowak", "22222222222"))?;
        library.add_user(user("Anna", "Kowalska", "11111111111"))?;
        library.add_user(user("Piotr", "Zielinski", "33333333333"))?;

        let ids = library
            .sorted_users(LibraryUser::compare_by_last_name)
            .into_iter()
            .map(|u| u.national_id().as_ref().clone())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["11111111111", "22222222222", "33333333333"]);
        Ok(())
    }
}

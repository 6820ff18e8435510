mod language;
mod release;

pub use self::{language::*, release::*};
use crate::entity::{PublicationTitle, Publisher};
use destructure::Destructure;
use std::cmp::Ordering;
use std::fmt::Display;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Magazine {
    title: PublicationTitle,
    publisher: Publisher,
    release: MagazineRelease,
    language: MagazineLanguage,
}

impl Magazine {
    pub fn new(
        title: PublicationTitle,
        publisher: Publisher,
        release: MagazineRelease,
        language: MagazineLanguage,
    ) -> Self {
        Self {
            title,
            publisher,
            release,
            language,
        }
    }

    pub fn compare_by_title(a: &Magazine, b: &Magazine) -> Ordering {
        a.title.cmp_ignore_case(&b.title)
    }
}

impl Display for Magazine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; {}; {}; {}",
            self.title.as_ref(),
            self.publisher.as_ref(),
            self.release.as_ref(),
            self.language.as_ref()
        )
    }
}

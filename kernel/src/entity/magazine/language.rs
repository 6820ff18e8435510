use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct MagazineLanguage(String);

impl MagazineLanguage {
    pub fn new(language: impl Into<String>) -> Self {
        Self(language.into())
    }
}

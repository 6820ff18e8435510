use std::borrow::Borrow;
use std::cmp::Ordering;

use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct PublicationTitle(String);

impl PublicationTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Case-insensitive ordering. Titles equal ignoring case fall back to exact order.
    pub fn cmp_ignore_case(&self, other: &Self) -> Ordering {
        self.0
            .to_lowercase()
            .cmp(&other.0.to_lowercase())
            .then_with(|| self.0.cmp(&other.0))
    }
}

// Hash of a single-field tuple struct equals the hash of its String, which equals the hash of str.
impl Borrow<str> for PublicationTitle {
    fn borrow(&self) -> &str {
        &self.0
    }
}

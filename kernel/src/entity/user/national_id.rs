use std::borrow::Borrow;

use vodca::{AsRefln, Fromln};

/// National identity number, the key of a [`LibraryUser`](crate::entity::LibraryUser).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct UserNationalId(String);

impl UserNationalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Borrow<str> for UserNationalId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

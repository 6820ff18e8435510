use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct UserFirstName(String);

impl UserFirstName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct UserLastName(String);

impl UserLastName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

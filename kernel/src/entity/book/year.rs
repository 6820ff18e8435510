use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookReleaseYear(i32);

impl BookReleaseYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }
}

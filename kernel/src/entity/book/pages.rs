use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookPages(u32);

impl BookPages {
    pub fn new(pages: impl Into<u32>) -> Self {
        Self(pages.into())
    }
}

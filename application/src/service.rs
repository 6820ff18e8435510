use kernel::prelude::entity::Library;

pub use self::{publication::*, storage::*, user::*};

mod publication;
mod storage;
mod user;

/// Access to the catalog owned by the running session.
pub trait DependOnLibrary: 'static + Sync + Send {
    fn library(&self) -> &Library;
    fn library_mut(&mut self) -> &mut Library;
}


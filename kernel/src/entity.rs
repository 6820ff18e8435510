mod book;
mod library;
mod magazine;
mod publication;
mod user;

pub use self::{book::*, library::*, magazine::*, publication::*, user::*};

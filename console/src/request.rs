mod publication;
mod user;

pub use self::{publication::*, user::*};

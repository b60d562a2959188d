mod book;
mod scope;

pub use self::{book::*, scope::*};

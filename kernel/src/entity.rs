mod author;
mod book;
mod cover;
mod page;

pub use self::{author::*, book::*, cover::*, page::*};

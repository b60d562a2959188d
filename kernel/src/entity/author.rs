mod name;

pub use self::name::*;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Default, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Author {
    name: AuthorName,
}

impl Author {
    pub fn new(name: AuthorName) -> Self {
        Self { name }
    }
}

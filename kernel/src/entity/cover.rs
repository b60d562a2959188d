mod title;

pub use self::title::*;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Default, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Cover {
    title: CoverTitle,
}

impl Cover {
    pub fn new(title: CoverTitle) -> Self {
        Self { title }
    }
}

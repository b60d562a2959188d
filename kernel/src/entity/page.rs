mod text;

pub use self::text::*;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Default, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Page {
    text: PageText,
}

impl Page {
    pub fn new(text: PageText) -> Self {
        Self { text }
    }
}

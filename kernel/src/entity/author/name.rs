use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

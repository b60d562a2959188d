use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct CoverTitle(String);

impl CoverTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }
}

use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct PageText(String);

impl PageText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

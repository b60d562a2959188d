use crate::entity::Page;
use vodca::{AsRefln, Fromln};

/// Pages of a book in the order they were added.
#[derive(Debug, Clone, Default, Eq, PartialEq, Fromln, AsRefln)]
pub struct Pages(Vec<Page>);

impl Pages {
    pub fn new(pages: impl Into<Vec<Page>>) -> Self {
        Self(pages.into())
    }

    pub fn push(&mut self, page: Page) {
        self.0.push(page);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.0.iter()
    }
}

impl IntoIterator for Pages {
    type Item = Page;
    type IntoIter = std::vec::IntoIter<Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pages {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

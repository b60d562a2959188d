use crate::dsl::{construct, try_construct, Apply, Scoped};
use crate::entity::{
    Author, Book, Cover, DestructAuthor, DestructBook, DestructCover, DestructPage, Page, Pages,
};

impl Scoped for Author {
    type Scope = DestructAuthor;
    fn scope(self, block: impl FnOnce(&mut Self::Scope)) -> Self {
        self.reconstruct(block)
    }
}

impl Scoped for Cover {
    type Scope = DestructCover;
    fn scope(self, block: impl FnOnce(&mut Self::Scope)) -> Self {
        self.reconstruct(block)
    }
}

impl Scoped for Page {
    type Scope = DestructPage;
    fn scope(self, block: impl FnOnce(&mut Self::Scope)) -> Self {
        self.reconstruct(block)
    }
}

impl Scoped for Pages {
    type Scope = Pages;
    fn scope(self, block: impl FnOnce(&mut Self::Scope)) -> Self {
        self.apply(block)
    }
}

impl Scoped for Book {
    type Scope = DestructBook;
    fn scope(self, block: impl FnOnce(&mut Self::Scope)) -> Self {
        self.reconstruct(block)
    }
}

/// Builds a [`Book`] from an empty one.
///
/// ```
/// use kernel::interface::dsl::book;
/// use kernel::prelude::entity::{AuthorName, CoverTitle, PageText};
///
/// let book = book(|b| {
///     b.author(|a| a.name = AuthorName::new("Douglas Adams"));
///     b.cover(|c| c.title = CoverTitle::new("The Hitchhiker's Guide to the Galaxy"));
///     b.pages(|p| {
///         p.page(|p| p.text = PageText::new("Contents of first page"));
///     });
/// });
/// assert_eq!(book.pages().len(), 1);
/// ```
pub fn book(block: impl FnOnce(&mut DestructBook)) -> Book {
    construct::<Book>(block)
}

pub fn try_book<E>(block: impl FnOnce(&mut DestructBook) -> Result<(), E>) -> Result<Book, E> {
    try_construct::<Book, E>(block)
}

// Each child is built in isolation and only attached once its block is done,
// so a failed block never leaves a half-filled child behind.
impl DestructBook {
    pub fn author(&mut self, block: impl FnOnce(&mut DestructAuthor)) -> &mut Self {
        self.author = Some(construct::<Author>(block));
        self
    }

    pub fn try_author<E>(
        &mut self,
        block: impl FnOnce(&mut DestructAuthor) -> Result<(), E>,
    ) -> Result<&mut Self, E> {
        self.author = Some(try_construct::<Author, E>(block)?);
        Ok(self)
    }

    pub fn cover(&mut self, block: impl FnOnce(&mut DestructCover)) -> &mut Self {
        self.cover = Some(construct::<Cover>(block));
        self
    }

    pub fn try_cover<E>(
        &mut self,
        block: impl FnOnce(&mut DestructCover) -> Result<(), E>,
    ) -> Result<&mut Self, E> {
        self.cover = Some(try_construct::<Cover, E>(block)?);
        Ok(self)
    }

    /// Replaces the pages with a freshly built sequence.
    pub fn pages(&mut self, block: impl FnOnce(&mut Pages)) -> &mut Self {
        self.pages = construct::<Pages>(block);
        self
    }

    pub fn try_pages<E>(
        &mut self,
        block: impl FnOnce(&mut Pages) -> Result<(), E>,
    ) -> Result<&mut Self, E> {
        self.pages = try_construct::<Pages, E>(block)?;
        Ok(self)
    }
}

impl Pages {
    /// Appends a page built by `block`.
    pub fn page(&mut self, block: impl FnOnce(&mut DestructPage)) -> &mut Self {
        self.push(construct::<Page>(block));
        self
    }

    pub fn try_page<E>(
        &mut self,
        block: impl FnOnce(&mut DestructPage) -> Result<(), E>,
    ) -> Result<&mut Self, E> {
        self.push(try_construct::<Page, E>(block)?);
        Ok(self)
    }
}

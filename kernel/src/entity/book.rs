mod pages;

pub use self::pages::*;
use crate::entity::{Author, Cover};
use destructure::{Destructure, Mutation};
use vodca::References;

/// A book assembled from an optional author, an optional cover and its pages.
///
/// Fields stay private once built. Use [`Book::reconstruct`] or
/// [`Book::substitute`] to derive a changed copy.
#[derive(Debug, Clone, Default, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    author: Option<Author>,
    cover: Option<Cover>,
    pages: Pages,
}

impl Book {
    pub fn new(author: Option<Author>, cover: Option<Cover>, pages: Pages) -> Self {
        Self {
            author,
            cover,
            pages,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{
        Author, AuthorName, Book, Cover, CoverTitle, DestructBook, Page, PageText, Pages,
    };

    #[test]
    fn default_book_is_empty() {
        let book = Book::default();
        assert!(book.author().is_none());
        assert!(book.cover().is_none());
        assert!(book.pages().is_empty());
    }

    #[test]
    fn default_records_hold_empty_text() {
        assert_eq!(Author::default().name(), &AuthorName::new(""));
        assert_eq!(Cover::default().title(), &CoverTitle::new(""));
        assert_eq!(Page::default().text(), &PageText::new(""));
    }

    #[test]
    fn substitute_changes_only_touched_fields() {
        let mut book = Book::new(
            Some(Author::new(AuthorName::new("Douglas Adams"))),
            None,
            Pages::new(vec![Page::new(PageText::new("first"))]),
        );
        book.substitute(|book| {
            *book.cover = Some(Cover::new(CoverTitle::new("Mostly Harmless")));
        });

        let DestructBook {
            author,
            cover,
            pages,
        } = book.into_destruct();
        assert_eq!(author, Some(Author::new(AuthorName::new("Douglas Adams"))));
        assert_eq!(cover, Some(Cover::new(CoverTitle::new("Mostly Harmless"))));
        assert_eq!(pages.len(), 1);
    }
}

use kernel::interface::dsl::book;
use kernel::prelude::entity::{AuthorName, Book, CoverTitle, PageText};

use crate::transfer::CreateBookDto;

/// Builds a [`Book`] out of plain values, leaving absent parts unset.
pub fn compose_book(dto: CreateBookDto) -> Book {
    let CreateBookDto {
        author,
        cover,
        pages,
    } = dto;

    let book = book(|b| {
        if let Some(name) = author {
            b.author(|a| a.name = AuthorName::new(name));
        }
        if let Some(title) = cover {
            b.cover(|c| c.title = CoverTitle::new(title));
        }
        b.pages(|p| {
            for text in pages {
                p.page(|p| p.text = PageText::new(text));
            }
        });
    });

    tracing::debug!(
        has_author = book.author().is_some(),
        has_cover = book.cover().is_some(),
        pages = book.pages().len(),
        "composed book"
    );
    book
}

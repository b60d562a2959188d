use kernel::interface::dsl::book;
use kernel::prelude::entity::{AuthorName, Book, CoverTitle, PageText};

pub fn hitchhikers_guide() -> Book {
    book(|b| {
        b.author(|a| a.name = AuthorName::new("Douglas Adams"));

        b.cover(|c| c.title = CoverTitle::new("The Hitchhiker's Guide to the Galaxy"));

        b.pages(|p| {
            p.page(|p| p.text = PageText::new("Contents of first page"));
            p.page(|p| p.text = PageText::new("Contents of second page"));
            p.page(|p| p.text = PageText::new("Contents of third page"));
        });
    })
}

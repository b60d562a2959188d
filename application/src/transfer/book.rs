use serde::{Deserialize, Serialize};

use kernel::prelude::entity::{
    Author, Book, Cover, DestructAuthor, DestructBook, DestructCover, DestructPage, Page,
};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct AuthorDto {
    pub name: String,
}

impl From<Author> for AuthorDto {
    fn from(value: Author) -> Self {
        let DestructAuthor { name } = value.into_destruct();
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CoverDto {
    pub title: String,
}

impl From<Cover> for CoverDto {
    fn from(value: Cover) -> Self {
        let DestructCover { title } = value.into_destruct();
        Self {
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PageDto {
    pub text: String,
}

impl From<Page> for PageDto {
    fn from(value: Page) -> Self {
        let DestructPage { text } = value.into_destruct();
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub author: Option<AuthorDto>,
    pub cover: Option<CoverDto>,
    pub pages: Vec<PageDto>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            author,
            cover,
            pages,
        } = value.into_destruct();
        Self {
            author: author.map(AuthorDto::from),
            cover: cover.map(CoverDto::from),
            pages: pages.into_iter().map(PageDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBookDto {
    pub author: Option<String>,
    pub cover: Option<String>,
    #[serde(default)]
    pub pages: Vec<String>,
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{
        Author, AuthorName, Book, Cover, CoverTitle, Page, PageText, Pages,
    };
    use serde_json::json;

    use crate::transfer::{BookDto, CreateBookDto};

    #[test]
    fn book_dto_json_shape() {
        let book = Book::new(
            Some(Author::new(AuthorName::new("Douglas Adams"))),
            Some(Cover::new(CoverTitle::new("Mostly Harmless"))),
            Pages::new(vec![
                Page::new(PageText::new("first")),
                Page::new(PageText::new("second")),
            ]),
        );
        let value = serde_json::to_value(BookDto::from(book)).unwrap();
        assert_eq!(
            value,
            json!({
                "author": { "name": "Douglas Adams" },
                "cover": { "title": "Mostly Harmless" },
                "pages": [{ "text": "first" }, { "text": "second" }]
            })
        );
    }

    #[test]
    fn unset_fields_serialize_as_null() {
        let value = serde_json::to_value(BookDto::from(Book::default())).unwrap();
        assert_eq!(
            value,
            json!({ "author": null, "cover": null, "pages": [] })
        );
    }

    #[test]
    fn create_book_dto_pages_default_to_empty() {
        let dto: CreateBookDto = serde_json::from_str(r#"{ "author": "Eoin Colfer" }"#).unwrap();
        assert_eq!(dto.author.as_deref(), Some("Eoin Colfer"));
        assert!(dto.cover.is_none());
        assert!(dto.pages.is_empty());
    }
}

use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;

// BookDto is the wire shape of a book for the Catalog service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
}

impl BookDto {
    pub fn new(id: &str, title: &str, author: &str) -> BookDto {
        BookDto {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

// NewBookDto is the create payload, the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBookDto {
    pub title: String,
    pub author: String,
}

impl NewBookDto {
    pub fn new(title: &str, author: &str) -> NewBookDto {
        NewBookDto {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub fn with_id(&self, id: &str) -> BookDto {
        BookDto::new(id, self.title.as_str(), self.author.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookIdDto {
    pub id: String,
}

impl Book for NewBookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
        }
    }
}

use crate::books::domain::Book;
use crate::books::dto::NewBookDto;
use crate::catalog::domain::service::{AUTHOR_REQUIRED, TITLE_REQUIRED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Title,
    Author,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: BookField,
    pub message: String,
}

impl FieldError {
    fn new(field: BookField, message: &str) -> Self {
        Self { field, message: message.to_string() }
    }
}

// BookForm holds the text the user is typing for a new or edited book
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_book<B: Book + ?Sized>(book: &B) -> Self {
        Self {
            title: book.title().to_string(),
            author: book.author().to_string(),
        }
    }

    pub fn reset(&mut self) {
        self.title.clear();
        self.author.clear();
    }

    // reports every missing field at once
    pub fn validate(&self) -> Result<NewBookDto, Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.title.is_empty() {
            errors.push(FieldError::new(BookField::Title, TITLE_REQUIRED));
        }
        if self.author.is_empty() {
            errors.push(FieldError::new(BookField::Author, AUTHOR_REQUIRED));
        }
        if errors.is_empty() {
            Ok(NewBookDto::new(self.title.as_str(), self.author.as_str()))
        } else {
            Err(errors)
        }
    }
}

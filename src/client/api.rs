use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::books::dto::{BookDto, NewBookDto};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    // the request never produced a usable response: network or decode failure
    Transport {
        message: String,
    },
    // the catalog answered with a non-success status
    Status {
        status: u16,
        message: String,
    },
}

impl ClientError {
    pub fn transport(message: &str) -> ClientError {
        ClientError::Transport { message: message.to_string() }
    }

    pub fn status(status: u16, message: &str) -> ClientError {
        ClientError::Status { status, message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        match self {
            ClientError::Transport { message } => message,
            ClientError::Status { message, .. } => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status: 404, .. })
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport { message } => {
                write!(f, "{}", message)
            }
            ClientError::Status { status, message } => {
                write!(f, "{} {}", status, message)
            }
        }
    }
}

impl std::error::Error for ClientError {}

pub type ClientResult<T> = Result<T, ClientError>;

// CatalogApi is what the book manager needs from the catalog, over the wire or in-process
#[async_trait]
pub trait CatalogApi: Sync + Send {
    async fn fetch_books(&self) -> ClientResult<Vec<BookDto>>;
    async fn add_book(&self, book: &NewBookDto) -> ClientResult<BookDto>;
    async fn update_book(&self, book: &BookDto) -> ClientResult<BookDto>;
    async fn delete_book(&self, id: &str) -> ClientResult<()>;
}

use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// the whole record is replaced, there are no partial updates
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct UpdateBookCommandRequest {
    pub book: BookDto,
}

impl UpdateBookCommandRequest {
    pub fn new(id: &str, title: &str, author: &str) -> Self {
        Self {
            book: BookDto::new(id, title, author),
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(&req.book)
            .await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::{BookDto, NewBookDto};
use crate::catalog::domain::CatalogService;
use crate::client::api::{CatalogApi, ClientError, ClientResult};
use crate::core::controller::status_of;
use crate::core::command::CommandError;
use crate::core::library::LibraryError;

// LocalCatalogApi drives a catalog service living in the same process
#[derive(Clone)]
pub struct LocalCatalogApi {
    catalog: Arc<dyn CatalogService>,
}

impl LocalCatalogApi {
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self { catalog }
    }
}

// mirrors the status codes the HTTP endpoint would return
impl From<LibraryError> for ClientError {
    fn from(err: LibraryError) -> Self {
        let err = CommandError::from(err);
        ClientError::status(status_of(&err).as_u16(), err.message())
    }
}

#[async_trait]
impl CatalogApi for LocalCatalogApi {
    async fn fetch_books(&self) -> ClientResult<Vec<BookDto>> {
        Ok(self.catalog.list_books().await?)
    }

    async fn add_book(&self, book: &NewBookDto) -> ClientResult<BookDto> {
        Ok(self.catalog.add_book(book.title.as_str(), book.author.as_str()).await?)
    }

    async fn update_book(&self, book: &BookDto) -> ClientResult<BookDto> {
        Ok(self.catalog.update_book(book).await?)
    }

    async fn delete_book(&self, id: &str) -> ClientResult<()> {
        Ok(self.catalog.remove_book(id).await?)
    }
}

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use crate::books::dto::{BookDto, BookIdDto, NewBookDto};
use crate::catalog::controller::BOOKS_PATH;
use crate::client::api::{CatalogApi, ClientError, ClientResult};
use crate::core::controller::ErrorResponse;

// HttpCatalogApi talks to a running catalog over its JSON endpoint
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    books_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            books_url: format!("{}{}", base_url.trim_end_matches('/'), BOOKS_PATH),
        }
    }

    pub fn books_url(&self) -> &str {
        self.books_url.as_str()
    }
}

// non-success responses carry {error} when the catalog produced them, anything
// else falls back to the per-operation message
async fn check(res: Response, fallback: &str) -> ClientResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let message = match res.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => fallback.to_string(),
    };
    debug!(status = status.as_u16(), message = %message, "catalog request rejected");
    Err(ClientError::status(status.as_u16(), message.as_str()))
}

async fn decode<T: DeserializeOwned>(res: Response) -> ClientResult<T> {
    res.json::<T>().await.map_err(ClientError::from)
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_books(&self) -> ClientResult<Vec<BookDto>> {
        let res = self.client.get(self.books_url.as_str()).send().await?;
        decode(check(res, "Failed to fetch books").await?).await
    }

    async fn add_book(&self, book: &NewBookDto) -> ClientResult<BookDto> {
        let res = self.client.post(self.books_url.as_str()).json(book).send().await?;
        decode(check(res, "Failed to add book").await?).await
    }

    async fn update_book(&self, book: &BookDto) -> ClientResult<BookDto> {
        let res = self.client.put(self.books_url.as_str()).json(book).send().await?;
        decode(check(res, "Failed to update book").await?).await
    }

    async fn delete_book(&self, id: &str) -> ClientResult<()> {
        let body = BookIdDto { id: id.to_string() };
        let res = self.client.delete(self.books_url.as_str()).json(&body).send().await?;
        check(res, "Failed to delete book").await.map(|_| ())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::transport(format!("{}", err).as_str())
    }
}

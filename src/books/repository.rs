pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // assigns a fresh id and appends the book in one step
    async fn add(&self, title: &str, author: &str) -> LibraryResult<BookEntity>;
}

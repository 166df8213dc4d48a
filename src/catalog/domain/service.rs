use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, NewBookDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const AUTHOR_REQUIRED: &str = "Author is required";

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
        }
    }
}

// rejects blank titles or authors before the store is touched
pub(crate) fn validate_book<B: Book + ?Sized>(book: &B) -> LibraryResult<()> {
    if book.title().trim().is_empty() {
        return Err(LibraryError::validation(TITLE_REQUIRED, Some("title".to_string())));
    }
    if book.author().trim().is_empty() {
        return Err(LibraryError::validation(AUTHOR_REQUIRED, Some("author".to_string())));
    }
    Ok(())
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, title: &str, author: &str) -> LibraryResult<BookDto> {
        validate_book(&NewBookDto::new(title, author)).map_err(|err| {
            warn!(branch = %self.branch_id, error = %err, "rejected new book");
            err
        })?;
        let book = self.book_repository.add(title, author).await?;
        info!(branch = %self.branch_id, book_id = %book.book_id, "added book");
        Ok(BookDto::from(&book))
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        validate_book(book).map_err(|err| {
            warn!(branch = %self.branch_id, book_id = %book.id, error = %err, "rejected book update");
            err
        })?;
        match self.book_repository.update(&BookEntity::from(book)).await {
            Ok(_) => {
                info!(branch = %self.branch_id, book_id = %book.id, "updated book");
                Ok(book.clone())
            }
            Err(err) => {
                warn!(branch = %self.branch_id, book_id = %book.id, error = %err, "failed to update book");
                Err(err)
            }
        }
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        match self.book_repository.delete(id).await {
            Ok(_) => {
                info!(branch = %self.branch_id, book_id = %id, "removed book");
                Ok(())
            }
            Err(err) => {
                warn!(branch = %self.branch_id, book_id = %id, error = %err, "failed to remove book");
                Err(err)
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::{Configuration, IdStrategy};
    use crate::core::library::LibraryError;

    async fn build_service(seed: bool, strategy: IdStrategy) -> Arc<dyn CatalogService> {
        let mut config = Configuration::new("test");
        config.seed_catalog = seed;
        config.id_strategy = strategy;
        factory::create_catalog_service(&config).await.expect("should build catalog service")
    }

    #[tokio::test]
    async fn test_should_list_idempotently() {
        let catalog_svc = build_service(true, IdStrategy::Sequence).await;
        let first = catalog_svc.list_books().await.expect("should list books");
        let second = catalog_svc.list_books().await.expect("should list books");
        assert_eq!(2, first.len());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = build_service(true, IdStrategy::Sequence).await;
        let before = catalog_svc.list_books().await.expect("should list books");

        let book = catalog_svc.add_book("A", "B").await.expect("should add book");
        assert!(!book.id.is_empty());
        assert!(before.iter().all(|b| b.id != book.id));

        let after = catalog_svc.list_books().await.expect("should list books");
        assert_eq!(before.len() + 1, after.len());
        let matching: Vec<&BookDto> = after.iter().filter(|b| b.title == "A" && b.author == "B").collect();
        assert_eq!(1, matching.len());
        assert_eq!(book.id, matching[0].id);
    }

    #[tokio::test]
    async fn test_should_reject_blank_fields() {
        let catalog_svc = build_service(false, IdStrategy::Sequence).await;
        let res = catalog_svc.add_book("", "B").await;
        assert!(matches!(res, Err(LibraryError::Validation { ref message, .. }) if message == "Title is required"));
        let res = catalog_svc.add_book("A", "   ").await;
        assert!(matches!(res, Err(LibraryError::Validation { ref message, .. }) if message == "Author is required"));
        assert!(catalog_svc.list_books().await.expect("should list books").is_empty());
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = build_service(false, IdStrategy::Uuid).await;

        let mut book = catalog_svc.add_book("test book", "someone").await.expect("should add book");
        book.title = "new title".to_string();
        let updated = catalog_svc.update_book(&book).await.expect("should update book");
        assert_eq!(book, updated);

        let loaded = catalog_svc.list_books().await.expect("should list books");
        assert_eq!(vec![book], loaded);
    }

    #[tokio::test]
    async fn test_should_not_update_unknown_book() {
        let catalog_svc = build_service(true, IdStrategy::Sequence).await;
        let before = catalog_svc.list_books().await.expect("should list books");

        let res = catalog_svc.update_book(&BookDto::new("42", "x", "y")).await;
        assert_eq!(Err(LibraryError::not_found("Book not found")), res);
        assert_eq!(before, catalog_svc.list_books().await.expect("should list books"));
    }

    #[tokio::test]
    async fn test_should_validate_update_before_lookup() {
        let catalog_svc = build_service(true, IdStrategy::Sequence).await;
        let res = catalog_svc.update_book(&BookDto::new("42", "", "y")).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = build_service(false, IdStrategy::Sequence).await;

        let keep = catalog_svc.add_book("keep", "me").await.expect("should add book");
        let gone = catalog_svc.add_book("drop", "me").await.expect("should add book");
        let _ = catalog_svc.remove_book(gone.id.as_str()).await.expect("should remove book");

        let loaded = catalog_svc.list_books().await.expect("should list books");
        assert_eq!(vec![keep], loaded);

        let res = catalog_svc.remove_book(gone.id.as_str()).await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_should_add_books_concurrently() {
        let catalog_svc = build_service(false, IdStrategy::Sequence).await;
        let mut handles = Vec::new();
        for i in 0..64 {
            let svc = catalog_svc.clone();
            handles.push(tokio::spawn(async move {
                svc.add_book(format!("title_{}", i).as_str(), "author").await
            }));
        }
        let mut ids = HashSet::new();
        for handle in handles {
            let book = handle.await.expect("should join").expect("should add book");
            ids.insert(book.id);
        }
        assert_eq!(64, ids.len());

        let listed: HashSet<String> = catalog_svc.list_books().await.expect("should list books")
            .into_iter().map(|b| b.id).collect();
        assert_eq!(ids, listed);
    }
}

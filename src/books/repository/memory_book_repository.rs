use std::sync::Mutex;

use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::IdStrategy;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::ids::IdGenerator;

pub const BOOK_NOT_FOUND: &str = "Book not found";

#[derive(Debug)]
struct Shelf {
    books: Vec<BookEntity>,
    ids: IdGenerator,
}

impl Shelf {
    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|b| b.book_id == id)
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if self.position(id.as_str()).is_none() {
                return id;
            }
        }
    }
}

// MemoryBookRepository keeps books in insertion order for the lifetime of the process.
// A single mutex covers the books and the id generator, and it is never held across
// an await point.
#[derive(Debug)]
pub struct MemoryBookRepository {
    shelf: Mutex<Shelf>,
}

impl MemoryBookRepository {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            shelf: Mutex::new(Shelf {
                books: Vec::new(),
                ids: IdGenerator::new(strategy),
            }),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut shelf = self.shelf.lock()?;
        if shelf.position(entity.book_id.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("book already exists for {}", entity.book_id).as_str()));
        }
        shelf.ids.observe(entity.book_id.as_str());
        shelf.books.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut shelf = self.shelf.lock()?;
        match shelf.position(entity.book_id.as_str()) {
            Some(ndx) => {
                shelf.books[ndx] = entity.clone();
                Ok(1)
            }
            None => Err(LibraryError::not_found(BOOK_NOT_FOUND)),
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let shelf = self.shelf.lock()?;
        shelf.position(id)
            .map(|ndx| shelf.books[ndx].clone())
            .ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut shelf = self.shelf.lock()?;
        match shelf.position(id) {
            Some(ndx) => {
                shelf.books.remove(ndx);
                Ok(1)
            }
            None => Err(LibraryError::not_found(BOOK_NOT_FOUND)),
        }
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        let shelf = self.shelf.lock()?;
        Ok(shelf.books.clone())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn add(&self, title: &str, author: &str) -> LibraryResult<BookEntity> {
        let mut shelf = self.shelf.lock()?;
        let book_id = shelf.fresh_id();
        let book = BookEntity::new(book_id.as_str(), title, author);
        shelf.books.push(book.clone());
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::domain::IdStrategy;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_create_get_books() {
        let books_repo = MemoryBookRepository::new(IdStrategy::Sequence);
        let book = BookEntity::new("1", "The Great Gatsby", "F. Scott Fitzgerald");
        let size = books_repo.create(&book).await.expect("should create book");
        assert_eq!(1, size);

        let loaded = books_repo.get("1").await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_books() {
        let books_repo = MemoryBookRepository::new(IdStrategy::Sequence);
        let book = BookEntity::new("1", "The Great Gatsby", "F. Scott Fitzgerald");
        let _ = books_repo.create(&book).await.expect("should create book");
        let res = books_repo.create(&book).await;
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        assert_eq!(1, books_repo.list().await.expect("should list").len());
    }

    #[tokio::test]
    async fn test_should_add_after_seeded_ids() {
        let books_repo = MemoryBookRepository::new(IdStrategy::Sequence);
        let _ = books_repo.create(&BookEntity::new("1", "a", "b")).await.expect("should create book");
        let _ = books_repo.create(&BookEntity::new("2", "c", "d")).await.expect("should create book");
        let added = books_repo.add("Dune", "Frank Herbert").await.expect("should add book");
        assert_eq!("3", added.book_id.as_str());
    }

    #[tokio::test]
    async fn test_should_not_reuse_deleted_ids() {
        let books_repo = MemoryBookRepository::new(IdStrategy::Sequence);
        let first = books_repo.add("a", "b").await.expect("should add book");
        let _ = books_repo.delete(first.book_id.as_str()).await.expect("should delete book");
        let second = books_repo.add("c", "d").await.expect("should add book");
        assert_ne!(first.book_id, second.book_id);
    }

    #[tokio::test]
    async fn test_should_skip_ids_taken_by_explicit_creates() {
        let books_repo = MemoryBookRepository::new(IdStrategy::Sequence);
        let first = books_repo.add("a", "b").await.expect("should add book");
        let _ = books_repo.create(&BookEntity::new("5", "c", "d")).await.expect("should create book");
        let next = books_repo.add("e", "f").await.expect("should add book");
        assert_eq!("1", first.book_id.as_str());
        assert_eq!("6", next.book_id.as_str());
    }

    #[tokio::test]
    async fn test_should_add_after_largest_numeric_id() {
        let books_repo = MemoryBookRepository::new(IdStrategy::Sequence);
        let _ = books_repo.create(&BookEntity::new("18446744073709551615", "a", "b")).await.expect("should create book");
        let first = books_repo.add("c", "d").await.expect("should add book");
        let second = books_repo.add("e", "f").await.expect("should add book");
        assert_eq!(36, first.book_id.len());
        assert_ne!(first.book_id, second.book_id);
        assert_eq!(3, books_repo.list().await.expect("should list").len());
    }

    #[tokio::test]
    async fn test_should_create_update_books() {
        let books_repo = MemoryBookRepository::new(IdStrategy::Uuid);
        let mut book = books_repo.add("test book", "someone").await.expect("should add book");

        book.title = "new title".to_string();
        let size = books_repo.update(&book).await.expect("should update book");
        assert_eq!(1, size);

        let loaded = books_repo.get(book.book_id.as_str()).await.expect("should return book");
        assert_eq!("new title", loaded.title.as_str());
    }

    #[tokio::test]
    async fn test_should_not_update_missing_books() {
        let books_repo = MemoryBookRepository::new(IdStrategy::Sequence);
        let _ = books_repo.add("test book", "someone").await.expect("should add book");
        let before = books_repo.list().await.expect("should list");

        let res = books_repo.update(&BookEntity::new("missing", "x", "y")).await;
        assert_eq!(Err(LibraryError::not_found("Book not found")), res);
        assert_eq!(before, books_repo.list().await.expect("should list"));
    }

    #[tokio::test]
    async fn test_should_create_delete_books() {
        let books_repo = MemoryBookRepository::new(IdStrategy::Sequence);
        let book = books_repo.add("test book", "someone").await.expect("should add book");

        let deleted = books_repo.delete(book.book_id.as_str()).await.expect("should delete book");
        assert_eq!(1, deleted);

        let loaded = books_repo.get(book.book_id.as_str()).await;
        assert!(loaded.is_err());
        let again = books_repo.delete(book.book_id.as_str()).await;
        assert!(matches!(again, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_list_in_insertion_order() {
        let books_repo = MemoryBookRepository::new(IdStrategy::Uuid);
        for i in 0..5 {
            let _ = books_repo.add(format!("title_{}", i).as_str(), "author").await.expect("should add book");
        }
        let titles: Vec<String> = books_repo.list().await.expect("should list")
            .into_iter().map(|b| b.title).collect();
        assert_eq!(vec!["title_0", "title_1", "title_2", "title_3", "title_4"], titles);
    }
}

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub fn seed_books() -> Vec<BookEntity> {
    vec![
        BookEntity::new("1", "The Great Gatsby", "F. Scott Fitzgerald"),
        BookEntity::new("2", "To Kill a Mockingbird", "Harper Lee"),
    ]
}

pub async fn create_book_repository(config: &Configuration) -> LibraryResult<Box<dyn BookRepository>> {
    let repo = MemoryBookRepository::new(config.id_strategy);
    if config.seed_catalog {
        for book in seed_books() {
            let _ = repo.create(&book).await?;
        }
    }
    Ok(Box::new(repo))
}

use std::cmp::Ordering;
use std::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the catalog in insertion order for the lifetime of
// the session.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(vec![]),
        }
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write()?;
        if books.iter().any(|b| b.book_id == entity.book_id) {
            return Err(LibraryError::duplicate_key(
                format!("book already exists for {}", entity.book_id).as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read()?;
        books.iter().find(|b| b.book_id == id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.books.write()?;
        let before = books.len();
        books.retain(|b| b.book_id != id);
        Ok(before - books.len())
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read()?.clone())
    }

    fn reorder(&self, compare: &dyn Fn(&BookEntity, &BookEntity) -> Ordering) -> LibraryResult<usize> {
        let mut books = self.books.write()?;
        // slice::sort_by is stable
        books.sort_by(|a, b| compare(a, b));
        Ok(books.len())
    }
}

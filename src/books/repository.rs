pub mod memory_book_repository;

use std::cmp::Ordering;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


pub trait BookRepository: Repository<BookEntity> {
    // snapshot of all books in collection order
    fn find_all(&self) -> LibraryResult<Vec<BookEntity>>;

    // stable reorder of the whole collection, returns the number of books reordered
    fn reorder(&self, compare: &dyn Fn(&BookEntity, &BookEntity) -> Ordering) -> LibraryResult<usize>;
}

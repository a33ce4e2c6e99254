pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, SortDirection};

pub trait CatalogService: Sync + Send {
    // validates and appends a new book, returns the stored record
    fn add_book(&self, title: &str, author: &str, category: &str) -> LibraryResult<BookDto>;
    // removing an unknown id is a no-op
    fn remove_book(&self, id: &str) -> LibraryResult<()>;
    // sorts by title in the current direction and flips it, returns the direction applied
    fn sort_books(&self) -> LibraryResult<SortDirection>;
    fn next_sort_direction(&self) -> LibraryResult<SortDirection>;
    fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    fn find_books(&self) -> LibraryResult<Vec<BookDto>>;
}

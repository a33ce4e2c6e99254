pub mod add_book_cmd;
pub mod project_catalog_cmd;
pub mod remove_book_cmd;
pub mod sort_books_cmd;

pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod utils;
pub mod view;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub image_url: String,
}

impl BookDto {
    pub fn new(title: &str, author: &str, category: &str, image_url: &str) -> BookDto {
        BookDto {
            book_id: Uuid::new_v4().to_string(),
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            category: category.trim().to_string(),
            image_url: image_url.to_string(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn image_url(&self) -> &str {
        self.image_url.as_str()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            category: other.category.to_string(),
            image_url: other.image_url.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            category: other.category.to_string(),
            image_url: other.image_url.to_string(),
        }
    }
}

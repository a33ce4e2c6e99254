use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::core::prompt::UserPrompt;
use crate::view::projector::confirm_message;

pub struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
    prompt: Arc<dyn UserPrompt>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>, prompt: Arc<dyn UserPrompt>) -> Self {
        Self {
            catalog_service,
            prompt,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub removed: bool,
}

impl RemoveBookCommandResponse {
    pub fn new(removed: bool) -> Self {
        Self {
            removed,
        }
    }
}

impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let book = match self.catalog_service.find_book_by_id(req.book_id.as_str()) {
            Ok(book) => book,
            // stale card, the book is already gone
            Err(LibraryError::NotFound { .. }) => return Ok(RemoveBookCommandResponse::new(false)),
            Err(err) => return Err(CommandError::from(err)),
        };
        if !self.prompt.confirm(confirm_message(book.title.as_str()).as_str()) {
            return Ok(RemoveBookCommandResponse::new(false));
        }
        self.catalog_service.remove_book(req.book_id.as_str())
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new(true))
    }
}

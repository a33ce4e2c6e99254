use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::core::prompt::UserPrompt;

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
    prompt: Arc<dyn UserPrompt>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>, prompt: Arc<dyn UserPrompt>) -> Self {
        Self {
            catalog_service,
            prompt,
        }
    }
}

// AddBookCommandRequest carries the raw form fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddBookCommandRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, category: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    // None when the submission was rejected
    pub book: Option<BookDto>,
    // field values to show in the form after this submission
    pub form: AddBookCommandRequest,
}

impl AddBookCommandResponse {
    pub fn added(book: BookDto) -> Self {
        Self {
            book: Some(book),
            form: AddBookCommandRequest::default(),
        }
    }

    pub fn rejected(form: AddBookCommandRequest) -> Self {
        Self {
            book: None,
            form,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        match self.catalog_service.add_book(req.title.as_str(), req.author.as_str(), req.category.as_str()) {
            Ok(book) => Ok(AddBookCommandResponse::added(book)),
            Err(LibraryError::Validation { message, .. }) => {
                self.prompt.notify(message.as_str());
                Ok(AddBookCommandResponse::rejected(req))
            }
            Err(err) => Err(CommandError::from(err)),
        }
    }
}

use std::sync::Arc;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tracing::info;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::project_catalog_cmd::{ProjectCatalogCommand, ProjectCatalogCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::sort_books_cmd::{SortBooksCommand, SortBooksCommandRequest};
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, ServerError};
use crate::core::library::LibraryError;
use crate::core::prompt::AnsweredPrompt;
use crate::view::projector::{CategoryFilter, confirm_message};
use crate::view::render::{Page, render_confirmation, render_page};

#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub filter: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddBookForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub filter: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoveBookForm {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub filter: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/books", post(add_book))
        .route("/books/:id/delete", get(confirm_remove_book).post(remove_book))
        .route("/sort", post(sort_books))
        .with_state(state)
}

fn parse_filter(state: &AppState, value: &str) -> CategoryFilter {
    CategoryFilter::parse(value, state.config.all_label.as_str())
}

// Re-projects the whole catalog; every interaction ends here.
fn render(state: &AppState, filter: CategoryFilter, form: &AddBookCommandRequest,
          notices: &[String]) -> Result<Html<String>, ServerError> {
    let res = ProjectCatalogCommand::new(state.catalog_service.clone())
        .execute(ProjectCatalogCommandRequest::new(filter))?;
    Ok(Html(render_page(&Page {
        config: &state.config,
        projection: &res.projection,
        next_sort_direction: res.next_sort_direction,
        form,
        notices,
    })))
}

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>) -> Result<Html<String>, ServerError> {
    let filter = parse_filter(&state, params.filter.as_str());
    render(&state, filter, &AddBookCommandRequest::default(), &[])
}

pub async fn add_book(
    State(state): State<AppState>,
    Form(form): Form<AddBookForm>) -> Result<Html<String>, ServerError> {
    let filter = parse_filter(&state, form.filter.as_str());
    let prompt = Arc::new(AnsweredPrompt::default());
    let req = AddBookCommandRequest::new(form.title.as_str(), form.author.as_str(), form.category.as_str());
    let res = AddBookCommand::new(state.catalog_service.clone(), prompt.clone()).execute(req)?;
    if let Some(book) = &res.book {
        info!(book_id = book.book_id.as_str(), "book added");
    }
    render(&state, filter, &res.form, &prompt.notices())
}

pub async fn confirm_remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Query(params): Query<FilterParams>) -> Result<Html<String>, ServerError> {
    let filter = parse_filter(&state, params.filter.as_str());
    match state.catalog_service.find_book_by_id(book_id.as_str()) {
        Ok(book) => Ok(Html(render_confirmation(
            book.book_id.as_str(), confirm_message(book.title.as_str()).as_str(), &filter))),
        Err(LibraryError::NotFound { .. }) => render(&state, filter, &AddBookCommandRequest::default(), &[]),
        Err(err) => Err(ServerError::from(CommandError::from(err))),
    }
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Form(form): Form<RemoveBookForm>) -> Result<Html<String>, ServerError> {
    let filter = parse_filter(&state, form.filter.as_str());
    let prompt = Arc::new(AnsweredPrompt::new(form.answer == "yes"));
    let res = RemoveBookCommand::new(state.catalog_service.clone(), prompt)
        .execute(RemoveBookCommandRequest::new(book_id.as_str()))?;
    if res.removed {
        info!(book_id = book_id.as_str(), "book removed");
    }
    render(&state, filter, &AddBookCommandRequest::default(), &[])
}

pub async fn sort_books(
    State(state): State<AppState>,
    Form(params): Form<FilterParams>) -> Result<Html<String>, ServerError> {
    let filter = parse_filter(&state, params.filter.as_str());
    let res = SortBooksCommand::new(state.catalog_service.clone()).execute(SortBooksCommandRequest::default())?;
    info!(direction = %res.applied, "books sorted");
    render(&state, filter, &AddBookCommandRequest::default(), &[])
}

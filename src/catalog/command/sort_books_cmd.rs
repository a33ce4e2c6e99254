use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::SortDirection;

pub struct SortBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SortBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SortBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct SortBooksCommandResponse {
    pub applied: SortDirection,
}

impl Command<SortBooksCommandRequest, SortBooksCommandResponse> for SortBooksCommand {
    fn execute(&self, _req: SortBooksCommandRequest) -> Result<SortBooksCommandResponse, CommandError> {
        self.catalog_service.sort_books()
            .map_err(CommandError::from).map(|applied| SortBooksCommandResponse { applied })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::sort_books_cmd::{SortBooksCommand, SortBooksCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::SortDirection;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_run_sort_books() {
        let svc: Arc<dyn CatalogService> = Arc::from(
            factory::create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Memory));
        svc.add_book("Dune", "Frank Herbert", "Fiction").expect("should add book");
        svc.add_book("1984", "George Orwell", "Fiction").expect("should add book");
        let cmd = SortBooksCommand::new(svc.clone());

        let res = cmd.execute(SortBooksCommandRequest::default()).expect("should sort books");
        assert_eq!(SortDirection::Ascending, res.applied);
        let res = cmd.execute(SortBooksCommandRequest::default()).expect("should sort books");
        assert_eq!(SortDirection::Descending, res.applied);
        let titles: Vec<String> = svc.find_books().expect("should return books").into_iter().map(|b| b.title).collect();
        assert_eq!(vec!["Dune", "1984"], titles);
    }
}

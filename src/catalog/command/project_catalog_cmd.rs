use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::SortDirection;
use crate::view::projector::{CategoryFilter, Projection, project};

pub struct ProjectCatalogCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ProjectCatalogCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectCatalogCommandRequest {
    pub filter: CategoryFilter,
}

impl ProjectCatalogCommandRequest {
    pub fn new(filter: CategoryFilter) -> Self {
        Self {
            filter,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectCatalogCommandResponse {
    pub projection: Projection,
    pub next_sort_direction: SortDirection,
}

impl Command<ProjectCatalogCommandRequest, ProjectCatalogCommandResponse> for ProjectCatalogCommand {
    fn execute(&self, req: ProjectCatalogCommandRequest) -> Result<ProjectCatalogCommandResponse, CommandError> {
        let books = self.catalog_service.find_books()?;
        let next_sort_direction = self.catalog_service.next_sort_direction()?;
        Ok(ProjectCatalogCommandResponse {
            projection: project(&books, &req.filter),
            next_sort_direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::project_catalog_cmd::{ProjectCatalogCommand, ProjectCatalogCommandRequest};
    use crate::catalog::command::sort_books_cmd::{SortBooksCommand, SortBooksCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::SortDirection;
    use crate::gateway::GatewayPublisherVia;
    use crate::view::projector::CategoryFilter;

    fn build_service() -> Arc<dyn CatalogService> {
        Arc::from(factory::create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Memory))
    }

    fn fiction() -> ProjectCatalogCommandRequest {
        ProjectCatalogCommandRequest::new(CategoryFilter::Category("Fiction".to_string()))
    }

    #[tokio::test]
    async fn test_should_project_after_sort() {
        let svc = build_service();
        svc.add_book("Dune", "Frank Herbert", "Fiction").expect("should add book");
        svc.add_book("1984", "George Orwell", "Fiction").expect("should add book");
        let cmd = ProjectCatalogCommand::new(svc.clone());

        let res = cmd.execute(fiction()).expect("should project");
        assert_eq!(vec!["Dune", "1984"], res.projection.titles());
        assert_eq!(SortDirection::Ascending, res.next_sort_direction);

        SortBooksCommand::new(svc.clone()).execute(SortBooksCommandRequest::default()).expect("should sort");
        let res = cmd.execute(fiction()).expect("should project");
        assert_eq!(vec!["1984", "Dune"], res.projection.titles());
        assert_eq!(SortDirection::Descending, res.next_sort_direction);
    }

    #[tokio::test]
    async fn test_should_drop_deleted_books_from_projection() {
        let svc = build_service();
        svc.add_book("Dune", "Frank Herbert", "Fiction").expect("should add book");
        let second = svc.add_book("SPQR", "Mary Beard", "History").expect("should add book");
        svc.add_book("1984", "George Orwell", "Fiction").expect("should add book");
        svc.remove_book(second.book_id.as_str()).expect("should remove book");
        let cmd = ProjectCatalogCommand::new(svc.clone());

        let res = cmd.execute(ProjectCatalogCommandRequest::default()).expect("should project");
        assert_eq!(vec!["Dune", "1984"], res.projection.titles());
        let res = cmd.execute(ProjectCatalogCommandRequest::new(
            CategoryFilter::Category("History".to_string()))).expect("should project");
        assert!(res.projection.empty);
    }
}

use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, SortDirection};
use crate::gateway::events::EventPublisher;
use crate::utils::text::{base_collator, is_blank};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill all fields";

pub struct CatalogServiceImpl {
    placeholder_image: String,
    next_direction: Mutex<SortDirection>,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            placeholder_image: config.placeholder_image.to_string(),
            next_direction: Mutex::new(SortDirection::Ascending),
            book_repository,
            events_publisher,
        }
    }

    // The catalog has already changed when this runs, so a failed publish is logged, not returned.
    fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let published = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = published {
            warn!(error = %err, "failed to publish catalog event");
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&self, title: &str, author: &str, category: &str) -> LibraryResult<BookDto> {
        if is_blank(title) || is_blank(author) || is_blank(category) {
            return Err(LibraryError::validation(MISSING_FIELDS_MESSAGE, Some("400".to_string())));
        }
        let book = BookDto::new(title, author, category, self.placeholder_image.as_str());
        self.book_repository.create(&BookEntity::from(&book))?;
        self.publish(DomainEvent::added(
            "books", "books", book.book_id.as_str(), &HashMap::new(), &book));
        Ok(book)
    }

    fn remove_book(&self, id: &str) -> LibraryResult<()> {
        let removed = self.book_repository.delete(id)?;
        if removed == 0 {
            debug!(book_id = id, "book already removed");
            return Ok(());
        }
        let data = id.to_string();
        self.publish(DomainEvent::deleted("books", "books", id, &HashMap::new(), &data));
        Ok(())
    }

    fn sort_books(&self) -> LibraryResult<SortDirection> {
        let collator = base_collator()?;
        // held across the reorder so concurrent sorts apply in turn
        let mut next_direction = self.next_direction.lock()?;
        let direction = *next_direction;
        self.book_repository.reorder(&|a: &BookEntity, b: &BookEntity| match direction {
            SortDirection::Ascending => collator.compare(a.title.as_str(), b.title.as_str()),
            SortDirection::Descending => collator.compare(b.title.as_str(), a.title.as_str()),
        })?;
        *next_direction = direction.toggle();
        drop(next_direction);

        let order: Vec<String> = self.book_repository.find_all()?.into_iter().map(|b| b.book_id).collect();
        self.publish(DomainEvent::reordered(
            "books", "books", direction.to_string().as_str(),
            &HashMap::from([("direction".to_string(), direction.to_string())]), &order));
        Ok(direction)
    }

    fn next_sort_direction(&self) -> LibraryResult<SortDirection> {
        Ok(*self.next_direction.lock()?)
    }

    fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).map(|b| BookDto::from(&b))
    }

    fn find_books(&self) -> LibraryResult<Vec<BookDto>> {
        Ok(self.book_repository.find_all()?.iter().map(BookDto::from).collect())
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use crate::books::factory::create_book_repository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::domain::{Configuration, PLACEHOLDER_IMAGE};
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::core::library::{LibraryError, SortDirection};
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    struct FailingPublisher {}

    impl EventPublisher for FailingPublisher {
        fn publish(&self, _event: &DomainEvent) -> Result<(), LibraryError> {
            Err(LibraryError::runtime("publisher unavailable", None))
        }
    }

    fn build_service() -> (CatalogServiceImpl, MemoryPublisher) {
        let publisher = MemoryPublisher::new();
        let svc = CatalogServiceImpl::new(&Configuration::new("test"), create_book_repository(),
                                          Box::new(publisher.clone()));
        (svc, publisher)
    }

    fn titles(catalog_svc: &dyn CatalogService) -> Vec<String> {
        catalog_svc.find_books().expect("should return books").into_iter().map(|b| b.title).collect()
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let (catalog_svc, publisher) = build_service();

        let book = catalog_svc.add_book("  Dune ", "Frank Herbert ", "Fiction").expect("should add book");
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Frank Herbert", book.author.as_str());
        assert_eq!(PLACEHOLDER_IMAGE, book.image_url.as_str());

        let loaded = catalog_svc.find_book_by_id(book.book_id.as_str()).expect("should return book");
        assert_eq!(book, loaded);
        let events = publisher.events().expect("should return events");
        assert_eq!(1, events.len());
        assert_eq!(DomainEventType::Added, events[0].kind);
    }

    #[tokio::test]
    async fn test_should_append_books_with_unique_ids() {
        let (catalog_svc, _) = build_service();
        let mut ids = HashSet::new();
        for i in 0..20 {
            let book = catalog_svc.add_book(format!("title_{}", i).as_str(), "author", "History")
                .expect("should add book");
            assert!(ids.insert(book.book_id));
            assert_eq!(i + 1, catalog_svc.find_books().expect("should return books").len());
        }
        assert_eq!("title_0", titles(&catalog_svc)[0].as_str());
        assert_eq!("title_19", titles(&catalog_svc)[19].as_str());
    }

    #[tokio::test]
    async fn test_should_reject_blank_fields() {
        let (catalog_svc, publisher) = build_service();
        catalog_svc.add_book("Dune", "Frank Herbert", "Fiction").expect("should add book");

        for (title, author, category) in [("", "a", "Fiction"), ("  ", "a", "Fiction"),
            ("t", "", "Fiction"), ("t", "\t", "Fiction"), ("t", "a", "")] {
            let res = catalog_svc.add_book(title, author, category);
            assert!(matches!(res, Err(LibraryError::Validation { .. })));
        }
        assert_eq!(1, catalog_svc.find_books().expect("should return books").len());
        assert_eq!(1, publisher.events().expect("should return events").len());
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let (catalog_svc, publisher) = build_service();

        let book = catalog_svc.add_book("Dune", "Frank Herbert", "Fiction").expect("should add book");
        let other = catalog_svc.add_book("Emma", "Jane Austen", "Fiction").expect("should add book");
        catalog_svc.remove_book(book.book_id.as_str()).expect("should remove book");

        let loaded = catalog_svc.find_book_by_id(book.book_id.as_str());
        assert!(matches!(loaded, Err(LibraryError::NotFound { .. })));
        let remaining = catalog_svc.find_books().expect("should return books");
        assert_eq!(vec![other], remaining);
        assert_eq!(DomainEventType::Deleted, publisher.events().expect("should return events")[2].kind);
    }

    #[tokio::test]
    async fn test_should_tolerate_removing_missing_book() {
        let (catalog_svc, publisher) = build_service();
        catalog_svc.add_book("Dune", "Frank Herbert", "Fiction").expect("should add book");

        catalog_svc.remove_book("missing").expect("should ignore missing book");
        assert_eq!(1, catalog_svc.find_books().expect("should return books").len());
        assert_eq!(1, publisher.events().expect("should return events").len());
    }

    #[tokio::test]
    async fn test_should_alternate_sort_direction() {
        let (catalog_svc, _) = build_service();
        for title in ["Emma", "dune", "Beloved", "1984"] {
            catalog_svc.add_book(title, "author", "Fiction").expect("should add book");
        }
        assert_eq!(SortDirection::Ascending, catalog_svc.next_sort_direction().expect("should return direction"));

        assert_eq!(SortDirection::Ascending, catalog_svc.sort_books().expect("should sort"));
        assert_eq!(vec!["1984", "Beloved", "dune", "Emma"], titles(&catalog_svc));

        assert_eq!(SortDirection::Descending, catalog_svc.sort_books().expect("should sort"));
        assert_eq!(vec!["Emma", "dune", "Beloved", "1984"], titles(&catalog_svc));

        assert_eq!(SortDirection::Ascending, catalog_svc.sort_books().expect("should sort"));
        assert_eq!(vec!["1984", "Beloved", "dune", "Emma"], titles(&catalog_svc));
    }

    #[tokio::test]
    async fn test_should_toggle_sort_for_trivial_catalogs() {
        let (catalog_svc, publisher) = build_service();
        assert_eq!(SortDirection::Ascending, catalog_svc.sort_books().expect("should sort"));
        assert_eq!(SortDirection::Descending, catalog_svc.next_sort_direction().expect("should return direction"));

        catalog_svc.add_book("Dune", "Frank Herbert", "Fiction").expect("should add book");
        assert_eq!(SortDirection::Descending, catalog_svc.sort_books().expect("should sort"));
        assert_eq!(SortDirection::Ascending, catalog_svc.next_sort_direction().expect("should return direction"));
        assert_eq!(vec!["Dune"], titles(&catalog_svc));

        let kinds: Vec<DomainEventType> = publisher.events().expect("should return events")
            .into_iter().map(|e| e.kind).collect();
        assert_eq!(vec![DomainEventType::Reordered, DomainEventType::Added, DomainEventType::Reordered], kinds);
    }

    #[tokio::test]
    async fn test_should_sort_case_insensitive_and_stable() {
        let (catalog_svc, _) = build_service();
        let first = catalog_svc.add_book("apple", "first", "Fiction").expect("should add book");
        catalog_svc.add_book("Banana", "author", "Fiction").expect("should add book");
        let second = catalog_svc.add_book("Apple", "second", "Fiction").expect("should add book");
        let third = catalog_svc.add_book("Äpple", "third", "Fiction").expect("should add book");

        for direction in [SortDirection::Ascending, SortDirection::Descending, SortDirection::Ascending] {
            assert_eq!(direction, catalog_svc.sort_books().expect("should sort"));
            let ids: Vec<String> = catalog_svc.find_books().expect("should return books")
                .into_iter().filter(|b| b.title != "Banana").map(|b| b.book_id).collect();
            assert_eq!(vec![first.book_id.clone(), second.book_id.clone(), third.book_id.clone()], ids);
        }
    }

    #[tokio::test]
    async fn test_should_sort_by_alphabet_not_code_point() {
        for (first, second) in [("Łódź", "Zebra"), ("Ørsted", "Zebra"), ("Straße", "Stt"), ("Œuvre", "Zoo")] {
            let (catalog_svc, _) = build_service();
            catalog_svc.add_book(second, "author", "Fiction").expect("should add book");
            catalog_svc.add_book(first, "author", "Fiction").expect("should add book");
            assert_eq!(SortDirection::Ascending, catalog_svc.sort_books().expect("should sort"));
            assert_eq!(vec![first, second], titles(&catalog_svc));
        }
    }

    #[tokio::test]
    async fn test_should_keep_changes_when_publish_fails() {
        let catalog_svc = CatalogServiceImpl::new(&Configuration::new("test"), create_book_repository(),
                                                  Box::new(FailingPublisher {}));
        let book = catalog_svc.add_book("Dune", "Frank Herbert", "Fiction").expect("should add book");
        catalog_svc.add_book("1984", "George Orwell", "Fiction").expect("should add book");
        assert_eq!(SortDirection::Ascending, catalog_svc.sort_books().expect("should sort"));
        assert_eq!(vec!["1984", "Dune"], titles(&catalog_svc));
        catalog_svc.remove_book(book.book_id.as_str()).expect("should remove book");
        assert_eq!(vec!["1984"], titles(&catalog_svc));
    }
}

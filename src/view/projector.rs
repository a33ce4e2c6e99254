use serde::{Deserialize, Serialize};
use crate::books::domain::Book;

// CategoryFilter is the filter selection owned by the page; it never touches the catalog.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    // An empty selection or the "All" label both mean no filter.
    pub fn parse(value: &str, all_label: &str) -> CategoryFilter {
        let value = value.trim();
        if value.is_empty() || value == all_label {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn accepts(&self, book: &dyn Book) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => book.category() == category.as_str(),
        }
    }

    // The form value that selects this filter, "" for All.
    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => "",
            CategoryFilter::Category(category) => category.as_str(),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct DeleteAffordance {
    pub book_id: String,
    pub confirm_message: String,
}

impl DeleteAffordance {
    pub fn new(book_id: &str, title: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            confirm_message: confirm_message(title),
        }
    }
}

pub fn confirm_message(title: &str) -> String {
    format!("Delete \"{}\"?", title)
}

// CardView is the display-ready form of one book.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct CardView {
    pub title: String,
    pub author_label: String,
    pub category_label: String,
    pub image_url: String,
    pub image_alt: String,
    pub delete: DeleteAffordance,
}

impl CardView {
    pub fn from_book(book: &dyn Book) -> Self {
        Self {
            title: book.title().to_string(),
            author_label: format!("Author: {}", book.author()),
            category_label: format!("Category: {}", book.category()),
            image_url: book.image_url().to_string(),
            image_alt: book.title().to_string(),
            delete: DeleteAffordance::new(book.id().as_str(), book.title()),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Projection {
    pub filter: CategoryFilter,
    pub cards: Vec<CardView>,
    // true iff no card is visible, the page shows its placeholder message
    pub empty: bool,
}

#[cfg(test)]
impl Projection {
    pub fn titles(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.title.as_str()).collect()
    }
}

/// Projects a catalog snapshot onto the cards visible under `filter`, keeping
/// catalog order.
pub fn project<B: Book>(records: &[B], filter: &CategoryFilter) -> Projection {
    let cards: Vec<CardView> = records.iter()
        .filter(|b| filter.accepts(*b))
        .map(|b| CardView::from_book(b))
        .collect();
    Projection {
        filter: filter.clone(),
        empty: cards.is_empty(),
        cards,
    }
}

use std::fmt::Write;
use crate::catalog::command::add_book_cmd::AddBookCommandRequest;
use crate::core::domain::Configuration;
use crate::core::library::SortDirection;
use crate::utils::html::{encode_query, escape};
use crate::view::projector::{CardView, CategoryFilter, Projection};

pub const EMPTY_MESSAGE: &str = "No books to display.";

// Page bundles everything a render needs; it is rebuilt from scratch after every interaction.
pub struct Page<'a> {
    pub config: &'a Configuration,
    pub projection: &'a Projection,
    pub next_sort_direction: SortDirection,
    pub form: &'a AddBookCommandRequest,
    pub notices: &'a [String],
}

// The sort button names the order the next click applies.
pub fn sort_label(next: SortDirection) -> &'static str {
    match next {
        SortDirection::Ascending => "Sort by Title A → Z",
        SortDirection::Descending => "Sort by Title Z → A",
    }
}

fn head(out: &mut String, title: &str) {
    let _ = writeln!(out, "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
        <title>{}</title>\n</head>\n<body>",
                   escape(title));
}

fn hidden_filter(out: &mut String, filter: &CategoryFilter) {
    let _ = write!(out, "<input type=\"hidden\" name=\"filter\" value=\"{}\">", escape(filter.value()));
}

fn option(out: &mut String, value: &str, label: &str, selected: bool) {
    let _ = write!(out, "<option value=\"{}\"{}>{}</option>",
                   escape(value), if selected { " selected" } else { "" }, escape(label));
}

fn render_notices(out: &mut String, notices: &[String]) {
    for notice in notices {
        let _ = writeln!(out, "<div class=\"notice\" role=\"alert\">{}</div>", escape(notice));
    }
}

fn render_form(out: &mut String, config: &Configuration, form: &AddBookCommandRequest, filter: &CategoryFilter) {
    out.push_str("<form id=\"add-book-form\" method=\"post\" action=\"/books\">\n");
    let _ = writeln!(out, "<input id=\"title\" name=\"title\" placeholder=\"Title\" value=\"{}\">",
                   escape(form.title.as_str()));
    let _ = writeln!(out, "<input id=\"author\" name=\"author\" placeholder=\"Author\" value=\"{}\">",
                   escape(form.author.as_str()));
    out.push_str("<select id=\"category\" name=\"category\">");
    option(out, "", "Select category", form.category.is_empty());
    for category in &config.categories {
        option(out, category, category, form.category == *category);
    }
    out.push_str("</select>\n");
    hidden_filter(out, filter);
    out.push_str("<button type=\"submit\">Add Book</button>\n");
    // GET back to an empty form; a reset would restore the echoed values
    let _ = writeln!(out, "<a id=\"clear-form\" href=\"/?filter={}\">Clear</a>\n</form>",
                     encode_query(filter.value()));
}

fn render_controls(out: &mut String, config: &Configuration, filter: &CategoryFilter, next: SortDirection) {
    out.push_str("<form id=\"filter-form\" method=\"get\" action=\"/\">\n<select id=\"filter-select\" name=\"filter\">");
    option(out, config.all_label.as_str(), config.all_label.as_str(), *filter == CategoryFilter::All);
    for category in &config.categories {
        option(out, category, category, filter.value() == category.as_str());
    }
    out.push_str("</select>\n<button type=\"submit\">Filter</button>\n</form>\n");
    out.push_str("<form method=\"post\" action=\"/sort\">");
    hidden_filter(out, filter);
    let _ = writeln!(out, "<button id=\"sort-btn\" type=\"submit\">{}</button></form>", sort_label(next));
}

fn render_card(out: &mut String, card: &CardView, filter: &CategoryFilter) {
    out.push_str("<div class=\"book-card card\">\n");
    let _ = writeln!(out, "<img src=\"{}\" alt=\"{}\">", escape(card.image_url.as_str()), escape(card.image_alt.as_str()));
    out.push_str("<div class=\"card-body\">\n");
    let _ = writeln!(out, "<div class=\"card-title\">{}</div>", escape(card.title.as_str()));
    let _ = writeln!(out, "<div class=\"card-meta\">{}</div>", escape(card.author_label.as_str()));
    let _ = writeln!(out, "<div class=\"card-meta\">{}</div>", escape(card.category_label.as_str()));
    out.push_str("<div class=\"card-bottom\">");
    let _ = write!(out, "<form method=\"get\" action=\"/books/{}/delete\">",
                   encode_query(card.delete.book_id.as_str()));
    hidden_filter(out, filter);
    out.push_str("<button class=\"delete-btn\" type=\"submit\">Delete</button></form>");
    out.push_str("</div>\n</div>\n</div>\n");
}

pub fn render_page(page: &Page) -> String {
    let mut out = String::new();
    let filter = &page.projection.filter;
    head(&mut out, "Book Manager");
    render_notices(&mut out, page.notices);
    render_form(&mut out, page.config, page.form, filter);
    render_controls(&mut out, page.config, filter, page.next_sort_direction);

    out.push_str("<div id=\"books-grid\">\n");
    for card in &page.projection.cards {
        render_card(&mut out, card, filter);
    }
    out.push_str("</div>\n");
    if page.projection.empty {
        let _ = writeln!(out, "<p id=\"empty-msg\">{}</p>", EMPTY_MESSAGE);
    }
    out.push_str("</body>\n</html>\n");
    out
}

// Renders the yes/no prompt guarding a delete.
pub fn render_confirmation(book_id: &str, message: &str, filter: &CategoryFilter) -> String {
    let mut out = String::new();
    head(&mut out, "Confirm");
    let _ = writeln!(out, "<p class=\"confirm\">{}</p>", escape(message));
    for (answer, label) in [("yes", "OK"), ("no", "Cancel")] {
        let _ = write!(out, "<form method=\"post\" action=\"/books/{}/delete\">", encode_query(book_id));
        hidden_filter(&mut out, filter);
        let _ = writeln!(out, "<input type=\"hidden\" name=\"answer\" value=\"{}\"><button type=\"submit\">{}</button></form>",
                       answer, label);
    }
    out.push_str("</body>\n</html>\n");
    out
}

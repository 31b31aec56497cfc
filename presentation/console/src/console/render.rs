use std::fmt::Write;

use business::domain::product::events::ListEvent;
use business::domain::product::list_state::{ListSnapshot, LoadStatus};
use business::domain::product::model::Product;
use business::domain::product::page::visible_page_window;

/// Text to print for a list event, if any.
pub fn render_event(event: &ListEvent) -> Option<String> {
    match event {
        ListEvent::PageRequested { page } => Some(format!("Loading page {}...", page)),
        ListEvent::PageLoaded(snapshot) => Some(render_snapshot(snapshot)),
        ListEvent::PageLoadFailed { page, error } => {
            Some(format!("Could not load page {}: {}", page, error))
        }
        ListEvent::MutatingChanged(true) => Some("Saving...".to_string()),
        ListEvent::MutatingChanged(false) => None,
    }
}

pub fn render_snapshot(snapshot: &ListSnapshot) -> String {
    let mut out = String::new();

    if let LoadStatus::Failed(error) = &snapshot.status {
        let _ = writeln!(out, "! Last load failed ({}), showing previous data", error);
    }

    if snapshot.items.is_empty() {
        out.push_str("No products.\n");
    } else {
        out.push_str(&render_table(&snapshot.items));
    }

    let _ = writeln!(
        out,
        "Page {} of {} | {} products",
        snapshot.current_page, snapshot.total_pages, snapshot.total_items
    );
    out.push_str(&render_window(snapshot.current_page, snapshot.total_pages));
    out
}

fn render_table(items: &[Product]) -> String {
    let name_width = items
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6}  {:<name_width$}  {:>10}  {:>6}  {}",
        "ID", "Name", "Price", "Stock", "Active"
    );
    for product in items {
        let _ = writeln!(
            out,
            "{:>6}  {:<name_width$}  {:>10.2}  {:>6}  {}",
            product.id.value(),
            product.name,
            product.price,
            product.stock,
            if product.is_active { "yes" } else { "no" }
        );
    }
    out
}

/// Page window line with the current page in brackets.
pub fn render_window(current_page: u32, total_pages: u32) -> String {
    let window = visible_page_window(current_page, total_pages);
    if window.is_empty() {
        return String::new();
    }

    let pages: Vec<String> = window
        .iter()
        .map(|&page| {
            if page == current_page {
                format!("[{}]", page)
            } else {
                page.to_string()
            }
        })
        .collect();

    let mut line = String::new();
    if window.first().is_some_and(|&first| first > 1) {
        line.push_str("... ");
    }
    line.push_str(&pages.join(" "));
    if window.last().is_some_and(|&last| last < total_pages) {
        line.push_str(" ...");
    }
    line.push('\n');
    line
}

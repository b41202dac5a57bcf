use colored::Colorize;

use crate::pagination::PageEntry;

/// Render a pagination bar, e.g. `1 … 8 9 10 11 12 … 20`.
///
/// The current page is emphasized; an empty plan renders an empty string
/// (no control is shown for a single page of results).
pub fn pagination_bar(plan: &[PageEntry]) -> String {
    let cells: Vec<String> = plan.iter().map(render_entry).collect();
    cells.join(" ")
}

fn render_entry(entry: &PageEntry) -> String {
    match entry {
        PageEntry::Link(link) if link.is_current => {
            link.page.to_string().bold().underline().to_string()
        }
        PageEntry::Link(link) => link.page.to_string(),
        PageEntry::Ellipsis => "…".dimmed().to_string(),
    }
}

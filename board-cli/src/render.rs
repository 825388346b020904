use std::fmt::Write;

use board_core::{ListingView, PAGE_SIZE_OPTIONS};

/// Text rendering of the current page: header, cards, pagination line.
pub fn render_page(view: &mut ListingView) -> String {
    let pagination = view.pagination();
    let query = view.search().query.clone();
    let total = view.filtered_len();
    let pages = view.page_count();
    let window = view.page_window();

    let mut out = String::new();
    let _ = write!(
        out,
        "Posts (page {} of {}, {} matching",
        pagination.page(),
        pages.max(1),
        total
    );
    if query.is_empty() {
        out.push_str(")\n");
    } else {
        let _ = writeln!(out, " \"{query}\")");
    }

    let visible = view.visible();
    if visible.is_empty() {
        out.push_str("\n  (nothing on this page)\n");
    }
    for post in visible {
        let _ = write!(out, "\n{post}\n");
    }

    out.push('\n');
    out.push_str(&render_window(&window, pagination.page()));
    let _ = writeln!(
        out,
        "  ({} per page; options: {})",
        pagination.page_size(),
        PAGE_SIZE_OPTIONS.map(|n| n.to_string()).join("/")
    );
    out
}

fn render_window(window: &[Option<usize>], current: usize) -> String {
    window
        .iter()
        .map(|entry| match entry {
            Some(page) if *page == current => format!("[{page}]"),
            Some(page) => page.to_string(),
            None => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

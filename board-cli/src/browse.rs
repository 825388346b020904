use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use board_core::{Debounced, ListingView, Post};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::input::Input;
use crate::render::render_page;

/// Runs an interactive session over `posts`, reading commands from `input`
/// until `:q` or end of input and writing every rendered page to `out`.
///
/// Search text goes through a `delay` debounce; page and size commands render
/// at once.
pub async fn browse<R, W>(
    input: R,
    out: Arc<Mutex<W>>,
    posts: Vec<Post>,
    page_size: usize,
    delay: Duration,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
{
    let view = Arc::new(Mutex::new(ListingView::with_page_size(posts, page_size)?));
    show(&out, &render_page(&mut lock(&view)));

    let search = {
        let view = Arc::clone(&view);
        let out = Arc::clone(&out);
        Debounced::new(delay, move |query: String| {
            let mut view = lock(&view);
            view.on_search_change(query);
            show(&out, &render_page(&mut view));
        })
    };

    let mut last_query = None;
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match Input::parse(&line) {
            Input::Quit => {
                search.cancel();
                return Ok(());
            }
            Input::Search(query) => {
                debug!(query = %query, "search input");
                last_query = Some(query.clone());
                search.call(query);
            }
            Input::Page(page) => {
                let mut view = lock(&view);
                match view.on_page_change(page) {
                    Ok(()) => show(&out, &render_page(&mut view)),
                    Err(e) => eprintln!("{e}"),
                }
            }
            Input::PageSize(size) => {
                let mut view = lock(&view);
                match view.on_page_size_change(size) {
                    Ok(()) => show(&out, &render_page(&mut view)),
                    Err(e) => eprintln!("{e}"),
                }
            }
            Input::Invalid(msg) => eprintln!("{msg}"),
        }
    }

    // Input ended mid-burst: apply the last search now instead of waiting.
    if search.is_pending() {
        search.cancel();
        if let Some(query) = last_query {
            let mut view = lock(&view);
            view.on_search_change(query);
            show(&out, &render_page(&mut view));
        }
    }

    Ok(())
}

fn lock(view: &Mutex<ListingView>) -> MutexGuard<'_, ListingView> {
    view.lock().unwrap_or_else(PoisonError::into_inner)
}

fn show<W: Write>(out: &Mutex<W>, page: &str) {
    let mut out = out.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(e) = out.write_all(page.as_bytes()).and_then(|()| out.flush()) {
        warn!(error = %e, "failed to write page");
    }
}

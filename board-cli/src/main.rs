use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use board_core::{BoardClientHttp, DEFAULT_API_URL, DEFAULT_PAGE_SIZE, ListingView, PageProps, Post};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::browse::browse;
use crate::render::render_page;

mod browse;
mod input;
mod render;

#[derive(Parser, Debug)]
#[clap(about = "Search and page through the post listing")]
struct Cli {
    /// Base URL serving `/posts` and `/users`
    #[clap(long, env = "BOARD_API_URL", default_value = DEFAULT_API_URL)]
    api: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of the listing
    List {
        #[clap(long, default_value = "")]
        search: String,
        #[clap(long, default_value_t = 1)]
        page: usize,
        #[clap(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Fetch once and write the page props as JSON
    Build {
        #[clap(long)]
        out: Option<PathBuf>,
    },
    /// Interactive search: type text to search, `:page N`, `:size N`, `:q`
    Browse {
        #[clap(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
        #[clap(long, default_value_t = 500)]
        debounce_ms: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging();

    let client = BoardClientHttp::connect(&args.api)?;
    let props = PageProps::build(&client).await;

    match args.command {
        Command::List {
            search,
            page,
            page_size,
        } => {
            let posts = checked(props)?;
            let mut view = ListingView::with_page_size(posts, page_size)?;
            view.on_search_change(search);
            view.on_page_change(page)?;
            print!("{}", render_page(&mut view));
        }
        Command::Build { out } => {
            let json = serde_json::to_string_pretty(&props)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("Props written to {}", path.display());
                }
                None => println!("{json}"),
            }
            checked(props)?;
        }
        Command::Browse {
            page_size,
            debounce_ms,
        } => {
            let posts = checked(props)?;
            browse(
                BufReader::new(tokio::io::stdin()),
                Arc::new(Mutex::new(std::io::stdout())),
                posts,
                page_size,
                Duration::from_millis(debounce_ms),
            )
            .await?;
        }
    }

    Ok(())
}

/// Surfaces the build error instead of silently showing an empty listing.
fn checked(props: PageProps) -> anyhow::Result<Vec<Post>> {
    if props.has_error() {
        anyhow::bail!("{}", props.error);
    }
    Ok(props.posts)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

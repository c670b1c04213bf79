//! Markshelf — browse a Firefox bookmark snapshot in the terminal.
//!
//! Entry point: opens the snapshot read-only, selects a collection
//! (all / search / folder), and hands it to the interactive pager.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use markshelf::pager::interactive::{run_loop, InputSource, KeyInput, LineInput};
use markshelf::pager::Pager;
use markshelf::store::{BookmarkStore, BookmarkStoreTrait};

#[derive(Parser)]
#[command(name = "markshelf", version, about = "Browse Firefox bookmark snapshots in the terminal")]
struct Cli {
    /// Path to a places.sqlite snapshot
    snapshot: PathBuf,

    /// Case-insensitive search over titles, URLs, and folder paths
    #[arg(short, long)]
    search: Option<String>,

    /// Only bookmarks under the given folder (matches at any depth)
    #[arg(short, long)]
    folder: Option<String>,

    /// Print the sorted folder names and exit
    #[arg(long)]
    list_folders: bool,

    /// Bookmarks per page
    #[arg(short, long, default_value_t = 20)]
    page_size: usize,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let store = BookmarkStore::new(&cli.snapshot)?;

    if cli.list_folders {
        let mut out = io::stdout().lock();
        for name in store.folders()? {
            writeln!(out, "{}", name)?;
        }
        return Ok(());
    }

    let items = if let Some(term) = &cli.search {
        store.search(term)?
    } else if let Some(name) = &cli.folder {
        store.by_folder(name)?
    } else {
        store.bookmarks()?.to_vec()
    };

    let mut pager = Pager::new(items, cli.page_size);
    let mut out = io::stdout();

    // Raw single-character reads need a terminal; piped stdin falls back
    // to the line-buffered adapter.
    let mut input: Box<dyn InputSource> = if KeyInput::is_supported() {
        Box::new(KeyInput::new())
    } else {
        Box::new(LineInput::new(io::stdin().lock()))
    };
    run_loop(&mut pager, input.as_mut(), &mut out)?;
    Ok(())
}

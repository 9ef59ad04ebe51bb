//! addbook - add a book to the bibliography by title
//!
//! Resolves a title (and optional author) to an edition on Open Library,
//! builds the book item, derives its citation key, and writes a literature
//! note into the vault.

mod config;
mod note;

use std::path::PathBuf;

use addbook_core::{
    derive_key, normalize_authors, resolve, BibliographicRecord, BookItem, OpenLibraryClient,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::AddbookConfig;
use note::{render_note, write_note, NoteOptions, NoteOutcome};

#[derive(Parser, Debug)]
#[command(name = "addbook", version, about = "Add a book to the bibliography by title/author")]
struct Cli {
    /// Book title
    title: String,

    /// Author name
    author: Option<String>,

    /// Language code (defaults to the configured language, "eng")
    #[arg(long)]
    lang: Option<String>,

    /// Skip writing the literature note
    #[arg(long)]
    no_note: bool,

    /// Fiction or non-fiction
    #[arg(long = "type", default_value = "")]
    kind: String,

    /// Book genre, any string will do
    #[arg(long, default_value = "")]
    genre: String,

    /// Text for the "My Notes" section
    #[arg(long, default_value = "")]
    notes: String,

    /// Vault root, overrides config and OBSIDIAN_VAULT
    #[arg(long)]
    vault: Option<PathBuf>,

    /// Print the book item as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("addbook=info,addbook_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AddbookConfig::load_standard()?.with_env();
    if let Some(vault) = cli.vault.clone() {
        config.vault_path = vault;
    }
    let language = cli.lang.clone().unwrap_or_else(|| config.language.clone());

    let client = OpenLibraryClient::new(&config.base_url, &config.user_agent)?;

    let isbn = match resolve(&client, &client, &cli.title, cli.author.as_deref(), &language) {
        Ok(isbn) => isbn,
        Err(reason) => {
            tracing::info!("{}", reason);
            eprintln!("Could not find ISBN");
            std::process::exit(1);
        }
    };
    tracing::info!("Resolved '{}' to ISBN {}", cli.title, isbn);

    let metadata = client.fetch_edition_metadata(&isbn)?;
    let creators = normalize_authors(&metadata.authors, &client);
    let item = BookItem::from_metadata(&metadata, creators, language.as_str());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    }

    let record = BibliographicRecord::from_item(&item);
    let key = derive_key(&record);
    tracing::info!("Citation key: {}", key);

    if cli.no_note {
        return Ok(());
    }

    let options = NoteOptions {
        language,
        kind: cli.kind,
        genre: cli.genre,
        notes: cli.notes,
    };
    let today = chrono::Local::now().date_naive();
    let content = render_note(&record, &options, today);

    match write_note(&config.notes_dir(), &key, &content)? {
        NoteOutcome::Created(path) => {
            tracing::info!("Created literature note: {}", path.display());
        }
        NoteOutcome::AlreadyExists(path) => {
            tracing::warn!("Note not created, already exists: {}", path.display());
        }
    }

    Ok(())
}

//! Bookstore CLI - manage the book inventory from a terminal

mod commands;

use anyhow::Result;
use bookstore_core::{CatalogClient, ClientConfig, HttpBookApi, Variant};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the REST API (books live under <URL>/books)
    #[arg(long, global = true, env = "BOOKSTORE_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the books in the collection
    List {
        /// Output as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Output the rendered list markup
        #[arg(long)]
        html: bool,
    },

    /// Add a book to the collection
    Add {
        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        author: String,

        #[arg(long, default_value = "")]
        isbn: String,

        /// Unit price; anything unparseable counts as 0
        #[arg(long, default_value = "")]
        price: String,

        /// Copies in stock; anything unparseable counts as 0
        #[arg(long, default_value = "")]
        quantity: String,

        #[arg(long, default_value = "")]
        publication_date: String,
    },

    /// Edit a book; fields not given keep their current value
    Edit {
        /// Book id
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        quantity: Option<String>,
    },

    /// Remove a book from the collection
    Delete {
        /// Book id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the collection size reported by the backend
    Stats,

    /// Check that the backend is up
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookstore_cli=debug,bookstore_core=debug"
    } else {
        "bookstore_cli=info,bookstore_core=error"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // A terminal has no toast or animations
    let mut config = ClientConfig::default().with_variant(Variant::Plain);
    if let Some(url) = cli.api_url {
        config = config.with_api_url(url)?;
    }
    let api = HttpBookApi::new(config.api_url.clone());
    let mut client = CatalogClient::new(api, config);

    match cli.command {
        Commands::List { json, html } => commands::list(&mut client, json, html).await,

        Commands::Add {
            title,
            author,
            isbn,
            price,
            quantity,
            publication_date,
        } => {
            let form = bookstore_core::AddBookForm {
                title,
                author,
                isbn,
                price,
                quantity,
                publication_date,
            };
            commands::add(&mut client, form).await
        }

        Commands::Edit {
            id,
            title,
            author,
            price,
            quantity,
        } => {
            let changes = commands::EditChanges {
                title,
                author,
                price,
                quantity,
            };
            commands::edit(&mut client, &id, changes).await
        }

        Commands::Delete { id, yes } => commands::delete(&mut client, &id, yes).await,

        Commands::Stats => commands::stats(&client).await,

        Commands::Health => commands::health(&client).await,
    }
}

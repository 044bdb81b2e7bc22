//! Address Book - Main entry point
//!
//! Loads the address book from the configured file, runs the interactive
//! command loop on stdin/stdout and saves the book on exit.

use address_book::{AddressBook, CommandHandler, Config};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting address book with file: {}",
        config.book_file.display()
    );

    let book = AddressBook::load_from_file_with_page_size(&config.book_file, config.page_size)
        .with_context(|| {
            format!(
                "Failed to load address book from {}",
                config.book_file.display()
            )
        })?;

    let mut handler = CommandHandler::new(book, &config.book_file);
    run_loop(&mut handler)?;

    handler.save().with_context(|| {
        format!(
            "Failed to save address book to {}",
            config.book_file.display()
        )
    })?;

    info!("Address book saved, shutting down");
    Ok(())
}

/// Read commands until an exit command or end of input.
fn run_loop(handler: &mut CommandHandler) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    writeln!(stdout, "Welcome to the assistant bot! Type 'help' for commands.")?;
    loop {
        write!(stdout, "Enter a command: ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            break;
        };

        let reply = handler.handle_line(&line?);
        writeln!(stdout, "{}", reply.text())?;
        if reply.is_exit() {
            break;
        }
    }
    Ok(())
}

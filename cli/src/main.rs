use crate::config::Config;
use crate::controller::TryExhaust;
use crate::error::StackTrace;
use crate::presenter::BookPresenter;
use application::transfer::BookDto;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod config;
mod controller;
mod error;
mod presenter;
mod sample;

fn main() -> Result<(), StackTrace> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG")
                        .unwrap_or_else(|_| "cli=debug,application=debug".into()),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let config = Config::from_env()?;
    tracing::debug!(format = ?config.format(), "loaded configuration");

    let book = sample::hitchhikers_guide();
    tracing::info!(
        pages = book.pages().len(),
        has_author = book.author().is_some(),
        has_cover = book.cover().is_some(),
        "built book"
    );

    let rendered = BookPresenter::new(*config.format()).emit(BookDto::from(book))?;
    println!("{rendered}");

    Ok(())
}

//! Error types for the bot core.
//!
//! [`CinebotError`] is the top-level error; [`HandlerError`] is used for handler failures.
//! Catalog API failures never appear here: they are absorbed at the catalog boundary
//! and surfaced to callers as [`crate::catalog::CatalogResponse::Absent`].

use thiserror::Error;

/// Top-level error for cinebot (bot transport, handler, config, IO).
#[derive(Error, Debug)]
pub enum CinebotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by handlers (invalid command, empty content).
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Empty content")]
    EmptyContent,
}

/// Result type for core operations; uses [`CinebotError`].
pub type Result<T> = std::result::Result<T, CinebotError>;

//! Core types and traits: Handler, Bot, Message, error, logger. Transport-agnostic.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{CinebotError, HandlerError, Result};
pub use logger::{ensure_log_dir, init_tracing};
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage, ToCoreUser, User,
};

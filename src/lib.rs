//! # cinebot
//!
//! Telegram bot for movie/TV recommendations backed by an external media-catalog API.
//! The catalog layer is a set of stateless async HTTP queries that pass JSON through
//! verbatim and absorb every failure into an explicit absence marker; the telegram
//! layer converts inbound messages to a transport-agnostic core model and dispatches
//! them through a handler chain.

pub mod catalog;
pub mod chain;
pub mod cli;
pub mod config;
pub mod core;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use crate::catalog::{CatalogClient, CatalogConfig, CatalogResponse, MediaKind, TimeWindow};
pub use crate::chain::HandlerChain;
pub use crate::cli::{load_config, Cli, Commands};
pub use crate::config::BotConfig;
pub use crate::core::{
    init_tracing, Bot, Chat, CinebotError, Handler, HandlerError, HandlerResponse, Message,
    MessageDirection, Result, ToCoreMessage, ToCoreUser, User,
};
pub use crate::handlers::{CatalogHandler, Command, LoggingHandler};
pub use crate::runner::{build_bot_components, build_handler_chain, run_bot, BotComponents};
pub use crate::telegram::{
    run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper,
};

//! Handler that maps parsed commands to catalog calls and sends the rendered reply.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::catalog::{CatalogClient, CatalogResponse};
use crate::core::{Bot, Handler, HandlerError, HandlerResponse, Message, Result};

use super::commands::Command;
use super::format;

/// Reply when a catalog call came back with the absence marker.
const NOT_FOUND_REPLY: &str = "Nothing found right now. Please try again later.";
/// Reply when the API answered but the result set was empty.
const EMPTY_RESULTS_REPLY: &str = "No matches. Try a different title or genre.";

const WELCOME_REPLY: &str = "\u{1f44b} Hi! I recommend movies and TV shows.\n\
Send me a title to search for it, or see /help for all commands.";

const HELP_REPLY: &str = "Commands:\n\
/trending [movie|tv|all] [day|week] - what's popular\n\
/genres [movie|tv] - list genres\n\
/genre [genre id] [movie|tv] - popular titles in a genre\n\
/search <title> - find a movie\n\
/tv <title> - find a TV show\n\
/movie <id> - movie details\n\
/show <id> - TV show details\n\
\n\
Plain text works too: I'll search movies for it.";

/// Terminal handler: parses the message text, performs one catalog call, replies.
pub struct CatalogHandler {
    bot: Arc<dyn Bot>,
    catalog: Arc<CatalogClient>,
}

impl CatalogHandler {
    /// Creates a handler that replies through `bot` using `catalog` for data.
    pub fn new(bot: Arc<dyn Bot>, catalog: Arc<CatalogClient>) -> Self {
        Self { bot, catalog }
    }

    /// Runs one command to completion and returns the reply text.
    /// Catalog failures surface here only as the absence marker.
    async fn execute(&self, command: Command) -> String {
        match command {
            Command::Start => WELCOME_REPLY.to_string(),
            Command::Help => HELP_REPLY.to_string(),
            Command::Trending {
                media,
                window,
                page,
            } => list_reply(
                self.catalog.trending(media, window, page).await,
                "\u{1f525} Trending now",
            ),
            Command::Genres { media } => {
                let heading = format!("\u{1f3ad} {} genres", capitalize(media.as_str()));
                match self.catalog.genres(media).await.as_data() {
                    Some(doc) => format::render_genre_list(&heading, doc)
                        .unwrap_or_else(|| EMPTY_RESULTS_REPLY.to_string()),
                    None => NOT_FOUND_REPLY.to_string(),
                }
            }
            Command::SearchMovie { query, page } => {
                let heading = format!("\u{1f50d} Movies matching \"{}\"", query);
                list_reply(self.catalog.search_movie(&query, page).await, &heading)
            }
            Command::SearchTv { query, page } => {
                let heading = format!("\u{1f50d} TV shows matching \"{}\"", query);
                list_reply(self.catalog.search_tv(&query, page).await, &heading)
            }
            Command::MovieDetails { id } => match self.catalog.movie_details(id).await.as_data() {
                Some(doc) => format::render_movie_details(doc),
                None => NOT_FOUND_REPLY.to_string(),
            },
            Command::TvDetails { id } => match self.catalog.tv_details(id).await.as_data() {
                Some(doc) => format::render_tv_details(doc),
                None => NOT_FOUND_REPLY.to_string(),
            },
            Command::Discover {
                media,
                genre_id,
                page,
            } => list_reply(
                self.catalog.discover(media, genre_id, page).await,
                "\u{1f3c6} Popular picks",
            ),
        }
    }
}

#[async_trait]
impl Handler for CatalogHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let reply = match Command::parse(&message.content) {
            Ok(command) => {
                info!(
                    user_id = message.user.id,
                    command = ?command,
                    "step: CatalogHandler executing command"
                );
                self.execute(command).await
            }
            Err(HandlerError::InvalidCommand(hint)) => {
                warn!(
                    user_id = message.user.id,
                    content = %message.content,
                    "Rejected malformed command"
                );
                hint
            }
            Err(_) => return Ok(HandlerResponse::Ignore),
        };

        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}

fn list_reply(response: CatalogResponse, heading: &str) -> String {
    match response.as_data() {
        Some(doc) => format::render_title_list(heading, doc)
            .unwrap_or_else(|| EMPTY_RESULTS_REPLY.to_string()),
        None => NOT_FOUND_REPLY.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

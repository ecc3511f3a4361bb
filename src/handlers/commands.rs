//! Parsing of user text into catalog intents.

use crate::catalog::{MediaKind, TimeWindow};
use crate::core::HandlerError;

/// One parsed user intent. Defaults follow the catalog operation table:
/// trending all/week, genres movie, discover movie without a genre filter, page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Trending {
        media: MediaKind,
        window: TimeWindow,
        page: u32,
    },
    Genres {
        media: MediaKind,
    },
    SearchMovie {
        query: String,
        page: u32,
    },
    SearchTv {
        query: String,
        page: u32,
    },
    MovieDetails {
        id: i64,
    },
    TvDetails {
        id: i64,
    },
    Discover {
        media: MediaKind,
        genre_id: Option<i64>,
        page: u32,
    },
}

const TRENDING_USAGE: &str = "Usage: /trending [movie|tv|all] [day|week]";
const GENRES_USAGE: &str = "Usage: /genres [movie|tv]";
const SEARCH_USAGE: &str = "Usage: /search <movie title>";
const TV_USAGE: &str = "Usage: /tv <show title>";
const MOVIE_USAGE: &str = "Usage: /movie <numeric id>";
const SHOW_USAGE: &str = "Usage: /show <numeric id>";
const GENRE_USAGE: &str = "Usage: /genre [genre id] [movie|tv]";

fn invalid(usage: &str) -> HandlerError {
    HandlerError::InvalidCommand(usage.to_string())
}

impl Command {
    /// Parses message text. Plain non-command text becomes a movie-title search.
    /// Malformed arguments yield `InvalidCommand` carrying a usage hint; the
    /// `@botname` suffix on the command word is ignored.
    pub fn parse(text: &str) -> Result<Command, HandlerError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(HandlerError::EmptyContent);
        }
        if !text.starts_with('/') {
            return Ok(Command::SearchMovie {
                query: text.to_string(),
                page: 1,
            });
        }

        let mut parts = text.split_whitespace();
        let head = parts.next().unwrap_or(text);
        let name = head.split('@').next().unwrap_or(head);
        let args: Vec<&str> = parts.collect();

        match name {
            "/start" => Ok(Command::Start),
            "/help" => Ok(Command::Help),
            "/trending" => {
                let media = match args.first() {
                    Some(s) => s.parse().map_err(|_| invalid(TRENDING_USAGE))?,
                    None => MediaKind::All,
                };
                let window = match args.get(1) {
                    Some(s) => s.parse().map_err(|_| invalid(TRENDING_USAGE))?,
                    None => TimeWindow::Week,
                };
                Ok(Command::Trending {
                    media,
                    window,
                    page: 1,
                })
            }
            "/genres" => {
                let media = match args.first() {
                    Some(s) => s.parse().map_err(|_| invalid(GENRES_USAGE))?,
                    None => MediaKind::Movie,
                };
                Ok(Command::Genres { media })
            }
            "/search" => {
                if args.is_empty() {
                    return Err(invalid(SEARCH_USAGE));
                }
                Ok(Command::SearchMovie {
                    query: args.join(" "),
                    page: 1,
                })
            }
            "/tv" => {
                if args.is_empty() {
                    return Err(invalid(TV_USAGE));
                }
                Ok(Command::SearchTv {
                    query: args.join(" "),
                    page: 1,
                })
            }
            "/movie" => {
                let id = args
                    .first()
                    .and_then(|s| s.parse::<i64>().ok())
                    .ok_or_else(|| invalid(MOVIE_USAGE))?;
                Ok(Command::MovieDetails { id })
            }
            "/show" => {
                let id = args
                    .first()
                    .and_then(|s| s.parse::<i64>().ok())
                    .ok_or_else(|| invalid(SHOW_USAGE))?;
                Ok(Command::TvDetails { id })
            }
            "/genre" => {
                let genre_id = match args.first() {
                    Some(s) => Some(s.parse::<i64>().map_err(|_| invalid(GENRE_USAGE))?),
                    None => None,
                };
                let media = match args.get(1) {
                    Some(s) => s.parse().map_err(|_| invalid(GENRE_USAGE))?,
                    None => MediaKind::Movie,
                };
                Ok(Command::Discover {
                    media,
                    genre_id,
                    page: 1,
                })
            }
            other => Err(HandlerError::InvalidCommand(format!(
                "Unknown command {}. Try /help",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_defaults() {
        assert_eq!(
            Command::parse("/trending").unwrap(),
            Command::Trending {
                media: MediaKind::All,
                window: TimeWindow::Week,
                page: 1
            }
        );
    }

    #[test]
    fn test_trending_with_args() {
        assert_eq!(
            Command::parse("/trending tv day").unwrap(),
            Command::Trending {
                media: MediaKind::Tv,
                window: TimeWindow::Day,
                page: 1
            }
        );
    }

    #[test]
    fn test_command_with_botname_suffix() {
        assert_eq!(
            Command::parse("/genres@cinebot tv").unwrap(),
            Command::Genres {
                media: MediaKind::Tv
            }
        );
    }

    #[test]
    fn test_search_joins_words() {
        assert_eq!(
            Command::parse("/search The Matrix").unwrap(),
            Command::SearchMovie {
                query: "The Matrix".to_string(),
                page: 1
            }
        );
    }

    #[test]
    fn test_search_without_query_is_invalid() {
        assert!(matches!(
            Command::parse("/search"),
            Err(HandlerError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_movie_details_requires_numeric_id() {
        assert_eq!(
            Command::parse("/movie 603").unwrap(),
            Command::MovieDetails { id: 603 }
        );
        assert!(matches!(
            Command::parse("/movie matrix"),
            Err(HandlerError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_genre_without_args_omits_filter() {
        assert_eq!(
            Command::parse("/genre").unwrap(),
            Command::Discover {
                media: MediaKind::Movie,
                genre_id: None,
                page: 1
            }
        );
    }

    #[test]
    fn test_genre_with_id_and_media() {
        assert_eq!(
            Command::parse("/genre 28 tv").unwrap(),
            Command::Discover {
                media: MediaKind::Tv,
                genre_id: Some(28),
                page: 1
            }
        );
    }

    #[test]
    fn test_plain_text_is_movie_search() {
        assert_eq!(
            Command::parse("Blade Runner").unwrap(),
            Command::SearchMovie {
                query: "Blade Runner".to_string(),
                page: 1
            }
        );
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(matches!(
            Command::parse("/weather"),
            Err(HandlerError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_empty_text_is_empty_content() {
        assert!(matches!(
            Command::parse("   "),
            Err(HandlerError::EmptyContent)
        ));
    }
}

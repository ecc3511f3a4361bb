//! Bot configuration, loaded once from environment variables.

use anyhow::Result;
use std::env;

use crate::catalog::CatalogConfig;

/// Process-wide settings. Built at startup, immutable afterwards, passed into components.
pub struct BotConfig {
    pub bot_token: String,
    pub catalog_api_key: String,
    pub catalog_base_url: String,
    pub language: String,
    pub log_file: String,
    /// Optional Telegram Bot API base URL override; used to point the bot at a mock server in tests.
    /// Env: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
}

impl BotConfig {
    /// Loads config from environment variables.
    /// If `token` is given it overrides `BOT_TOKEN`; a missing token is a fatal config error.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN")
                .map_err(|_| anyhow::anyhow!("BOT_TOKEN not set; put BOT_TOKEN=your_token in .env"))?,
        };
        let catalog_api_key = env::var("TMDB_API_KEY").unwrap_or_default();
        let catalog_base_url = env::var("TMDB_BASE_URL")
            .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string());
        let language = env::var("LANGUAGE").unwrap_or_else(|_| "en-US".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/cinebot.log".to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            catalog_api_key,
            catalog_base_url,
            language,
            log_file,
            telegram_api_url,
        })
    }

    /// Rejects configs that cannot possibly run (empty bot token).
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        Ok(())
    }

    /// Catalog access settings derived from this config.
    pub fn catalog(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.catalog_base_url.clone(),
            api_key: self.catalog_api_key.clone(),
            language: self.language.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("BOT_TOKEN");
        env::remove_var("TMDB_API_KEY");
        env::remove_var("TMDB_BASE_URL");
        env::remove_var("LANGUAGE");
        env::remove_var("LOG_FILE");
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("TELOXIDE_API_URL");
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("TMDB_API_KEY", "test_key");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.catalog_api_key, "test_key");
        assert_eq!(config.catalog_base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.language, "en-US");
        assert_eq!(config.log_file, "logs/cinebot.log");
        assert!(config.telegram_api_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("BOT_TOKEN", "custom_token");
        env::set_var("TMDB_API_KEY", "custom_key");
        env::set_var("TMDB_BASE_URL", "http://127.0.0.1:8080/3");
        env::set_var("LANGUAGE", "uk-UA");
        env::set_var("LOG_FILE", "/tmp/cinebot.log");
        env::set_var("TELEGRAM_API_URL", "http://127.0.0.1:8081");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "custom_token");
        assert_eq!(config.catalog_base_url, "http://127.0.0.1:8080/3");
        assert_eq!(config.language, "uk-UA");
        assert_eq!(config.log_file, "/tmp/cinebot.log");
        assert_eq!(
            config.telegram_api_url.as_deref(),
            Some("http://127.0.0.1:8081")
        );
    }

    #[test]
    #[serial]
    fn test_load_config_missing_token_fails() {
        clear_env();

        assert!(BotConfig::load(None).is_err());
    }

    #[test]
    #[serial]
    fn test_load_config_with_override_token() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();

        assert_eq!(config.bot_token, "override_token");
    }

    #[test]
    #[serial]
    fn test_catalog_config_mirrors_bot_config() {
        clear_env();
        env::set_var("BOT_TOKEN", "t");
        env::set_var("TMDB_API_KEY", "k");
        env::set_var("LANGUAGE", "de-DE");

        let catalog = BotConfig::load(None).unwrap().catalog();

        assert_eq!(catalog.api_key, "k");
        assert_eq!(catalog.language, "de-DE");
        assert_eq!(catalog.base_url, "https://api.themoviedb.org/3");
    }

    #[test]
    #[serial]
    fn test_validate_rejects_blank_token() {
        clear_env();

        let config = BotConfig::load(Some("   ".to_string())).unwrap();

        assert!(config.validate().is_err());
    }
}

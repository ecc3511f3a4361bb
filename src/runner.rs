//! Component factory and bot entry point. Assembly is isolated from the run loop
//! so integration tests can build the chain and drive it without starting the REPL.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use crate::catalog::CatalogClient;
use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot as CoreBot};
use crate::handlers::{CatalogHandler, LoggingHandler};
use crate::telegram::{run_repl, TelegramBotAdapter};

/// Core dependencies for run_bot; produced by the component factory.
pub struct BotComponents {
    pub teloxide_bot: Bot,
    /// The outbound transport handlers reply through; a [`TelegramBotAdapter`] in production.
    pub handler_bot: Arc<dyn CoreBot>,
    pub catalog: Arc<CatalogClient>,
}

/// Builds BotComponents from config: teloxide Bot (honoring the API URL override)
/// plus the shared catalog client.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = {
        let bot = Bot::new(config.bot_token.clone());
        if let Some(ref url_str) = config.telegram_api_url {
            match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            }
        } else {
            bot
        }
    };

    let handler_bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let catalog = Arc::new(CatalogClient::new(config.catalog()));

    Ok(BotComponents {
        teloxide_bot,
        handler_bot,
        catalog,
    })
}

/// Builds the handler chain (logging → catalog).
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler::new()))
        .add_handler(Arc::new(CatalogHandler::new(
            components.handler_bot.clone(),
            components.catalog.clone(),
        )))
}

/// Main entry: validate config, init logging, build components, probe the catalog API,
/// then run the REPL. A failed connectivity probe logs a warning but never aborts startup.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        catalog_base_url = %config.catalog_base_url,
        language = %config.language,
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;

    if !components.catalog.check_connection().await {
        warn!("Bot starting with catalog API connectivity problems");
    }

    let handler_chain = build_handler_chain(&components);

    info!("Bot started successfully");

    run_repl(components.teloxide_bot.clone(), handler_chain).await?;

    Ok(())
}

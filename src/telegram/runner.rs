//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;

use super::adapters::TelegramMessageWrapper;

/// Starts the long-polling REPL with the given teloxide Bot and HandlerChain.
/// Calls get_me() once at startup to log the bot identity; each message is converted
/// to core::Message and passed to chain.handle in a spawned task so the REPL never blocks.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot identity confirmed before repl");
        }
    }

    let chain = handler_chain;
    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let chain = chain.clone();

            async move {
                let wrapper = TelegramMessageWrapper(&msg);
                let core_msg = wrapper.to_core();

                match msg.text() {
                    Some(text) => {
                        info!(
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            message_content = %text,
                            "Received message"
                        );
                    }
                    None => {
                        info!(
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            "Received non-text message"
                        );
                    }
                }

                // Run handler chain in a spawned task so REPL returns immediately
                tokio::spawn(async move {
                    if let Err(e) = chain.handle(&core_msg).await {
                        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                    }
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}

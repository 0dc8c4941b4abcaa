use crate::{NotifyError, NotifyResult};

use std::time::Duration;

use async_trait::async_trait;
use iw_config::NotifierConfig;
use iw_core::{ActionError, Notifier};
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

const NOTIFY_ACTION: &str = "notify";

/// Sends notices to one Telegram chat through the Bot API
#[derive(Clone)]
pub struct TelegramNotifier {
    send_url: String,
    chat_id: i64,
    client: ReqwestClient,
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
}

#[derive(Deserialize)]
struct BotResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramNotifier {
    pub fn new(
        api_base: &str,
        bot_token: &str,
        chat_id: i64,
        timeout: Duration,
    ) -> NotifyResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(NotifyError::from_reqwest)?;

        Ok(Self {
            send_url: format!(
                "{}/bot{}/sendMessage",
                api_base.trim_end_matches('/'),
                bot_token
            ),
            chat_id,
            client,
        })
    }

    pub fn from_config(config: &NotifierConfig) -> NotifyResult<Self> {
        let bot_token = config
            .bot_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| NotifyError::not_configured("notifier.bot_token is not set"))?;
        let chat_id = config
            .chat_id
            .ok_or_else(|| NotifyError::not_configured("notifier.chat_id is not set"))?;

        Self::new(&config.api_base, bot_token, chat_id, config.timeout())
    }

    pub async fn send_message(&self, text: &str) -> NotifyResult<()> {
        let response = self
            .client
            .post(&self.send_url)
            .json(&SendMessage {
                chat_id: self.chat_id,
                text,
            })
            .send()
            .await?;
        let status = response.status();

        // Telegram explains failures in the body, so read it before the status
        let reply = response.json::<BotResponse>().await;
        match reply {
            Ok(reply) if status.is_success() && reply.ok => {
                debug!("Notice delivered to chat {}", self.chat_id);
                Ok(())
            }
            Ok(reply) => Err(NotifyError::rejected(
                status.as_u16(),
                reply
                    .description
                    .unwrap_or_else(|| String::from("no description")),
            )),
            Err(_) if !status.is_success() => {
                Err(NotifyError::rejected(status.as_u16(), "unreadable response"))
            }
            Err(e) => Err(NotifyError::from_reqwest(e)),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), ActionError> {
        self.send_message(text)
            .await
            .map_err(|e| ActionError::from_error(NOTIFY_ACTION, e))
    }
}

//! Shared helpers for integration tests: recording MockBot, message builder, sharing service mocks.

#![allow(dead_code)]

pub mod mock_bot;

use std::sync::Arc;

use chrono::Utc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use summary_bot::{BaseConfig, BotConfig, Chat, InboundMessage, SharingConfig, User};

pub const TEST_CHAT_ID: i64 = 456;
pub const OAUTH_TOKEN: &str = "y0_test_oauth_token";
pub const SHARING_PATH: &str = "/api/sharing-url";
pub const BOT_USERNAME: &str = "summary_bot";

pub fn test_chat() -> Chat {
    Chat {
        id: TEST_CHAT_ID,
        chat_type: "private".to_string(),
    }
}

/// Username cache as the REPL runner leaves it after a successful `getMe`.
pub fn known_bot_username() -> Arc<RwLock<Option<String>>> {
    Arc::new(RwLock::new(Some(BOT_USERNAME.to_string())))
}

pub fn make_message(text: &str) -> InboundMessage {
    make_message_in_chat(text, TEST_CHAT_ID)
}

pub fn make_message_in_chat(text: &str, chat_id: i64) -> InboundMessage {
    InboundMessage {
        id: "msg_1".to_string(),
        sender: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        text: text.to_string(),
        received_at: Utc::now(),
    }
}

/// BotConfig pointing the sharing API at `api_url`, with no settle delay.
pub fn test_config(api_url: String) -> BotConfig {
    BotConfig {
        base: BaseConfig {
            bot_token: "test_bot_token_12345".to_string(),
            telegram_api_url: None,
            log_dir: "logs".to_string(),
            log_file: "summary-bot.log".to_string(),
        },
        sharing: SharingConfig {
            api_url,
            oauth_token: OAUTH_TOKEN.to_string(),
            settle_delay_secs: 0,
            http_timeout_secs: 5,
        },
    }
}

pub fn page_with_description(summary: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>Retelling</title><meta name="description" content="{}"></head><body></body></html>"#,
        summary
    )
}

/// Registers a sharing API mock answering `status` / `body`.
pub async fn mock_sharing_api(
    server: &mut mockito::ServerGuard,
    status: usize,
    body: &str,
) -> mockito::Mock {
    server
        .mock("POST", SHARING_PATH)
        .match_header("authorization", format!("OAuth {}", OAUTH_TOKEN).as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Sharing API success body pointing at `sharing_url`.
pub fn success_body(sharing_url: &str) -> String {
    serde_json::json!({"status": "success", "sharing_url": sharing_url}).to_string()
}

/// Starts a TCP listener that accepts connections and never answers. Returns `http://<addr>/x`.
pub async fn silent_page_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}/x", addr)
}

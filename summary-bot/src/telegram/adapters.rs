//! Adapters from Telegram (teloxide) types to core types.
//! Depends only on teloxide and core type definitions.

use crate::core::{Chat, InboundMessage, ToCoreUser, ToInboundMessage, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to [`InboundMessage`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToInboundMessage for TelegramMessageWrapper<'a> {
    fn to_inbound(&self) -> Option<InboundMessage> {
        let text = self.0.text()?;
        Some(InboundMessage {
            id: self.0.id.0.to_string(),
            sender: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: self.chat_type().to_string(),
            },
            text: text.to_string(),
            received_at: self.0.date,
        })
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_group() {
            "group"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn telegram_message(value: serde_json::Value) -> teloxide::types::Message {
        serde_json::from_value(value).expect("valid Telegram message JSON")
    }

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user: teloxide::types::User = serde_json::from_value(json!({
            "id": 123,
            "is_bot": false,
            "first_name": "Test",
            "last_name": "User",
            "username": "testuser",
            "language_code": "en"
        }))
        .unwrap();

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
    }

    /// **Test: a private text message becomes an InboundMessage with the raw text and send date.**
    #[test]
    fn test_text_message_to_inbound() {
        let msg = telegram_message(json!({
            "message_id": 7,
            "date": 1706529600,
            "chat": {"id": 456, "type": "private", "first_name": "Test"},
            "from": {"id": 123, "is_bot": false, "first_name": "Test", "username": "testuser"},
            "text": "check this out http://example.com/a"
        }));

        let inbound = TelegramMessageWrapper(&msg).to_inbound().unwrap();

        assert_eq!(inbound.id, "7");
        assert_eq!(inbound.sender.id, 123);
        assert_eq!(inbound.chat.id, 456);
        assert_eq!(inbound.chat.chat_type, "private");
        assert_eq!(inbound.text, "check this out http://example.com/a");
        assert_eq!(inbound.received_at.timestamp(), 1706529600);
    }

    /// **Test: non-text messages are not converted.**
    #[test]
    fn test_non_text_message_is_skipped() {
        let msg = telegram_message(json!({
            "message_id": 8,
            "date": 1706529600,
            "chat": {"id": 456, "type": "private", "first_name": "Test"},
            "from": {"id": 123, "is_bot": false, "first_name": "Test"},
            "location": {"latitude": 55.75, "longitude": 37.61}
        }));

        assert!(TelegramMessageWrapper(&msg).to_inbound().is_none());
    }
}

//! Chat view: conversation list, selection, and composing messages.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::domain::{Chat, ChatId, ChatMessage, MessageId, User};
use tracing::{debug, info};

use crate::{format::format_timestamp, Session};

/// Sender label on the viewer's own messages.
pub const OWN_SENDER_NAME: &str = "You";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    pub chats: Vec<Chat>,
    pub selected: Option<ChatId>,
    pub draft: String,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    Select(ChatId),
    SetDraft(String),
    SetSearch(String),
    Send,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatSummary {
    pub id: ChatId,
    pub name: String,
    pub initials: String,
    pub last_message: String,
    pub last_activity: String,
    pub unread_count: u32,
    pub is_online: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageLine {
    pub sender_name: String,
    pub text: String,
    pub time: String,
    pub is_own: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversation {
    pub id: ChatId,
    pub name: String,
    pub presence: &'static str,
    pub messages: Vec<MessageLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatView {
    pub chats: Vec<ChatSummary>,
    pub conversation: Option<Conversation>,
}

impl ChatState {
    pub fn new(chats: Vec<Chat>) -> Self {
        Self {
            chats,
            ..Self::default()
        }
    }

    pub fn selected_chat(&self) -> Option<&Chat> {
        let id = self.selected?;
        self.chats.iter().find(|chat| chat.id == id)
    }

    pub fn reduce(mut self, action: ChatAction, session: &Session, now: DateTime<Utc>) -> Self {
        match action {
            ChatAction::Select(id) => {
                if let Some(chat) = self.chats.iter_mut().find(|chat| chat.id == id) {
                    chat.unread_count = 0;
                    self.selected = Some(id);
                }
            }
            ChatAction::SetDraft(draft) => self.draft = draft,
            ChatAction::SetSearch(search) => self.search = search,
            ChatAction::Send => self = self.send(session, now),
        }
        self
    }

    fn send(mut self, session: &Session, now: DateTime<Utc>) -> Self {
        if self.draft.trim().is_empty() {
            return self;
        }
        let Some(id) = self.selected else {
            return self;
        };
        let next_id = self.next_message_id();
        let Some(chat) = self.chats.iter_mut().find(|chat| chat.id == id) else {
            return self;
        };

        let text = std::mem::take(&mut self.draft);
        chat.last_message = text.clone();
        chat.last_activity = now;
        chat.messages.push(ChatMessage {
            id: next_id,
            sender_id: session.viewer_id(),
            sender_name: OWN_SENDER_NAME.to_string(),
            text,
            timestamp: now,
            is_own: true,
        });
        debug!(chat_id = %id, message_id = %next_id, "message sent");
        self
    }

    fn next_message_id(&self) -> MessageId {
        let max = self
            .chats
            .iter()
            .flat_map(|chat| chat.messages.iter())
            .map(|message| message.id.0)
            .max()
            .unwrap_or(0);
        MessageId(max + 1)
    }

    /// Makes sure a conversation with `user` exists. Returns its id.
    pub fn open_with(&mut self, user: &User, now: DateTime<Utc>) -> ChatId {
        if let Some(chat) = self.chats.iter().find(|chat| chat.user.id == user.id) {
            return chat.id;
        }
        let id = ChatId(self.chats.iter().map(|chat| chat.id.0).max().unwrap_or(0) + 1);
        info!(chat_id = %id, with = %user.name, "chat opened for accepted swap");
        self.chats.insert(
            0,
            Chat {
                id,
                user: user.clone(),
                messages: Vec::new(),
                last_message: format!("You're now swapping skills with {}.", user.first_name()),
                last_activity: now,
                unread_count: 0,
                is_online: false,
            },
        );
        id
    }

    pub fn view(&self, now: DateTime<Utc>) -> ChatView {
        let needle = self.search.to_lowercase();
        let chats = self
            .chats
            .iter()
            .filter(|chat| needle.is_empty() || chat.user.name.to_lowercase().contains(&needle))
            .map(|chat| ChatSummary {
                id: chat.id,
                name: chat.user.name.clone(),
                initials: chat.user.initials(),
                last_message: chat.last_message.clone(),
                last_activity: format_timestamp(chat.last_activity, now),
                unread_count: chat.unread_count,
                is_online: chat.is_online,
                selected: self.selected == Some(chat.id),
            })
            .collect();

        let conversation = self.selected_chat().map(|chat| Conversation {
            id: chat.id,
            name: chat.user.name.clone(),
            presence: if chat.is_online {
                "Online"
            } else {
                "Last seen recently"
            },
            messages: chat
                .messages
                .iter()
                .map(|message| MessageLine {
                    sender_name: message.sender_name.clone(),
                    text: message.text.clone(),
                    time: format_timestamp(message.timestamp, now),
                    is_own: message.is_own,
                })
                .collect(),
        });

        ChatView {
            chats,
            conversation,
        }
    }
}

#[cfg(test)]
#[path = "tests/chat_tests.rs"]
mod tests;

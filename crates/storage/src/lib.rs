//! Read-only in-memory entity store seeded from a JSON fixture.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use shared::domain::{
    Chat, ChatId, ChatMessage, Direction, MessageId, Profile, RequestId, RequestStatus,
    SwapRequest, User, UserId,
};
use thiserror::Error;
use tracing::info;

const SEED_FIXTURE: &str = include_str!("../fixtures/seed.json");

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: i64 },
    #[error("{context} references unknown user {user_id}")]
    UnknownUser { context: String, user_id: UserId },
    #[error("chat {chat_id} references unknown message {message_id}")]
    UnknownMessage {
        chat_id: ChatId,
        message_id: MessageId,
    },
    #[error("request {0} has the same user on both ends")]
    SelfRequest(RequestId),
    #[error("request {id} is tagged {direction} but the viewer is not its {expected} party")]
    DirectionMismatch {
        id: RequestId,
        direction: Direction,
        expected: &'static str,
    },
    #[error("skill vocabulary lists '{0}' twice")]
    DuplicateSkill(String),
}

#[derive(Debug, Deserialize)]
struct SeedCurrentUser {
    user_id: UserId,
    email: String,
    joined_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct SeedRequest {
    id: RequestId,
    from_user: UserId,
    to_user: UserId,
    teach_skill: String,
    learn_skill: String,
    status: RequestStatus,
    message: String,
    created_at: DateTime<Utc>,
    direction: Direction,
}

#[derive(Debug, Deserialize)]
struct SeedChat {
    id: ChatId,
    user_id: UserId,
    #[serde(default)]
    message_ids: Vec<MessageId>,
    last_message: String,
    last_activity: DateTime<Utc>,
    #[serde(default)]
    unread_count: u32,
    #[serde(default)]
    is_online: bool,
}

#[derive(Debug, Deserialize)]
struct Seed {
    current_user: SeedCurrentUser,
    users: Vec<User>,
    requests: Vec<SeedRequest>,
    messages: Vec<ChatMessage>,
    chats: Vec<SeedChat>,
    skill_vocabulary: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Storage {
    users: Vec<User>,
    requests: Vec<SwapRequest>,
    messages: Vec<ChatMessage>,
    chats: Vec<Chat>,
    current_user: Profile,
    skill_vocabulary: Vec<String>,
}

impl Storage {
    /// Store holding the bundled fixture: six users, four requests, four messages.
    pub fn seeded() -> Result<Self, StorageError> {
        Self::from_json(SEED_FIXTURE)
    }

    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        let seed: Seed = serde_json::from_str(raw)?;
        let storage = Self::resolve(seed)?;
        info!(
            users = storage.users.len(),
            requests = storage.requests.len(),
            messages = storage.messages.len(),
            chats = storage.chats.len(),
            "entity store seeded"
        );
        Ok(storage)
    }

    fn resolve(seed: Seed) -> Result<Self, StorageError> {
        ensure_unique("user", seed.users.iter().map(|u| u.id.0))?;
        ensure_unique("request", seed.requests.iter().map(|r| r.id.0))?;
        ensure_unique("message", seed.messages.iter().map(|m| m.id.0))?;
        ensure_unique("chat", seed.chats.iter().map(|c| c.id.0))?;

        let mut seen_skills = HashSet::new();
        for skill in &seed.skill_vocabulary {
            if !seen_skills.insert(skill.as_str()) {
                return Err(StorageError::DuplicateSkill(skill.clone()));
            }
        }

        let by_id: HashMap<UserId, &User> = seed.users.iter().map(|u| (u.id, u)).collect();
        let lookup = |context: String, user_id: UserId| {
            by_id
                .get(&user_id)
                .map(|user| (*user).clone())
                .ok_or(StorageError::UnknownUser { context, user_id })
        };

        let viewer_id = seed.current_user.user_id;
        let current_user = Profile {
            user: lookup("current user".to_string(), viewer_id)?,
            email: seed.current_user.email,
            joined_date: seed.current_user.joined_date,
        };

        let mut requests = Vec::with_capacity(seed.requests.len());
        for raw in seed.requests {
            if raw.from_user == raw.to_user {
                return Err(StorageError::SelfRequest(raw.id));
            }
            let (viewer_side, expected) = match raw.direction {
                Direction::Incoming => (raw.to_user, "destination"),
                Direction::Outgoing => (raw.from_user, "origin"),
            };
            if viewer_side != viewer_id {
                return Err(StorageError::DirectionMismatch {
                    id: raw.id,
                    direction: raw.direction,
                    expected,
                });
            }
            requests.push(SwapRequest {
                id: raw.id,
                from_user: lookup(format!("request {}", raw.id), raw.from_user)?,
                to_user: lookup(format!("request {}", raw.id), raw.to_user)?,
                teach_skill: raw.teach_skill,
                learn_skill: raw.learn_skill,
                status: raw.status,
                message: raw.message,
                created_at: raw.created_at,
                direction: raw.direction,
            });
        }

        for message in &seed.messages {
            lookup(format!("message {}", message.id), message.sender_id)?;
        }

        let messages_by_id: HashMap<MessageId, &ChatMessage> =
            seed.messages.iter().map(|m| (m.id, m)).collect();
        let mut chats = Vec::with_capacity(seed.chats.len());
        for raw in seed.chats {
            let messages = raw
                .message_ids
                .iter()
                .map(|message_id| {
                    messages_by_id
                        .get(message_id)
                        .map(|m| (*m).clone())
                        .ok_or(StorageError::UnknownMessage {
                            chat_id: raw.id,
                            message_id: *message_id,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            chats.push(Chat {
                id: raw.id,
                user: lookup(format!("chat {}", raw.id), raw.user_id)?,
                messages,
                last_message: raw.last_message,
                last_activity: raw.last_activity,
                unread_count: raw.unread_count,
                is_online: raw.is_online,
            });
        }

        Ok(Self {
            users: seed.users,
            requests,
            messages: seed.messages,
            chats,
            current_user,
            skill_vocabulary: seed.skill_vocabulary,
        })
    }

    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    pub fn list_requests(&self) -> &[SwapRequest] {
        &self.requests
    }

    pub fn list_messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn list_chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn current_user(&self) -> &Profile {
        &self.current_user
    }

    pub fn skill_vocabulary(&self) -> &[String] {
        &self.skill_vocabulary
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }
}

fn ensure_unique(kind: &'static str, ids: impl Iterator<Item = i64>) -> Result<(), StorageError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StorageError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

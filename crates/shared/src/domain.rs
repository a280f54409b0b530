use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseKeyError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(UserId);
id_newtype!(RequestId);
id_newtype!(MessageId);
id_newtype!(ChatId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl RequestStatus {
    /// Fixed rank used by the `status` request ordering.
    pub fn rank(self) -> u8 {
        match self {
            RequestStatus::Pending => 0,
            RequestStatus::Accepted => 1,
            RequestStatus::Rejected => 2,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a request the viewer is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Incoming => "incoming",
            Direction::Outgoing => "outgoing",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Direction::Incoming, Direction::Outgoing]
            .into_iter()
            .find(|direction| direction.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKeyError::new("direction", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub bio: String,
    pub avatar: String,
    pub teach_skills: Vec<String>,
    pub learn_skills: Vec<String>,
    pub rating: f64,
    pub swaps_completed: u32,
}

impl User {
    /// First character of each word of the display name.
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// The viewer: a user record plus the account details only the owner sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(flatten)]
    pub user: User,
    pub email: String,
    pub joined_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRequest {
    pub id: RequestId,
    pub from_user: User,
    pub to_user: User,
    pub teach_skill: String,
    pub learn_skill: String,
    pub status: RequestStatus,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub direction: Direction,
}

impl SwapRequest {
    /// The party on the other side from the viewer.
    pub fn counterpart(&self) -> &User {
        match self.direction {
            Direction::Incoming => &self.from_user,
            Direction::Outgoing => &self.to_user,
        }
    }

    /// Skill the viewer teaches in this swap.
    pub fn viewer_teaches(&self) -> &str {
        match self.direction {
            Direction::Incoming => &self.learn_skill,
            Direction::Outgoing => &self.teach_skill,
        }
    }

    /// Skill the counterpart teaches in this swap.
    pub fn counterpart_teaches(&self) -> &str {
        match self.direction {
            Direction::Incoming => &self.teach_skill,
            Direction::Outgoing => &self.learn_skill,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender_id: UserId,
    pub sender_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub is_own: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub user: User,
    pub messages: Vec<ChatMessage>,
    pub last_message: String,
    pub last_activity: DateTime<Utc>,
    pub unread_count: u32,
    pub is_online: bool,
}

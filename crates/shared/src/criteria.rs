//! Sort keys and filters chosen in the Explore and Requests views.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{domain::RequestStatus, error::ParseKeyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserSortKey {
    #[default]
    Rating,
    Swaps,
    Name,
}

impl UserSortKey {
    pub const ALL: [UserSortKey; 3] = [UserSortKey::Rating, UserSortKey::Swaps, UserSortKey::Name];

    pub fn as_str(self) -> &'static str {
        match self {
            UserSortKey::Rating => "rating",
            UserSortKey::Swaps => "swaps",
            UserSortKey::Name => "name",
        }
    }
}

impl FromStr for UserSortKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKeyError::new("user sort key", s))
    }
}

impl fmt::Display for UserSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestSortKey {
    #[default]
    Newest,
    Oldest,
    Status,
}

impl RequestSortKey {
    pub const ALL: [RequestSortKey; 3] = [
        RequestSortKey::Newest,
        RequestSortKey::Oldest,
        RequestSortKey::Status,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RequestSortKey::Newest => "newest",
            RequestSortKey::Oldest => "oldest",
            RequestSortKey::Status => "status",
        }
    }
}

impl FromStr for RequestSortKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKeyError::new("request sort key", s))
    }
}

impl fmt::Display for RequestSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status filter with the `all` sentinel. Serialized as its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(RequestStatus),
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Only(RequestStatus::Pending)),
            "accepted" => Ok(StatusFilter::Only(RequestStatus::Accepted)),
            "rejected" => Ok(StatusFilter::Only(RequestStatus::Rejected)),
            _ => Err(ParseKeyError::new("status filter", s)),
        }
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = ParseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(value: StatusFilter) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Notices shown to the user and side effects requested by view reducers.

use serde::Serialize;
use shared::error::{SwapError, ValidationError};

use crate::auth::AuthRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// Transient toast notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

impl From<ValidationError> for Notice {
    fn from(error: ValidationError) -> Self {
        Notice::destructive(error.title(), error.description())
    }
}

impl From<&SwapError> for Notice {
    fn from(error: &SwapError) -> Self {
        let title = match error {
            SwapError::UnknownRequest(_) | SwapError::UnknownUser(_) => "Not Found",
            SwapError::NotIncoming(_) | SwapError::AlreadyResolved { .. } => "Request Unchanged",
            SwapError::SelfSwap | SwapError::NoSkills(_) | SwapError::DuplicatePending(_) => {
                "Cannot Request Swap"
            }
        };
        Notice::destructive(title, error.to_string())
    }
}

/// Work a reducer asks the app root to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Notice),
    Authenticate(AuthRequest),
}

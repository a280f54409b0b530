use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{RequestId, RequestStatus, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    NotFound,
    InvalidTransition,
    Internal,
}

/// Serializable error surface for front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseKeyError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseKeyError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl From<ParseKeyError> for AppError {
    fn from(value: ParseKeyError) -> Self {
        AppError::new(ErrorCode::Validation, value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route for path '{0}'")]
pub struct RouteError(pub String);

/// Form validation failures. Each one becomes a destructive notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required fields are missing")]
    MissingFields,
    #[error("email address has no '@'")]
    InvalidEmail,
    #[error("password is shorter than {min} characters")]
    PasswordTooShort { min: usize },
    #[error("password and confirmation differ")]
    PasswordMismatch,
    #[error("no teaching skill selected")]
    NoTeachSkills,
    #[error("no learning goal selected")]
    NoLearnSkills,
}

impl ValidationError {
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "Missing Information",
            ValidationError::InvalidEmail => "Invalid Email",
            ValidationError::PasswordTooShort { .. } => "Password Too Short",
            ValidationError::PasswordMismatch => "Passwords Don't Match",
            ValidationError::NoTeachSkills => "Add Teaching Skills",
            ValidationError::NoLearnSkills => "Add Learning Goals",
        }
    }

    pub fn description(&self) -> String {
        match self {
            ValidationError::MissingFields => "Please fill in all required fields.".to_string(),
            ValidationError::InvalidEmail => "Please enter a valid email address.".to_string(),
            ValidationError::PasswordTooShort { min } => {
                format!("Password must be at least {min} characters long.")
            }
            ValidationError::PasswordMismatch => {
                "Please make sure your passwords match.".to_string()
            }
            ValidationError::NoTeachSkills => {
                "Please add at least one skill you can teach.".to_string()
            }
            ValidationError::NoLearnSkills => {
                "Please add at least one skill you want to learn.".to_string()
            }
        }
    }
}

impl From<RouteError> for AppError {
    fn from(value: RouteError) -> Self {
        AppError::new(ErrorCode::NotFound, value.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        AppError::new(ErrorCode::Validation, value.description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("request {0} does not exist")]
    UnknownRequest(RequestId),
    #[error("user {0} does not exist")]
    UnknownUser(UserId),
    #[error("request {0} was sent by the viewer and cannot be answered")]
    NotIncoming(RequestId),
    #[error("request {id} is already {status}")]
    AlreadyResolved { id: RequestId, status: RequestStatus },
    #[error("cannot propose a swap with yourself")]
    SelfSwap,
    #[error("user {0} has no skills to exchange")]
    NoSkills(UserId),
    #[error("a request to user {0} is already pending")]
    DuplicatePending(UserId),
}

impl From<SwapError> for AppError {
    fn from(value: SwapError) -> Self {
        let code = match value {
            SwapError::UnknownRequest(_) | SwapError::UnknownUser(_) => ErrorCode::NotFound,
            SwapError::NotIncoming(_) | SwapError::AlreadyResolved { .. } => {
                ErrorCode::InvalidTransition
            }
            SwapError::SelfSwap | SwapError::NoSkills(_) | SwapError::DuplicatePending(_) => {
                ErrorCode::Validation
            }
        };
        AppError::new(code, value.to_string())
    }
}

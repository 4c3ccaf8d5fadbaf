use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    IncompleteForm,
    UnknownCourse,
    InvalidPrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("Please fill all fields!")]
    IncompleteForm,
    #[error("Unknown course '{0}'; use starter, main or dessert")]
    UnknownCourse(String),
    #[error("Invalid price '{0}'; enter an amount such as 40 or R 75.50")]
    InvalidPrice(String),
}

impl MenuError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::IncompleteForm => ErrorCode::IncompleteForm,
            Self::UnknownCourse(_) => ErrorCode::UnknownCourse,
            Self::InvalidPrice(_) => ErrorCode::InvalidPrice,
        }
    }
}

/// User-facing form of a [`MenuError`], shown as a blocking notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub code: ErrorCode,
    pub message: String,
}

impl Notice {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&MenuError> for Notice {
    fn from(value: &MenuError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}

impl From<MenuError> for Notice {
    fn from(value: MenuError) -> Self {
        Self::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_carries_code_and_user_message() {
        let notice = Notice::from(MenuError::InvalidPrice("forty".into()));
        assert_eq!(notice.code, ErrorCode::InvalidPrice);
        assert_eq!(
            notice.message,
            "Invalid price 'forty'; enter an amount such as 40 or R 75.50"
        );
    }

    #[test]
    fn error_codes_serialize_snake_case() {
        let json = serde_json::to_string(&ErrorCode::IncompleteForm).expect("json");
        assert_eq!(json, "\"incomplete_form\"");
    }
}

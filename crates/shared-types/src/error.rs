use thiserror::Error;

/// Rejections for form values that cannot be turned into [`crate::LeaseFacts`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown move-in condition '{0}'. Expected one of: renoviert, unrenoviert, teilrenoviert")]
    UnknownMoveInCondition(String),

    #[error("Unknown current condition '{0}'. Expected one of: gut, normal, stark")]
    UnknownCurrentCondition(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub mod error;
pub mod types;

pub use error::ParseError;
pub use types::{
    Assessment, AssessmentStatus, CurrentCondition, InvalidClause, LeaseFacts, MoveInCondition,
    Precedent, PrecedentKey, ValidClause,
};

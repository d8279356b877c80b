use super::messages::Message;
use serde::Serialize;

/// Result value of a storage write: a success flag and a short message.
///
/// Storage operations never surface engine errors to callers; every fault is
/// folded into an `Outcome` carrying user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    /// Successful outcome.
    pub fn ok(message: Message) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn fail(message: impl ToString) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

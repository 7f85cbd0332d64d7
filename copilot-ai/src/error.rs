use thiserror::Error;

/// The only failure type returned by [`crate::ResponseGenerator::generate`]. Display is the
/// message shown to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Conversation not found")]
    ConversationNotFound,

    #[error("Conversation has no messages")]
    NoMessages,

    #[error("No conversation context available")]
    NoContext,

    /// Message reported by the model API, passed through verbatim.
    #[error("{0}")]
    Api(String),

    #[error("Failed to generate AI response")]
    Failed,
}

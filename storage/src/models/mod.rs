mod ai_conversation_record;
mod message_record;

pub use ai_conversation_record::AiConversationRecord;
pub use message_record::{MessageRecord, NewMessage};

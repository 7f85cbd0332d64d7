//! Unit tests for [`ContextBuilder::build_context`]: selection, window size, ordering and
//! formatting.

use crate::context_builder::{ContextBuilder, DEFAULT_MAX_MESSAGES};
use chrono::{DateTime, Duration, TimeZone, Utc};
use copilot_core::{Conversation, Message, MessageType, Sender};
use prompt::MessageRole;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

fn message(id: i64, kind: MessageType, content: Option<&str>, minute: i64) -> Message {
    Message {
        id,
        conversation_id: 1,
        message_type: kind,
        content: content.map(str::to_string),
        sender: Sender::new(match kind {
            MessageType::Incoming => "Ana",
            _ => "Agent Bo",
        }),
        created_at: base_time() + Duration::minutes(minute),
    }
}

/// **Test: Default window is 15 messages.**
#[test]
fn test_default_max_messages() {
    assert_eq!(ContextBuilder::default().max_messages(), DEFAULT_MAX_MESSAGES);
    assert_eq!(DEFAULT_MAX_MESSAGES, 15);
    assert_eq!(ContextBuilder::new().with_max_messages(3).max_messages(), 3);
}

/// **Test: Incoming gets a sender prefix and user role; outgoing is assistant with trimmed content.**
#[test]
fn test_formats_roles_and_content() {
    let conversation = Conversation::new(
        1,
        vec![
            message(1, MessageType::Incoming, Some("  Where is my order?  "), 0),
            message(2, MessageType::Outgoing, Some("\nIt ships tomorrow.\n"), 1),
        ],
    );

    let context = ContextBuilder::default().build_context(&conversation);

    assert_eq!(context.len(), 2);
    assert_eq!(context[0].role, MessageRole::User);
    assert_eq!(context[0].content, "Ana: Where is my order?");
    assert_eq!(context[0].sender_name, "Ana");
    assert_eq!(context[0].timestamp, "2024-03-01T09:00:00+00:00");
    assert_eq!(context[1].role, MessageRole::Assistant);
    assert_eq!(context[1].content, "It ships tomorrow.");
    assert_eq!(context[1].sender_name, "Agent Bo");
}

/// **Test: Activity/template messages and null/empty content never enter the context.**
#[test]
fn test_filters_non_conversational_and_empty() {
    let conversation = Conversation::new(
        1,
        vec![
            message(1, MessageType::Activity, Some("Conversation assigned"), 0),
            message(2, MessageType::Incoming, None, 1),
            message(3, MessageType::Incoming, Some(""), 2),
            message(4, MessageType::Template, Some("Survey"), 3),
            message(5, MessageType::Outgoing, Some("Hello!"), 4),
        ],
    );

    let context = ContextBuilder::default().build_context(&conversation);

    assert_eq!(context.len(), 1);
    assert_eq!(context[0].content, "Hello!");
}

/// **Test: Whitespace-only content qualifies and is trimmed to empty.**
#[test]
fn test_whitespace_only_content_qualifies() {
    let conversation = Conversation::new(1, vec![message(1, MessageType::Outgoing, Some("   "), 0)]);

    let context = ContextBuilder::default().build_context(&conversation);

    assert_eq!(context.len(), 1);
    assert_eq!(context[0].content, "");
}

/// **Test: With 20 qualifying messages only the newest 15 remain, oldest first.**
#[test]
fn test_keeps_newest_window_in_chronological_order() {
    let messages = (0..20)
        .map(|i| {
            let kind = if i % 2 == 0 {
                MessageType::Incoming
            } else {
                MessageType::Outgoing
            };
            message(i, kind, Some(format!("m{}", i).as_str()), i)
        })
        .collect();
    let conversation = Conversation::new(1, messages);

    let context = ContextBuilder::default().build_context(&conversation);

    assert_eq!(context.len(), 15);
    assert_eq!(context[0].content, "m5");
    assert_eq!(context[14].content, "m19");
    assert_eq!(context[1].content, "Ana: m6");
}

/// **Test: Input order does not matter; creation time decides.**
#[test]
fn test_orders_by_creation_time_not_input_order() {
    let conversation = Conversation::new(
        1,
        vec![
            message(3, MessageType::Outgoing, Some("third"), 30),
            message(1, MessageType::Incoming, Some("first"), 10),
            message(2, MessageType::Incoming, Some("second"), 20),
        ],
    );

    let context = ContextBuilder::new()
        .with_max_messages(2)
        .build_context(&conversation);

    let contents: Vec<&str> = context.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["Ana: second", "third"]);
}

/// **Test: A conversation without qualifying messages yields an empty context.**
#[test]
fn test_empty_result_is_valid() {
    let conversation = Conversation::new(1, vec![message(1, MessageType::Activity, Some("x"), 0)]);
    assert!(ContextBuilder::default().build_context(&conversation).is_empty());
    assert!(ContextBuilder::default()
        .build_context(&Conversation::new(2, vec![]))
        .is_empty());
}

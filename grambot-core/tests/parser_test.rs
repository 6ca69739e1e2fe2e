//! Tests for the raw-JSON → domain parser: chat classification, user
//! extraction, and command derivation.

use grambot_core::parser::{parse_chat, parse_message, parse_user};
use grambot_core::Chat;
use serde_json::json;

#[test]
fn test_parse_chat_private() {
    let raw = json!({
        "id": 100,
        "type": "private",
        "username": "alice",
        "first_name": "Alice"
    });
    let chat = parse_chat(&raw).unwrap();
    assert_eq!(chat.id(), 100);
    assert_eq!(chat.kind(), "private");
    match chat {
        Chat::Private {
            username,
            first_name,
            last_name,
            ..
        } => {
            assert_eq!(username.as_deref(), Some("alice"));
            assert_eq!(first_name.as_deref(), Some("Alice"));
            assert_eq!(last_name, None);
        }
        other => panic!("expected private chat, got {:?}", other),
    }
}

#[test]
fn test_parse_chat_group_and_supergroup() {
    let group = parse_chat(&json!({"id": -200, "type": "group", "title": "team"})).unwrap();
    assert_eq!(group.id(), -200);
    assert_eq!(group.kind(), "group");

    let supergroup = parse_chat(&json!({"id": -300, "type": "supergroup"})).unwrap();
    assert_eq!(supergroup.kind(), "supergroup");
    match supergroup {
        Chat::Supergroup { title, .. } => assert_eq!(title, None),
        other => panic!("expected supergroup, got {:?}", other),
    }
}

#[test]
fn test_parse_chat_unknown_kind_fails_with_record() {
    let raw = json!({"id": 1, "type": "channel"});
    let err = parse_chat(&raw).unwrap_err();
    assert_eq!(err.record, raw);
    assert!(err.reason.contains("channel"), "reason was: {}", err.reason);
}

#[test]
fn test_parse_user_optionals_default_to_none() {
    let user = parse_user(&json!({"id": 7, "is_bot": false, "first_name": "Ada"})).unwrap();
    assert_eq!(user.id, 7);
    assert!(!user.is_bot);
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, None);
    assert_eq!(user.username, None);

    let full = parse_user(&json!({
        "id": 8,
        "is_bot": true,
        "first_name": "Bot",
        "last_name": "Ford",
        "username": "fordbot"
    }))
    .unwrap();
    assert_eq!(full.last_name.as_deref(), Some("Ford"));
    assert_eq!(full.username.as_deref(), Some("fordbot"));
}

#[test]
fn test_parse_user_missing_required_field_fails() {
    let raw = json!({"is_bot": false, "first_name": "Ada"});
    let err = parse_user(&raw).unwrap_err();
    assert_eq!(err.record, raw);
}

fn message_record(text: &str, entities: serde_json::Value) -> serde_json::Value {
    json!({
        "message_id": 55,
        "date": 1_700_000_000,
        "chat": {"id": 100, "type": "private", "first_name": "Alice"},
        "from": {"id": 7, "is_bot": false, "first_name": "Alice"},
        "text": text,
        "entities": entities
    })
}

#[test]
fn test_parse_message_command_with_mention() {
    let raw = message_record(
        "/echo@mybot hello world",
        json!([{"type": "bot_command", "offset": 0, "length": 12}]),
    );
    let msg = parse_message(&raw, "mybot").unwrap();

    assert!(msg.is_command);
    assert_eq!(msg.command, "echo");
    assert_eq!(msg.text.as_deref(), Some("hello world"));
    assert_eq!(msg.id, 55);
    assert_eq!(msg.chat_id(), 100);
    assert_eq!(msg.sender.as_ref().map(|u| u.id), Some(7));
}

#[test]
fn test_parse_message_bare_command() {
    let raw = message_record(
        "/start",
        json!([{"type": "bot_command", "offset": 0, "length": 6}]),
    );
    let msg = parse_message(&raw, "mybot").unwrap();
    assert!(msg.is_command);
    assert_eq!(msg.command, "start");
    assert_eq!(msg.text.as_deref(), Some(""));
}

#[test]
fn test_parse_message_only_first_command_entity_counts() {
    let raw = message_record(
        "/first /second",
        json!([
            {"type": "bot_command", "offset": 0, "length": 6},
            {"type": "bot_command", "offset": 7, "length": 7}
        ]),
    );
    let msg = parse_message(&raw, "").unwrap();
    assert_eq!(msg.command, "first");
    assert_eq!(msg.text.as_deref(), Some("/second"));
}

#[test]
fn test_parse_message_without_command_entity() {
    let raw = message_record(
        "say /echo to me",
        json!([{"type": "mention", "offset": 0, "length": 3}]),
    );
    let msg = parse_message(&raw, "mybot").unwrap();

    assert!(!msg.is_command);
    assert_eq!(msg.command, "");
    assert_eq!(msg.text.as_deref(), Some("say /echo to me"));
}

#[test]
fn test_parse_message_plain_text() {
    let raw = json!({
        "message_id": 1,
        "date": 0,
        "chat": {"id": -5, "type": "group", "title": "team"},
        "text": "hello"
    });
    let msg = parse_message(&raw, "mybot").unwrap();
    assert!(!msg.is_command);
    assert_eq!(msg.sender, None);
    assert_eq!(msg.entities, None);
    assert_eq!(msg.text.as_deref(), Some("hello"));
}

#[test]
fn test_parse_message_malformed_entity_fails() {
    // A bot_command entity without `length` is an explicit parse failure,
    // carrying the full message record.
    let raw = message_record("/hi", json!([{"type": "bot_command", "offset": 0}]));
    let err = parse_message(&raw, "mybot").unwrap_err();
    assert_eq!(err.record, raw);
    assert!(err.reason.contains("length"), "reason was: {}", err.reason);
}

#[test]
fn test_parse_message_entities_must_be_an_array() {
    let raw = message_record("/hi", json!("bot_command"));
    assert!(parse_message(&raw, "mybot").is_err());
}

#[test]
fn test_parse_message_command_entity_without_text_is_not_a_command() {
    let raw = json!({
        "message_id": 2,
        "date": 0,
        "chat": {"id": 1, "type": "private"},
        "entities": [{"type": "bot_command", "offset": 0, "length": 3}]
    });
    let msg = parse_message(&raw, "mybot").unwrap();
    assert!(!msg.is_command);
    assert_eq!(msg.command, "");
    assert_eq!(msg.text, None);
}

#[test]
fn test_parse_message_unknown_chat_kind_propagates() {
    let raw = json!({
        "message_id": 3,
        "date": 0,
        "chat": {"id": 1, "type": "channel"},
        "text": "hi"
    });
    assert!(parse_message(&raw, "mybot").is_err());
}

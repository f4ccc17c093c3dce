//! Wire-format checks for the response shapes the frontend consumes.

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use helpdesk_models::models::{
    Attachment, ConversationResponse, Message, MessageCreate, MessageResponse, MessageStatus,
    MessageType, PaginatedMessages, TypingStatus, UserProfile, UserRole,
};

fn sender() -> UserProfile {
    UserProfile {
        id: Uuid::parse_str("0f8fad5b-d9cb-469f-a165-70867728950e").unwrap(),
        username: "agent_smith".into(),
        full_name: "Agent Smith".into(),
        role: UserRole::Agent,
        department: Some("Support".into()),
        avatar_url: None,
    }
}

fn sample_message() -> Message {
    let payload: MessageCreate = serde_json::from_value(json!({
        "content": "Hello",
        "ticket_id": "550e8400-e29b-41d4-a716-446655440000"
    }))
    .unwrap();

    let created = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    Message::create(
        Uuid::parse_str("7c9e6679-7425-40de-944b-e07fc1f90ae7").unwrap(),
        sender().id,
        payload,
        created,
    )
    .unwrap()
}

#[test]
fn message_response_wire_shape() {
    let response = MessageResponse::from_message(&sample_message(), sender(), Vec::new());
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["id"], "7c9e6679-7425-40de-944b-e07fc1f90ae7");
    assert_eq!(value["ticket_id"], "550e8400-e29b-41d4-a716-446655440000");
    assert_eq!(value["sender"]["username"], "agent_smith");
    assert_eq!(value["sender"]["role"], "agent");
    assert_eq!(value["content"], "Hello");
    assert_eq!(value["message_type"], "text");
    assert_eq!(value["status"], "sent");
    assert_eq!(value["is_edited"], false);

    // Timestamps go out as RFC 3339.
    assert!(value["created_at"].as_str().unwrap().starts_with("2025-06-01T12:00:00"));

    // Absent optionals are explicit nulls, not omitted keys.
    assert_eq!(value["edited_at"], Value::Null);
    assert_eq!(value["reply_to"], Value::Null);
    assert!(value.get("edited_at").is_some());
    assert!(value.get("reply_to").is_some());

    assert_eq!(value["attachments"], json!([]));
}

#[test]
fn message_response_round_trip() {
    let mut message = sample_message();
    message.reply_to = Some(Uuid::new_v4());

    let attachment = Attachment {
        id: Uuid::new_v4(),
        filename: "log.txt".into(),
        file_size: 512,
        content_type: "text/plain".into(),
        file_path: "uploads/log.txt".into(),
        uploaded_by: sender().id,
        uploaded_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 5, 0).unwrap(),
    };

    let response = MessageResponse::from_message(&message, sender(), vec![attachment]);
    let encoded = serde_json::to_value(&response).unwrap();
    let decoded: MessageResponse = serde_json::from_value(encoded.clone()).unwrap();
    let re_encoded = serde_json::to_value(&decoded).unwrap();

    assert_eq!(encoded, re_encoded);
    assert_eq!(decoded.content, response.content);
    assert_eq!(decoded.status, MessageStatus::Sent);
    assert_eq!(decoded.message_type, MessageType::Text);
    assert_eq!(decoded.reply_to, message.reply_to);
    assert_eq!(decoded.attachments.len(), 1);
    assert_eq!(decoded.attachments[0].filename, "log.txt");
}

#[test]
fn paginated_envelope_is_flat() {
    let response = MessageResponse::from_message(&sample_message(), sender(), Vec::new());
    let page = PaginatedMessages::new(vec![response], 25, 3, 10).unwrap();
    let value = serde_json::to_value(&page).unwrap();

    for key in ["messages", "total", "page", "per_page", "pages", "has_next", "has_prev"] {
        assert!(value.get(key).is_some(), "missing envelope key {key}");
    }
    assert_eq!(value["total"], 25);
    assert_eq!(value["page"], 3);
    assert_eq!(value["per_page"], 10);
    assert_eq!(value["pages"], 3);
    assert_eq!(value["has_next"], false);
    assert_eq!(value["has_prev"], true);

    let decoded: PaginatedMessages = serde_json::from_value(value).unwrap();
    assert_eq!(decoded.page_info.pages, 3);
    assert_eq!(decoded.messages.len(), 1);
}

#[test]
fn conversation_wire_shape() {
    let message = sample_message();
    let last = message.created_at;
    let response = MessageResponse::from_message(&message, sender(), Vec::new());
    let conversation =
        ConversationResponse::new(message.ticket_id, vec![response], vec![sender()], Utc::now());

    let value = serde_json::to_value(&conversation).unwrap();
    assert_eq!(value["ticket_id"], "550e8400-e29b-41d4-a716-446655440000");
    assert_eq!(value["total_messages"], 1);
    assert_eq!(value["participants"].as_array().unwrap().len(), 1);
    assert_eq!(
        value["last_activity"],
        serde_json::to_value(last).unwrap()
    );
}

#[test]
fn typing_status_wire_shape() {
    let ts = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap();
    let signal = TypingStatus::new(
        Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
        sender(),
        true,
        Some(ts),
    );

    let value = serde_json::to_value(&signal).unwrap();
    assert_eq!(value["ticket_id"], "550e8400-e29b-41d4-a716-446655440000");
    assert_eq!(value["is_typing"], true);
    assert_eq!(value["user"]["username"], "agent_smith");
    assert_eq!(value["timestamp"], serde_json::to_value(ts).unwrap());
}

#[test]
fn enum_labels_survive_round_trip() {
    for (label, variant) in [
        ("text", MessageType::Text),
        ("file", MessageType::File),
        ("image", MessageType::Image),
        ("system", MessageType::System),
    ] {
        let quoted = format!("\"{label}\"");
        assert_eq!(serde_json::to_string(&variant).unwrap(), quoted);
        assert_eq!(serde_json::from_str::<MessageType>(&quoted).unwrap(), variant);
    }

    for (label, variant) in [
        ("sent", MessageStatus::Sent),
        ("delivered", MessageStatus::Delivered),
        ("read", MessageStatus::Read),
        ("failed", MessageStatus::Failed),
    ] {
        let quoted = format!("\"{label}\"");
        assert_eq!(serde_json::to_string(&variant).unwrap(), quoted);
        assert_eq!(serde_json::from_str::<MessageStatus>(&quoted).unwrap(), variant);
    }
}

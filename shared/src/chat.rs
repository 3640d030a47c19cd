//! 群组与消息模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 服务端定义的通知/聊天群组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(flatten, with = "crate::record_id")]
    pub id: String,
    pub groupname: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub admin: Option<String>,
}

/// 历史消息记录
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    #[serde(flatten, with = "crate::record_id")]
    pub id: String,
    pub text: String,
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(rename = "createdAt", default, with = "crate::date::flexible_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "senderName", default)]
    pub sender_name: Option<String>,
}

/// 实时通道推送的 `group-message` 事件载荷
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IncomingGroupMessage {
    pub from: String,
    pub message: String,
    #[serde(rename = "senderName", default)]
    pub sender_name: Option<String>,
    #[serde(rename = "groupId", default)]
    pub group_id: Option<String>,
    #[serde(rename = "createdAt", default, with = "crate::date::flexible_option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// 客户端发出的 `group-message` 事件载荷
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingGroupMessage {
    #[serde(rename = "groupId")]
    pub group_id: String,
    pub message: String,
}

/// 界面展示用的消息气泡
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Option<String>,
    pub sender: String,
    pub text: String,
    pub sent_at: Option<DateTime<Utc>>,
}

impl From<Message> for ChatMessage {
    fn from(msg: Message) -> Self {
        Self {
            id: Some(msg.id),
            sender: msg.sender_name.unwrap_or(msg.from),
            text: msg.text,
            sent_at: msg.created_at,
        }
    }
}

impl From<IncomingGroupMessage> for ChatMessage {
    fn from(msg: IncomingGroupMessage) -> Self {
        Self {
            id: None,
            sender: msg.sender_name.unwrap_or(msg.from),
            text: msg.message,
            sent_at: msg.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn incoming_event_is_attributed_to_sender() {
        let incoming: IncomingGroupMessage =
            serde_json::from_value(json!({ "from": "X", "message": "hi" })).unwrap();
        let bubble = ChatMessage::from(incoming);
        assert_eq!(bubble.sender, "X");
        assert_eq!(bubble.text, "hi");
        assert_eq!(bubble.sent_at, None);
    }

    #[test]
    fn history_prefers_sender_name() {
        let msg: Message = serde_json::from_value(json!({
            "_id": "m1",
            "text": "Assembly at 9",
            "from": "u-42",
            "senderName": "Dr. Rao",
            "createdAt": "2024-03-01T08:00:00Z"
        }))
        .unwrap();
        let bubble = ChatMessage::from(msg);
        assert_eq!(bubble.sender, "Dr. Rao");
        assert_eq!(bubble.id.as_deref(), Some("m1"));
    }

    #[test]
    fn group_and_message_accept_both_id_keys() {
        let group: Group = serde_json::from_value(json!({
            "_id": "64f0aa",
            "id": "g1",
            "groupname": "CSE"
        }))
        .unwrap();
        assert_eq!(group.id, "g1");

        let msg: Message = serde_json::from_value(json!({
            "_id": "64f0bb",
            "id": "m1",
            "text": "Assembly at 9",
            "from": "u-42"
        }))
        .unwrap();
        assert_eq!(msg.id, "m1");

        let msg: Message =
            serde_json::from_value(json!({ "_id": "m2", "text": "ok", "from": "u-1" })).unwrap();
        assert_eq!(msg.id, "m2");
    }

    #[test]
    fn outgoing_payload_uses_wire_names() {
        let out = OutgoingGroupMessage {
            group_id: "g1".into(),
            message: "hello".into(),
        };
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({ "groupId": "g1", "message": "hello" })
        );
    }
}

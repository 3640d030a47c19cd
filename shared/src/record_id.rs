//! 记录主键
//!
//! 服务端记录可能只带 `id`，可能只带 `_id`，序列化虚拟字段时两者都带。
//! 统一取 `id`，缺失或为空时回退到 `_id`。
//!
//! 用法：`#[serde(flatten, with = "crate::record_id")] pub id: String`

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serializer, de::Error};

#[derive(Deserialize)]
struct Keys {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "_id", default)]
    object_id: Option<String>,
}

/// `id` 优先，其次 `_id`；空串视为缺失
pub fn resolve(id: Option<String>, object_id: Option<String>) -> Option<String> {
    let present = |s: &String| !s.trim().is_empty();
    id.filter(present).or_else(|| object_id.filter(present))
}

pub fn serialize<S: Serializer>(id: &str, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("id", id)?;
    map.end()
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let keys = Keys::deserialize(deserializer)?;
    resolve(keys.id, keys.object_id).ok_or_else(|| D::Error::missing_field("id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_wins_over_object_id() {
        assert_eq!(
            resolve(Some("a".into()), Some("b".into())).as_deref(),
            Some("a")
        );
        assert_eq!(resolve(None, Some("b".into())).as_deref(), Some("b"));
        assert_eq!(
            resolve(Some(" ".into()), Some("b".into())).as_deref(),
            Some("b")
        );
        assert_eq!(resolve(None, None), None);
    }
}

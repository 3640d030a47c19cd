//! 时间处理模块
//!
//! 服务端返回的时间戳格式并不统一：既有 RFC 3339，也有表单提交的
//! `YYYY-MM-DD` / `YYYY-MM-DDTHH:MM`。此模块在 API 边界统一解析为 `DateTime<Utc>`。

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";
const INPUT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DISPLAY_FORMAT: &str = "%d %b %Y, %H:%M";

/// 解析服务端或表单中的时间字符串
///
/// 依次接受 RFC 3339、`datetime-local` 输入值、纯日期（按 UTC 零点处理）。
pub fn parse(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, INPUT_DATETIME_FORMAT) {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// 用于界面展示的时间格式
pub fn display(dt: &DateTime<Utc>) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

pub fn display_opt(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(display).unwrap_or_else(|| "-".to_string())
}

/// `#[serde(with = "...")]` 适配：必填时间字段
pub mod flexible {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

/// `#[serde(with = "...")]` 适配：可选时间字段，`null` 与空串都视为缺失
pub mod flexible_option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        dt: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_supported_formats() {
        let rfc = parse("2024-03-01T10:15:00.000Z").unwrap();
        assert_eq!(rfc.hour(), 10);

        let local = parse("2024-03-01T18:30").unwrap();
        assert_eq!(local.minute(), 30);

        let date = parse("2024-03-01").unwrap();
        assert_eq!(date.hour(), 0);

        assert!(parse("yesterday").is_none());
    }

    #[test]
    fn display_uses_day_month_year() {
        let dt = parse("2024-03-01T09:05:00Z").unwrap();
        assert_eq!(display(&dt), "01 Mar 2024, 09:05");
        assert_eq!(display_opt(None), "-");
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod chat;
pub mod date;
pub mod outpass;
pub mod profile;
pub mod protocol;
pub mod record_id;

pub use chat::{ChatMessage, Group, IncomingGroupMessage, Message, OutgoingGroupMessage};
pub use outpass::{
    ApprovalBlock, ApprovalStatus, ApproverRole, BadgeTone, OutpassRequest, RawOutpass,
    Residency, StatusSummary,
};
pub use profile::{Profile, StaffMember};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const STORAGE_TOKEN_KEY: &str = "token";
pub const STORAGE_LOGGED_IN_KEY: &str = "isLoggedIn";
pub const STORAGE_USER_TYPE_KEY: &str = "userType";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const GROUP_MESSAGE_EVENT: &str = "group-message";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 门户中的用户角色
///
/// 序列化标签同时用作 `userType` 存储值和 URL 路径段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Student,
    Staff,
    YearIncharge,
    Warden,
    Watchman,
    Admin,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Student,
        Role::Staff,
        Role::YearIncharge,
        Role::Warden,
        Role::Watchman,
        Role::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Staff => "staff",
            Role::YearIncharge => "year-incharge",
            Role::Warden => "warden",
            Role::Watchman => "watchman",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Staff => "Staff",
            Role::YearIncharge => "Year Incharge",
            Role::Warden => "Warden",
            Role::Watchman => "Watchman",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 无法识别的角色标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// 审批动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Reject => "reject",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_tags_round_trip_through_from_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert_eq!(
            serde_json::to_string(&Role::YearIncharge).unwrap(),
            "\"year-incharge\""
        );
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert_eq!(
            "principal".parse::<Role>(),
            Err(UnknownRole("principal".into()))
        );
        assert!("Staff".parse::<Role>().is_err());
    }
}

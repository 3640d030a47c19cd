//! 外出申请模型
//!
//! `RawOutpass` 是服务端原始记录（审批字段按角色前缀平铺），
//! `OutpassRequest` 是在 API 边界一次性归一化后的规范记录。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 参与审批的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApproverRole {
    Staff,
    YearIncharge,
    Warden,
}

impl ApproverRole {
    pub fn label(&self) -> &'static str {
        match self {
            ApproverRole::Staff => "Staff",
            ApproverRole::YearIncharge => "Year Incharge",
            ApproverRole::Warden => "Warden",
        }
    }
}

/// 单个审批角色的状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
    Declined,
    Unknown(String),
}

impl ApprovalStatus {
    /// 缺失或空串按 `pending` 处理，大小写不敏感
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return ApprovalStatus::Pending;
        };
        match raw.to_ascii_lowercase().as_str() {
            "pending" => ApprovalStatus::Pending,
            "approved" => ApprovalStatus::Approved,
            "rejected" => ApprovalStatus::Rejected,
            "declined" => ApprovalStatus::Declined,
            _ => ApprovalStatus::Unknown(raw.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
            ApprovalStatus::Declined => "declined",
            ApprovalStatus::Unknown(raw) => raw,
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            ApprovalStatus::Approved => BadgeTone::Green,
            ApprovalStatus::Rejected | ApprovalStatus::Declined => BadgeTone::Red,
            ApprovalStatus::Pending | ApprovalStatus::Unknown(_) => BadgeTone::Amber,
        }
    }
}

/// 状态徽章颜色（固定映射）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Amber,
    Green,
    Red,
}

impl BadgeTone {
    /// 任意状态文本到颜色的映射，未知状态沿用 pending 的外观
    pub fn for_status(status: &str) -> Self {
        ApprovalStatus::parse(Some(status)).tone()
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Amber => "badge badge-warning",
            BadgeTone::Green => "badge badge-success",
            BadgeTone::Red => "badge badge-error",
        }
    }
}

/// 学生住宿类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Residency {
    Hostel,
    #[default]
    DayScholar,
}

impl Residency {
    /// 忽略大小写和空白，只有 "hostel" 被视为住校
    pub fn from_raw(raw: &str) -> Self {
        let normalized: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        if normalized == "hostel" {
            Residency::Hostel
        } else {
            Residency::DayScholar
        }
    }
}

/// 某个角色的归一化审批信息
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalBlock {
    pub role: ApproverRole,
    pub status: ApprovalStatus,
    pub approver_name: Option<String>,
    pub remarks: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    /// 仅当原始状态恰好为 "rejected" 时由记录的 `updatedAt` 推导
    pub rejected_at: Option<DateTime<Utc>>,
}

impl ApprovalBlock {
    fn normalize(
        role: ApproverRole,
        status: Option<String>,
        approver_name: Option<String>,
        remarks: Option<String>,
        approved_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        let rejected_at = match status.as_deref() {
            Some("rejected") => updated_at,
            _ => None,
        };
        Self {
            role,
            status: ApprovalStatus::parse(status.as_deref()),
            approver_name: non_empty(approver_name),
            remarks: non_empty(remarks),
            approved_at,
            rejected_at,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// 服务端原始外出记录
#[derive(Debug, Clone, Deserialize)]
pub struct RawOutpass {
    #[serde(flatten, with = "crate::record_id")]
    pub id: String,
    #[serde(rename = "studentId")]
    pub student_id: String,
    #[serde(rename = "studentname")]
    pub student_name: String,
    #[serde(rename = "fromDate", with = "crate::date::flexible")]
    pub from_date: DateTime<Utc>,
    #[serde(rename = "toDate", with = "crate::date::flexible")]
    pub to_date: DateTime<Utc>,
    pub reason: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "createdAt", default, with = "crate::date::flexible_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, with = "crate::date::flexible_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub residencetype: Option<String>,

    #[serde(default)]
    pub staffapprovalstatus: Option<String>,
    #[serde(default)]
    pub staffapprovedby: Option<String>,
    #[serde(default)]
    pub staffremarks: Option<String>,
    #[serde(default, with = "crate::date::flexible_option")]
    pub staffapprovedat: Option<DateTime<Utc>>,

    #[serde(default)]
    pub yearinchargeapprovalstatus: Option<String>,
    #[serde(default)]
    pub yearinchargeapprovedby: Option<String>,
    #[serde(default)]
    pub yearinchargeremarks: Option<String>,
    #[serde(default, with = "crate::date::flexible_option")]
    pub yearinchargeapprovedat: Option<DateTime<Utc>>,

    #[serde(default)]
    pub wardenapprovalstatus: Option<String>,
    #[serde(default)]
    pub wardenapprovedby: Option<String>,
    #[serde(default)]
    pub wardenremarks: Option<String>,
    #[serde(default, with = "crate::date::flexible_option")]
    pub wardenapprovedat: Option<DateTime<Utc>>,
}

/// 归一化后的外出申请
#[derive(Debug, Clone, PartialEq)]
pub struct OutpassRequest {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    pub reason: String,
    /// 服务端计算的总体状态，客户端视为不透明文本
    pub overall_status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub residency: Residency,
    pub staff_approval: ApprovalBlock,
    pub year_incharge_approval: ApprovalBlock,
    pub warden_approval: ApprovalBlock,
}

impl From<RawOutpass> for OutpassRequest {
    fn from(raw: RawOutpass) -> Self {
        let updated_at = raw.updated_at;
        Self {
            staff_approval: ApprovalBlock::normalize(
                ApproverRole::Staff,
                raw.staffapprovalstatus,
                raw.staffapprovedby,
                raw.staffremarks,
                raw.staffapprovedat,
                updated_at,
            ),
            year_incharge_approval: ApprovalBlock::normalize(
                ApproverRole::YearIncharge,
                raw.yearinchargeapprovalstatus,
                raw.yearinchargeapprovedby,
                raw.yearinchargeremarks,
                raw.yearinchargeapprovedat,
                updated_at,
            ),
            warden_approval: ApprovalBlock::normalize(
                ApproverRole::Warden,
                raw.wardenapprovalstatus,
                raw.wardenapprovedby,
                raw.wardenremarks,
                raw.wardenapprovedat,
                updated_at,
            ),
            id: raw.id,
            student_id: raw.student_id,
            student_name: raw.student_name,
            from_date: raw.from_date,
            to_date: raw.to_date,
            reason: raw.reason,
            overall_status: raw.status.unwrap_or_else(|| "pending".to_string()),
            created_at: raw.created_at,
            updated_at,
            residency: raw
                .residencetype
                .as_deref()
                .map(Residency::from_raw)
                .unwrap_or_default(),
        }
    }
}

impl OutpassRequest {
    /// 需要渲染的审批块
    ///
    /// 住校生包含舍监块；走读生完全不包含（而不仅仅是隐藏）。
    pub fn approval_blocks(&self) -> Vec<&ApprovalBlock> {
        let mut blocks = vec![&self.staff_approval, &self.year_incharge_approval];
        if self.residency == Residency::Hostel {
            blocks.push(&self.warden_approval);
        }
        blocks
    }

    pub fn overall_tone(&self) -> BadgeTone {
        BadgeTone::for_status(&self.overall_status)
    }
}

/// 列表页的状态统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusSummary {
    pub fn from_requests(requests: &[OutpassRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut acc, req| {
            match ApprovalStatus::parse(Some(&req.overall_status)) {
                ApprovalStatus::Approved => acc.approved += 1,
                ApprovalStatus::Rejected | ApprovalStatus::Declined => acc.rejected += 1,
                ApprovalStatus::Pending | ApprovalStatus::Unknown(_) => acc.pending += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.pending + self.approved + self.rejected
    }
}

/// 学生提交的外出申请
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyOutpassRequest {
    #[serde(rename = "fromDate", with = "crate::date::flexible")]
    pub from_date: DateTime<Utc>,
    #[serde(rename = "toDate", with = "crate::date::flexible")]
    pub to_date: DateTime<Utc>,
    pub reason: String,
}

#[cfg(test)]
mod tests;

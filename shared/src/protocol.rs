use crate::outpass::{ApplyOutpassRequest, RawOutpass};
use crate::{Decision, Group, Message, Profile, Role, StaffMember};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// API 请求使用的 HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// GET 请求不带 JSON 请求体
    pub fn has_body(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// 描述一个 API 端点的请求/响应关系和元数据
///
/// 大部分端点按角色划分（`/api/<role>/...`），所以路径由请求值计算，而不是固定常量。
/// 标记 `#[serde(skip)]` 的字段只参与拼路径，不进入请求体。
pub trait ApiRequest: Serialize {
    /// 响应类型
    type Response: DeserializeOwned;
    /// HTTP 方法
    const METHOD: HttpMethod;
    /// 相对 API 基地址的路径
    fn path(&self) -> String;
}

/// 通用确认响应（`{"message": "..."}`），可能为空
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

pub type Ack = Option<MessageResponse>;

// =========================================================
// 请求定义 (Request Definitions)
// =========================================================

/// 以指定角色登录
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    #[serde(skip)]
    pub role: Role,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/api/{}/login", self.role)
    }
}

/// 获取当前用户资料
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRequest {
    #[serde(skip)]
    pub role: Role,
}

impl ApiRequest for ProfileRequest {
    type Response = Profile;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/{}/profile", self.role)
    }
}

/// 资料更新（multipart）的路径，请求体由表单部件构造
pub fn profile_update_path(role: Role) -> String {
    format!("/api/{}/profile", role)
}

impl ApiRequest for ApplyOutpassRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/student/outpass".to_string()
    }
}

/// 某角色可见的外出申请列表
#[derive(Debug, Clone, Serialize)]
pub struct ListOutpassRequest {
    #[serde(skip)]
    pub role: Role,
}

impl ApiRequest for ListOutpassRequest {
    type Response = Vec<RawOutpass>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/{}/outpass", self.role)
    }
}

/// 获取单条外出申请
#[derive(Debug, Clone, Serialize)]
pub struct GetOutpassRequest {
    #[serde(skip)]
    pub role: Role,
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for GetOutpassRequest {
    type Response = RawOutpass;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/{}/outpass/{}", self.role, self.id)
    }
}

/// 批准或驳回外出申请
#[derive(Debug, Clone, Serialize)]
pub struct ReviewOutpassRequest {
    #[serde(skip)]
    pub role: Role,
    #[serde(skip)]
    pub id: String,
    #[serde(skip)]
    pub decision: Decision,
    pub remarks: String,
}

impl ApiRequest for ReviewOutpassRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!(
            "/api/{}/outpass/{}/{}",
            self.role,
            self.id,
            self.decision.as_str()
        )
    }
}

/// 教职工名录
#[derive(Debug, Clone, Serialize)]
pub struct ListStaffRequest;

impl ApiRequest for ListStaffRequest {
    type Response = Vec<StaffMember>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/staff".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetStaffRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for GetStaffRequest {
    type Response = StaffMember;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/staff/{}", self.id)
    }
}

/// 管理员：登记教职工
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateStaffRequest {
    pub name: String,
    pub email: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ApiRequest for CreateStaffRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/admin/staff".to_string()
    }
}

/// 审批人或管理员名下的学生
#[derive(Debug, Clone, Serialize)]
pub struct ListStudentsRequest {
    #[serde(skip)]
    pub role: Role,
}

impl ApiRequest for ListStudentsRequest {
    type Response = Vec<Profile>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/{}/students", self.role)
    }
}

/// 当前用户所在群组，没有时返回 `null`（或 404）
#[derive(Debug, Clone, Serialize)]
pub struct MyGroupRequest {
    #[serde(skip)]
    pub role: Role,
}

impl ApiRequest for MyGroupRequest {
    type Response = Option<Group>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/{}/group/my-group", self.role)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupMessagesRequest {
    #[serde(skip)]
    pub role: Role,
    #[serde(skip)]
    pub group_id: String,
}

impl ApiRequest for GroupMessagesRequest {
    type Response = Vec<Message>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/{}/group/{}/messages", self.role, self.group_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_scoped_paths() {
        let review = ReviewOutpassRequest {
            role: Role::YearIncharge,
            id: "42".into(),
            decision: Decision::Reject,
            remarks: "Incomplete".into(),
        };
        assert_eq!(review.path(), "/api/year-incharge/outpass/42/reject");
        assert_eq!(
            serde_json::to_value(&review).unwrap(),
            serde_json::json!({ "remarks": "Incomplete" })
        );

        let login = LoginRequest {
            role: Role::Warden,
            email: "w@jit.edu".into(),
            password: "pw".into(),
        };
        assert_eq!(login.path(), "/api/warden/login");
        assert!(!serde_json::to_string(&login).unwrap().contains("warden"));
    }
}

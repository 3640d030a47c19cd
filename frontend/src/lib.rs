//! 外出通行证门户前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::router`: 路由服务（核心引擎），路由表和守卫规则来自核心库
//! - `auth`: 认证状态管理
//! - `toast`: 全局通知
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod chat;
    pub mod common;
    pub mod dashboard;
    mod icons;
    pub mod login;
    pub mod outpass;
    pub mod profile;
    mod shell;
    pub mod staff;
}
mod config;
mod logging;
mod toast;

use crate::auth::AuthContext;
use crate::components::chat::ChatPage;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::outpass::{
    ApplyOutpassPage, OutpassDetailPage, OutpassListPage, OutpassViewPage, ReviewOutpassPage,
};
use crate::components::profile::{EditProfilePage, ProfilePage};
use crate::components::staff::{NewStaffPage, StaffDetailPage, StaffListPage, StudentsPage};
use crate::toast::{ToastContext, ToastHost};

use leptos::prelude::*;
use outpass::capability::ChannelKind;
use outpass::route::AppRoute;

// 浏览器 API 封装模块
pub(crate) mod web {
    mod http;
    pub mod router;
    pub mod socket;
    mod storage;

    pub use http::FetchClient;
    pub use storage::LocalStorage;
}

use web::router::{Router, RouterOutlet};

pub use logging::init_logging;

/// 日志级别（构建期配置）
pub fn log_level() -> &'static str {
    &config::app_config().log_level
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage role=None /> }.into_any(),
        AppRoute::RoleLogin(role) => view! { <LoginPage role=Some(role) /> }.into_any(),
        AppRoute::Dashboard(role) => view! { <DashboardPage role=role /> }.into_any(),
        AppRoute::Profile(role) => view! { <ProfilePage role=role /> }.into_any(),
        AppRoute::EditProfile(role) => view! { <EditProfilePage role=role /> }.into_any(),
        AppRoute::ApplyOutpass => view! { <ApplyOutpassPage /> }.into_any(),
        AppRoute::Outpasses(role) => view! { <OutpassListPage role=role /> }.into_any(),
        AppRoute::OutpassDetail(role, id) => {
            view! { <OutpassDetailPage role=role id=id /> }.into_any()
        }
        AppRoute::ReviewOutpass(role, id, decision) => {
            view! { <ReviewOutpassPage role=role id=id decision=decision /> }.into_any()
        }
        AppRoute::Students(role) => view! { <StudentsPage role=role /> }.into_any(),
        AppRoute::Notices(role) => {
            view! { <ChatPage role=role kind=ChannelKind::Notices /> }.into_any()
        }
        AppRoute::Chat(role) => view! { <ChatPage role=role kind=ChannelKind::Chat /> }.into_any(),
        AppRoute::OutpassView(id) => view! { <OutpassViewPage id=id /> }.into_any(),
        AppRoute::Staffs => view! { <StaffListPage /> }.into_any(),
        AppRoute::NewStaff => view! { <NewStaffPage /> }.into_any(),
        AppRoute::StaffDetail(id) => view! { <StaffDetailPage id=id /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文（从 LocalStorage 恢复会话）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 全局通知
    provide_context(ToastContext::new());

    // 3. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <ToastHost />
    }
}

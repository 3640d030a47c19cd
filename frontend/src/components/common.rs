//! 页面共用的小组件和加载工具

use crate::api::{Api, ApiHandle};
use crate::components::icons::AlertCircle;
use leptos::prelude::*;
use leptos::task::spawn_local;
use outpass::error::PortalResult;
use outpass_shared::protocol::Ack;
use std::future::Future;

/// `None` 表示加载中，错误保存为面向用户的文本
pub type Loaded<T> = Option<Result<T, String>>;

/// 在后台加载数据写入信号；页面已卸载时结果被丢弃
pub fn load<T, F, Fut>(api: ApiHandle, target: RwSignal<Loaded<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce(Api) -> Fut + 'static,
    Fut: Future<Output = PortalResult<T>> + 'static,
{
    spawn_local(async move {
        let result = fetch(api.client()).await;
        if let Err(e) = &result {
            api.report(e);
        }
        let _ = target.try_set(Some(result.map_err(|e| e.user_message())));
    });
}

/// 服务端确认消息，缺省时使用给定文本
pub fn ack_message(ack: Ack, fallback: &str) -> String {
    ack.and_then(|a| a.message)
        .unwrap_or_else(|| fallback.to_string())
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-12">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-error text-sm py-2">
            <AlertCircle />
            <span>{message}</span>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body items-center text-center text-base-content/60">
                <p>{message}</p>
            </div>
        </div>
    }
}

/// 状态徽章
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let tone = outpass_shared::BadgeTone::for_status(&status);
    view! { <span class=tone.css_class()>{status}</span> }
}

/// 只读字段行
#[component]
pub fn Field(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="flex flex-col">
            <span class="text-xs uppercase tracking-wide text-base-content/60">{label}</span>
            <span class="font-medium">{value}</span>
        </div>
    }
}

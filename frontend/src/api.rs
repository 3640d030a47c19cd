//! 页面使用的 API 入口
//!
//! `ApiHandle` 只保存信号句柄，可以随意复制进闭包；真正的 `PortalApi`
//! 在异步任务里按需构造，拦截器接到路由服务和通知队列上。

use crate::auth::{AuthContext, BrowserSessionStore, use_auth};
use crate::config::app_config;
use crate::toast::{ToastContext, use_toasts};
use crate::web::FetchClient;
use crate::web::router::{RouterService, use_router};
use leptos::prelude::*;
use outpass::PortalApi;
use outpass::error::PortalError;
use outpass::interceptor::Notifier;
use outpass::toast::Toast;
use outpass_shared::Role;
use std::rc::Rc;

pub type Api = PortalApi<FetchClient, BrowserSessionStore>;

#[derive(Clone, Copy)]
pub struct ApiHandle {
    auth: AuthContext,
    router: Option<RouterService>,
    toasts: ToastContext,
}

impl ApiHandle {
    pub fn client(&self) -> Api {
        let api = PortalApi::new(FetchClient, app_config().clone(), self.auth.store());
        match self.router {
            Some(router) => api.with_interceptor(Rc::new(router), Rc::new(self.toasts)),
            None => api,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.auth.session().get_untracked().map(|s| s.role())
    }

    pub fn navigate(&self, path: &str) {
        if let Some(router) = self.router {
            router.navigate(path);
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.toasts.notify(Toast::success(message));
    }

    /// 记录错误并提示用户
    pub fn report(&self, err: &PortalError) {
        tracing::warn!(error = %err, "request failed");
        if let Some(message) = err.notification() {
            self.toasts.notify(Toast::error(message));
        }
    }
}

pub fn use_api() -> ApiHandle {
    ApiHandle {
        auth: use_auth(),
        router: use_router(),
        toasts: use_toasts(),
    }
}

//! 认证模块
//!
//! 会话持久化在 LocalStorage，内存中用一个信号镜像当前会话，
//! 路由服务和导航栏都只读这个信号。

use crate::web::LocalStorage;
use leptos::prelude::*;
use outpass::session::{AuthService, Session, SessionStore};

/// 认证上下文
///
/// 通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
    logged_in: RwSignal<bool>,
}

impl AuthContext {
    /// 创建认证上下文并从 LocalStorage 恢复会话
    pub fn new() -> Self {
        let ctx = Self {
            session: RwSignal::new(None),
            logged_in: RwSignal::new(false),
        };
        ctx.refresh();
        ctx
    }

    pub fn store(&self) -> BrowserSessionStore {
        BrowserSessionStore { ctx: *self }
    }

    pub fn auth(&self) -> AuthService<BrowserSessionStore> {
        AuthService::new(self.store())
    }

    /// 重新读取存储，同步内存信号
    pub fn refresh(&self) {
        let auth = self.auth();
        let current = auth.current_session();
        if self.session.get_untracked() != current {
            self.session.set(current);
        }
        let logged_in = auth.is_logged_in();
        if self.logged_in.get_untracked() != logged_in {
            self.logged_in.set(logged_in);
        }
    }

    pub fn session(&self) -> Signal<Option<Session>> {
        self.session.into()
    }

    /// 获取认证状态信号（用于路由服务注入）
    ///
    /// 只反映 `isLoggedIn` 标记，与路由守卫的判断一致。
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        self.logged_in.into()
    }

    /// 注销：清空存储，路由服务会监听认证状态变化并自动重定向
    pub fn logout(&self) {
        self.auth().logout();
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        tracing::error!("AuthContext missing, creating a detached one");
        AuthContext::new()
    })
}

/// LocalStorage 会话存储，每次写入后刷新认证信号
#[derive(Clone, Copy)]
pub struct BrowserSessionStore {
    ctx: AuthContext,
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let ok = LocalStorage::set(key, value);
        self.ctx.refresh();
        ok
    }

    fn remove(&self, key: &str) -> bool {
        let ok = LocalStorage::delete(key);
        self.ctx.refresh();
        ok
    }
}

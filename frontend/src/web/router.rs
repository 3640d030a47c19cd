//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程，验证规则来自核心库的 `route::guard`。

use leptos::prelude::*;
use outpass::interceptor::Navigator;
use outpass::route::{AppRoute, GuardDecision, guard};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: RwSignal<AppRoute>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let router = Self {
            current_route: RwSignal::new(AppRoute::default()),
            is_authenticated,
        };
        // 初始路由同样经过守卫，重定向时替换而不是新增历史记录
        router.resolve(&current_path(), false);
        router
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route.read_only()
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.resolve(path, true);
    }

    fn resolve(&self, path: &str, use_push: bool) {
        let target = AppRoute::from_path(path);
        let is_auth = self.is_authenticated.get_untracked();

        let route = match guard(&target, path, is_auth) {
            GuardDecision::Render => target,
            GuardDecision::Redirect(redirect) => {
                tracing::info!(%path, to = %redirect, "access denied, redirecting");
                redirect
            }
        };

        let route_path = route.to_path();
        if use_push {
            push_history_state(&route_path);
        } else {
            replace_history_state(&route_path);
        }
        self.current_route.set(route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            // popstate 时也执行守卫逻辑
            router.resolve(&current_path(), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 登出后离开受保护页面
    ///
    /// 登录成功后的跳转由登录页在提示展示完之后自行完成。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();
            if !is_auth && route.requires_auth() {
                let redirect = AppRoute::auth_failure_redirect(&route.to_path());
                tracing::info!(to = %redirect, "logged out, leaving protected page");
                push_history_state(&redirect.to_path());
                current_route.set(redirect);
            }
        });
    }
}

impl Navigator for RouterService {
    fn current_path(&self) -> String {
        self.current_route.get_untracked().to_path()
    }

    fn navigate(&self, path: &str) {
        RouterService::navigate(self, path);
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> Option<RouterService> {
    use_context::<RouterService>()
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let route = use_router().map(|r| r.current_route());

    move || match route {
        Some(route) => matcher(route.get()),
        None => matcher(AppRoute::default()),
    }
}

/// 站内链接：拦截点击并走路由服务
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();
    let target = href.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        if let Some(router) = router {
            router.navigate(&target);
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

//! 全局通知
//!
//! 队列本身（含固定 id 去重）在核心库里，这里只负责信号、定时移除和渲染。

use leptos::prelude::*;
use outpass::interceptor::Notifier;
use outpass::toast::{TOAST_DURATION, Toast, ToastQueue};

#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
        }
    }

    pub fn push(&self, toast: Toast) {
        let id = toast.id.clone();
        let mut added = false;
        self.queue.update(|queue| added = queue.push(toast));
        if !added {
            return;
        }

        let queue = self.queue;
        set_timeout(
            move || {
                queue.try_update(|q| q.dismiss(&id));
            },
            TOAST_DURATION,
        );
    }

    pub fn dismiss(&self, id: &str) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Notifier for ToastContext {
    fn notify(&self, toast: Toast) {
        self.push(toast);
    }
}

pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(|| {
        tracing::error!("ToastContext missing, creating a detached one");
        ToastContext::new()
    })
}

/// 右上角通知栈
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let items = move || toasts.queue.with(|q| q.items().to_vec());

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=items
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    view! {
                        <div class=toast.kind.css_class() on:click=move |_| toasts.dismiss(&id)>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

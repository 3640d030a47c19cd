//! 通知板 / 班级聊天页面
//!
//! 进入页面时拉取群组和历史消息，然后打开一条实时连接；
//! 离开页面时订阅句柄被丢弃，连接随之关闭。

use crate::api::use_api;
use crate::components::common::{EmptyState, ErrorAlert, Spinner};
use crate::components::icons::PaperPlane;
use crate::components::shell::Shell;
use crate::config::app_config;
use crate::web::socket::{SocketTransport, connect};
use leptos::prelude::*;
use leptos::task::spawn_local;
use outpass::capability::ChannelKind;
use outpass::chat::{ChatFeed, FrameOutcome, Subscription, prepare};
use outpass_shared::{ChatMessage, Role, date};

/// 页面状态
#[derive(Clone)]
enum FeedState {
    Loading,
    NoGroup,
    Failed(String),
    Ready(ChatFeed),
}

#[component]
fn Bubble(message: ChatMessage) -> impl IntoView {
    view! {
        <div class="chat chat-start">
            <div class="chat-header">
                {message.sender}
                <time class="text-xs opacity-50 ml-2">
                    {message.sent_at.as_ref().map(date::display)}
                </time>
            </div>
            <div class="chat-bubble">{message.text}</div>
        </div>
    }
}

#[component]
pub fn ChatPage(role: Role, kind: ChannelKind) -> impl IntoView {
    let api = use_api();
    let state = RwSignal::new(FeedState::Loading);
    let subscription = StoredValue::new_local(None::<Subscription<SocketTransport>>);
    let draft = RwSignal::new(String::new());

    on_cleanup(move || {
        // 丢弃句柄即关闭连接
        let _ = subscription.try_update_value(|sub| sub.take());
    });

    spawn_local(async move {
        let client = api.client();
        let feed = match prepare(&client, role, kind).await {
            Ok(Some(feed)) => feed,
            Ok(None) => {
                let _ = state.try_set(FeedState::NoGroup);
                return;
            }
            Err(e) => {
                api.report(&e);
                let _ = state.try_set(FeedState::Failed(e.user_message()));
                return;
            }
        };

        // 历史消息先展示，实时连接失败只记录日志
        let _ = state.try_set(FeedState::Ready(feed.clone()));
        let token = client.auth().token().unwrap_or_default();
        let on_frame = move |frame: String| {
            let mut reply = None;
            let _ = state.try_update(|s| {
                if let FeedState::Ready(feed) = s {
                    match feed.handle_frame(&frame) {
                        Ok(FrameOutcome::Reply(out)) => reply = Some(out),
                        Ok(FrameOutcome::Closed) => tracing::info!("realtime closed by server"),
                        Ok(_) => {}
                        Err(e) => tracing::warn!(error = %e, "bad realtime frame"),
                    }
                }
            });
            if let Some(out) = reply {
                let _ = subscription.try_with_value(|sub| {
                    if let Some(sub) = sub {
                        if let Err(e) = sub.reply(out) {
                            tracing::debug!(error = %e, "reply dropped");
                        }
                    }
                });
            }
        };

        match connect(&app_config().socket_url(&token), on_frame) {
            Ok(transport) => {
                let sub = Subscription::open(transport, &feed);
                // 页面已卸载时 try_set_value 把句柄交还，随即被丢弃
                drop(subscription.try_set_value(Some(sub)));
            }
            Err(e) => tracing::warn!(error = %e, "realtime connection failed"),
        }
    });

    let send = move || {
        let text = draft.get_untracked();
        let result = subscription.try_with_value(|sub| match sub {
            Some(sub) => sub.post(&text),
            None => Err(outpass::PortalError::Realtime("Not connected".into())),
        });
        match result {
            Some(Ok(())) => draft.set(String::new()),
            Some(Err(e)) => api.report(&e),
            None => {}
        }
    };

    let title = match kind {
        ChannelKind::Notices => "Notices",
        ChannelKind::Chat => "Class chat",
    };

    let body = move || match state.get() {
        FeedState::Loading => view! { <Spinner /> }.into_any(),
        FeedState::NoGroup => {
            view! { <EmptyState message="You are not part of any group yet." /> }.into_any()
        }
        FeedState::Failed(msg) => view! { <ErrorAlert message=msg /> }.into_any(),
        FeedState::Ready(feed) => {
            let can_post = feed.can_post();
            let connected = feed.is_connected();
            let messages = feed
                .messages()
                .iter()
                .cloned()
                .map(|message| view! { <Bubble message=message /> })
                .collect_view();
            view! {
                <div class="card bg-base-100 shadow">
                    <div class="card-body gap-4">
                        <div class="flex items-center justify-between">
                            <h2 class="card-title">{feed.group().groupname.clone()}</h2>
                            <span class=if connected { "badge badge-success" } else { "badge badge-ghost" }>
                                {if connected { "live" } else { "offline" }}
                            </span>
                        </div>
                        <div class="flex flex-col gap-2 max-h-[60vh] overflow-y-auto">{messages}</div>
                        <Show when=move || can_post>
                            <form
                                class="flex gap-2"
                                on:submit=move |ev: web_sys::SubmitEvent| {
                                    ev.prevent_default();
                                    send();
                                }
                            >
                                <input
                                    class="input input-bordered flex-1"
                                    placeholder="Write a message"
                                    prop:value=draft
                                    on:input=move |ev| draft.set(event_target_value(&ev))
                                />
                                <button class="btn btn-primary" disabled=move || draft.with(|d| d.trim().is_empty())>
                                    <PaperPlane />
                                </button>
                            </form>
                        </Show>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <Shell role=role title=title>
            {body}
        </Shell>
    }
}

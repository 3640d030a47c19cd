use crate::api::use_api;
use crate::components::common::ErrorAlert;
use crate::components::icons::ShieldCheck;
use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;
use outpass::login::{Credentials, login};
use outpass_shared::Role;

/// 登录页
///
/// `role` 为空时是通用登录页，由用户选择角色；角色专用登录页固定角色。
#[component]
pub fn LoginPage(role: Option<Role>) -> impl IntoView {
    let api = use_api();

    let selected_role = RwSignal::new(role.unwrap_or(Role::Student));
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        if let Err(e) = credentials.validate() {
            error_msg.set(Some(e.user_message()));
            return;
        }

        is_submitting.set(true);
        error_msg.set(None);
        let role = selected_role.get_untracked();

        spawn_local(async move {
            match login(&api.client(), role, &credentials).await {
                Ok(outcome) => {
                    let message = if outcome.fallback {
                        "Logged in with local admin session"
                    } else {
                        "Login successful"
                    };
                    api.success(message);
                    sleep(outcome.delay).await;
                    api.navigate(&outcome.redirect.to_path());
                }
                Err(e) => {
                    tracing::info!(error = %e, "login failed");
                    let _ = error_msg.try_set(Some(e.user_message()));
                }
            }
            let _ = is_submitting.try_set(false);
        });
    };

    let title = match role {
        Some(role) => format!("{} Login", role.label()),
        None => "Outpass Portal".to_string(),
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck />
                        </div>
                        <h1 class="text-3xl font-bold">{title}</h1>
                        <p class="text-base-content/70">"Sign in with your campus account"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.with(Option::is_some)>
                            <ErrorAlert message=error_msg.get().unwrap_or_default() />
                        </Show>

                        <Show when=move || role.is_none()>
                            <div class="form-control">
                                <label class="label" for="role">
                                    <span class="label-text">"Role"</span>
                                </label>
                                <select
                                    id="role"
                                    class="select select-bordered"
                                    on:change=move |ev| {
                                        if let Ok(role) = event_target_value(&ev).parse::<Role>() {
                                            selected_role.set(role);
                                        }
                                    }
                                >
                                    {Role::ALL
                                        .into_iter()
                                        .map(|r| {
                                            view! {
                                                <option value=r.as_str() selected=move || selected_role.get() == r>
                                                    {r.label()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@jit.edu"
                                on:input=move |ev| email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Login".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

//! 登录后页面的外框：导航栏 + 标题 + 内容

use crate::auth::use_auth;
use crate::components::icons::LogOut;
use crate::web::router::Link;
use leptos::prelude::*;
use outpass::capability::RoleCapabilities;
use outpass_shared::Role;

#[component]
pub fn Shell(role: Role, #[prop(into)] title: String, children: Children) -> impl IntoView {
    let auth = use_auth();
    let nav = RoleCapabilities::of(role)
        .navigation()
        .into_iter()
        .map(|item| {
            view! {
                <li>
                    <Link to=(item.route)(role)>{item.label}</Link>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <div class="navbar bg-base-100 shadow-sm px-4 gap-2">
                <div class="flex-1 gap-2">
                    <span class="text-xl font-bold">"Outpass Portal"</span>
                    <span class="badge badge-ghost">{role.label()}</span>
                </div>
                <ul class="menu menu-horizontal px-1 hidden md:flex">{nav}</ul>
                <button class="btn btn-ghost btn-sm" on:click=move |_| auth.logout()>
                    <LogOut />
                    "Logout"
                </button>
            </div>
            <main class="max-w-6xl mx-auto p-4 md:p-8 space-y-6">
                <h1 class="text-2xl font-bold">{title}</h1>
                {children()}
            </main>
        </div>
    }
}

use crate::api::use_api;
use crate::components::common::{ErrorAlert, Loaded, Spinner, StatusBadge, load};
use crate::components::shell::Shell;
use crate::web::router::Link;
use leptos::prelude::*;
use outpass::capability::RoleCapabilities;
use outpass::route::AppRoute;
use outpass_shared::{OutpassRequest, Profile, Role, StatusSummary, date};

/// 统计卡片
#[component]
fn StatCard(title: &'static str, value: usize, #[prop(into)] tone: String) -> impl IntoView {
    view! {
        <div class="stat bg-base-100 rounded-box shadow">
            <div class="stat-title">{title}</div>
            <div class=format!("stat-value {tone}")>{value}</div>
        </div>
    }
}

#[component]
pub fn SummaryStats(summary: StatusSummary) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard title="Total" value=summary.total() tone="text-primary" />
            <StatCard title="Pending" value=summary.pending tone="text-warning" />
            <StatCard title="Approved" value=summary.approved tone="text-success" />
            <StatCard title="Rejected" value=summary.rejected tone="text-error" />
        </div>
    }
}

#[component]
pub fn DashboardPage(role: Role) -> impl IntoView {
    let api = use_api();
    let caps = RoleCapabilities::of(role);

    let profile = RwSignal::new(None::<Result<Profile, String>>);
    let outpasses: RwSignal<Loaded<Vec<OutpassRequest>>> = RwSignal::new(None);

    load(api, profile, move |client| async move { client.profile(role).await });
    load(api, outpasses, move |client| async move {
        client.outpasses(role).await
    });

    let greeting = move || match profile.get() {
        Some(Ok(p)) => format!("Welcome, {}", p.name),
        _ => format!("Welcome, {}", role.label()),
    };

    let body = move || match outpasses.get() {
        None => view! { <Spinner /> }.into_any(),
        Some(Err(msg)) => view! { <ErrorAlert message=msg /> }.into_any(),
        Some(Ok(list)) => {
            let summary = StatusSummary::from_requests(&list);
            let recent = list
                .into_iter()
                .take(5)
                .map(|req| {
                    let route = AppRoute::OutpassDetail(role, req.id.clone());
                    view! {
                        <tr>
                            <td>
                                <Link to=route class="link link-hover">{req.student_name.clone()}</Link>
                            </td>
                            <td>{date::display(&req.from_date)}</td>
                            <td>{date::display(&req.to_date)}</td>
                            <td><StatusBadge status=req.overall_status.clone() /></td>
                        </tr>
                    }
                })
                .collect_view();
            view! {
                <SummaryStats summary=summary />
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Recent outpasses"</h2>
                        <div class="overflow-x-auto">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Student"</th>
                                        <th>"From"</th>
                                        <th>"To"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>{recent}</tbody>
                            </table>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    let shortcuts = caps
        .navigation()
        .into_iter()
        .skip(1)
        .map(|item| {
            view! {
                <Link to=(item.route)(role) class="btn btn-outline btn-sm">
                    {item.label}
                </Link>
            }
        })
        .collect_view();

    view! {
        <Shell role=role title=format!("{} Dashboard", role.label())>
            <p class="text-lg">{greeting}</p>
            <div class="flex flex-wrap gap-2">{shortcuts}</div>
            {body}
        </Shell>
    }
}

//! 外出申请：列表、详情、提交与审批

use crate::api::use_api;
use crate::components::common::{
    EmptyState, ErrorAlert, Field, Loaded, Spinner, StatusBadge, ack_message, load,
};
use crate::components::dashboard::SummaryStats;
use crate::components::shell::Shell;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use outpass::capability::RoleCapabilities;
use outpass::forms::{ApplyForm, ReviewForm};
use outpass::route::AppRoute;
use outpass_shared::{ApprovalBlock, Decision, OutpassRequest, Role, StatusSummary, date};

// =========================================================
// 列表
// =========================================================

#[component]
pub fn OutpassListPage(role: Role) -> impl IntoView {
    let api = use_api();
    let outpasses: RwSignal<Loaded<Vec<OutpassRequest>>> = RwSignal::new(None);
    load(api, outpasses, move |client| async move {
        client.outpasses(role).await
    });

    let title = if role == Role::Watchman {
        "Approved Outpasses"
    } else {
        "Outpasses"
    };

    let body = move || match outpasses.get() {
        None => view! { <Spinner /> }.into_any(),
        Some(Err(msg)) => view! { <ErrorAlert message=msg /> }.into_any(),
        Some(Ok(list)) if list.is_empty() => {
            view! { <EmptyState message="No outpass requests yet." /> }.into_any()
        }
        Some(Ok(list)) => {
            let summary = StatusSummary::from_requests(&list);
            let rows = list
                .into_iter()
                .map(|req| {
                    let route = AppRoute::OutpassDetail(role, req.id.clone());
                    view! {
                        <tr class="hover">
                            <td>
                                <Link to=route class="link link-hover font-medium">
                                    {req.student_name.clone()}
                                </Link>
                            </td>
                            <td>{date::display(&req.from_date)}</td>
                            <td>{date::display(&req.to_date)}</td>
                            <td class="max-w-xs truncate">{req.reason.clone()}</td>
                            <td><StatusBadge status=req.overall_status.clone() /></td>
                        </tr>
                    }
                })
                .collect_view();
            view! {
                <SummaryStats summary=summary />
                <div class="card bg-base-100 shadow">
                    <div class="card-body overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Student"</th>
                                    <th>"From"</th>
                                    <th>"To"</th>
                                    <th>"Reason"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
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

// =========================================================
// 详情
// =========================================================

/// 单个审批角色的卡片
#[component]
fn ApprovalCard(block: ApprovalBlock) -> impl IntoView {
    let status = block.status.label().to_string();
    view! {
        <div class="card bg-base-200">
            <div class="card-body p-4 gap-2">
                <div class="flex items-center justify-between">
                    <h3 class="font-semibold">{block.role.label()}</h3>
                    <StatusBadge status=status />
                </div>
                <Field label="Approved by" value=block.approver_name.unwrap_or_else(|| "-".into()) />
                <Field label="Remarks" value=block.remarks.unwrap_or_else(|| "-".into()) />
                <Field label="Approved at" value=date::display_opt(block.approved_at.as_ref()) />
                {block
                    .rejected_at
                    .map(|at| view! { <Field label="Rejected at" value=date::display(&at) /> })}
            </div>
        </div>
    }
}

#[component]
fn OutpassDetails(role: Role, request: OutpassRequest) -> impl IntoView {
    let caps = RoleCapabilities::of(role);
    let approvals = request
        .approval_blocks()
        .into_iter()
        .cloned()
        .map(|block| view! { <ApprovalCard block=block /> })
        .collect_view();
    let id = request.id.clone();

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body gap-6">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">{request.student_name.clone()}</h2>
                    <StatusBadge status=request.overall_status.clone() />
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <Field label="From" value=date::display(&request.from_date) />
                    <Field label="To" value=date::display(&request.to_date) />
                    <Field label="Reason" value=request.reason.clone() />
                    <Field label="Applied on" value=date::display_opt(request.created_at.as_ref()) />
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">{approvals}</div>
                <Show when=move || caps.can_review>
                    <div class="card-actions justify-end">
                        <Link
                            to=AppRoute::ReviewOutpass(role, id.clone(), Decision::Reject)
                            class="btn btn-error btn-outline"
                        >
                            "Reject"
                        </Link>
                        <Link
                            to=AppRoute::ReviewOutpass(role, id.clone(), Decision::Approve)
                            class="btn btn-success"
                        >
                            "Approve"
                        </Link>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn OutpassDetailPage(role: Role, id: String) -> impl IntoView {
    let api = use_api();
    let request: RwSignal<Loaded<OutpassRequest>> = RwSignal::new(None);
    load(api, request, move |client| async move {
        client.outpass(role, &id).await
    });

    let body = move || match request.get() {
        None => view! { <Spinner /> }.into_any(),
        Some(Err(msg)) => view! { <ErrorAlert message=msg /> }.into_any(),
        Some(Ok(req)) => view! { <OutpassDetails role=role request=req /> }.into_any(),
    };

    view! {
        <Shell role=role title="Outpass details">
            {body}
            <Link to=AppRoute::Outpasses(role) class="btn btn-ghost btn-sm">
                "Back to list"
            </Link>
        </Shell>
    }
}

/// `/outpass/:id`：按当前会话角色查看
#[component]
pub fn OutpassViewPage(id: String) -> impl IntoView {
    match use_api().role() {
        Some(role) => view! { <OutpassDetailPage role=role id=id /> }.into_any(),
        None => view! { <ErrorAlert message="Please login to view this outpass." /> }.into_any(),
    }
}

// =========================================================
// 提交
// =========================================================

#[component]
pub fn ApplyOutpassPage() -> impl IntoView {
    let api = use_api();
    let form = RwSignal::new(ApplyForm::default());
    let is_submitting = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with_untracked(ApplyForm::validate) {
            Ok(request) => request,
            Err(e) => {
                error_msg.set(Some(e.user_message()));
                return;
            }
        };
        is_submitting.set(true);
        error_msg.set(None);

        spawn_local(async move {
            match api.client().apply_outpass(&request).await {
                Ok(ack) => {
                    api.success(ack_message(ack, "Outpass applied successfully"));
                    api.navigate(&AppRoute::Outpasses(Role::Student).to_path());
                }
                Err(e) => api.report(&e),
            }
            let _ = is_submitting.try_set(false);
        });
    };

    view! {
        <Shell role=Role::Student title="Apply for outpass">
            <div class="card bg-base-100 shadow max-w-xl">
                <form class="card-body" on:submit=on_submit>
                    <Show when=move || error_msg.with(Option::is_some)>
                        <ErrorAlert message=error_msg.get().unwrap_or_default() />
                    </Show>
                    <label class="form-control">
                        <span class="label-text">"From"</span>
                        <input
                            type="datetime-local"
                            class="input input-bordered"
                            prop:value=move || form.with(|f| f.from_date.clone())
                            on:input=move |ev| form.update(|f| f.from_date = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"To"</span>
                        <input
                            type="datetime-local"
                            class="input input-bordered"
                            prop:value=move || form.with(|f| f.to_date.clone())
                            on:input=move |ev| form.update(|f| f.to_date = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Reason"</span>
                        <textarea
                            class="textarea textarea-bordered"
                            rows="3"
                            prop:value=move || form.with(|f| f.reason.clone())
                            on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            "Submit"
                        </button>
                    </div>
                </form>
            </div>
        </Shell>
    }
}

// =========================================================
// 审批
// =========================================================

#[component]
pub fn ReviewOutpassPage(role: Role, id: String, decision: Decision) -> impl IntoView {
    let api = use_api();
    let request: RwSignal<Loaded<OutpassRequest>> = RwSignal::new(None);
    let fetch_id = id.clone();
    load(api, request, move |client| async move {
        client.outpass(role, &fetch_id).await
    });

    let form = RwSignal::new(ReviewForm::default());
    let is_submitting = RwSignal::new(false);
    let id = StoredValue::new(id);

    let (verb, done, button_class) = match decision {
        Decision::Approve => ("Approve", "Outpass approved", "btn btn-success"),
        Decision::Reject => ("Reject", "Outpass rejected", "btn btn-error"),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let remarks = match form.with_untracked(ReviewForm::validate) {
            Ok(remarks) => remarks,
            Err(e) => {
                api.report(&e);
                return;
            }
        };
        is_submitting.set(true);
        let id = id.get_value();

        spawn_local(async move {
            match api.client().review_outpass(role, &id, decision, &remarks).await {
                Ok(ack) => {
                    api.success(ack_message(ack, done));
                    api.navigate(&AppRoute::OutpassDetail(role, id).to_path());
                }
                Err(e) => api.report(&e),
            }
            let _ = is_submitting.try_set(false);
        });
    };

    let summary = move || match request.get() {
        None => view! { <Spinner /> }.into_any(),
        Some(Err(msg)) => view! { <ErrorAlert message=msg /> }.into_any(),
        Some(Ok(req)) => view! {
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <Field label="Student" value=req.student_name.clone() />
                <Field label="From" value=date::display(&req.from_date) />
                <Field label="To" value=date::display(&req.to_date) />
                <Field label="Reason" value=req.reason.clone() />
            </div>
        }
        .into_any(),
    };

    view! {
        <Shell role=role title=format!("{verb} outpass")>
            <div class="card bg-base-100 shadow max-w-2xl">
                <form class="card-body gap-4" on:submit=on_submit>
                    {summary}
                    <label class="form-control">
                        <span class="label-text">"Remarks"</span>
                        <textarea
                            class="textarea textarea-bordered"
                            rows="3"
                            prop:value=move || form.with(|f| f.remarks.clone())
                            on:input=move |ev| form.update(|f| f.remarks = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="card-actions justify-end">
                        <Link
                            to=AppRoute::OutpassDetail(role, id.get_value())
                            class="btn btn-ghost"
                        >
                            "Cancel"
                        </Link>
                        <button
                            class=button_class
                            disabled=move || is_submitting.get() || !form.with(ReviewForm::can_submit)
                        >
                            {verb}
                        </button>
                    </div>
                </form>
            </div>
        </Shell>
    }
}

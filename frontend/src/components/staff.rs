//! 教职工目录（管理员）与学生名单

use crate::api::use_api;
use crate::components::common::{
    EmptyState, ErrorAlert, Field, Loaded, Spinner, ack_message, load,
};
use crate::components::shell::Shell;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use outpass::forms::StaffForm;
use outpass::route::AppRoute;
use outpass_shared::{Profile, Role, StaffMember};

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn StaffListPage() -> impl IntoView {
    let api = use_api();
    let staff: RwSignal<Loaded<Vec<StaffMember>>> = RwSignal::new(None);
    load(api, staff, |client| async move { client.staff_directory().await });

    let body = move || match staff.get() {
        None => view! { <Spinner /> }.into_any(),
        Some(Err(msg)) => view! { <ErrorAlert message=msg /> }.into_any(),
        Some(Ok(list)) if list.is_empty() => {
            view! { <EmptyState message="No staff members yet." /> }.into_any()
        }
        Some(Ok(list)) => {
            let rows = list
                .into_iter()
                .map(|member| {
                    view! {
                        <tr class="hover">
                            <td>
                                <Link to=AppRoute::StaffDetail(member.id.clone()) class="link link-hover">
                                    {member.name.clone()}
                                </Link>
                            </td>
                            <td>{member.email.clone()}</td>
                            <td>{text(&member.department)}</td>
                            <td>{text(&member.designation)}</td>
                        </tr>
                    }
                })
                .collect_view();
            view! {
                <div class="card bg-base-100 shadow">
                    <div class="card-body overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Department"</th>
                                    <th>"Designation"</th>
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
        <Shell role=Role::Admin title="Staff">
            <div class="flex justify-end">
                <Link to=AppRoute::NewStaff class="btn btn-primary btn-sm">"Add staff"</Link>
            </div>
            {body}
        </Shell>
    }
}

#[component]
pub fn StaffDetailPage(id: String) -> impl IntoView {
    let api = use_api();
    let member: RwSignal<Loaded<Option<StaffMember>>> = RwSignal::new(None);
    load(api, member, move |client| async move {
        client.staff_member(&id).await
    });

    let body = move || match member.get() {
        None => view! { <Spinner /> }.into_any(),
        Some(Err(msg)) => view! { <ErrorAlert message=msg /> }.into_any(),
        Some(Ok(None)) => view! { <EmptyState message="Staff member not found." /> }.into_any(),
        Some(Ok(Some(m))) => view! {
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{m.name.clone()}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <Field label="Email" value=m.email.clone() />
                        <Field label="Phone" value=text(&m.phone) />
                        <Field label="Department" value=text(&m.department) />
                        <Field label="Designation" value=text(&m.designation) />
                    </div>
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <Shell role=Role::Admin title="Staff member">
            {body}
            <Link to=AppRoute::Staffs class="btn btn-ghost btn-sm">"Back to staff"</Link>
        </Shell>
    }
}

#[component]
fn TextInput(label: &'static str, kind: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="form-control">
            <span class="label-text">{label}</span>
            <input
                type=kind
                class="input input-bordered"
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn NewStaffPage() -> impl IntoView {
    let api = use_api();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let designation = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = StaffForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            department: department.get_untracked(),
            designation: designation.get_untracked(),
            phone: phone.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                error_msg.set(Some(e.user_message()));
                return;
            }
        };
        is_submitting.set(true);
        error_msg.set(None);

        spawn_local(async move {
            match api.client().create_staff(&request).await {
                Ok(ack) => {
                    api.success(ack_message(ack, "Staff member added"));
                    api.navigate(&AppRoute::Staffs.to_path());
                }
                Err(e) => api.report(&e),
            }
            let _ = is_submitting.try_set(false);
        });
    };

    view! {
        <Shell role=Role::Admin title="Add staff">
            <div class="card bg-base-100 shadow max-w-xl">
                <form class="card-body" on:submit=on_submit>
                    <Show when=move || error_msg.with(Option::is_some)>
                        <ErrorAlert message=error_msg.get().unwrap_or_default() />
                    </Show>
                    <TextInput label="Name" kind="text" value=name />
                    <TextInput label="Email" kind="email" value=email />
                    <TextInput label="Department" kind="text" value=department />
                    <TextInput label="Designation" kind="text" value=designation />
                    <TextInput label="Phone" kind="tel" value=phone />
                    <div class="card-actions justify-end mt-4">
                        <Link to=AppRoute::Staffs class="btn btn-ghost">"Cancel"</Link>
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            "Create"
                        </button>
                    </div>
                </form>
            </div>
        </Shell>
    }
}

#[component]
pub fn StudentsPage(role: Role) -> impl IntoView {
    let api = use_api();
    let students: RwSignal<Loaded<Vec<Profile>>> = RwSignal::new(None);
    load(api, students, move |client| async move {
        client.students(role).await
    });

    let body = move || match students.get() {
        None => view! { <Spinner /> }.into_any(),
        Some(Err(msg)) => view! { <ErrorAlert message=msg /> }.into_any(),
        Some(Ok(list)) if list.is_empty() => {
            view! { <EmptyState message="No students found." /> }.into_any()
        }
        Some(Ok(list)) => {
            let rows = list
                .into_iter()
                .map(|s| {
                    view! {
                        <tr>
                            <td>{s.name.clone()}</td>
                            <td>{text(&s.register_number)}</td>
                            <td>{s.email.clone()}</td>
                            <td>{text(&s.year)}</td>
                            <td>{text(&s.residencetype)}</td>
                        </tr>
                    }
                })
                .collect_view();
            view! {
                <div class="card bg-base-100 shadow">
                    <div class="card-body overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Register no."</th>
                                    <th>"Email"</th>
                                    <th>"Year"</th>
                                    <th>"Residence"</th>
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
        <Shell role=role title="Students">
            {body}
        </Shell>
    }
}

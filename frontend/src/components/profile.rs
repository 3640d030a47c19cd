//! 个人资料查看与编辑

use crate::api::use_api;
use crate::components::common::{ErrorAlert, Field, Loaded, Spinner, ack_message, load};
use crate::components::icons::UserCircle;
use crate::components::shell::Shell;
use crate::config::app_config;
use crate::web::router::Link;
use js_sys::Uint8Array;
use leptos::prelude::*;
use leptos::task::spawn_local;
use outpass::capability::RoleCapabilities;
use outpass::error::{PortalError, PortalResult};
use outpass::forms::{PhotoUpload, ProfileForm};
use outpass::route::AppRoute;
use outpass_shared::{Profile, Role};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

#[component]
fn Avatar(photo: Option<String>) -> impl IntoView {
    match photo {
        Some(path) => view! {
            <div class="avatar">
                <div class="w-24 rounded-full">
                    <img src=app_config().asset_url(&path) alt="Profile photo" />
                </div>
            </div>
        }
        .into_any(),
        None => view! { <UserCircle /> }.into_any(),
    }
}

#[component]
pub fn ProfilePage(role: Role) -> impl IntoView {
    let api = use_api();
    let caps = RoleCapabilities::of(role);
    let profile: RwSignal<Loaded<Profile>> = RwSignal::new(None);
    load(api, profile, move |client| async move { client.profile(role).await });

    let body = move || match profile.get() {
        None => view! { <Spinner /> }.into_any(),
        Some(Err(msg)) => view! { <ErrorAlert message=msg /> }.into_any(),
        Some(Ok(p)) => view! {
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-6">
                    <div class="flex items-center gap-4">
                        <Avatar photo=p.photo.clone() />
                        <div>
                            <h2 class="text-xl font-bold">{p.name.clone()}</h2>
                            <p class="text-base-content/70">{p.email.clone()}</p>
                        </div>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <Field label="Phone" value=text(&p.phone) />
                        <Field label="Department" value=text(&p.department) />
                        <Field label="Designation" value=text(&p.designation) />
                        <Field label="Register number" value=text(&p.register_number) />
                        <Field label="Year" value=text(&p.year) />
                        <Field label="Residence" value=text(&p.residencetype) />
                    </div>
                    <Show when=move || caps.can_edit_profile>
                        <div class="card-actions justify-end">
                            <Link to=AppRoute::EditProfile(role) class="btn btn-primary btn-sm">
                                "Edit profile"
                            </Link>
                        </div>
                    </Show>
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <Shell role=role title="Profile">
            {body}
        </Shell>
    }
}

/// 读取选中的头像文件
async fn read_photo(file: File) -> PortalResult<PhotoUpload> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| PortalError::Validation(format!("Could not read photo: {e:?}")))?;
    Ok(PhotoUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn EditProfilePage(role: Role) -> impl IntoView {
    let api = use_api();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let photo = RwSignal::new_local(None::<File>);
    let is_submitting = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    // 预填现有资料
    let profile: RwSignal<Loaded<Profile>> = RwSignal::new(None);
    load(api, profile, move |client| async move { client.profile(role).await });
    Effect::new(move |_| {
        if let Some(Ok(p)) = profile.get() {
            name.set(p.name);
            phone.set(p.phone.unwrap_or_default());
            department.set(p.department.unwrap_or_default());
        }
    });

    let on_file = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        photo.set(input.files().and_then(|files| files.get(0)));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        is_submitting.set(true);
        error_msg.set(None);
        let file = photo.get_untracked();

        spawn_local(async move {
            let result = async {
                let photo = match file {
                    Some(file) => Some(read_photo(file).await?),
                    None => None,
                };
                let parts = ProfileForm {
                    name: name.get_untracked(),
                    phone: phone.get_untracked(),
                    department: department.get_untracked(),
                    photo,
                }
                .to_parts()?;
                api.client().update_profile(role, parts).await
            }
            .await;

            match result {
                Ok(ack) => {
                    api.success(ack_message(ack, "Profile updated"));
                    api.navigate(&AppRoute::Profile(role).to_path());
                }
                Err(e @ PortalError::Validation(_)) => {
                    let _ = error_msg.try_set(Some(e.user_message()));
                }
                Err(e) => api.report(&e),
            }
            let _ = is_submitting.try_set(false);
        });
    };

    view! {
        <Shell role=role title="Edit profile">
            <div class="card bg-base-100 shadow max-w-xl">
                <form class="card-body" on:submit=on_submit>
                    <Show when=move || error_msg.with(Option::is_some)>
                        <ErrorAlert message=error_msg.get().unwrap_or_default() />
                    </Show>
                    <label class="form-control">
                        <span class="label-text">"Name"</span>
                        <input
                            class="input input-bordered"
                            prop:value=name
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Phone"</span>
                        <input
                            class="input input-bordered"
                            prop:value=phone
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Department"</span>
                        <input
                            class="input input-bordered"
                            prop:value=department
                            on:input=move |ev| department.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Photo"</span>
                        <input
                            type="file"
                            accept="image/*"
                            class="file-input file-input-bordered"
                            on:change=on_file
                        />
                    </label>
                    <div class="card-actions justify-end mt-4">
                        <Link to=AppRoute::Profile(role) class="btn btn-ghost">"Cancel"</Link>
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </Shell>
    }
}

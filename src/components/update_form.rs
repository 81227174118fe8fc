//! Admin Update Form Component
//!
//! Status change, staff assignment and work photos for one complaint.

use leptos::html::{Form, Input};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form_focus::bind_focus_target;
use crate::components::form_outcome::apply_outcome;
use crate::components::ErrorText;
use crate::config::ClientConfig;
use crate::context::use_app_context;
use crate::flow::Flow;
use crate::models::ComplaintStatus;
use crate::page::FormTarget;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::toast::{use_toasts, InlineError};
use crate::validation::validate_update;

#[component]
pub fn UpdateForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let config = expect_context::<ClientConfig>();
    let toasts = use_toasts();
    let error = InlineError::new();

    let form_ref = NodeRef::<Form>::new();
    let images_ref = NodeRef::<Input>::new();
    let complaint_id = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let assigned_to = RwSignal::new(String::new());

    bind_focus_target(ctx, FormTarget::Update, form_ref, complaint_id);

    // Fill the staff selector once
    {
        let config = config.clone();
        spawn_local(async move {
            match api::list_staff(&config).await {
                Ok(staff) => {
                    log::debug!("[ADMIN] loaded {} staff members", staff.len());
                    *store.staff().write() = staff;
                }
                Err(e) => log::error!("[ADMIN] failed to load staff list: {}", e),
            }
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = match validate_update(&complaint_id.get(), &status.get(), &assigned_to.get()) {
            Ok(u) => u,
            Err(e) => return error.fail(e.0),
        };
        let work_images = images_ref.get_untracked().and_then(|input| input.files());

        let config = config.clone();
        spawn_local(async move {
            log::debug!("[ADMIN] updating complaint {}", update.complaint_id);
            let reply = api::update_complaint(&config, &update, work_images.as_ref()).await;
            apply_outcome(Flow::UpdateComplaint, Flow::UpdateComplaint.outcome(reply), ctx, toasts, error, || {
                if let Some(form) = form_ref.get_untracked() {
                    form.reset();
                }
                for field in [complaint_id, status, assigned_to] {
                    field.set(String::new());
                }
            });
        });
    };

    view! {
        <form id="update-form" class="card p-3 mb-4" node_ref=form_ref on:submit=on_submit>
            <h2>"Update complaint"</h2>
            <label for="update_complaint_id" class="form-label">"Complaint ID"</label>
            <input id="update_complaint_id" name="complaint_id" class="form-control" type="text"
                prop:value=move || complaint_id.get()
                on:input=move |ev| complaint_id.set(event_target_value(&ev)) />
            <label for="update_status" class="form-label">"Status"</label>
            <select id="update_status" name="status" class="form-select"
                prop:value=move || status.get()
                on:change=move |ev| status.set(event_target_value(&ev))
            >
                <option value="">"-- Keep current --"</option>
                {ComplaintStatus::ALL.iter().map(|s| view! {
                    <option value=s.as_str()>{s.as_str()}</option>
                }).collect_view()}
            </select>
            <label for="assigned_to" class="form-label">"Assign to"</label>
            <select id="assigned_to" name="assigned_to" class="form-select"
                prop:value=move || assigned_to.get()
                on:change=move |ev| assigned_to.set(event_target_value(&ev))
            >
                <option value="">"-- Select Staff --"</option>
                <For
                    each=move || store.staff().get()
                    key=|member| member.id.clone()
                    children=move |member| view! {
                        <option value=member.id.clone()>{member.option_label()}</option>
                    }
                />
            </select>
            <label for="update_work_images" class="form-label">"Work photos"</label>
            <input id="update_work_images" name="work_images" class="form-control"
                type="file" accept="image/*" multiple=true node_ref=images_ref />
            <button type="submit" class="btn btn-primary mt-3">"Save"</button>
            <ErrorText id="update-error" error=error />
        </form>
    }
}

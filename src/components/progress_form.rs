//! Staff Progress Form Component

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
use crate::toast::{use_toasts, InlineError};
use crate::validation::validate_progress;

/// States a staff member may move a complaint into
const STAFF_STATUSES: &[ComplaintStatus] = &[ComplaintStatus::InProgress, ComplaintStatus::Resolved];

#[component]
pub fn ProgressForm() -> impl IntoView {
    let ctx = use_app_context();
    let config = expect_context::<ClientConfig>();
    let toasts = use_toasts();
    let error = InlineError::new();

    let form_ref = NodeRef::<Form>::new();
    let images_ref = NodeRef::<Input>::new();
    let complaint_id = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());

    bind_focus_target(ctx, FormTarget::Progress, form_ref, complaint_id);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = match validate_progress(&complaint_id.get(), &status.get()) {
            Ok(u) => u,
            Err(e) => return error.fail(e.0),
        };
        let work_images = images_ref.get_untracked().and_then(|input| input.files());

        let config = config.clone();
        spawn_local(async move {
            log::debug!("[STAFF] saving progress for {}", update.complaint_id);
            let reply = api::staff_update(&config, &update, work_images.as_ref()).await;
            apply_outcome(Flow::StaffUpdate, Flow::StaffUpdate.outcome(reply), ctx, toasts, error, || {
                if let Some(form) = form_ref.get_untracked() {
                    form.reset();
                }
                complaint_id.set(String::new());
                status.set(String::new());
            });
        });
    };

    view! {
        <form id="progress-form" class="card p-3 mb-4" node_ref=form_ref on:submit=on_submit>
            <h2>"Report progress"</h2>
            <label for="progress_complaint_id" class="form-label">"Complaint ID"</label>
            <input id="progress_complaint_id" name="complaint_id" class="form-control" type="text"
                prop:value=move || complaint_id.get()
                on:input=move |ev| complaint_id.set(event_target_value(&ev)) />
            <label for="progress_status" class="form-label">"Status"</label>
            <select id="progress_status" name="status" class="form-select"
                prop:value=move || status.get()
                on:change=move |ev| status.set(event_target_value(&ev))
            >
                <option value="">"-- Keep current --"</option>
                {STAFF_STATUSES.iter().map(|s| view! {
                    <option value=s.as_str()>{s.as_str()}</option>
                }).collect_view()}
            </select>
            <label for="progress_work_images" class="form-label">"Work photos"</label>
            <input id="progress_work_images" name="work_images" class="form-control"
                type="file" accept="image/*" multiple=true node_ref=images_ref />
            <button type="submit" class="btn btn-primary mt-3">"Update"</button>
            <ErrorText id="progress-error" error=error />
        </form>
    }
}

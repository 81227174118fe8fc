//! Verification Form Component
//!
//! Verifier decision on an open complaint.

use leptos::html::Form;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form_focus::bind_focus_target;
use crate::components::form_outcome::apply_outcome;
use crate::components::ErrorText;
use crate::config::ClientConfig;
use crate::context::use_app_context;
use crate::flow::Flow;
use crate::page::FormTarget;
use crate::toast::{use_toasts, InlineError};
use crate::validation::validate_verification;

const DEFAULT_DECISION: &str = "Verified";

#[component]
pub fn VerifyForm() -> impl IntoView {
    let ctx = use_app_context();
    let config = expect_context::<ClientConfig>();
    let toasts = use_toasts();
    let error = InlineError::new();

    let form_ref = NodeRef::<Form>::new();
    let complaint_id = RwSignal::new(String::new());
    let decision = RwSignal::new(DEFAULT_DECISION.to_string());
    let notes = RwSignal::new(String::new());

    bind_focus_target(ctx, FormTarget::Verify, form_ref, complaint_id);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let verification = match validate_verification(&complaint_id.get(), &decision.get(), &notes.get()) {
            Ok(v) => v,
            Err(e) => return error.fail(e.0),
        };

        let config = config.clone();
        spawn_local(async move {
            log::debug!(
                "[VERIFY] {} -> {:?}",
                verification.complaint_id,
                verification.verification_status
            );
            let reply = api::verify_complaint(&config, &verification).await;
            apply_outcome(Flow::VerifyComplaint, Flow::VerifyComplaint.outcome(reply), ctx, toasts, error, || {
                if let Some(form) = form_ref.get_untracked() {
                    form.reset();
                }
                complaint_id.set(String::new());
                decision.set(DEFAULT_DECISION.to_string());
                notes.set(String::new());
            });
        });
    };

    view! {
        <form id="verify-form" class="card p-3 mb-4" node_ref=form_ref on:submit=on_submit>
            <h2>"Verify complaint"</h2>
            <label for="verify_complaint_id" class="form-label">"Complaint ID"</label>
            <input id="verify_complaint_id" name="complaint_id" class="form-control" type="text"
                prop:value=move || complaint_id.get()
                on:input=move |ev| complaint_id.set(event_target_value(&ev)) />
            <label for="verification_status" class="form-label">"Decision"</label>
            <select id="verification_status" name="verification_status" class="form-select"
                prop:value=move || decision.get()
                on:change=move |ev| decision.set(event_target_value(&ev))
            >
                <option value="Verified">"Verified"</option>
                <option value="Rejected">"Rejected"</option>
            </select>
            <label for="verification_notes" class="form-label">"Notes"</label>
            <textarea id="verification_notes" name="verification_notes" class="form-control" rows="3"
                prop:value=move || notes.get()
                on:input=move |ev| notes.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" class="btn btn-primary mt-3">"Save decision"</button>
            <ErrorText id="verify-error" error=error />
        </form>
    }
}

//! Feedback Modal Component
//!
//! Shared modal with a rating + comment form for a resolved or closed
//! complaint. Each open starts from an empty form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, FEEDBACK_NETWORK_ERROR};
use crate::config::ClientConfig;
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::toast::use_toasts;
use crate::validation::{validate_feedback, RATING_OPTIONS};

#[component]
pub fn FeedbackModal() -> impl IntoView {
    let ctx = use_app_context();
    let config = expect_context::<ClientConfig>();
    let toasts = use_toasts();

    let rating = RwSignal::new(String::new());
    let comments = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    // Fresh form for every complaint the modal opens for
    Effect::new(move |_| {
        if ctx.feedback_for.get().is_some() {
            rating.set(String::new());
            comments.set(String::new());
            error.set(String::new());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(complaint_id) = ctx.feedback_for.get_untracked() else { return };
        let feedback = match validate_feedback(&complaint_id, &rating.get(), &comments.get()) {
            Ok(f) => f,
            Err(e) => return error.set(e.0.to_string()),
        };

        let config = config.clone();
        spawn_local(async move {
            match api::submit_feedback(&config, &feedback).await {
                Ok(_) => {
                    log::info!("[FEEDBACK] rated {} with {}", feedback.complaint_id, feedback.rating);
                    toasts.success("Thank you for your feedback!");
                    ctx.close_feedback();
                }
                Err(ApiError::Server(message)) => error.set(message),
                Err(e) => {
                    log::warn!("[FEEDBACK] request failed: {}", e);
                    error.set(FEEDBACK_NETWORK_ERROR.to_string());
                }
            }
        });
    };

    let is_open = move || ctx.feedback_for.get().is_some();

    view! {
        <div
            id="genericModal"
            class=move || if is_open() { "modal fade show d-block" } else { "modal fade" }
            tabindex="-1"
            role="dialog"
            aria-labelledby="genericModalLabel"
            aria-hidden=move || if is_open() { "false" } else { "true" }
        >
            <div class="modal-dialog">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title" id="genericModalLabel">"Submit Your Feedback"</h5>
                        <button type="button" class="btn-close" aria-label="Close"
                            on:click=move |_| ctx.close_feedback()></button>
                    </div>
                    <div class="modal-body" id="genericModalBody">
                        <form id="feedback-form" on:submit=on_submit>
                            <input type="hidden" name="complaint_id"
                                prop:value=move || ctx.feedback_for.get().unwrap_or_default() />
                            <div class="mb-3">
                                <label for="rating" class="form-label">"Rating (1-5)"</label>
                                <select class="form-select" name="rating" id="rating"
                                    prop:value=move || rating.get()
                                    on:change=move |ev| rating.set(event_target_value(&ev))
                                >
                                    <option value="">"Choose a rating"</option>
                                    {RATING_OPTIONS.iter().map(|(value, label)| view! {
                                        <option value=value.to_string()>{*label}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="mb-3">
                                <label for="comments" class="form-label">"Comments"</label>
                                <textarea class="form-control" name="comments" id="comments" rows="3"
                                    prop:value=move || comments.get()
                                    on:input=move |ev| comments.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <button type="submit" class="btn btn-primary">"Submit Feedback"</button>
                            <p id="feedback-error" class="text-danger small mt-2">{move || error.get()}</p>
                        </form>
                    </div>
                </div>
            </div>
        </div>
        <Show when=is_open>
            <div class="modal-backdrop fade show" on:click=move |_| ctx.close_feedback()></div>
        </Show>
    }
}

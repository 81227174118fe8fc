//! Complaint Card Component
//!
//! A single record: title, submitter, status badge, description, location,
//! photos and the controls the viewer is allowed to use.

use leptos::prelude::*;

use crate::components::StatusBadge;
use crate::context::use_app_context;
use crate::html::multiline_html;
use crate::models::Complaint;
use crate::page::{card_actions, shows_work_images, CardAction, ListKind};
use crate::toast::use_toasts;

#[component]
pub fn ComplaintCard(complaint: Complaint, kind: ListKind) -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();

    let actions = card_actions(kind, ctx.viewer, complaint.parsed_status());
    let work_images = if shows_work_images(kind, ctx.viewer) {
        complaint.work_images.clone()
    } else {
        Vec::new()
    };
    let id = complaint.id.clone();

    let submitter_line = complaint.submitter.as_ref().map(|s| match kind {
        ListKind::Complaints => s.summary(),
        _ => format!("User: {}", s.full_name()),
    });

    let controls = actions
        .into_iter()
        .map(|action| {
            let id = id.clone();
            match action {
                CardAction::Focus { label, target } => view! {
                    <button
                        type="button"
                        class="btn btn-sm btn-outline-secondary"
                        on:click=move |_| {
                            if !ctx.focus_form(target, id.clone()) {
                                toasts.danger(target.missing_message());
                            }
                        }
                    >
                        {label}
                    </button>
                }
                .into_any(),
                CardAction::Details => view! {
                    <a href="#complaints-container" class="btn btn-sm btn-outline-secondary">"Details"</a>
                }
                .into_any(),
                CardAction::OpenFeedback => view! {
                    <button
                        type="button"
                        class="btn btn-sm btn-success"
                        on:click=move |_| ctx.open_feedback(id.clone())
                    >
                        "Provide Feedback"
                    </button>
                }
                .into_any(),
            }
        })
        .collect_view();

    view! {
        <article class="complaint-card p-3 mb-2 border rounded" data-complaint-id=complaint.id.clone()>
            <h3>{complaint.title_or_default().to_string()}</h3>
            <div class="d-flex align-items-center justify-content-between">
                {submitter_line.map(|line| view! { <p class="text-muted small">{line}</p> })}
                <StatusBadge status=complaint.status_label().to_string() />
            </div>
            <p
                class="complaint-description"
                inner_html=multiline_html(complaint.description.as_deref().unwrap_or(""))
            ></p>
            <p>
                <strong>"City: "</strong>{complaint.city.clone().unwrap_or_default()}
                " "
                <strong>"Pincode: "</strong>{complaint.pincode.clone().unwrap_or_default()}
            </p>
            <div class="complaint-images">
                {complaint.complaint_images.iter().map(|url| view! {
                    <img src=url.clone() class="complaint-thumb" alt="Complaint photo" />
                }).collect_view()}
            </div>
            {(!work_images.is_empty()).then(|| view! {
                <div class="work-images-section mt-3">
                    <h5>"Work Progress Images"</h5>
                    <div class="d-flex flex-wrap gap-2">
                        {work_images.iter().map(|url| view! {
                            <img src=url.clone() class="work-thumb" alt="Work progress photo" />
                        }).collect_view()}
                    </div>
                </div>
            })}
            <div class="d-flex gap-2 mt-2">{controls}</div>
        </article>
    }
}

//! Complaint Form Component
//!
//! Citizen complaint submission with optional photos.

use leptos::html::{Form, Input};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form_outcome::apply_outcome;
use crate::components::ErrorText;
use crate::config::ClientConfig;
use crate::context::use_app_context;
use crate::flow::Flow;
use crate::toast::{use_toasts, InlineError};
use crate::validation::{validate_complaint, ComplaintFields};

#[component]
pub fn ComplaintForm() -> impl IntoView {
    let ctx = use_app_context();
    let config = expect_context::<ClientConfig>();
    let toasts = use_toasts();
    let error = InlineError::new();

    let form_ref = NodeRef::<Form>::new();
    let images_ref = NodeRef::<Input>::new();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let pincode = RwSignal::new(String::new());
    let landmark = RwSignal::new(String::new());

    let reset = move || {
        if let Some(form) = form_ref.get_untracked() {
            form.reset();
        }
        for field in [title, description, city, pincode, landmark] {
            field.set(String::new());
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = ComplaintFields {
            title: title.get(),
            description: description.get(),
            city: city.get(),
            pincode: pincode.get(),
            landmark: landmark.get(),
        };
        let draft = match validate_complaint(&fields) {
            Ok(d) => d,
            Err(e) => return error.fail(e.0),
        };
        let images = images_ref.get_untracked().and_then(|input| input.files());

        let config = config.clone();
        spawn_local(async move {
            log::debug!("[COMPLAINT] submitting \"{}\"", draft.title);
            let reply = api::submit_complaint(&config, &draft, images.as_ref()).await;
            apply_outcome(Flow::SubmitComplaint, Flow::SubmitComplaint.outcome(reply), ctx, toasts, error, reset);
        });
    };

    view! {
        <form id="complaint-form" class="card p-3 mb-4" node_ref=form_ref on:submit=on_submit>
            <h2>"Report a problem"</h2>
            <label for="title" class="form-label">"Title"</label>
            <input id="title" class="form-control" type="text"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev)) />
            <label for="description" class="form-label">"Description"</label>
            <textarea id="description" class="form-control" rows="4"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
            <div class="row g-2">
                <div class="col">
                    <label for="city" class="form-label">"City"</label>
                    <input id="city" class="form-control" type="text"
                        prop:value=move || city.get()
                        on:input=move |ev| city.set(event_target_value(&ev)) />
                </div>
                <div class="col">
                    <label for="pincode" class="form-label">"Pincode"</label>
                    <input id="pincode" class="form-control" type="text" inputmode="numeric"
                        prop:value=move || pincode.get()
                        on:input=move |ev| pincode.set(event_target_value(&ev)) />
                </div>
            </div>
            <label for="landmark" class="form-label">"Landmark"</label>
            <input id="landmark" class="form-control" type="text"
                prop:value=move || landmark.get()
                on:input=move |ev| landmark.set(event_target_value(&ev)) />
            <label for="complaint_images" class="form-label">"Photos"</label>
            <input id="complaint_images" name="complaint_images" class="form-control"
                type="file" accept="image/*" multiple=true node_ref=images_ref />
            <button type="submit" class="btn btn-primary mt-3">"Submit complaint"</button>
            <ErrorText id="complaint-error" error=error />
        </form>
    }
}

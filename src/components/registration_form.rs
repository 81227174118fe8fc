//! Registration Form Component
//!
//! Citizen sign-up. Sends `/register` and returns to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form_outcome::apply_outcome;
use crate::components::ErrorText;
use crate::config::ClientConfig;
use crate::context::use_app_context;
use crate::flow::Flow;
use crate::toast::{use_toasts, InlineError};
use crate::validation::{validate_registration, RegistrationFields};

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let ctx = use_app_context();
    let config = expect_context::<ClientConfig>();
    let toasts = use_toasts();
    let error = InlineError::new();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let aadhar_card = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = RegistrationFields {
            first_name: first_name.get(),
            last_name: last_name.get(),
            aadhar_card: aadhar_card.get(),
            email: email.get(),
            phone_number: phone_number.get(),
            password: password.get(),
        };
        let registration = match validate_registration(&fields) {
            Ok(r) => r,
            Err(e) => return error.fail(e.0),
        };

        let config = config.clone();
        spawn_local(async move {
            let reply = api::register(&config, &registration).await;
            apply_outcome(Flow::Register, Flow::Register.outcome(reply), ctx, toasts, error, || {});
        });
    };

    view! {
        <form id="registration-form" class="auth-form" on:submit=on_submit>
            <h2>"Create an account"</h2>
            <div class="row g-2">
                <div class="col">
                    <label for="first_name" class="form-label">"First name"</label>
                    <input id="first_name" class="form-control" type="text"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev)) />
                </div>
                <div class="col">
                    <label for="last_name" class="form-label">"Last name"</label>
                    <input id="last_name" class="form-control" type="text"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev)) />
                </div>
            </div>
            <label for="aadhar_card" class="form-label">"Aadhar number"</label>
            <input id="aadhar_card" class="form-control" type="text" inputmode="numeric" placeholder="12 digits"
                prop:value=move || aadhar_card.get()
                on:input=move |ev| aadhar_card.set(event_target_value(&ev)) />
            <label for="email" class="form-label">"Email"</label>
            <input id="email" class="form-control" type="email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev)) />
            <label for="phone_number" class="form-label">"Phone"</label>
            <input id="phone_number" class="form-control" type="tel" placeholder="10 digits"
                prop:value=move || phone_number.get()
                on:input=move |ev| phone_number.set(event_target_value(&ev)) />
            <label for="password" class="form-label">"Password"</label>
            <input id="password" class="form-control" type="password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev)) />
            <button type="submit" class="btn btn-primary mt-3">"Register"</button>
            <ErrorText id="register-error" error=error />
        </form>
    }
}

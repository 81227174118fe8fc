//! Login Form Component
//!
//! Signs in as any role and sends the user to the dashboard the backend names.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form_outcome::apply_outcome;
use crate::components::ErrorText;
use crate::config::ClientConfig;
use crate::context::use_app_context;
use crate::flow::Flow;
use crate::models::UserType;
use crate::toast::{use_toasts, InlineError};
use crate::validation::validate_login;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let config = expect_context::<ClientConfig>();
    let toasts = use_toasts();
    let error = InlineError::new();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let login_type = RwSignal::new(UserType::User);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let login = match validate_login(&email.get(), &password.get(), login_type.get()) {
            Ok(l) => l,
            Err(e) => return error.fail(e.0),
        };

        let config = config.clone();
        spawn_local(async move {
            let reply = api::login(&config, &login).await;
            apply_outcome(Flow::Login, Flow::Login.outcome(reply), ctx, toasts, error, || {});
        });
    };

    view! {
        <form id="login-form" class="auth-form" on:submit=on_submit>
            <h2>"Sign in"</h2>
            <label for="login_email" class="form-label">"Email"</label>
            <input id="login_email" class="form-control" type="email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev)) />
            <label for="login_password" class="form-label">"Password"</label>
            <input id="login_password" class="form-control" type="password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev)) />
            <label for="login_type" class="form-label">"Sign in as"</label>
            <select id="login_type" class="form-select"
                on:change=move |ev| {
                    login_type.set(UserType::parse(&event_target_value(&ev)).unwrap_or_default());
                }
            >
                {UserType::ALL.iter().map(|t| {
                    let value = t.as_str();
                    view! {
                        <option value=value selected=move || login_type.get().as_str() == value>
                            {t.label()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <button type="submit" class="btn btn-primary mt-3">"Login"</button>
            <ErrorText id="login-error" error=error />
        </form>
    }
}

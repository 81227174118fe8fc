//! Create User Form Component
//!
//! Admin-only: add a staff or verifier account.

use leptos::html::Form;
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
use crate::validation::validate_new_account;

const ROLE_CHOICES: &[UserType] = &[UserType::Staff, UserType::Verifier];

#[component]
pub fn CreateUserForm() -> impl IntoView {
    let ctx = use_app_context();
    let config = expect_context::<ClientConfig>();
    let toasts = use_toasts();
    let error = InlineError::new();

    let form_ref = NodeRef::<Form>::new();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let role = RwSignal::new(UserType::Staff);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let account = match validate_new_account(&email.get(), &password.get(), &first_name.get(), role.get()) {
            Ok(a) => a,
            Err(e) => return error.fail(e.0),
        };

        let config = config.clone();
        spawn_local(async move {
            log::debug!("[ADMIN] creating {} account {}", account.user_role, account.email);
            let reply = api::create_user(&config, &account).await;
            apply_outcome(Flow::CreateUser, Flow::CreateUser.outcome(reply), ctx, toasts, error, || {
                if let Some(form) = form_ref.get_untracked() {
                    form.reset();
                }
                for field in [email, password, first_name] {
                    field.set(String::new());
                }
                role.set(UserType::Staff);
            });
        });
    };

    view! {
        <form id="create-user-form" class="card p-3 mb-4" node_ref=form_ref on:submit=on_submit>
            <h2>"Add staff or verifier"</h2>
            <label for="new_user_first_name" class="form-label">"First name"</label>
            <input id="new_user_first_name" class="form-control" type="text"
                prop:value=move || first_name.get()
                on:input=move |ev| first_name.set(event_target_value(&ev)) />
            <label for="new_user_email" class="form-label">"Email"</label>
            <input id="new_user_email" class="form-control" type="email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev)) />
            <label for="new_user_password" class="form-label">"Password"</label>
            <input id="new_user_password" class="form-control" type="password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev)) />
            <label for="new_user_role" class="form-label">"Role"</label>
            <select id="new_user_role" class="form-select"
                prop:value=move || role.get().as_str()
                on:change=move |ev| {
                    role.set(UserType::parse(&event_target_value(&ev)).unwrap_or(UserType::Staff));
                }
            >
                {ROLE_CHOICES.iter().map(|r| view! {
                    <option value=r.as_str()>{r.label()}</option>
                }).collect_view()}
            </select>
            <button type="submit" class="btn btn-primary mt-3">"Create account"</button>
            <ErrorText id="create-user-error" error=error />
        </form>
    }
}

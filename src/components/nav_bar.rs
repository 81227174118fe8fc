//! Navigation Bar Component
//!
//! Dashboard header with the logout button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browser;
use crate::config::ClientConfig;
use crate::context::use_app_context;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let config = expect_context::<ClientConfig>();

    let on_logout = move |_| {
        let config = config.clone();
        spawn_local(async move {
            api::logout(&config).await;
            browser::forget_user_type();
            browser::navigate("/");
        });
    };

    view! {
        <nav class="navbar navbar-light bg-light mb-4 px-3">
            <span class="navbar-brand">"Complaint Desk"</span>
            <span class="navbar-text">{ctx.viewer.label()}" dashboard"</span>
            <button type="button" class="btn btn-outline-secondary btn-sm" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}

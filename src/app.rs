//! Complaint Desk Frontend App
//!
//! Resolves the page from the URL and renders its view plus the shared overlays.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser;
use crate::components::{
    AdminDashboard, CitizenDashboard, FeedbackModal, HomePage, StaffDashboard, ToastContainer, VerifierDashboard,
};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::page::{resolve_viewer, Page};
use crate::store::AppState;
use crate::toast::Toaster;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let path = browser::current_path();
    let page = Page::from_path(&path);
    let viewer = resolve_viewer(browser::stored_user_type(), page);
    log::info!("[APP] {} -> {:?} as {}", path, page, viewer.as_str());

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let store = Store::new(AppState::default());

    provide_context(AppContext::new((reload_trigger, set_reload_trigger), page, viewer));
    provide_context(store);
    provide_context(Toaster::new(store, config.toast_delay_ms));
    provide_context(config);

    let body = match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Citizen => view! { <CitizenDashboard /> }.into_any(),
        Page::Admin => view! { <AdminDashboard /> }.into_any(),
        Page::Verifier => view! { <VerifierDashboard /> }.into_any(),
        Page::Staff => view! { <StaffDashboard /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            {body}
            <FeedbackModal />
            <ToastContainer />
        </div>
    }
}

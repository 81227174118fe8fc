//! Notification List Component
//!
//! Status-change notices for the citizen, refreshed with the complaint list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::ClientConfig;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields, LoadGeneration};

#[component]
pub fn NotificationList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let config = expect_context::<ClientConfig>();
    let generation = RwSignal::new(LoadGeneration::default());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let ticket = generation.write().next();
        let config = config.clone();
        spawn_local(async move {
            let result = api::list_notifications(&config).await;
            if generation.try_with_untracked(|g| g.is_current(ticket)) != Some(true) {
                return;
            }
            match result {
                Ok(loaded) => *store.notifications().write() = loaded,
                Err(e) => log::warn!("[NOTIFY] could not fetch notifications: {}", e),
            }
        });
    });

    view! {
        <Show when=move || store.notifications().with(|n| !n.is_empty())>
            <aside class="notifications card p-3 mb-4">
                <h2>"Updates"</h2>
                <ul class="list-unstyled mb-0">
                    <For
                        each=move || store.notifications().get()
                        key=|n| n.id.clone()
                        children=move |n| view! {
                            <li class="notification">
                                <span class="notification-message">{n.payload.message.clone()}</span>
                                " "
                                <time class="text-muted small">{n.display_time()}</time>
                            </li>
                        }
                    />
                </ul>
            </aside>
        </Show>
    }
}

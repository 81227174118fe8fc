//! Complaint List Component
//!
//! One renderer for the citizen/admin list, the verifier queue and the staff
//! queue. The list kind picks the endpoint and the card controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ComplaintCard;
use crate::config::ClientConfig;
use crate::context::use_app_context;
use crate::page::ListKind;
use crate::store::{use_app_store, AppStateStoreFields, LoadGeneration};

#[component]
pub fn ComplaintList(kind: ListKind) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let config = expect_context::<ClientConfig>();
    let generation = RwSignal::new(LoadGeneration::default());

    // Load on mount and after every successful mutation; a slower, older
    // fetch never overwrites a newer one
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let ticket = generation.write().next();
        let config = config.clone();
        let endpoint = kind.endpoint();
        log::debug!("[LIST] loading {} (trigger={})", endpoint.path(), trigger);
        spawn_local(async move {
            let result = api::list_complaints(&config, endpoint).await;
            if generation.try_with_untracked(|g| g.is_current(ticket)) != Some(true) {
                log::debug!("[LIST] dropping stale response for trigger={}", trigger);
                return;
            }
            match result {
                Ok(loaded) => {
                    log::debug!("[LIST] loaded {} complaints", loaded.len());
                    *store.complaints().write() = loaded;
                }
                Err(e) => log::error!("[LIST] could not fetch {}: {}", endpoint.path(), e),
            }
        });
    });

    view! {
        <section id="complaints-container" class="complaint-list">
            <For
                each=move || store.complaints().get()
                key=|complaint| complaint.clone()
                children=move |complaint| view! { <ComplaintCard complaint=complaint kind=kind /> }
            />
            <Show when=move || store.complaints().with(|c| c.is_empty())>
                <p class="text-muted">"No complaints to show."</p>
            </Show>
        </section>
    }
}

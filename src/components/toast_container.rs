//! Toast Container Component
//!
//! Bottom-right stack of dismissible notifications.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::toast::Toaster;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let store = use_app_store();
    let toaster = expect_context::<Toaster>();

    view! {
        <div id="toast-container" class="toast-container position-fixed bottom-0 end-0 p-3">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast show align-items-center text-bg-{} border-0", toast.variant.as_str())
                            role="status"
                            aria-live="polite"
                            aria-atomic="true"
                        >
                            <div class="d-flex">
                                <div class="toast-body">{toast.message.clone()}</div>
                                <button
                                    type="button"
                                    class="btn-close btn-close-white me-2 m-auto"
                                    aria-label="Close"
                                    on:click=move |_| toaster.dismiss(id)
                                ></button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

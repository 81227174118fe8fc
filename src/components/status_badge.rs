//! Status Badge Component

use leptos::prelude::*;

use crate::models::map_status_class;

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = format!("status-pill {}", map_status_class(&status));
    view! {
        <span class=class>
            <i class="bi bi-circle"></i>
            " "
            {status}
        </span>
    }
}

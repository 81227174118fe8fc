//! Inline Error Text
//!
//! Renders an `InlineError` under its form.

use leptos::prelude::*;

use crate::toast::InlineError;

#[component]
pub fn ErrorText(
    #[prop(into)] id: String,
    error: InlineError,
) -> impl IntoView {
    view! {
        <p
            id=id
            class=move || {
                if error.message.get().is_some() {
                    "form-error text-danger small mt-2"
                } else {
                    "form-error text-danger small mt-2 visually-hidden"
                }
            }
            role="alert"
        >
            {move || error.message.get().unwrap_or_default()}
        </p>
    }
}

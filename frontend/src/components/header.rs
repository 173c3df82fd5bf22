//! Page header with title and category summary.

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <h1>"🗂️ " {APP_NAME}</h1>
            <p class="subtitle">
                "Upload an image and let our AI model classify it into the correct waste category: "
                <span class="categories-inline">"cardboard, glass, metal, paper, plastic, or trash"</span>
            </p>
        </header>
    }
}

//! Static informational panels: how it works, supported categories,
//! and the placeholder shown before any result exists.

use leptos::*;

use crate::types::Category;

#[component]
pub fn InfoPanel() -> impl IntoView {
    view! {
        <div class="info-card">
            <h3 class="info-title">"📋 How it works"</h3>
            <ul class="info-list">
                <li>"Upload or drag & drop an image of waste material"</li>
                <li>"Our MobileNetV2 AI model analyzes the image"</li>
                <li>"Get classification result with confidence score"</li>
                <li>"Receive disposal tips for proper waste management"</li>
            </ul>
        </div>
    }
}

#[component]
pub fn CategoryGrid() -> impl IntoView {
    view! {
        <div class="info-card">
            <h3 class="info-title">"🗂️ Supported Categories"</h3>
            <div class="category-grid">
                {Category::ALL
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="category-item">
                                <span>{category.icon()}</span>
                                <span>{category.display_name()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Placeholder shown in the results column until something is classified.
#[component]
pub fn ReadyPanel() -> impl IntoView {
    view! {
        <div class="ready-card">
            <div class="ready-icon">"🤖"</div>
            <h3>"Ready to classify!"</h3>
            <p>"Upload an image to see the AI classification results here."</p>
        </div>
    }
}

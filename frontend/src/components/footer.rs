//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>
                "Powered by " <span class="model-badge">"MobileNetV2"</span>
                " • Trained on a garbage classification dataset"
            </div>
            <div class="footer-note">
                "Help protect our environment through proper waste classification! 🌱"
            </div>
        </footer>
    }
}

//! Sortcycle - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a waste image and classifying
//! it through an external prediction service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (title, category summary)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── UploadSection + InfoPanel                              │
//! │  └── ResultCard or ReadyPanel, plus CategoryGrid            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`session`] - the upload/classify lifecycle state machine
//! - [`types`] - common types (Category, PredictResponse, errors)
//! - [`components`] - UI components (Header, Upload, Result, etc.)
//! - [`services`] - external communication (classify, clipboard)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod session;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Categories
    confidence_bar_class, confidence_percentage, confidence_text_class, Category,
    // API
    PredictResponse,
    // Results
    ClassifiedResult, Prediction,
    // Errors
    ClassifyError, ClassifyResult,
};

// Session state machine
pub use session::{Phase, SelectedFile, SubmitTicket, UploadSession};

// Components
pub use components::*;

// Services
pub use services::*;

/// The session as instantiated by the app: blob handles are browser files.
pub type AppSession = UploadSession<web_sys::File>;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Sortcycle - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Single state container for the whole classification lifecycle.
    // Components transition it and render whatever state it is in;
    // there are no loading/error callbacks threaded between them.
    let session = create_rw_signal(AppSession::new());

    let has_result = move || session.with(|s| s.result().is_some());

    view! {
        <Header/>

        <div class="container">
            <div class="columns">
                <div class="column">
                    <UploadSection session=session/>
                    <InfoPanel/>
                </div>

                <div class="column">
                    <Show
                        when=has_result
                        fallback=|| view! { <ReadyPanel/> }
                    >
                        <ResultCard session=session/>
                    </Show>
                    <CategoryGrid/>
                </div>
            </div>
        </div>

        <Footer/>
    }
}

//! Image upload component with drag & drop support.
//!
//! Funnels the file input and drop gestures into the session's
//! `select_file` contract, reads the preview asynchronously, and
//! starts the classification request.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileReader, HtmlInputElement, MouseEvent, ProgressEvent};

use crate::services::classify_image;
use crate::types::Prediction;
use crate::{AppSession, MAX_FILE_SIZE};

/// Read `file` into a data URI and attach it to the session.
///
/// Non-blocking. The callback presents the selection generation, so a
/// read finishing after a reselect or clear is dropped.
fn read_preview(file: &File, gen: u64, session: RwSignal<AppSession>) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::error!("Failed to create FileReader: {:?}", e);
            return;
        }
    };

    let reader_ref = reader.clone();
    let onload = Closure::wrap(Box::new(move |_: ProgressEvent| {
        let result = match reader_ref.result() {
            Ok(result) => result,
            Err(e) => {
                log::error!("Preview read failed: {:?}", e);
                return;
            }
        };
        if let Some(data_uri) = result.as_string() {
            session.update(|s| {
                if !s.attach_preview(gen, data_uri) {
                    log::debug!("Discarding stale preview read");
                }
            });
        }
    }) as Box<dyn FnMut(ProgressEvent)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    if let Err(e) = reader.read_as_data_url(file) {
        log::error!("Failed to start preview read: {:?}", e);
    }
}

#[component]
pub fn UploadSection(session: RwSignal<AppSession>) -> impl IntoView {
    // Synchronous selection/submission errors surface here, not via the
    // session's Failed phase (the phase stays unchanged on rejection).
    let (notice, set_notice) = create_signal(None::<String>);

    let handle_file = move |file: File| {
        let mime = file.type_();
        let name = file.name();
        let mut gen = None;
        session.update(|s| match s.select_file(file.clone(), mime, name) {
            Ok(g) => gen = Some(g),
            Err(e) => set_notice.set(Some(e.to_string())),
        });

        if let Some(gen) = gen {
            set_notice.set(None);
            log::info!("📁 Selected {}", file.name());
            read_preview(&file, gen, session);
        }
    };

    // Handler for the hidden file input
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(file);
        }
    };

    // Drag gestures: enter highlights, leave/drop un-highlight, drop
    // takes the first item only
    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        session.update(|s| s.set_drag_active(true));
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        session.update(|s| s.set_drag_active(false));
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        session.update(|s| s.set_drag_active(false));

        let dropped = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = dropped {
            handle_file(file);
        }
    };

    let on_classify = move |_: MouseEvent| {
        let mut ticket = None;
        session.update(|s| match s.begin_submit() {
            Ok(Some(t)) => ticket = Some(t),
            Ok(None) => log::warn!("⚠️ Submission already in flight, ignoring"),
            Err(e) => set_notice.set(Some(e.to_string())),
        });

        let Some(ticket) = ticket else {
            return;
        };
        set_notice.set(None);

        spawn_local(async move {
            log::info!("📤 Submitting image for classification...");
            let seq = ticket.seq;

            match classify_image(&ticket.file).await {
                Ok(response) => {
                    log::info!(
                        "✅ Classified as {} ({:.0}%)",
                        response.prediction,
                        response.confidence * 100.0
                    );
                    session.update(|s| {
                        let prediction = Prediction {
                            label: response.prediction,
                            confidence: response.confidence,
                        };
                        if !s.resolve_success(seq, prediction) {
                            log::warn!("Discarding stale classification response");
                        }
                    });
                }
                Err(e) => {
                    log::error!("❌ Classification failed: {}", e);
                    session.update(|s| {
                        if !s.resolve_failure(seq, e.to_string()) {
                            log::warn!("Discarding stale classification failure");
                        }
                    });
                }
            }
        });
    };

    let on_reset = move |ev: MouseEvent| {
        ev.stop_propagation();
        set_notice.set(None);
        session.update(|s| s.clear());
    };

    // Handler to open the file picker from anywhere in the zone
    let trigger_file_input = move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("fileInput") {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    let preview = move || session.with(|s| s.preview_data_uri().map(str::to_string));
    let has_file = move || session.with(|s| s.selected().is_some());
    let is_submitting = move || session.with(|s| s.is_submitting());
    let drag_active = move || session.with(|s| s.drag_active());
    let error = move || {
        notice
            .get()
            .or_else(|| session.with(|s| s.error_message().map(str::to_string)))
    };

    view! {
        <div class="upload-card">
            <h2 class="upload-title">"Upload Image"</h2>

            <div
                class="upload-zone"
                class=("drag-active", drag_active)
                on:click=trigger_file_input
                on:dragenter=on_drag_enter
                on:dragleave=on_drag_leave
                on:dragover=on_drag_over
                on:drop=on_drop
            >
                <input
                    type="file"
                    id="fileInput"
                    accept="image/*"
                    style="display:none"
                    on:change=on_file_change
                />

                <Show
                    when=move || preview().is_some()
                    fallback=move || view! {
                        <div class="upload-icon">"📤"</div>
                        <div class="upload-text">"Drop your image here"</div>
                        <div class="upload-hint">"or click to browse"</div>
                        <div class="upload-hint">
                            {format!("Supports: JPG, PNG, GIF (max {}MB)", MAX_FILE_SIZE / (1024 * 1024))}
                        </div>
                    }
                >
                    <img
                        class="upload-preview"
                        src=move || preview().unwrap_or_default()
                        alt="Preview"
                    />
                    <button class="upload-reset" on:click=on_reset>
                        "Choose different image"
                    </button>
                </Show>
            </div>

            <Show
                when=move || has_file() && !is_submitting()
                fallback=|| view! { }
            >
                <button class="btn btn-primary classify-btn" on:click=on_classify>
                    "🗂️ Classify Image"
                </button>
            </Show>

            <Show
                when=is_submitting
                fallback=|| view! { }
            >
                <div class="loading-indicator">
                    <span class="spinner"></span>
                    <span>"Classifying image..."</span>
                    <p class="loading-hint">"This may take a few seconds"</p>
                </div>
            </Show>

            <Show
                when=move || error().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    <span class="error-title">"Error"</span>
                    <p>{move || error().unwrap_or_default()}</p>
                </div>
            </Show>
        </div>
    }
}

//! Result card: category, confidence, and disposal advice.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use web_sys::MouseEvent;

use crate::services::copy_result;
use crate::types::{
    confidence_bar_class, confidence_percentage, confidence_text_class, Category,
};
use crate::{AppSession, RESULT_REVEAL_DELAY_MS};

#[component]
pub fn ResultCard(session: RwSignal<AppSession>) -> impl IntoView {
    let result = move || session.with(|s| s.result().cloned());

    let label = move || {
        result()
            .map(|r| r.prediction.label)
            .unwrap_or_default()
    };
    let pct = move || {
        result()
            .map(|r| confidence_percentage(r.prediction.confidence))
            .unwrap_or(0)
    };
    let image = move || result().and_then(|r| r.image);

    // Short reveal delay after a result lands
    let (is_visible, set_is_visible) = create_signal(false);
    create_effect(move |_| {
        if result().is_some() {
            spawn_local(async move {
                TimeoutFuture::new(RESULT_REVEAL_DELAY_MS).await;
                set_is_visible.set(true);
            });
        } else {
            set_is_visible.set(false);
        }
    });

    let on_clear = move |_: MouseEvent| {
        log::info!("🔄 Clearing result");
        session.update(|s| s.clear());
    };

    let on_copy = move |_: MouseEvent| {
        if let Some(result) = result() {
            let pct = confidence_percentage(result.prediction.confidence);
            spawn_local(async move {
                match copy_result(&result.prediction.label, pct).await {
                    Ok(()) => log::info!("📋 Result copied to clipboard"),
                    Err(e) => log::error!("Failed to copy result: {}", e),
                }
            });
        }
    };

    view! {
        <div class="result-card" class=("visible", move || is_visible.get())>
            <div class=move || {
                format!("result-header bg-gradient-to-r {}", Category::gradient_for(&label()))
            }>
                <span class="result-icon">{move || Category::icon_for(&label())}</span>
                <div class="result-heading">
                    <h3 class="result-label">{label}</h3>
                    <p class="result-subtitle">"Classification Result"</p>
                </div>
                <button class="result-close" on:click=on_clear>"✕"</button>
            </div>

            <div class="result-body">
                <Show
                    when=move || image().is_some()
                    fallback=|| view! { }
                >
                    <img
                        class="result-image"
                        src=move || image().unwrap_or_default()
                        alt="Classified"
                    />
                </Show>

                <div class="confidence-row">
                    <span class="confidence-label">"Confidence Score"</span>
                    <span class=move || format!("confidence-value {}", confidence_text_class(pct()))>
                        {move || format!("{}%", pct())}
                    </span>
                </div>
                <div class="confidence-track">
                    <div
                        class=move || format!("confidence-fill {}", confidence_bar_class(pct()))
                        style=move || format!("width: {}%;", pct())
                    ></div>
                </div>

                <div class="disposal-tip">
                    <h4 class="disposal-tip-title">"💡 Disposal Tip"</h4>
                    <p>{move || Category::disposal_tip_for(&label())}</p>
                </div>

                <div class="result-actions">
                    <button class="btn btn-secondary" on:click=on_clear>
                        "Classify Another"
                    </button>
                    <button class="btn btn-primary" on:click=on_copy>
                        "Copy Result"
                    </button>
                </div>
            </div>
        </div>
    }
}

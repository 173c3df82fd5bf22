//! Result export to the system clipboard.
//!
//! Serializes the classification outcome as human-readable JSON and
//! writes it via the async Clipboard API. Peripheral to the
//! classification lifecycle; failures are logged, never fatal.

use wasm_bindgen_futures::JsFuture;

/// Serialize a result for export.
///
/// Confidence is the rounded whole-number percentage, matching what
/// the result card displays.
pub fn result_export_json(label: &str, confidence_pct: u32, timestamp: &str) -> String {
    let payload = serde_json::json!({
        "prediction": label,
        "confidence": confidence_pct,
        "timestamp": timestamp,
    });
    serde_json::to_string_pretty(&payload).unwrap_or_default()
}

/// Copy a classification result to the system clipboard.
pub async fn copy_result(label: &str, confidence_pct: u32) -> Result<(), String> {
    let timestamp = chrono::Utc::now().to_rfc3339();
    let text = result_export_json(label, confidence_pct, &timestamp);

    let window = web_sys::window().ok_or_else(|| "no global window".to_string())?;
    let clipboard = window.navigator().clipboard();

    JsFuture::from(clipboard.write_text(&text))
        .await
        .map_err(|e| format!("clipboard write failed: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_contains_all_fields() {
        let json = result_export_json("metal", 93, "2025-01-15T10:30:00+00:00");

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["prediction"], "metal");
        assert_eq!(value["confidence"], 93);
        assert_eq!(value["timestamp"], "2025-01-15T10:30:00+00:00");
    }

    #[test]
    fn export_is_pretty_printed() {
        let json = result_export_json("glass", 71, "2025-01-15T10:30:00+00:00");
        assert!(json.contains('\n'));
    }
}

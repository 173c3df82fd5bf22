//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Waste Categories** - the labels the model can return, with
//!   their presentation lookups (icon, color, disposal tip)
//! - **API Types** - prediction endpoint response structure
//! - **Result Types** - what a finished classification carries
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Waste Categories
// =============================================================================

/// One of the six waste categories the model is trained on.
///
/// Labels arrive from the prediction endpoint as lowercase strings;
/// parsing is case-insensitive and anything unknown falls back to
/// generic presentation values rather than failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Cardboard,
    Glass,
    Metal,
    Paper,
    Plastic,
    Trash,
}

impl Category {
    /// All known categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Cardboard,
        Category::Glass,
        Category::Metal,
        Category::Paper,
        Category::Plastic,
        Category::Trash,
    ];

    /// Parse a label case-insensitively. `None` for unknown labels.
    pub fn parse(label: &str) -> Option<Category> {
        match label.to_ascii_lowercase().as_str() {
            "cardboard" => Some(Category::Cardboard),
            "glass" => Some(Category::Glass),
            "metal" => Some(Category::Metal),
            "paper" => Some(Category::Paper),
            "plastic" => Some(Category::Plastic),
            "trash" => Some(Category::Trash),
            _ => None,
        }
    }

    /// Capitalized name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Cardboard => "Cardboard",
            Category::Glass => "Glass",
            Category::Metal => "Metal",
            Category::Paper => "Paper",
            Category::Plastic => "Plastic",
            Category::Trash => "Trash",
        }
    }

    /// Emoji icon for this category.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Cardboard => "📦",
            Category::Glass => "🍾",
            Category::Metal => "🥫",
            Category::Paper => "📄",
            Category::Plastic => "🥤",
            Category::Trash => "🗑️",
        }
    }

    /// Emoji icon for a label, with a recycling fallback for unknowns.
    pub fn icon_for(label: &str) -> &'static str {
        match Category::parse(label) {
            Some(category) => category.icon(),
            None => "♻️",
        }
    }

    /// Gradient CSS classes for the result card header.
    pub fn gradient_for(label: &str) -> &'static str {
        match Category::parse(label) {
            Some(Category::Cardboard) => "from-amber-500 to-orange-500",
            Some(Category::Glass) => "from-cyan-500 to-blue-500",
            Some(Category::Metal) => "from-gray-500 to-slate-600",
            Some(Category::Paper) => "from-blue-400 to-blue-600",
            Some(Category::Plastic) => "from-purple-500 to-pink-500",
            Some(Category::Trash) => "from-red-500 to-red-600",
            None => "from-green-500 to-green-600",
        }
    }

    /// Static disposal advice for a label.
    pub fn disposal_tip_for(label: &str) -> &'static str {
        match Category::parse(label) {
            Some(Category::Cardboard) => {
                "Clean and flatten cardboard boxes before recycling. Remove tape, staples, and labels."
            }
            Some(Category::Glass) => {
                "Rinse glass containers and remove lids before recycling. Check local guidelines for colored glass."
            }
            Some(Category::Metal) => {
                "Clean metal cans and containers. Aluminum cans are highly recyclable and valuable."
            }
            Some(Category::Paper) => {
                "Keep paper dry and clean. Remove plastic windows from envelopes and separate different paper types."
            }
            Some(Category::Plastic) => {
                "Check the recycling number (1-7) and clean containers. Remove caps and labels when possible."
            }
            Some(Category::Trash) => {
                "General waste that cannot be recycled. Consider if any parts can be separated for recycling."
            }
            None => "Please dispose of this item according to local waste management guidelines.",
        }
    }
}

/// Round a confidence fraction in [0,1] to a whole-number percentage.
pub fn confidence_percentage(fraction: f64) -> u32 {
    (fraction * 100.0).round() as u32
}

/// Text color class for a confidence percentage (high/medium/low tier).
pub fn confidence_text_class(percentage: u32) -> &'static str {
    if percentage >= 80 {
        "text-green-600"
    } else if percentage >= 60 {
        "text-yellow-600"
    } else {
        "text-red-600"
    }
}

/// Progress bar gradient class for a confidence percentage.
pub fn confidence_bar_class(percentage: u32) -> &'static str {
    if percentage >= 80 {
        "bg-gradient-to-r from-green-400 to-green-600"
    } else if percentage >= 60 {
        "bg-gradient-to-r from-yellow-400 to-yellow-600"
    } else {
        "bg-gradient-to-r from-red-400 to-red-600"
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the prediction endpoint.
///
/// The wire shape of the external classification service:
/// `{"prediction": "metal", "confidence": 0.93}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Predicted label (one of the six categories, lowercase)
    pub prediction: String,
    /// Model certainty as a fraction in [0,1]
    pub confidence: f64,
}

// =============================================================================
// Result Types
// =============================================================================

/// A parsed prediction: label plus confidence fraction.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    /// Predicted label
    pub label: String,
    /// Confidence fraction in [0,1]
    pub confidence: f64,
}

/// A finished classification, as rendered by the result card.
///
/// Carries the preview the image was classified from so the card can
/// still show it after the upload zone has been reset.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedResult {
    /// The model's prediction
    pub prediction: Prediction,
    /// Data URI of the classified image, when the preview had resolved
    pub image: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend classification errors.
///
/// Unified error type for the whole upload/classify lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum ClassifyError {
    /// Selected or dropped item is not an image.
    InvalidInput,
    /// Submission attempted with nothing selected.
    NoFileSelected,
    /// Network unreachable, connection refused, or transport timeout.
    Transport(String),
    /// Non-success response or a body missing expected fields.
    Server(String),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::InvalidInput => write!(f, "Please select a valid image file"),
            ClassifyError::NoFileSelected => write!(f, "Please select an image first"),
            ClassifyError::Transport(msg) => write!(
                f,
                "Failed to classify image: {}. Make sure the prediction server is running on port 5000.",
                msg
            ),
            ClassifyError::Server(msg) => write!(f, "Classification failed: {}", msg),
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Result type alias for classification operations.
pub type ClassifyResult<T> = Result<T, ClassifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Category::parse("Metal"), Some(Category::Metal));
        assert_eq!(Category::parse("CARDBOARD"), Some(Category::Cardboard));
        assert_eq!(Category::parse("plastic"), Some(Category::Plastic));
        assert_eq!(Category::parse("organic"), None);
    }

    #[test]
    fn unknown_labels_get_fallback_presentation() {
        assert_eq!(Category::icon_for("compost"), "♻️");
        assert_eq!(
            Category::gradient_for("compost"),
            "from-green-500 to-green-600"
        );
        assert!(Category::disposal_tip_for("compost").contains("local waste management"));
    }

    #[test]
    fn icon_lookup_by_label_matches_direct_icon() {
        for category in Category::ALL {
            assert_eq!(Category::icon_for(category.display_name()), category.icon());
        }
    }

    #[test]
    fn known_labels_get_their_lookups() {
        assert_eq!(Category::icon_for("Glass"), "🍾");
        assert_eq!(Category::gradient_for("trash"), "from-red-500 to-red-600");
        assert!(Category::disposal_tip_for("METAL").contains("Aluminum"));
    }

    #[test]
    fn confidence_rounds_to_whole_percentage() {
        assert_eq!(confidence_percentage(0.93), 93);
        assert_eq!(confidence_percentage(0.005), 1);
        assert_eq!(confidence_percentage(1.0), 100);
        assert_eq!(confidence_percentage(0.0), 0);
    }

    #[test]
    fn confidence_tier_boundaries() {
        assert_eq!(confidence_text_class(80), "text-green-600");
        assert_eq!(confidence_text_class(79), "text-yellow-600");
        assert_eq!(confidence_text_class(60), "text-yellow-600");
        assert_eq!(confidence_text_class(59), "text-red-600");
        assert!(confidence_bar_class(93).contains("green"));
        assert!(confidence_bar_class(42).contains("red"));
    }
}

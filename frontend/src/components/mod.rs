//! UI Components for the Sortcycle application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Title and category summary
//! - [`Footer`] - Model credit
//!
//! # Feature Components
//! - [`UploadSection`] - Image upload with drag & drop
//! - [`ResultCard`] - Classification result with disposal advice
//! - [`InfoPanel`] / [`CategoryGrid`] / [`ReadyPanel`] - Static panels

mod footer;
mod header;
mod info;
mod result;
mod upload;

pub use footer::*;
pub use header::*;
pub use info::*;
pub use result::*;
pub use upload::*;

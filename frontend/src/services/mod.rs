//! External communication services.
//!
//! This module provides services for everything outside the session:
//!
//! # Services
//!
//! - [`classify`] - image submission to the prediction endpoint
//! - [`clipboard`] - result export to the system clipboard

pub mod classify;
pub mod clipboard;

pub use classify::*;
pub use clipboard::*;

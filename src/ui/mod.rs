//! Terminal output components.
//!
//! This module provides:
//! - [`OutputMode`] and the mode-gated [`Output`] writer
//! - [`Theme`] for consistent styling with a plain fallback
//! - [`ProgressSpinner`] for long-running install steps
//! - [`report`] rendering of per-tool outcome lines and summaries

pub mod output;
pub mod report;
pub mod spinner;
pub mod theme;

pub use output::{Output, OutputMode};
pub use spinner::ProgressSpinner;
pub use theme::{should_use_colors, Theme};

//! Card data model and persistence
//!
//! This module provides:
//! - The `Card` wire model with legacy-shape normalization
//! - File-backed JSON persistence (`CardStore`)
//! - The ordered, single-writer `CardCollection`

pub mod collection;
pub mod store;
pub mod types;

pub use collection::CardCollection;
pub use store::CardStore;
pub use types::{Card, CardDraft, TITLE_MAX_CHARS};

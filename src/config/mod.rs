//! Configuration module for deckgen
//!
//! Contains build settings and project filesystem layout.

mod layout;
mod settings;

pub use layout::ProjectLayout;
pub use settings::Settings;

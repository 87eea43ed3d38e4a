#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const VARIANTSMITH_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod aspect;
pub mod creature;
pub mod documents;
pub mod generator;
pub mod idgen;
pub mod layout;
pub mod prompt;
pub mod slug;
pub mod style;
pub mod textures;

// Re-exports for convenience
pub use aspect::Aspect;
pub use creature::{CreatureEntry, parse_roster};
pub use generator::{SpawnSettings, run_generator};
pub use layout::OutputLayout;
pub use prompt::InputManager;
pub use slug::sanitize_name;

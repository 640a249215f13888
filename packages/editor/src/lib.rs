//! # Lovelace Editor
//!
//! Structural editing engine for dashboard configurations.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ config: model, paths, container resolver    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: edit algebra + host surface         │
//! │  - cards / badges / sections / views        │
//! │  - Mutation: edits as data                  │
//! │  - EditSession: apply → save → adopt        │
//! │  - KeyTable: render keys by identity        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ host: persist, broadcast, re-render         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Pure edits**: every operation takes `&LovelaceConfig` and returns a
//!    new document or an error, never both and never a partial edit
//! 2. **Copy on path**: only nodes from the root to the edited container are
//!    reallocated; the rest is shared through `Arc`
//! 3. **Strategy nodes are read-only**: generated content is never edited
//! 4. **Last writer wins**: the session serialises edits, nothing merges
//!
//! ## Usage
//!
//! ```rust
//! use lovelace_config::{
//!     CardConfig, ContainerPath, ContentView, ItemPath, LovelaceConfig, ViewConfig,
//! };
//! use lovelace_editor::{cards, Mutation};
//!
//! let config = LovelaceConfig::new([
//!     ViewConfig::Content(ContentView::new()),
//!     ViewConfig::Content(ContentView::new().with_cards([CardConfig::new("card1")])),
//! ]);
//!
//! // Call the algebra directly...
//! let moved = cards::move_card(&config, &ItemPath::in_view(1, 0), &ContainerPath::view(0))?;
//! assert_eq!(moved.views[0].as_content().unwrap().cards().len(), 1);
//!
//! // ...or describe the edit as data
//! let mutation = Mutation::DeleteCard { path: ItemPath::in_view(0, 0) };
//! let emptied = mutation.apply(&moved)?;
//! assert!(emptied.views[0].as_content().unwrap().cards().is_empty());
//! # Ok::<(), lovelace_config::ConfigError>(())
//! ```

pub mod badges;
pub mod cards;
mod errors;
mod items;
mod keys;
mod mutations;
pub mod sections;
mod session;
pub mod views;

pub use badges::{
    add_badge, add_badges, delete_badge, insert_badge, move_badge, move_badge_to_index,
    replace_badge, swap_badge,
};
pub use cards::{
    add_card, add_cards, delete_card, duplicate_card, insert_card, move_card, move_card_to_index,
    replace_card, swap_card,
};
pub use errors::{EditorError, SaveError};
pub use keys::{session_seed, KeyTable};
pub use mutations::Mutation;
pub use sections::{
    add_section, delete_section, insert_section, move_section, replace_section, swap_section,
};
pub use session::{ConfigSink, EditSession};
pub use views::{add_view, delete_view, insert_view, move_view, replace_view, swap_view};

// Re-export the model for convenience
pub use lovelace_config::{
    BadgeConfig, BadgePath, CardConfig, ConfigError, ConfigResult, ContainerPath, ItemPath,
    LovelaceConfig, SectionConfig, SectionPath, ViewConfig,
};

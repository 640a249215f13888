//! # Lovelace Config
//!
//! Dashboard configuration tree and positional addressing.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ config: document model + paths + resolver   │
//! │  - LovelaceConfig → views → sections → cards│
//! │  - Container / item paths                   │
//! │  - Resolve + rebuild along the edited path  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: edit algebra, mutations, sessions   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every node below the root is held in an [`std::sync::Arc`]. Rebuilding a
//! document after an edit only allocates the nodes between the root and the
//! edited container; everything else is shared with the previous document.

pub mod error;
pub mod model;
pub mod path;
pub mod resolver;

pub use error::{ConfigError, ConfigResult, PathError};
pub use model::{
    BadgeConfig, CardConfig, ContentSection, ContentView, Fields, LovelaceConfig, SectionConfig,
    StrategySection, StrategyView, ViewConfig,
};
pub use path::{
    container_path_of, parse_container_path, parse_item_path, BadgePath, ContainerPath, ItemPath,
    SectionPath,
};
pub use resolver::{
    resolve_container, resolve_section, resolve_view, update_container, update_view, Container,
};

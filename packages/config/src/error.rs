//! Error types for config addressing and editing

use crate::path::ContainerPath;
use thiserror::Error;

/// Malformed raw index sequence. Always a caller bug, never user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Container path must have 1 or 2 indices, got {0}")]
    InvalidContainerPath(usize),

    #[error("Item path must have 2 or 3 indices, got {0}")]
    InvalidItemPath(usize),

    #[error("Section path must have 2 indices, got {0}")]
    InvalidSectionPath(usize),

    #[error("Badge path must have 2 indices, got {0}")]
    InvalidBadgePath(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Cannot edit strategy-driven container at {path}")]
    StrategyEdit { path: ContainerPath },

    #[error("View not found: {view_index}")]
    MissingView { view_index: usize },

    #[error("Section {section_index} not found in view {view_index}")]
    MissingSection {
        view_index: usize,
        section_index: usize,
    },

    #[error("Index {index} out of range (length {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("Cannot move an item into the container it is already in: {path}")]
    SameContainer { path: ContainerPath },

    #[error("Another view already uses the path '{path}'")]
    DuplicatePath { path: String },

    #[error("Invalid path: {0}")]
    Path(#[from] PathError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

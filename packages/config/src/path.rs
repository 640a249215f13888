//! # Positional Paths
//!
//! Dashboards address their nodes by index, the same way the frontend does:
//!
//! ```text
//! [view]                   container: cards held directly by a view
//! [view, section]          container: cards held by a section
//! [view, card]             item in a view container
//! [view, section, card]    item in a section container
//! ```
//!
//! Parsing is purely structural. Whether an index exists is decided by the
//! resolver against an actual document.
//!
//! All path types serialize as plain integer arrays.

use crate::error::PathError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Locates a view, or a section within a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub enum ContainerPath {
    View {
        view_index: usize,
    },
    Section {
        view_index: usize,
        section_index: usize,
    },
}

impl ContainerPath {
    pub fn view(view_index: usize) -> Self {
        ContainerPath::View { view_index }
    }

    pub fn section(view_index: usize, section_index: usize) -> Self {
        ContainerPath::Section {
            view_index,
            section_index,
        }
    }

    pub fn view_index(&self) -> usize {
        match *self {
            ContainerPath::View { view_index } | ContainerPath::Section { view_index, .. } => {
                view_index
            }
        }
    }

    pub fn section_index(&self) -> Option<usize> {
        match *self {
            ContainerPath::View { .. } => None,
            ContainerPath::Section { section_index, .. } => Some(section_index),
        }
    }

    /// Address of the item at `index` inside this container
    pub fn item(self, index: usize) -> ItemPath {
        ItemPath {
            container: self,
            index,
        }
    }

    pub fn to_vec(&self) -> Vec<usize> {
        match *self {
            ContainerPath::View { view_index } => vec![view_index],
            ContainerPath::Section {
                view_index,
                section_index,
            } => vec![view_index, section_index],
        }
    }
}

/// Parse `[view]` or `[view, section]`
pub fn parse_container_path(path: &[usize]) -> Result<ContainerPath, PathError> {
    match *path {
        [view_index] => Ok(ContainerPath::view(view_index)),
        [view_index, section_index] => Ok(ContainerPath::section(view_index, section_index)),
        _ => Err(PathError::InvalidContainerPath(path.len())),
    }
}

/// Locates a card within a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct ItemPath {
    pub container: ContainerPath,
    pub index: usize,
}

impl ItemPath {
    pub fn new(container: ContainerPath, index: usize) -> Self {
        Self { container, index }
    }

    /// `[view, card]`
    pub fn in_view(view_index: usize, index: usize) -> Self {
        ContainerPath::view(view_index).item(index)
    }

    /// `[view, section, card]`
    pub fn in_section(view_index: usize, section_index: usize, index: usize) -> Self {
        ContainerPath::section(view_index, section_index).item(index)
    }

    pub fn container_path(&self) -> ContainerPath {
        self.container
    }

    pub fn to_vec(&self) -> Vec<usize> {
        let mut path = self.container.to_vec();
        path.push(self.index);
        path
    }
}

/// Parse `[view, card]` or `[view, section, card]`
pub fn parse_item_path(path: &[usize]) -> Result<ItemPath, PathError> {
    match *path {
        [view_index, index] => Ok(ItemPath::in_view(view_index, index)),
        [view_index, section_index, index] => {
            Ok(ItemPath::in_section(view_index, section_index, index))
        }
        _ => Err(PathError::InvalidItemPath(path.len())),
    }
}

/// Drop the trailing index of an item path
pub fn container_path_of(path: &ItemPath) -> ContainerPath {
    path.container
}

/// Locates a section within a view: `[view, section]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct SectionPath {
    pub view_index: usize,
    pub section_index: usize,
}

impl SectionPath {
    pub fn new(view_index: usize, section_index: usize) -> Self {
        Self {
            view_index,
            section_index,
        }
    }

    /// The same address viewed as a card container
    pub fn as_container(&self) -> ContainerPath {
        ContainerPath::section(self.view_index, self.section_index)
    }
}

/// Locates a badge within a view: `[view, badge]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct BadgePath {
    pub view_index: usize,
    pub index: usize,
}

impl BadgePath {
    pub fn new(view_index: usize, index: usize) -> Self {
        Self { view_index, index }
    }
}

impl TryFrom<&[usize]> for ContainerPath {
    type Error = PathError;

    fn try_from(path: &[usize]) -> Result<Self, Self::Error> {
        parse_container_path(path)
    }
}

impl TryFrom<Vec<usize>> for ContainerPath {
    type Error = PathError;

    fn try_from(path: Vec<usize>) -> Result<Self, Self::Error> {
        parse_container_path(&path)
    }
}

impl From<ContainerPath> for Vec<usize> {
    fn from(path: ContainerPath) -> Self {
        path.to_vec()
    }
}

impl TryFrom<&[usize]> for ItemPath {
    type Error = PathError;

    fn try_from(path: &[usize]) -> Result<Self, Self::Error> {
        parse_item_path(path)
    }
}

impl TryFrom<Vec<usize>> for ItemPath {
    type Error = PathError;

    fn try_from(path: Vec<usize>) -> Result<Self, Self::Error> {
        parse_item_path(&path)
    }
}

impl From<ItemPath> for Vec<usize> {
    fn from(path: ItemPath) -> Self {
        path.to_vec()
    }
}

impl TryFrom<Vec<usize>> for SectionPath {
    type Error = PathError;

    fn try_from(path: Vec<usize>) -> Result<Self, Self::Error> {
        match path[..] {
            [view_index, section_index] => Ok(Self::new(view_index, section_index)),
            _ => Err(PathError::InvalidSectionPath(path.len())),
        }
    }
}

impl From<SectionPath> for Vec<usize> {
    fn from(path: SectionPath) -> Self {
        vec![path.view_index, path.section_index]
    }
}

impl TryFrom<Vec<usize>> for BadgePath {
    type Error = PathError;

    fn try_from(path: Vec<usize>) -> Result<Self, Self::Error> {
        match path[..] {
            [view_index, index] => Ok(Self::new(view_index, index)),
            _ => Err(PathError::InvalidBadgePath(path.len())),
        }
    }
}

impl From<BadgePath> for Vec<usize> {
    fn from(path: BadgePath) -> Self {
        vec![path.view_index, path.index]
    }
}

fn write_indices(f: &mut fmt::Formatter<'_>, indices: &[usize]) -> fmt::Result {
    write!(f, "[")?;
    for (i, index) in indices.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", index)?;
    }
    write!(f, "]")
}

impl fmt::Display for ContainerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_indices(f, &self.to_vec())
    }
}

impl fmt::Display for ItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_indices(f, &self.to_vec())
    }
}

impl fmt::Display for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_indices(f, &[self.view_index, self.section_index])
    }
}

impl fmt::Display for BadgePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_indices(f, &[self.view_index, self.index])
    }
}

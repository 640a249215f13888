//! # Container Resolver
//!
//! Finds the view or section a path points at, refusing strategy-driven
//! nodes, and rebuilds documents around an edited copy of a container.
//!
//! Rebuilding is copy-on-path: the document root, the view and (for section
//! containers) the section are new allocations. Sibling views, sections,
//! cards and badges are the same `Arc`s as in the source document.

use crate::error::{ConfigError, ConfigResult};
use crate::model::{
    CardConfig, ContentSection, ContentView, LovelaceConfig, SectionConfig, ViewConfig,
};
use crate::path::ContainerPath;
use std::sync::Arc;

/// A resolved card container
#[derive(Debug, Clone, Copy)]
pub enum Container<'a> {
    View {
        path: ContainerPath,
        view: &'a ContentView,
    },
    Section {
        path: ContainerPath,
        section: &'a ContentSection,
    },
}

impl<'a> Container<'a> {
    pub fn path(&self) -> ContainerPath {
        match self {
            Container::View { path, .. } | Container::Section { path, .. } => *path,
        }
    }

    pub fn cards(&self) -> &'a [Arc<CardConfig>] {
        match self {
            Container::View { view, .. } => view.cards(),
            Container::Section { section, .. } => section.cards(),
        }
    }
}

/// Resolve an editable view
pub fn resolve_view(doc: &LovelaceConfig, view_index: usize) -> ConfigResult<&ContentView> {
    let view = doc
        .views
        .get(view_index)
        .ok_or(ConfigError::MissingView { view_index })?;

    match view.as_ref() {
        ViewConfig::Content(view) => Ok(view),
        ViewConfig::Strategy(_) => Err(ConfigError::StrategyEdit {
            path: ContainerPath::view(view_index),
        }),
    }
}

/// Resolve an editable section
pub fn resolve_section(
    doc: &LovelaceConfig,
    view_index: usize,
    section_index: usize,
) -> ConfigResult<&ContentSection> {
    let view = resolve_view(doc, view_index)?;

    let section = view
        .sections
        .get(section_index)
        .ok_or(ConfigError::MissingSection {
            view_index,
            section_index,
        })?;

    match section.as_ref() {
        SectionConfig::Content(section) => Ok(section),
        SectionConfig::Strategy(_) => Err(ConfigError::StrategyEdit {
            path: ContainerPath::section(view_index, section_index),
        }),
    }
}

/// Resolve the container a path points at
pub fn resolve_container<'a>(
    doc: &'a LovelaceConfig,
    path: &ContainerPath,
) -> ConfigResult<Container<'a>> {
    match *path {
        ContainerPath::View { view_index } => Ok(Container::View {
            path: *path,
            view: resolve_view(doc, view_index)?,
        }),
        ContainerPath::Section {
            view_index,
            section_index,
        } => Ok(Container::Section {
            path: *path,
            section: resolve_section(doc, view_index, section_index)?,
        }),
    }
}

/// Build a new document with the view at `view_index` replaced by an edited
/// copy. `edit` receives a shallow copy; its error aborts the rebuild.
pub fn update_view<F>(
    doc: &LovelaceConfig,
    view_index: usize,
    edit: F,
) -> ConfigResult<LovelaceConfig>
where
    F: FnOnce(&mut ContentView) -> ConfigResult<()>,
{
    let mut view = resolve_view(doc, view_index)?.clone();
    edit(&mut view)?;

    let mut next = doc.clone();
    next.views[view_index] = Arc::new(ViewConfig::Content(view));
    Ok(next)
}

/// Build a new document with the card list of the container at `path`
/// replaced by the result of `edit`.
pub fn update_container<F>(
    doc: &LovelaceConfig,
    path: &ContainerPath,
    edit: F,
) -> ConfigResult<LovelaceConfig>
where
    F: FnOnce(&mut Vec<Arc<CardConfig>>) -> ConfigResult<()>,
{
    match *path {
        ContainerPath::View { view_index } => {
            update_view(doc, view_index, |view| edit(&mut view.cards))
        }
        ContainerPath::Section {
            view_index,
            section_index,
        } => {
            let mut section = resolve_section(doc, view_index, section_index)?.clone();
            edit(&mut section.cards)?;

            update_view(doc, view_index, |view| {
                view.sections[section_index] = Arc::new(SectionConfig::Content(section));
                Ok(())
            })
        }
    }
}

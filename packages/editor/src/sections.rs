//! # Section Edits
//!
//! Operations on a view's section list. The section itself is the item
//! here, so strategy sections can be moved or deleted like any other; only
//! their cards are off limits. Section indices out of range are
//! [`ConfigError::OutOfRange`].

use crate::items;
use lovelace_config::{
    resolve_view, update_view, ConfigResult, LovelaceConfig, SectionConfig, SectionPath,
};
use std::sync::Arc;

fn update_sections<F>(
    config: &LovelaceConfig,
    view_index: usize,
    edit: F,
) -> ConfigResult<LovelaceConfig>
where
    F: FnOnce(&mut Vec<Arc<SectionConfig>>) -> ConfigResult<()>,
{
    update_view(config, view_index, |view| edit(&mut view.sections))
}

fn section_at(config: &LovelaceConfig, path: &SectionPath) -> ConfigResult<Arc<SectionConfig>> {
    items::get_at(resolve_view(config, path.view_index)?.sections(), path.section_index)
}

pub fn add_section(
    config: &LovelaceConfig,
    view_index: usize,
    section: impl Into<Arc<SectionConfig>>,
) -> ConfigResult<LovelaceConfig> {
    let section = section.into();
    update_sections(config, view_index, |sections| {
        sections.push(section);
        Ok(())
    })
}

pub fn insert_section(
    config: &LovelaceConfig,
    path: &SectionPath,
    section: impl Into<Arc<SectionConfig>>,
) -> ConfigResult<LovelaceConfig> {
    let section = section.into();
    update_sections(config, path.view_index, |sections| {
        items::insert_at(sections, path.section_index, section)
    })
}

pub fn replace_section(
    config: &LovelaceConfig,
    path: &SectionPath,
    section: impl Into<Arc<SectionConfig>>,
) -> ConfigResult<LovelaceConfig> {
    let section = section.into();
    update_sections(config, path.view_index, |sections| {
        items::replace_at(sections, path.section_index, section).map(drop)
    })
}

pub fn delete_section(config: &LovelaceConfig, path: &SectionPath) -> ConfigResult<LovelaceConfig> {
    update_sections(config, path.view_index, |sections| {
        items::remove_at(sections, path.section_index).map(drop)
    })
}

/// Move a section to `to`, which may be in another view.
///
/// Within one view `to.section_index` is the section's position afterwards.
/// Across views it is an insert position in the target view (`0..=len`).
pub fn move_section(
    config: &LovelaceConfig,
    from: &SectionPath,
    to: &SectionPath,
) -> ConfigResult<LovelaceConfig> {
    if from.view_index == to.view_index {
        return update_sections(config, from.view_index, |sections| {
            items::move_to_index(sections, from.section_index, to.section_index)
        });
    }

    let section = section_at(config, from)?;
    resolve_view(config, to.view_index)?;

    let removed = delete_section(config, from)?;
    insert_section(&removed, to, section)
}

pub fn swap_section(
    config: &LovelaceConfig,
    a: &SectionPath,
    b: &SectionPath,
) -> ConfigResult<LovelaceConfig> {
    let section_a = section_at(config, a)?;
    let section_b = section_at(config, b)?;

    if a.view_index == b.view_index {
        return update_sections(config, a.view_index, |sections| {
            items::swap(sections, a.section_index, b.section_index)
        });
    }

    let step = update_sections(config, a.view_index, |sections| {
        items::replace_at(sections, a.section_index, section_b).map(drop)
    })?;
    update_sections(&step, b.view_index, |sections| {
        items::replace_at(sections, b.section_index, section_a).map(drop)
    })
}

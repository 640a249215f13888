//! # View Edits
//!
//! Operations on the dashboard's view list. These never resolve a
//! container, so strategy views can be added, replaced, moved and deleted.
//!
//! A non-empty view `path` slug must stay unique across the dashboard.

use crate::items;
use lovelace_config::{ConfigError, ConfigResult, LovelaceConfig, ViewConfig};
use std::sync::Arc;

/// Fail if `view`'s slug is taken by any view other than the one at `skip`
fn ensure_unique_path(
    config: &LovelaceConfig,
    view: &ViewConfig,
    skip: Option<usize>,
) -> ConfigResult<()> {
    let Some(path) = view.path().filter(|path| !path.is_empty()) else {
        return Ok(());
    };

    let taken = config
        .views
        .iter()
        .enumerate()
        .any(|(index, other)| Some(index) != skip && other.path() == Some(path));

    if taken {
        Err(ConfigError::DuplicatePath {
            path: path.to_string(),
        })
    } else {
        Ok(())
    }
}

fn update_views<F>(config: &LovelaceConfig, edit: F) -> ConfigResult<LovelaceConfig>
where
    F: FnOnce(&mut Vec<Arc<ViewConfig>>) -> ConfigResult<()>,
{
    let mut next = config.clone();
    edit(&mut next.views)?;
    Ok(next)
}

pub fn add_view(
    config: &LovelaceConfig,
    view: impl Into<Arc<ViewConfig>>,
) -> ConfigResult<LovelaceConfig> {
    let view = view.into();
    ensure_unique_path(config, &view, None)?;
    update_views(config, |views| {
        views.push(view);
        Ok(())
    })
}

pub fn insert_view(
    config: &LovelaceConfig,
    index: usize,
    view: impl Into<Arc<ViewConfig>>,
) -> ConfigResult<LovelaceConfig> {
    let view = view.into();
    ensure_unique_path(config, &view, None)?;
    update_views(config, |views| items::insert_at(views, index, view))
}

pub fn replace_view(
    config: &LovelaceConfig,
    index: usize,
    view: impl Into<Arc<ViewConfig>>,
) -> ConfigResult<LovelaceConfig> {
    let view = view.into();
    items::check_index(index, config.views.len())?;
    ensure_unique_path(config, &view, Some(index))?;
    update_views(config, |views| items::replace_at(views, index, view).map(drop))
}

pub fn delete_view(config: &LovelaceConfig, index: usize) -> ConfigResult<LovelaceConfig> {
    update_views(config, |views| items::remove_at(views, index).map(drop))
}

pub fn swap_view(config: &LovelaceConfig, a: usize, b: usize) -> ConfigResult<LovelaceConfig> {
    update_views(config, |views| items::swap(views, a, b))
}

/// Reorder a view; `to` is its position afterwards
pub fn move_view(config: &LovelaceConfig, from: usize, to: usize) -> ConfigResult<LovelaceConfig> {
    update_views(config, |views| items::move_to_index(views, from, to))
}

//! Badge edits. Badges hang off content views only; section paths do not
//! apply to them.

use crate::items;
use lovelace_config::{
    resolve_view, update_view, BadgeConfig, BadgePath, ConfigError, ConfigResult, ContainerPath,
    LovelaceConfig,
};
use std::sync::Arc;

fn update_badges<F>(
    config: &LovelaceConfig,
    view_index: usize,
    edit: F,
) -> ConfigResult<LovelaceConfig>
where
    F: FnOnce(&mut Vec<Arc<BadgeConfig>>) -> ConfigResult<()>,
{
    update_view(config, view_index, |view| edit(&mut view.badges))
}

fn badge_at(config: &LovelaceConfig, path: &BadgePath) -> ConfigResult<Arc<BadgeConfig>> {
    items::get_at(resolve_view(config, path.view_index)?.badges(), path.index)
}

pub fn add_badge(
    config: &LovelaceConfig,
    view_index: usize,
    badge: impl Into<Arc<BadgeConfig>>,
) -> ConfigResult<LovelaceConfig> {
    let badge = badge.into();
    update_badges(config, view_index, |badges| {
        badges.push(badge);
        Ok(())
    })
}

pub fn add_badges(
    config: &LovelaceConfig,
    view_index: usize,
    new_badges: impl IntoIterator<Item = BadgeConfig>,
) -> ConfigResult<LovelaceConfig> {
    update_badges(config, view_index, |badges| {
        badges.extend(new_badges.into_iter().map(Arc::new));
        Ok(())
    })
}

pub fn insert_badge(
    config: &LovelaceConfig,
    path: &BadgePath,
    badge: impl Into<Arc<BadgeConfig>>,
) -> ConfigResult<LovelaceConfig> {
    let badge = badge.into();
    update_badges(config, path.view_index, |badges| {
        items::insert_at(badges, path.index, badge)
    })
}

pub fn replace_badge(
    config: &LovelaceConfig,
    path: &BadgePath,
    badge: impl Into<Arc<BadgeConfig>>,
) -> ConfigResult<LovelaceConfig> {
    let badge = badge.into();
    update_badges(config, path.view_index, |badges| {
        items::replace_at(badges, path.index, badge).map(drop)
    })
}

pub fn delete_badge(config: &LovelaceConfig, path: &BadgePath) -> ConfigResult<LovelaceConfig> {
    update_badges(config, path.view_index, |badges| {
        items::remove_at(badges, path.index).map(drop)
    })
}

/// Move a badge to the end of another view's badges
pub fn move_badge(
    config: &LovelaceConfig,
    from: &BadgePath,
    to_view: usize,
) -> ConfigResult<LovelaceConfig> {
    if from.view_index == to_view {
        return Err(ConfigError::SameContainer {
            path: ContainerPath::view(to_view),
        });
    }

    let badge = badge_at(config, from)?;
    let removed = delete_badge(config, from)?;
    add_badge(&removed, to_view, badge)
}

/// Reorder a badge within its view; `index` is its position afterwards
pub fn move_badge_to_index(
    config: &LovelaceConfig,
    path: &BadgePath,
    index: usize,
) -> ConfigResult<LovelaceConfig> {
    update_badges(config, path.view_index, |badges| {
        items::move_to_index(badges, path.index, index)
    })
}

pub fn swap_badge(
    config: &LovelaceConfig,
    a: &BadgePath,
    b: &BadgePath,
) -> ConfigResult<LovelaceConfig> {
    let badge_a = badge_at(config, a)?;
    let badge_b = badge_at(config, b)?;

    if a.view_index == b.view_index {
        return update_badges(config, a.view_index, |badges| {
            items::swap(badges, a.index, b.index)
        });
    }

    let step = update_badges(config, a.view_index, |badges| {
        items::replace_at(badges, a.index, badge_b).map(drop)
    })?;
    update_badges(&step, b.view_index, |badges| {
        items::replace_at(badges, b.index, badge_a).map(drop)
    })
}

//! # Card Edits
//!
//! Cards live in a container: a view (`[view]`) or a section of a sections
//! view (`[view, section]`). Every function returns a new document and
//! leaves its input untouched; on error no document is produced.

use crate::items;
use lovelace_config::{
    resolve_container, update_container, CardConfig, ConfigError, ConfigResult, ContainerPath,
    ItemPath, LovelaceConfig,
};
use std::sync::Arc;

/// Append a card to a container
pub fn add_card(
    config: &LovelaceConfig,
    path: &ContainerPath,
    card: impl Into<Arc<CardConfig>>,
) -> ConfigResult<LovelaceConfig> {
    let card = card.into();
    update_container(config, path, |cards| {
        cards.push(card);
        Ok(())
    })
}

/// Append several cards, keeping their order
pub fn add_cards(
    config: &LovelaceConfig,
    path: &ContainerPath,
    new_cards: impl IntoIterator<Item = CardConfig>,
) -> ConfigResult<LovelaceConfig> {
    update_container(config, path, |cards| {
        cards.extend(new_cards.into_iter().map(Arc::new));
        Ok(())
    })
}

/// Insert a card at `path.index`, shifting later cards right
pub fn insert_card(
    config: &LovelaceConfig,
    path: &ItemPath,
    card: impl Into<Arc<CardConfig>>,
) -> ConfigResult<LovelaceConfig> {
    let card = card.into();
    update_container(config, &path.container, |cards| {
        items::insert_at(cards, path.index, card)
    })
}

pub fn replace_card(
    config: &LovelaceConfig,
    path: &ItemPath,
    card: impl Into<Arc<CardConfig>>,
) -> ConfigResult<LovelaceConfig> {
    let card = card.into();
    update_container(config, &path.container, |cards| {
        items::replace_at(cards, path.index, card).map(drop)
    })
}

pub fn delete_card(config: &LovelaceConfig, path: &ItemPath) -> ConfigResult<LovelaceConfig> {
    update_container(config, &path.container, |cards| {
        items::remove_at(cards, path.index).map(drop)
    })
}

/// Insert a copy of a card right after the original
pub fn duplicate_card(config: &LovelaceConfig, path: &ItemPath) -> ConfigResult<LovelaceConfig> {
    update_container(config, &path.container, |cards| {
        let card = items::get_at(cards, path.index)?;
        items::insert_at(cards, path.index + 1, Arc::new(CardConfig::clone(&card)))
    })
}

/// Move a card to the end of another container.
///
/// Reordering inside one container is [`move_card_to_index`]; asking for it
/// here fails with [`ConfigError::SameContainer`].
pub fn move_card(
    config: &LovelaceConfig,
    from: &ItemPath,
    to: &ContainerPath,
) -> ConfigResult<LovelaceConfig> {
    if from.container == *to {
        return Err(ConfigError::SameContainer { path: *to });
    }

    let card = items::get_at(resolve_container(config, &from.container)?.cards(), from.index)?;
    let removed = delete_card(config, from)?;
    add_card(&removed, to, card)
}

/// Reorder a card within its container. `index` is the card's position in
/// the resulting sequence.
pub fn move_card_to_index(
    config: &LovelaceConfig,
    path: &ItemPath,
    index: usize,
) -> ConfigResult<LovelaceConfig> {
    update_container(config, &path.container, |cards| {
        items::move_to_index(cards, path.index, index)
    })
}

/// Exchange two cards, possibly in different containers
pub fn swap_card(
    config: &LovelaceConfig,
    a: &ItemPath,
    b: &ItemPath,
) -> ConfigResult<LovelaceConfig> {
    let card_a = items::get_at(resolve_container(config, &a.container)?.cards(), a.index)?;
    let card_b = items::get_at(resolve_container(config, &b.container)?.cards(), b.index)?;

    if a.container == b.container {
        return update_container(config, &a.container, |cards| {
            items::swap(cards, a.index, b.index)
        });
    }

    let step = update_container(config, &a.container, |cards| {
        items::replace_at(cards, a.index, card_b).map(drop)
    })?;
    update_container(&step, &b.container, |cards| {
        items::replace_at(cards, b.index, card_a).map(drop)
    })
}

//! # Dashboard Mutations
//!
//! Every structural edit as a serializable value, so edit surfaces (drag
//! lists, dialogs, the wasm bridge) can describe what they want done and
//! hand it over as data.
//!
//! ```json
//! { "op": "move_card", "from": [1, 0], "to": [0] }
//! ```
//!
//! Applying a mutation never touches the input document. See the function
//! each variant dispatches to for its exact semantics.

use crate::{badges, cards, sections, views};
use lovelace_config::{
    BadgeConfig, BadgePath, CardConfig, ConfigResult, ContainerPath, ItemPath, LovelaceConfig,
    SectionConfig, SectionPath, ViewConfig,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    AddCard {
        path: ContainerPath,
        card: CardConfig,
    },
    AddCards {
        path: ContainerPath,
        cards: Vec<CardConfig>,
    },
    InsertCard {
        path: ItemPath,
        card: CardConfig,
    },
    ReplaceCard {
        path: ItemPath,
        card: CardConfig,
    },
    DeleteCard {
        path: ItemPath,
    },
    DuplicateCard {
        path: ItemPath,
    },
    /// Move to the end of another container
    MoveCard {
        from: ItemPath,
        to: ContainerPath,
    },
    MoveCardToIndex {
        path: ItemPath,
        index: usize,
    },
    SwapCard {
        a: ItemPath,
        b: ItemPath,
    },

    AddBadge {
        view_index: usize,
        badge: BadgeConfig,
    },
    AddBadges {
        view_index: usize,
        badges: Vec<BadgeConfig>,
    },
    InsertBadge {
        path: BadgePath,
        badge: BadgeConfig,
    },
    ReplaceBadge {
        path: BadgePath,
        badge: BadgeConfig,
    },
    DeleteBadge {
        path: BadgePath,
    },
    MoveBadge {
        from: BadgePath,
        to_view: usize,
    },
    MoveBadgeToIndex {
        path: BadgePath,
        index: usize,
    },
    SwapBadge {
        a: BadgePath,
        b: BadgePath,
    },

    AddSection {
        view_index: usize,
        section: SectionConfig,
    },
    InsertSection {
        path: SectionPath,
        section: SectionConfig,
    },
    ReplaceSection {
        path: SectionPath,
        section: SectionConfig,
    },
    DeleteSection {
        path: SectionPath,
    },
    MoveSection {
        from: SectionPath,
        to: SectionPath,
    },
    SwapSection {
        a: SectionPath,
        b: SectionPath,
    },

    AddView {
        view: ViewConfig,
    },
    InsertView {
        index: usize,
        view: ViewConfig,
    },
    ReplaceView {
        index: usize,
        view: ViewConfig,
    },
    DeleteView {
        index: usize,
    },
    MoveView {
        from: usize,
        to: usize,
    },
    SwapView {
        a: usize,
        b: usize,
    },
}

impl Mutation {
    /// Apply to `config`, producing a new document
    pub fn apply(&self, config: &LovelaceConfig) -> ConfigResult<LovelaceConfig> {
        match self {
            Mutation::AddCard { path, card } => cards::add_card(config, path, card.clone()),
            Mutation::AddCards { path, cards: new_cards } => {
                cards::add_cards(config, path, new_cards.iter().cloned())
            }
            Mutation::InsertCard { path, card } => cards::insert_card(config, path, card.clone()),
            Mutation::ReplaceCard { path, card } => cards::replace_card(config, path, card.clone()),
            Mutation::DeleteCard { path } => cards::delete_card(config, path),
            Mutation::DuplicateCard { path } => cards::duplicate_card(config, path),
            Mutation::MoveCard { from, to } => cards::move_card(config, from, to),
            Mutation::MoveCardToIndex { path, index } => {
                cards::move_card_to_index(config, path, *index)
            }
            Mutation::SwapCard { a, b } => cards::swap_card(config, a, b),

            Mutation::AddBadge { view_index, badge } => {
                badges::add_badge(config, *view_index, badge.clone())
            }
            Mutation::AddBadges { view_index, badges: new_badges } => {
                badges::add_badges(config, *view_index, new_badges.iter().cloned())
            }
            Mutation::InsertBadge { path, badge } => {
                badges::insert_badge(config, path, badge.clone())
            }
            Mutation::ReplaceBadge { path, badge } => {
                badges::replace_badge(config, path, badge.clone())
            }
            Mutation::DeleteBadge { path } => badges::delete_badge(config, path),
            Mutation::MoveBadge { from, to_view } => badges::move_badge(config, from, *to_view),
            Mutation::MoveBadgeToIndex { path, index } => {
                badges::move_badge_to_index(config, path, *index)
            }
            Mutation::SwapBadge { a, b } => badges::swap_badge(config, a, b),

            Mutation::AddSection { view_index, section } => {
                sections::add_section(config, *view_index, section.clone())
            }
            Mutation::InsertSection { path, section } => {
                sections::insert_section(config, path, section.clone())
            }
            Mutation::ReplaceSection { path, section } => {
                sections::replace_section(config, path, section.clone())
            }
            Mutation::DeleteSection { path } => sections::delete_section(config, path),
            Mutation::MoveSection { from, to } => sections::move_section(config, from, to),
            Mutation::SwapSection { a, b } => sections::swap_section(config, a, b),

            Mutation::AddView { view } => views::add_view(config, view.clone()),
            Mutation::InsertView { index, view } => {
                views::insert_view(config, *index, view.clone())
            }
            Mutation::ReplaceView { index, view } => {
                views::replace_view(config, *index, view.clone())
            }
            Mutation::DeleteView { index } => views::delete_view(config, *index),
            Mutation::MoveView { from, to } => views::move_view(config, *from, *to),
            Mutation::SwapView { a, b } => views::swap_view(config, *a, *b),
        }
    }

    /// Debug name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddCard { .. } => "add_card",
            Mutation::AddCards { .. } => "add_cards",
            Mutation::InsertCard { .. } => "insert_card",
            Mutation::ReplaceCard { .. } => "replace_card",
            Mutation::DeleteCard { .. } => "delete_card",
            Mutation::DuplicateCard { .. } => "duplicate_card",
            Mutation::MoveCard { .. } => "move_card",
            Mutation::MoveCardToIndex { .. } => "move_card_to_index",
            Mutation::SwapCard { .. } => "swap_card",
            Mutation::AddBadge { .. } => "add_badge",
            Mutation::AddBadges { .. } => "add_badges",
            Mutation::InsertBadge { .. } => "insert_badge",
            Mutation::ReplaceBadge { .. } => "replace_badge",
            Mutation::DeleteBadge { .. } => "delete_badge",
            Mutation::MoveBadge { .. } => "move_badge",
            Mutation::MoveBadgeToIndex { .. } => "move_badge_to_index",
            Mutation::SwapBadge { .. } => "swap_badge",
            Mutation::AddSection { .. } => "add_section",
            Mutation::InsertSection { .. } => "insert_section",
            Mutation::ReplaceSection { .. } => "replace_section",
            Mutation::DeleteSection { .. } => "delete_section",
            Mutation::MoveSection { .. } => "move_section",
            Mutation::SwapSection { .. } => "swap_section",
            Mutation::AddView { .. } => "add_view",
            Mutation::InsertView { .. } => "insert_view",
            Mutation::ReplaceView { .. } => "replace_view",
            Mutation::DeleteView { .. } => "delete_view",
            Mutation::MoveView { .. } => "move_view",
            Mutation::SwapView { .. } => "swap_view",
        }
    }
}

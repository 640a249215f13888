//! Properties of the edit algebra over whole dashboards

mod common;

use common::{card_types, home_dashboard, two_views};
use lovelace_config::{
    resolve_container, BadgeConfig, BadgePath, CardConfig, ConfigError, ContainerPath,
    ContentSection, ContentView, ItemPath, LovelaceConfig, SectionConfig, SectionPath, ViewConfig,
};
use lovelace_editor::*;
use std::sync::Arc;

/// One mutation of every kind, all valid against `home_dashboard()`
fn valid_mutations() -> Vec<Mutation> {
    vec![
        Mutation::AddCard {
            path: ContainerPath::view(0),
            card: CardConfig::new("markdown"),
        },
        Mutation::AddCards {
            path: ContainerPath::section(1, 1),
            cards: vec![CardConfig::new("tile"), CardConfig::new("tile")],
        },
        Mutation::InsertCard {
            path: ItemPath::in_section(1, 0, 0),
            card: CardConfig::new("button"),
        },
        Mutation::ReplaceCard {
            path: ItemPath::in_view(0, 1),
            card: CardConfig::new("glance"),
        },
        Mutation::DeleteCard {
            path: ItemPath::in_view(0, 2),
        },
        Mutation::DuplicateCard {
            path: ItemPath::in_section(1, 0, 1),
        },
        Mutation::MoveCard {
            from: ItemPath::in_view(0, 0),
            to: ContainerPath::section(1, 1),
        },
        Mutation::MoveCardToIndex {
            path: ItemPath::in_view(0, 0),
            index: 2,
        },
        Mutation::SwapCard {
            a: ItemPath::in_view(0, 0),
            b: ItemPath::in_section(1, 0, 1),
        },
        Mutation::AddBadge {
            view_index: 1,
            badge: BadgeConfig::new("entity"),
        },
        Mutation::MoveBadgeToIndex {
            path: BadgePath::new(0, 0),
            index: 1,
        },
        Mutation::DeleteBadge {
            path: BadgePath::new(0, 1),
        },
        Mutation::AddSection {
            view_index: 1,
            section: SectionConfig::Content(ContentSection::grid()),
        },
        Mutation::MoveSection {
            from: SectionPath::new(1, 0),
            to: SectionPath::new(1, 2),
        },
        Mutation::DeleteSection {
            path: SectionPath::new(1, 2),
        },
        Mutation::AddView {
            view: ViewConfig::Content(ContentView::new().with_path("garden")),
        },
        Mutation::SwapView { a: 0, b: 2 },
        Mutation::MoveView { from: 2, to: 0 },
        Mutation::DeleteView { index: 1 },
    ]
}

#[test]
fn test_operations_never_mutate_their_input() {
    let config = home_dashboard();
    let snapshot = config.clone();

    for mutation in valid_mutations() {
        let next = mutation
            .apply(&config)
            .unwrap_or_else(|e| panic!("{} failed: {}", mutation.name(), e));

        assert_ne!(next, config, "{} should change the document", mutation.name());
        assert_eq!(config, snapshot, "{} mutated its input", mutation.name());
    }
}

#[test]
fn test_untouched_views_are_shared() {
    let config = home_dashboard();
    let next = add_card(&config, &ContainerPath::section(1, 1), CardConfig::new("tile")).unwrap();

    assert!(Arc::ptr_eq(&config.views[0], &next.views[0]));
    assert!(Arc::ptr_eq(&config.views[2], &next.views[2]));
    assert!(!Arc::ptr_eq(&config.views[1], &next.views[1]));
}

#[test]
fn test_untouched_sections_and_cards_are_shared() {
    let config = home_dashboard();
    let next = delete_card(&config, &ItemPath::in_section(1, 0, 0)).unwrap();

    let before = config.views[1].as_content().unwrap();
    let after = next.views[1].as_content().unwrap();

    assert!(!Arc::ptr_eq(&before.sections()[0], &after.sections()[0]));
    assert!(Arc::ptr_eq(&before.sections()[1], &after.sections()[1]));
    assert!(Arc::ptr_eq(&before.sections()[2], &after.sections()[2]));

    let before_cards = before.sections()[0].as_content().unwrap().cards();
    let after_cards = after.sections()[0].as_content().unwrap().cards();
    assert!(Arc::ptr_eq(&before_cards[1], &after_cards[0]));
}

#[test]
fn test_add_then_delete_is_identity() {
    let config = home_dashboard();

    for container in [
        ContainerPath::view(0),
        ContainerPath::section(1, 0),
        ContainerPath::section(1, 1),
    ] {
        let len = resolve_container(&config, &container).unwrap().cards().len();
        let added = add_card(&config, &container, CardConfig::new("markdown")).unwrap();
        let removed = delete_card(&added, &container.item(len)).unwrap();

        assert_eq!(removed, config, "round trip through {}", container);
    }
}

#[test]
fn test_add_then_delete_on_missing_collections() -> anyhow::Result<()> {
    let raw = serde_json::json!({
        "views": [
            { "title": "Empty" },
            { "type": "sections", "sections": [{ "type": "grid" }] }
        ]
    });
    let config: LovelaceConfig = serde_json::from_value(raw.clone())?;

    let cards = add_card(&config, &ContainerPath::view(0), CardConfig::new("markdown"))?;
    let cards = delete_card(&cards, &ItemPath::in_view(0, 0))?;

    let section_cards = add_card(&config, &ContainerPath::section(1, 0), CardConfig::new("tile"))?;
    let section_cards = delete_card(&section_cards, &ItemPath::in_section(1, 0, 0))?;

    let badges = add_badge(&config, 0, BadgeConfig::new("entity"))?;
    let badges = delete_badge(&badges, &BadgePath::new(0, 0))?;

    let sections = add_section(&config, 0, SectionConfig::Content(ContentSection::grid()))?;
    let sections = delete_section(&sections, &SectionPath::new(0, 0))?;

    for round_trip in [cards, section_cards, badges, sections] {
        assert_eq!(round_trip, config);
        assert_eq!(serde_json::to_value(&round_trip)?, raw);
    }
    Ok(())
}

#[test]
fn test_insert_shifts_later_cards_right() {
    let config = two_views();
    let previous_first = Arc::clone(&config.views[1].as_content().unwrap().cards()[0]);

    let next = insert_card(&config, &ItemPath::in_view(1, 0), CardConfig::new("new")).unwrap();
    let cards = next.views[1].as_content().unwrap().cards();

    assert_eq!(cards[0].card_type(), Some("new"));
    assert!(Arc::ptr_eq(&cards[1], &previous_first));
}

#[test]
fn test_swap_twice_restores_document() {
    let config = home_dashboard();
    let pairs = [
        (ItemPath::in_view(0, 0), ItemPath::in_view(0, 2)),
        (ItemPath::in_view(0, 1), ItemPath::in_section(1, 1, 0)),
        (ItemPath::in_section(1, 0, 0), ItemPath::in_section(1, 1, 0)),
        (ItemPath::in_view(0, 1), ItemPath::in_view(0, 1)),
    ];

    for (a, b) in pairs {
        let once = swap_card(&config, &a, &b).unwrap();
        let twice = swap_card(&once, &a, &b).unwrap();
        assert_eq!(twice, config, "swapping {} and {} twice", a, b);
    }
}

#[test]
fn test_strategy_view_rejects_every_content_edit() {
    let config = home_dashboard();
    let strategy = ContainerPath::view(2);
    let strategy_error = ConfigError::StrategyEdit { path: strategy };

    let mutations = vec![
        Mutation::AddCard {
            path: strategy,
            card: CardConfig::new("tile"),
        },
        Mutation::AddCards {
            path: strategy,
            cards: vec![CardConfig::new("tile")],
        },
        Mutation::InsertCard {
            path: strategy.item(0),
            card: CardConfig::new("tile"),
        },
        Mutation::ReplaceCard {
            path: strategy.item(0),
            card: CardConfig::new("tile"),
        },
        Mutation::DeleteCard {
            path: strategy.item(0),
        },
        Mutation::DuplicateCard {
            path: strategy.item(0),
        },
        Mutation::MoveCard {
            from: ItemPath::in_view(0, 0),
            to: strategy,
        },
        Mutation::MoveCard {
            from: strategy.item(0),
            to: ContainerPath::view(0),
        },
        Mutation::MoveCardToIndex {
            path: strategy.item(0),
            index: 0,
        },
        Mutation::SwapCard {
            a: ItemPath::in_view(0, 0),
            b: strategy.item(0),
        },
        Mutation::AddBadge {
            view_index: 2,
            badge: BadgeConfig::new("entity"),
        },
        Mutation::AddBadges {
            view_index: 2,
            badges: vec![BadgeConfig::new("entity")],
        },
        Mutation::InsertBadge {
            path: BadgePath::new(2, 0),
            badge: BadgeConfig::new("entity"),
        },
        Mutation::ReplaceBadge {
            path: BadgePath::new(2, 0),
            badge: BadgeConfig::new("entity"),
        },
        Mutation::DeleteBadge {
            path: BadgePath::new(2, 0),
        },
        Mutation::MoveBadge {
            from: BadgePath::new(0, 0),
            to_view: 2,
        },
        Mutation::MoveBadge {
            from: BadgePath::new(2, 0),
            to_view: 0,
        },
        Mutation::MoveBadgeToIndex {
            path: BadgePath::new(2, 0),
            index: 0,
        },
        Mutation::SwapBadge {
            a: BadgePath::new(0, 0),
            b: BadgePath::new(2, 0),
        },
        Mutation::AddSection {
            view_index: 2,
            section: SectionConfig::Content(ContentSection::grid()),
        },
        Mutation::InsertSection {
            path: SectionPath::new(2, 0),
            section: SectionConfig::Content(ContentSection::grid()),
        },
        Mutation::ReplaceSection {
            path: SectionPath::new(2, 0),
            section: SectionConfig::Content(ContentSection::grid()),
        },
        Mutation::DeleteSection {
            path: SectionPath::new(2, 0),
        },
        Mutation::MoveSection {
            from: SectionPath::new(1, 0),
            to: SectionPath::new(2, 0),
        },
        Mutation::MoveSection {
            from: SectionPath::new(2, 0),
            to: SectionPath::new(1, 0),
        },
        Mutation::SwapSection {
            a: SectionPath::new(1, 0),
            b: SectionPath::new(2, 0),
        },
    ];

    for mutation in mutations {
        let before = config.clone();
        assert_eq!(
            mutation.apply(&config),
            Err(strategy_error.clone()),
            "{}",
            mutation.name()
        );
        assert_eq!(config, before);
    }

    let err =
        add_card(&config, &ContainerPath::section(2, 0), CardConfig::new("tile")).unwrap_err();
    assert_eq!(err, strategy_error);
}

#[test]
fn test_strategy_section_rejects_card_edits() {
    let config = home_dashboard();
    let err =
        add_card(&config, &ContainerPath::section(1, 2), CardConfig::new("tile")).unwrap_err();

    assert_eq!(
        err,
        ConfigError::StrategyEdit {
            path: ContainerPath::section(1, 2)
        }
    );
}

#[test]
fn test_scenario_swap_within_view() {
    let config = two_views();
    let next = swap_card(&config, &ItemPath::in_view(1, 0), &ItemPath::in_view(1, 1)).unwrap();

    assert_eq!(card_types(&next, &ContainerPath::view(1)), vec!["card2", "card1"]);
}

#[test]
fn test_scenario_move_between_views() {
    let config = two_views();
    let next = move_card(&config, &ItemPath::in_view(1, 0), &ContainerPath::view(0)).unwrap();

    assert_eq!(card_types(&next, &ContainerPath::view(0)), vec!["card1"]);
    assert_eq!(card_types(&next, &ContainerPath::view(1)), vec!["card2"]);
}

#[test]
fn test_scenario_move_into_same_container_fails() {
    let config = two_views();
    let err = move_card(&config, &ItemPath::in_view(1, 0), &ContainerPath::view(1)).unwrap_err();

    assert_eq!(
        err,
        ConfigError::SameContainer {
            path: ContainerPath::view(1)
        }
    );
}

#[test]
fn test_scenario_swap_view_with_itself() {
    let config = two_views();
    let next = swap_view(&config, 0, 0).unwrap();
    assert_eq!(next, config);
}

#[test]
fn test_move_to_index_forward_and_backward() {
    let config = home_dashboard();
    let view = ContainerPath::view(0);

    let forward = move_card_to_index(&config, &view.item(0), 2).unwrap();
    assert_eq!(
        card_types(&forward, &view),
        vec!["entities", "thermostat", "weather-forecast"]
    );

    let backward = move_card_to_index(&config, &view.item(2), 0).unwrap();
    assert_eq!(
        card_types(&backward, &view),
        vec!["thermostat", "weather-forecast", "entities"]
    );

    let err = move_card_to_index(&config, &view.item(0), 3).unwrap_err();
    assert_eq!(err, ConfigError::OutOfRange { index: 3, len: 3 });
}

#[test]
fn test_missing_containers() {
    let config = home_dashboard();

    assert_eq!(
        add_card(&config, &ContainerPath::view(5), CardConfig::new("tile")).unwrap_err(),
        ConfigError::MissingView { view_index: 5 }
    );
    assert_eq!(
        add_card(&config, &ContainerPath::section(1, 3), CardConfig::new("tile")).unwrap_err(),
        ConfigError::MissingSection {
            view_index: 1,
            section_index: 3
        }
    );
    assert_eq!(
        add_card(&config, &ContainerPath::section(0, 0), CardConfig::new("tile")).unwrap_err(),
        ConfigError::MissingSection {
            view_index: 0,
            section_index: 0
        }
    );
}

#[test]
fn test_duplicate_view_paths() {
    let config = home_dashboard();

    let err =
        add_view(&config, ViewConfig::Content(ContentView::new().with_path("rooms"))).unwrap_err();
    assert_eq!(
        err,
        ConfigError::DuplicatePath {
            path: "rooms".to_string()
        }
    );

    let renamed = replace_view(
        &config,
        1,
        ViewConfig::Content(
            ContentView::sections_view()
                .with_path("rooms")
                .with_title("All rooms"),
        ),
    )
    .unwrap();
    assert_eq!(renamed.views[1].title(), Some("All rooms"));
}

#[test]
fn test_sequential_edits_compose() -> anyhow::Result<()> {
    let config = home_dashboard();

    let config = add_section(&config, 1, SectionConfig::Content(ContentSection::grid()))?;
    let config = move_card(&config, &ItemPath::in_view(0, 2), &ContainerPath::section(1, 3))?;
    let config = move_section(&config, &SectionPath::new(1, 3), &SectionPath::new(1, 0))?;
    let config = move_view(&config, 1, 0)?;

    assert_eq!(config.views[0].title(), Some("Rooms"));
    assert_eq!(card_types(&config, &ContainerPath::section(0, 0)), vec!["thermostat"]);
    assert_eq!(
        card_types(&config, &ContainerPath::view(1)),
        vec!["weather-forecast", "entities"]
    );
    Ok(())
}

#[test]
fn test_edited_document_serializes() -> anyhow::Result<()> {
    let config: LovelaceConfig = serde_json::from_value(serde_json::json!({
        "views": [
            { "title": "A", "cards": [{ "type": "card1" }, { "type": "card2", "extra": 1 }] },
            { "strategy": { "type": "original-states" } }
        ]
    }))?;

    let next = move_card_to_index(&config, &ItemPath::in_view(0, 1), 0)?;

    assert_eq!(
        serde_json::to_value(&next)?,
        serde_json::json!({
            "views": [
                { "title": "A", "cards": [{ "type": "card2", "extra": 1 }, { "type": "card1" }] },
                { "strategy": { "type": "original-states" } }
            ]
        })
    );
    Ok(())
}

//! Shared dashboards for integration tests

#![allow(dead_code)]

use lovelace_config::{
    resolve_container, BadgeConfig, CardConfig, ContainerPath, ContentSection, ContentView,
    LovelaceConfig, SectionConfig, StrategySection, StrategyView, ViewConfig,
};

/// View 0 empty, view 1 with `card1`, `card2`
pub fn two_views() -> LovelaceConfig {
    LovelaceConfig::new([
        ViewConfig::Content(ContentView::new()),
        ViewConfig::Content(
            ContentView::new().with_cards([CardConfig::new("card1"), CardConfig::new("card2")]),
        ),
    ])
}

/// A realistic mix:
/// - 0: masonry view with cards and badges
/// - 1: sections view with two grid sections and a strategy section
/// - 2: strategy view
pub fn home_dashboard() -> LovelaceConfig {
    let mut config = LovelaceConfig::new([
        ViewConfig::Content(
            ContentView::new()
                .with_title("Home")
                .with_path("home")
                .with_cards([
                    CardConfig::new("weather-forecast").with_field("entity", "weather.home"),
                    CardConfig::new("entities"),
                    CardConfig::new("thermostat").with_field("entity", "climate.hall"),
                ])
                .with_badges([
                    BadgeConfig::new("entity").with_field("entity", "person.ada"),
                    BadgeConfig::new("entity").with_field("entity", "sun.sun"),
                ]),
        ),
        ViewConfig::Content(
            ContentView::sections_view()
                .with_title("Rooms")
                .with_path("rooms")
                .with_sections([
                    SectionConfig::Content(ContentSection::grid().with_cards([
                        CardConfig::new("heading").with_field("heading", "Kitchen"),
                        CardConfig::new("tile").with_field("entity", "light.kitchen"),
                    ])),
                    SectionConfig::Content(ContentSection::grid().with_cards([
                        CardConfig::new("heading").with_field("heading", "Hall"),
                    ])),
                    SectionConfig::Strategy(StrategySection::new("area")),
                ]),
        ),
        ViewConfig::Strategy(StrategyView::new("energy").with_path("energy")),
    ]);
    config.title = Some("My Home".to_string());
    config
}

/// Card types of a container, in order
pub fn card_types(config: &LovelaceConfig, path: &ContainerPath) -> Vec<String> {
    resolve_container(config, path)
        .expect("container should resolve")
        .cards()
        .iter()
        .map(|card| card.card_type().unwrap_or_default().to_string())
        .collect()
}

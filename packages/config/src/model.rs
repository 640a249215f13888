//! # Dashboard Model
//!
//! The configuration document as hosts load it:
//!
//! ```text
//! LovelaceConfig
//!   └─ views[]           ViewConfig::Content | ViewConfig::Strategy
//!        ├─ cards[]      (masonry / panel views)
//!        ├─ sections[]   SectionConfig::Content | SectionConfig::Strategy
//!        │    └─ cards[]
//!        └─ badges[]
//! ```
//!
//! Cards and badges are opaque JSON objects. Fields this model does not know
//! about are kept in `extra` and written back unchanged. A missing
//! `cards`/`sections`/`badges` key and an empty list are the same value;
//! empty lists are not written.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Untyped key/value fields of a config record
pub type Fields = Map<String, Value>;

fn typed_fields(record_type: impl Into<String>) -> Fields {
    let mut fields = Map::new();
    fields.insert("type".to_string(), Value::String(record_type.into()));
    fields
}

/// A card: `{ "type": ..., ...fields }`, never inspected by the editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardConfig(pub Fields);

impl CardConfig {
    pub fn new(card_type: impl Into<String>) -> Self {
        Self(typed_fields(card_type))
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn card_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Fields {
        &self.0
    }
}

/// A badge, attached at view level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeConfig(pub Fields);

impl BadgeConfig {
    pub fn new(badge_type: impl Into<String>) -> Self {
        Self(typed_fields(badge_type))
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn badge_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }
}

/// A section inside a sections view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionConfig {
    /// Content generated by a strategy; read-only to the editor
    Strategy(StrategySection),
    Content(ContentSection),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategySection {
    pub strategy: Fields,

    #[serde(flatten)]
    pub extra: Fields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub section_type: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<Arc<CardConfig>>,

    #[serde(flatten)]
    pub extra: Fields,
}

impl ContentSection {
    pub fn grid() -> Self {
        Self {
            section_type: Some("grid".to_string()),
            ..Self::default()
        }
    }

    pub fn with_cards(mut self, cards: impl IntoIterator<Item = CardConfig>) -> Self {
        self.cards = cards.into_iter().map(Arc::new).collect();
        self
    }

    /// Cards of this section; a missing `cards` key reads as empty
    pub fn cards(&self) -> &[Arc<CardConfig>] {
        &self.cards
    }
}

impl StrategySection {
    pub fn new(strategy_type: impl Into<String>) -> Self {
        Self {
            strategy: typed_fields(strategy_type),
            extra: Fields::new(),
        }
    }
}

impl SectionConfig {
    pub fn is_strategy(&self) -> bool {
        matches!(self, SectionConfig::Strategy(_))
    }

    pub fn as_content(&self) -> Option<&ContentSection> {
        match self {
            SectionConfig::Content(section) => Some(section),
            SectionConfig::Strategy(_) => None,
        }
    }
}

impl From<ContentSection> for SectionConfig {
    fn from(section: ContentSection) -> Self {
        SectionConfig::Content(section)
    }
}

impl From<StrategySection> for SectionConfig {
    fn from(section: StrategySection) -> Self {
        SectionConfig::Strategy(section)
    }
}

/// A top-level dashboard page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewConfig {
    /// Content generated by a strategy; read-only to the editor
    Strategy(StrategyView),
    Content(ContentView),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyView {
    pub strategy: Fields,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(flatten)]
    pub extra: Fields,
}

impl StrategyView {
    pub fn new(strategy_type: impl Into<String>) -> Self {
        Self {
            strategy: typed_fields(strategy_type),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentView {
    /// URL slug, unique across the dashboard when non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Layout kind: "masonry", "panel", "sidebar", "sections", ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub view_type: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<Arc<CardConfig>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Arc<SectionConfig>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<Arc<BadgeConfig>>,

    #[serde(flatten)]
    pub extra: Fields,
}

impl ContentView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections_view() -> Self {
        Self {
            view_type: Some("sections".to_string()),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_cards(mut self, cards: impl IntoIterator<Item = CardConfig>) -> Self {
        self.cards = cards.into_iter().map(Arc::new).collect();
        self
    }

    pub fn with_sections(mut self, sections: impl IntoIterator<Item = SectionConfig>) -> Self {
        self.sections = sections.into_iter().map(Arc::new).collect();
        self
    }

    pub fn with_badges(mut self, badges: impl IntoIterator<Item = BadgeConfig>) -> Self {
        self.badges = badges.into_iter().map(Arc::new).collect();
        self
    }

    pub fn cards(&self) -> &[Arc<CardConfig>] {
        &self.cards
    }

    pub fn sections(&self) -> &[Arc<SectionConfig>] {
        &self.sections
    }

    pub fn badges(&self) -> &[Arc<BadgeConfig>] {
        &self.badges
    }
}

impl ViewConfig {
    /// URL slug of the view, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            ViewConfig::Content(view) => view.path.as_deref(),
            ViewConfig::Strategy(view) => view.path.as_deref(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            ViewConfig::Content(view) => view.title.as_deref(),
            ViewConfig::Strategy(view) => view.title.as_deref(),
        }
    }

    pub fn is_strategy(&self) -> bool {
        matches!(self, ViewConfig::Strategy(_))
    }

    pub fn as_content(&self) -> Option<&ContentView> {
        match self {
            ViewConfig::Content(view) => Some(view),
            ViewConfig::Strategy(_) => None,
        }
    }
}

impl From<ContentView> for ViewConfig {
    fn from(view: ContentView) -> Self {
        ViewConfig::Content(view)
    }
}

impl From<StrategyView> for ViewConfig {
    fn from(view: StrategyView) -> Self {
        ViewConfig::Strategy(view)
    }
}

/// Root of a dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LovelaceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub views: Vec<Arc<ViewConfig>>,

    #[serde(flatten)]
    pub extra: Fields,
}

impl LovelaceConfig {
    pub fn new(views: impl IntoIterator<Item = ViewConfig>) -> Self {
        Self {
            views: views.into_iter().map(Arc::new).collect(),
            ..Self::default()
        }
    }

    pub fn view(&self, index: usize) -> Option<&Arc<ViewConfig>> {
        self.views.get(index)
    }
}

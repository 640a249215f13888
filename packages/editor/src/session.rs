//! # Edit Session
//!
//! Host-side owner of the one authoritative dashboard document.
//!
//! Edits are serialised through `&mut self`: each one runs against the
//! current document, is handed to the host's [`ConfigSink`], and only then
//! becomes current. A rejected edit or a failed save leaves the session
//! exactly as it was.
//!
//! ```text
//! apply(mutation) → algebra → save_config(new) → current = new, version += 1
//! ```

use crate::errors::{EditorError, SaveError};
use crate::keys::KeyTable;
use crate::mutations::Mutation;
use lovelace_config::{
    resolve_container, resolve_view, BadgePath, ConfigResult, ItemPath, LovelaceConfig, SectionPath,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Host callback receiving every new document
pub trait ConfigSink {
    fn save_config(&self, config: Arc<LovelaceConfig>) -> Result<(), SaveError>;
}

impl<F> ConfigSink for F
where
    F: Fn(Arc<LovelaceConfig>) -> Result<(), SaveError>,
{
    fn save_config(&self, config: Arc<LovelaceConfig>) -> Result<(), SaveError> {
        self(config)
    }
}

/// Single editing surface over a dashboard
pub struct EditSession<S> {
    /// Session label, also seeds render keys
    pub id: String,

    config: Arc<LovelaceConfig>,
    version: u64,
    keys: KeyTable,
    sink: S,
}

impl<S: ConfigSink> EditSession<S> {
    pub fn new(id: impl Into<String>, config: LovelaceConfig, sink: S) -> Self {
        let id = id.into();
        Self {
            keys: KeyTable::new(&id),
            id,
            config: Arc::new(config),
            version: 0,
            sink,
        }
    }

    /// Current document
    pub fn config(&self) -> &Arc<LovelaceConfig> {
        &self.config
    }

    /// Number of edits saved since creation or the last reload
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Apply one mutation and save the result
    #[instrument(skip(self, mutation), fields(session = %self.id, op = mutation.name()))]
    pub fn apply(&mut self, mutation: &Mutation) -> Result<u64, EditorError> {
        let next = mutation.apply(&self.config).map_err(|e| {
            warn!(error = %e, "mutation rejected");
            e
        })?;
        self.commit(next)
    }

    /// Apply mutations in order and save once. If any fails, nothing is saved.
    #[instrument(skip(self, mutations), fields(session = %self.id, count = mutations.len()))]
    pub fn apply_all(&mut self, mutations: &[Mutation]) -> Result<u64, EditorError> {
        let mut next: Option<LovelaceConfig> = None;

        for mutation in mutations {
            let base = next.as_ref().unwrap_or(&*self.config);
            let applied = mutation.apply(base).map_err(|e| {
                warn!(error = %e, op = mutation.name(), "batch rejected");
                e
            })?;
            next = Some(applied);
        }

        match next {
            Some(next) => self.commit(next),
            None => Ok(self.version),
        }
    }

    /// Run an algebra function directly against the current document
    pub fn edit<F>(&mut self, edit: F) -> Result<u64, EditorError>
    where
        F: FnOnce(&LovelaceConfig) -> ConfigResult<LovelaceConfig>,
    {
        let next = edit(&*self.config)?;
        self.commit(next)
    }

    /// Replace the document wholesale, e.g. after an external reload.
    /// Render keys start over; nothing is saved.
    pub fn reload(&mut self, config: LovelaceConfig) {
        debug!(session = %self.id, "config reloaded");
        self.config = Arc::new(config);
        self.version = 0;
        self.keys.reset();
    }

    fn commit(&mut self, next: LovelaceConfig) -> Result<u64, EditorError> {
        let next = Arc::new(next);

        self.sink.save_config(Arc::clone(&next)).map_err(|e| {
            warn!(error = %e, "save failed, keeping previous config");
            e
        })?;

        self.config = next;
        self.version += 1;
        debug!(version = self.version, "config saved");
        Ok(self.version)
    }

    pub fn keys(&mut self) -> &mut KeyTable {
        &mut self.keys
    }

    pub fn key_of_view(&mut self, view_index: usize) -> Option<String> {
        let view = Arc::clone(self.config.views.get(view_index)?);
        Some(self.keys.key_of(&view))
    }

    pub fn key_of_section(&mut self, path: &SectionPath) -> Option<String> {
        let section = resolve_view(&self.config, path.view_index)
            .ok()?
            .sections()
            .get(path.section_index)
            .cloned()?;
        Some(self.keys.key_of(&section))
    }

    pub fn key_of_card(&mut self, path: &ItemPath) -> Option<String> {
        let card = resolve_container(&self.config, &path.container)
            .ok()?
            .cards()
            .get(path.index)
            .cloned()?;
        Some(self.keys.key_of(&card))
    }

    pub fn key_of_badge(&mut self, path: &BadgePath) -> Option<String> {
        let badge = resolve_view(&self.config, path.view_index)
            .ok()?
            .badges()
            .get(path.index)
            .cloned()?;
        Some(self.keys.key_of(&badge))
    }
}

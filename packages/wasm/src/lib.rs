//! Dashboard edits for JavaScript hosts.
//!
//! Documents cross the boundary as JSON strings and come back the same way.
//! Paths are plain integer arrays: `[view]`, `[view, section]` for
//! containers and one more index for an item.

use lovelace_config::{
    parse_container_path, parse_item_path, ConfigError, LovelaceConfig, PathError,
};
use lovelace_editor::{add_card, delete_card, move_card, swap_card, CardConfig, Mutation};
use thiserror::Error;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Path(#[from] PathError),

    #[error("{0}")]
    Config(#[from] ConfigError),
}

impl From<BridgeError> for JsValue {
    fn from(error: BridgeError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

#[wasm_bindgen]
pub struct EditResult {
    config: String,
    op: String,
}

#[wasm_bindgen]
impl EditResult {
    /// The edited document as JSON
    #[wasm_bindgen(getter)]
    pub fn config(&self) -> String {
        self.config.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn op(&self) -> String {
        self.op.clone()
    }
}

fn indices(path: &[u32]) -> Vec<usize> {
    path.iter().map(|&index| index as usize).collect()
}

fn edit_json<F>(config_json: &str, edit: F) -> Result<String, BridgeError>
where
    F: FnOnce(&LovelaceConfig) -> Result<LovelaceConfig, BridgeError>,
{
    let config: LovelaceConfig = serde_json::from_str(config_json)?;
    let next = edit(&config)?;
    Ok(serde_json::to_string(&next)?)
}

pub fn apply_mutation_json(
    config_json: &str,
    mutation_json: &str,
) -> Result<EditResult, BridgeError> {
    let mutation: Mutation = serde_json::from_str(mutation_json)?;
    let config = edit_json(config_json, |config| Ok(mutation.apply(config)?))?;

    Ok(EditResult {
        config,
        op: mutation.name().to_string(),
    })
}

/// Apply a JSON array of mutations in order; any failure fails the batch
pub fn apply_mutations_json(
    config_json: &str,
    mutations_json: &str,
) -> Result<String, BridgeError> {
    let mutations: Vec<Mutation> = serde_json::from_str(mutations_json)?;

    edit_json(config_json, |config| {
        let mut next = config.clone();
        for mutation in &mutations {
            next = mutation.apply(&next)?;
        }
        Ok(next)
    })
}

pub fn add_card_json(
    config_json: &str,
    path: &[u32],
    card_json: &str,
) -> Result<String, BridgeError> {
    let path = parse_container_path(&indices(path))?;
    let card: CardConfig = serde_json::from_str(card_json)?;
    edit_json(config_json, |config| Ok(add_card(config, &path, card)?))
}

pub fn delete_card_json(config_json: &str, path: &[u32]) -> Result<String, BridgeError> {
    let path = parse_item_path(&indices(path))?;
    edit_json(config_json, |config| Ok(delete_card(config, &path)?))
}

pub fn move_card_json(config_json: &str, from: &[u32], to: &[u32]) -> Result<String, BridgeError> {
    let from = parse_item_path(&indices(from))?;
    let to = parse_container_path(&indices(to))?;
    edit_json(config_json, |config| Ok(move_card(config, &from, &to)?))
}

pub fn swap_card_json(config_json: &str, a: &[u32], b: &[u32]) -> Result<String, BridgeError> {
    let a = parse_item_path(&indices(a))?;
    let b = parse_item_path(&indices(b))?;
    edit_json(config_json, |config| Ok(swap_card(config, &a, &b)?))
}

/// Apply one JSON mutation to a JSON document
#[wasm_bindgen(js_name = applyMutation)]
pub fn apply_mutation_js(config: &str, mutation: &str) -> Result<EditResult, JsValue> {
    Ok(apply_mutation_json(config, mutation)?)
}

#[wasm_bindgen(js_name = applyMutations)]
pub fn apply_mutations_js(config: &str, mutations: &str) -> Result<String, JsValue> {
    Ok(apply_mutations_json(config, mutations)?)
}

#[wasm_bindgen(js_name = addCard)]
pub fn add_card_js(config: &str, path: &[u32], card: &str) -> Result<String, JsValue> {
    Ok(add_card_json(config, path, card)?)
}

#[wasm_bindgen(js_name = deleteCard)]
pub fn delete_card_js(config: &str, path: &[u32]) -> Result<String, JsValue> {
    Ok(delete_card_json(config, path)?)
}

#[wasm_bindgen(js_name = moveCard)]
pub fn move_card_js(config: &str, from: &[u32], to: &[u32]) -> Result<String, JsValue> {
    Ok(move_card_json(config, from, to)?)
}

#[wasm_bindgen(js_name = swapCard)]
pub fn swap_card_js(config: &str, a: &[u32], b: &[u32]) -> Result<String, JsValue> {
    Ok(swap_card_json(config, a, b)?)
}

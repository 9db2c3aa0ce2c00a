//! Typed access to `localStorage` for the high score and display settings.

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::config::Settings;

pub const HIGH_SCORE_KEY: &str = "mb_high_score";
pub const SETTINGS_KEY: &str = "mb_settings";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no window")]
    NoWindow,
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<JsValue> for StorageError {
    fn from(v: JsValue) -> Self {
        StorageError::Js(v.as_string().unwrap_or_else(|| format!("{:?}", v)))
    }
}

fn local_storage() -> Result<Storage, StorageError> {
    let win = web_sys::window().ok_or(StorageError::NoWindow)?;
    win.local_storage()?.ok_or(StorageError::Unavailable)
}

/// Missing or garbled values read as no score at all.
pub fn parse_high_score(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

pub fn load_high_score() -> Result<Option<u32>, StorageError> {
    let raw = local_storage()?.get_item(HIGH_SCORE_KEY)?;
    Ok(raw.as_deref().and_then(parse_high_score))
}

pub fn save_high_score(score: u32) -> Result<(), StorageError> {
    local_storage()?.set_item(HIGH_SCORE_KEY, &score.to_string())?;
    Ok(())
}

pub fn clear_high_score() -> Result<(), StorageError> {
    local_storage()?.remove_item(HIGH_SCORE_KEY)?;
    Ok(())
}

pub fn decode_settings(raw: &str) -> Result<Settings, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn load_settings() -> Result<Option<Settings>, StorageError> {
    match local_storage()?.get_item(SETTINGS_KEY)? {
        Some(raw) => decode_settings(&raw).map(Some),
        None => Ok(None),
    }
}

pub fn save_settings(settings: &Settings) -> Result<(), StorageError> {
    let raw = serde_json::to_string(settings)?;
    local_storage()?.set_item(SETTINGS_KEY, &raw)?;
    Ok(())
}

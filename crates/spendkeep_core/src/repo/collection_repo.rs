//! JSON collection and theme slots on top of a `KeyValueStore`.
//!
//! # Invariants
//! - `CollectionSlot::load` never fails on bad slot contents. Invalid
//!   elements are dropped with a warning; valid ones always survive. Only
//!   transport errors surface.
//! - `CollectionSlot::save` always writes the full collection.

use crate::model::theme::Theme;
use crate::repo::kv_repo::{KeyValueStore, StoreError, StoreResult};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// Typed handle for one collection slot.
#[derive(Debug, Clone, Copy)]
pub struct CollectionSlot<T> {
    key: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> CollectionSlot<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl<T: Serialize + DeserializeOwned> CollectionSlot<T> {
    /// Loads the persisted collection.
    ///
    /// Elements that fail to decode or validate are dropped individually; the
    /// rest are kept in stored order. A missing slot, or one that is not a
    /// JSON array, loads as an empty collection.
    pub fn load<S: KeyValueStore + ?Sized>(&self, store: &S) -> StoreResult<Vec<T>> {
        let Some(raw) = store.get(self.key)? else {
            info!(
                "event=collection_load module=repo status=empty key={}",
                self.key
            );
            return Ok(Vec::new());
        };

        let elements = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(elements) => elements,
            Err(err) => {
                warn!(
                    "event=collection_load module=repo status=discarded key={} line={} column={} error_code=invalid_slot_json",
                    self.key,
                    err.line(),
                    err.column()
                );
                return Ok(Vec::new());
            }
        };

        let stored = elements.len();
        let records: Vec<T> = elements
            .into_iter()
            .filter_map(|element| serde_json::from_value(element).ok())
            .collect();
        let dropped = stored - records.len();
        if dropped > 0 {
            warn!(
                "event=collection_load module=repo status=partial key={} count={} dropped={dropped} error_code=invalid_slot_record",
                self.key,
                records.len()
            );
        } else {
            info!(
                "event=collection_load module=repo status=ok key={} count={}",
                self.key,
                records.len()
            );
        }
        Ok(records)
    }

    /// Serializes and persists the full collection, replacing the slot.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, records: &[T]) -> StoreResult<()> {
        let encoded = serde_json::to_string(records).map_err(StoreError::Serialize)?;
        store.set(self.key, &encoded)?;
        info!(
            "event=collection_save module=repo status=ok key={} count={}",
            self.key,
            records.len()
        );
        Ok(())
    }
}

/// Theme preference slot with an application-specific default.
#[derive(Debug, Clone, Copy)]
pub struct ThemeSlot {
    key: &'static str,
    default: Theme,
}

impl ThemeSlot {
    pub const fn new(key: &'static str, default: Theme) -> Self {
        Self { key, default }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Restores the saved theme; unknown or missing values yield the default.
    pub fn load<S: KeyValueStore + ?Sized>(&self, store: &S) -> StoreResult<Theme> {
        let theme = store
            .get(self.key)?
            .and_then(|value| value.parse::<Theme>().ok())
            .unwrap_or(self.default);
        Ok(theme)
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, theme: Theme) -> StoreResult<()> {
        store.set(self.key, theme.as_str())
    }
}

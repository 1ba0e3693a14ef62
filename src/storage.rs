// 💾 Persistence Adapter - durable key-value storage for the item collection
//
// The whole collection lives as ONE JSON array under ONE key, the same way a
// browser keeps it in localStorage. Every write rewrites the full record.

use crate::items::{Item, ItemId};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Key under which the serialized collection is stored
pub const STORAGE_KEY: &str = "items";

// ============================================================================
// LOCAL STORAGE (key -> string value, backed by SQLite)
// ============================================================================

/// Durable string key-value store with a localStorage-like surface
pub struct LocalStorage {
    conn: Connection,
}

impl LocalStorage {
    /// Open (or create) the storage database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create storage directory {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open storage at {}", path.display()))?;
        Self::from_connection(conn)
    }

    /// Non-durable storage, used by tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        setup_storage(&conn)?;
        Ok(Self { conn })
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Insert or replace the value stored under `key`
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn remove_item(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// When `key` was last written, if it exists
    pub fn updated_at(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        let stamp: Option<String> = self
            .conn
            .query_row(
                "SELECT updated_at FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        match stamp {
            Some(s) => {
                let parsed = DateTime::parse_from_rfc3339(&s)
                    .with_context(|| format!("Invalid timestamp for key {}", key))?;
                Ok(Some(parsed.with_timezone(&Utc)))
            }
            None => Ok(None),
        }
    }
}

pub fn setup_storage(conn: &Connection) -> Result<()> {
    // WAL keeps the record readable if the process dies mid-write
    conn.pragma_update(None, "journal_mode", "WAL")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS local_storage (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

// ============================================================================
// ITEM STORAGE (collection <-> serialized record)
// ============================================================================

/// Stores the item collection as a single JSON record
pub struct ItemStorage {
    storage: LocalStorage,
}

impl ItemStorage {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Append `item` to the stored collection, creating the record if absent
    pub fn save(&self, item: &Item) -> Result<()> {
        let mut items = self.read_items_for_write()?.unwrap_or_default();
        items.push(item.clone());
        self.write_items(&items)?;

        debug!(
            "event=storage_save module=storage status=ok id={} stored={}",
            item.id,
            items.len()
        );
        Ok(())
    }

    /// Stored collection, or empty when there is no readable record
    pub fn load_all(&self) -> Vec<Item> {
        match self.read_items() {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(
                    "event=storage_load module=storage status=error treated_as=empty error={:#}",
                    err
                );
                Vec::new()
            }
        }
    }

    /// Replace the stored item with the same id; no-op without a match
    pub fn update(&self, item: &Item) -> Result<()> {
        let Some(mut items) = self.read_items_for_write()? else {
            return Ok(());
        };

        match items.iter_mut().find(|stored| stored.id == item.id) {
            Some(stored) => {
                *stored = item.clone();
                self.write_items(&items)?;
                debug!("event=storage_update module=storage status=ok id={}", item.id);
            }
            None => debug!("event=storage_update module=storage status=miss id={}", item.id),
        }
        Ok(())
    }

    /// Remove the stored item with `id`; no-op without a match
    pub fn remove(&self, id: ItemId) -> Result<()> {
        let Some(mut items) = self.read_items_for_write()? else {
            return Ok(());
        };

        let before = items.len();
        items.retain(|stored| stored.id != id);
        if items.len() != before {
            self.write_items(&items)?;
            debug!("event=storage_remove module=storage status=ok id={}", id);
        }
        Ok(())
    }

    /// Delete the whole record
    pub fn clear(&self) -> Result<()> {
        self.storage.remove_item(STORAGE_KEY)?;
        debug!("event=storage_clear module=storage status=ok");
        Ok(())
    }

    pub fn last_saved(&self) -> Result<Option<DateTime<Utc>>> {
        self.storage.updated_at(STORAGE_KEY)
    }

    fn read_items(&self) -> Result<Option<Vec<Item>>> {
        let Some(raw) = self.storage.get_item(STORAGE_KEY)? else {
            return Ok(None);
        };
        let items = serde_json::from_str(&raw).context("Failed to decode stored items")?;
        Ok(Some(items))
    }

    /// Like `read_items`, but an undecodable record counts as empty, the same
    /// way `load_all` sees it. Storage errors still propagate.
    fn read_items_for_write(&self) -> Result<Option<Vec<Item>>> {
        let Some(raw) = self.storage.get_item(STORAGE_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(items) => Ok(Some(items)),
            Err(err) => {
                warn!(
                    "event=storage_decode module=storage status=error treated_as=empty error={}",
                    err
                );
                Ok(Some(Vec::new()))
            }
        }
    }

    fn write_items(&self, items: &[Item]) -> Result<()> {
        let raw = serde_json::to_string(items).context("Failed to encode items")?;
        self.storage.set_item(STORAGE_KEY, &raw)
    }
}

// ============================================================================
// TESTS
// ============================================================================

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Saved deals: named inputs/results pairs with free-text notes.

use crate::models::{BrrrrInputs, BrrrrResults, SavedDeal};
use anyhow::{Context, Result, anyhow, bail};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_DEAL: &str =
    "SELECT id, deal_name, inputs, results, notes, created_at, updated_at FROM deals";

struct DealRow {
    id: i64,
    deal_name: String,
    inputs: String,
    results: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DealRow {
    fn from_row(r: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: r.get(0)?,
            deal_name: r.get(1)?,
            inputs: r.get(2)?,
            results: r.get(3)?,
            notes: r.get(4)?,
            created_at: r.get(5)?,
            updated_at: r.get(6)?,
        })
    }

    fn into_deal(self) -> Result<SavedDeal> {
        let inputs: BrrrrInputs = serde_json::from_str(&self.inputs)
            .with_context(|| format!("Invalid stored inputs for deal {}", self.id))?;
        let results: BrrrrResults = serde_json::from_str(&self.results)
            .with_context(|| format!("Invalid stored results for deal {}", self.id))?;
        Ok(SavedDeal {
            id: self.id,
            deal_name: self.deal_name,
            inputs,
            results,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn clean_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Deal name must not be empty");
    }
    Ok(name)
}

fn clean_notes(notes: Option<&str>) -> Option<&str> {
    notes.map(str::trim).filter(|n| !n.is_empty())
}

pub fn create_deal(
    conn: &Connection,
    name: &str,
    inputs: &BrrrrInputs,
    results: &BrrrrResults,
    notes: Option<&str>,
) -> Result<i64> {
    let name = clean_name(name)?;
    let now = Utc::now();
    conn.execute(
        "INSERT INTO deals(deal_name, inputs, results, notes, created_at, updated_at)
         VALUES (?1,?2,?3,?4,?5,?5)",
        params![
            name,
            serde_json::to_string(inputs)?,
            serde_json::to_string(results)?,
            clean_notes(notes),
            now
        ],
    )?;
    let id = conn.last_insert_rowid();
    log::info!("created deal {} '{}'", id, name);
    Ok(id)
}

pub fn find_deal(conn: &Connection, id: i64) -> Result<Option<SavedDeal>> {
    let row = conn
        .query_row(
            &format!("{} WHERE id=?1", SELECT_DEAL),
            params![id],
            DealRow::from_row,
        )
        .optional()?;
    row.map(DealRow::into_deal).transpose()
}

pub fn get_deal(conn: &Connection, id: i64) -> Result<SavedDeal> {
    find_deal(conn, id)?.ok_or_else(|| anyhow!("Deal {} not found", id))
}

/// Replaces inputs, results and notes of an existing deal. `name` of `None`
/// keeps the current name.
pub fn update_deal(
    conn: &Connection,
    id: i64,
    name: Option<&str>,
    inputs: &BrrrrInputs,
    results: &BrrrrResults,
    notes: Option<&str>,
) -> Result<()> {
    let name = name.map(clean_name).transpose()?;
    let changed = conn.execute(
        "UPDATE deals SET deal_name=COALESCE(?2, deal_name), inputs=?3, results=?4, notes=?5, updated_at=?6
         WHERE id=?1",
        params![
            id,
            name,
            serde_json::to_string(inputs)?,
            serde_json::to_string(results)?,
            clean_notes(notes),
            Utc::now()
        ],
    )?;
    if changed == 0 {
        bail!("Deal {} not found", id);
    }
    log::info!("updated deal {}", id);
    Ok(())
}

pub fn delete_deal(conn: &Connection, id: i64) -> Result<()> {
    let changed = conn.execute("DELETE FROM deals WHERE id=?1", params![id])?;
    if changed == 0 {
        bail!("Deal {} not found", id);
    }
    log::info!("deleted deal {}", id);
    Ok(())
}

/// All deals, most recently updated first.
pub fn list_deals(conn: &Connection) -> Result<Vec<SavedDeal>> {
    let mut stmt = conn.prepare(&format!("{} ORDER BY updated_at DESC, id DESC", SELECT_DEAL))?;
    let rows = stmt.query_map([], DealRow::from_row)?;
    let mut deals = Vec::new();
    for row in rows {
        deals.push(row?.into_deal()?);
    }
    Ok(deals)
}

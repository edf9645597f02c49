// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::brrrr;
use crate::models::{BrrrrInputs, BrrrrResults};
use crate::utils::pretty_table;
use crate::validate::validate_brrrr;
use anyhow::Result;
use rusqlite::Connection;

/// Audits every stored deal. Returns `(issue, detail)` pairs.
pub fn check_deals(conn: &Connection) -> Result<Vec<(String, String)>> {
    let mut issues = Vec::new();
    let mut stmt = conn.prepare("SELECT id, deal_name, inputs, results FROM deals ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let name: String = r.get(1)?;
        let inputs_raw: String = r.get(2)?;
        let results_raw: String = r.get(3)?;
        let label = format!("#{} {}", id, name);

        // 1) Stored JSON must parse
        let inputs = match serde_json::from_str::<BrrrrInputs>(&inputs_raw) {
            Ok(v) => v,
            Err(e) => {
                issues.push(("unreadable_inputs".into(), format!("{}: {}", label, e)));
                continue;
            }
        };
        let results = match serde_json::from_str::<BrrrrResults>(&results_raw) {
            Ok(v) => v,
            Err(e) => {
                issues.push(("unreadable_results".into(), format!("{}: {}", label, e)));
                continue;
            }
        };

        // 2) Inputs outside their domain ranges
        if let Err(e) = validate_brrrr(&inputs) {
            for issue in e.issues() {
                issues.push(("invalid_input".into(), format!("{}: {}", label, issue)));
            }
        }

        // 3) Results that no longer match a fresh computation, compared the
        // way they are stored (non-finite values as null)
        let fresh = brrrr::compute(&inputs);
        let stored_json = serde_json::to_value(results)?;
        let fresh_json = serde_json::to_value(fresh)?;
        if stored_json != fresh_json {
            issues.push(("stale_results".into(), label.clone()));
        }

        // 4) Figures that cannot be shown
        if fresh.values().iter().any(|v| !v.is_finite()) {
            issues.push(("non_finite_result".into(), label));
        }
    }
    Ok(issues)
}

pub fn handle(conn: &Connection) -> Result<()> {
    let rows: Vec<Vec<String>> = check_deals(conn)?
        .into_iter()
        .map(|(issue, detail)| vec![issue, detail])
        .collect();
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

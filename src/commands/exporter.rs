// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{INPUT_FIELDS, RESULT_FIELDS};
use crate::store;
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("deals", sub)) => export_deals(conn, sub),
        _ => Ok(()),
    }
}

fn export_deals(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap().trim().to_string();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let deals = store::list_deals(conn)?;
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(&out)?;
            let mut header = vec!["id", "deal_name"];
            header.extend(INPUT_FIELDS.iter().map(|f| f.key));
            header.extend(RESULT_FIELDS.iter().map(|f| f.key));
            header.extend(["notes", "created_at", "updated_at"]);
            wtr.write_record(&header)?;
            for d in &deals {
                let mut record = vec![d.id.to_string(), d.deal_name.clone()];
                record.extend(d.inputs.values().iter().map(|v| v.to_string()));
                record.extend(d.results.values().iter().map(|v| v.to_string()));
                record.push(d.notes.clone().unwrap_or_default());
                record.push(d.created_at.to_rfc3339());
                record.push(d.updated_at.to_rfc3339());
                wtr.write_record(&record)?;
            }
            wtr.flush()?;
        }
        _ => {
            std::fs::write(&out, serde_json::to_string_pretty(&deals)?)?;
        }
    }
    log::info!("exported {} deals as {}", deals.len(), fmt);
    println!("Exported {} deals to {}", deals.len(), out);
    Ok(())
}

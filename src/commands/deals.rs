// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::brrrr;
use crate::commands::calc::{brrrr_inputs_from, field_rows};
use crate::models::{INPUT_FIELDS, RESULT_FIELDS};
use crate::report::{self, ReportContext, ReportFormat};
use crate::store;
use crate::utils::{fmt_pct, fmt_usd, maybe_print_json, parse_id, pretty_table};
use crate::validate::validate_brrrr;
use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use regex::Regex;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("save", sub)) => save(conn, sub)?,
        Some(("update", sub)) => update(conn, sub)?,
        Some(("show", sub)) => show(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let id = parse_id(sub.get_one::<String>("id").unwrap())?;
            store::delete_deal(conn, id)?;
            println!("Removed deal {}", id);
        }
        Some(("report", sub)) => report_cmd(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn save(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let notes = sub.get_one::<String>("notes").map(|s| s.as_str());
    let inputs = brrrr_inputs_from(sub, None)?;
    validate_brrrr(&inputs)?;
    let results = brrrr::compute(&inputs);
    let id = store::create_deal(conn, &name, &inputs, &results, notes)?;
    println!("Saved deal {} '{}'", id, name);
    Ok(())
}

fn update(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(sub.get_one::<String>("id").unwrap())?;
    let existing = store::get_deal(conn, id)?;
    let inputs = brrrr_inputs_from(sub, Some(existing.inputs))?;
    validate_brrrr(&inputs)?;
    let results = brrrr::compute(&inputs);
    let name = sub.get_one::<String>("name").map(|s| s.as_str());
    let notes = match sub.get_one::<String>("notes") {
        Some(n) => Some(n.as_str()),
        None => existing.notes.as_deref(),
    };
    store::update_deal(conn, id, name, &inputs, &results, notes)?;
    println!("Updated deal {}", id);
    Ok(())
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(sub.get_one::<String>("id").unwrap())?;
    let deal = store::get_deal(conn, id)?;
    if maybe_print_json(sub.get_flag("json"), false, &deal)? {
        return Ok(());
    }
    println!("#{} {}", deal.id, deal.deal_name);
    println!(
        "created {}  updated {}",
        deal.created_at.format("%Y-%m-%d %H:%M"),
        deal.updated_at.format("%Y-%m-%d %H:%M")
    );
    let mut rows = field_rows(&INPUT_FIELDS, &deal.inputs.values());
    rows.extend(field_rows(&RESULT_FIELDS, &deal.results.values()));
    println!("{}", pretty_table(&["Phase", "Item", "Value"], rows));
    if let Some(notes) = &deal.notes {
        println!("Notes: {}", notes);
    }
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let filter = match sub.get_one::<String>("filter") {
        Some(p) => {
            let p = p.trim();
            Some(Regex::new(p).map_err(|err| anyhow!("Invalid filter '{}': {}", p, err))?)
        }
        None => None,
    };
    let deals: Vec<_> = store::list_deals(conn)?
        .into_iter()
        .filter(|d| filter.as_ref().is_none_or(|re| re.is_match(&d.deal_name)))
        .collect();

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &deals)? {
        return Ok(());
    }
    let rows = deals
        .iter()
        .map(|d| {
            vec![
                d.id.to_string(),
                d.deal_name.clone(),
                fmt_usd(d.inputs.purchase_price),
                fmt_usd(d.inputs.arv),
                fmt_usd(d.results.cash_out_amount),
                fmt_usd(d.results.post_refinance_cash_flow),
                fmt_pct(d.results.post_refinance_roi),
                d.updated_at.format("%Y-%m-%d").to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "ID",
                "Name",
                "Purchase",
                "ARV",
                "Cash Out",
                "Cash Flow",
                "ROI",
                "Updated"
            ],
            rows
        )
    );
    Ok(())
}

fn report_cmd(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(sub.get_one::<String>("id").unwrap())?;
    let format = ReportFormat::parse(sub.get_one::<String>("format").unwrap())?;
    let deal = store::get_deal(conn, id)?;
    let ctx = ReportContext {
        deal_name: &deal.deal_name,
        notes: deal.notes.as_deref(),
        inputs: &deal.inputs,
        results: &deal.results,
        generated_at: Utc::now(),
    };
    let rendered = report::render(format, &ctx);
    match sub.get_one::<String>("out") {
        Some(out) => {
            let out = out.trim();
            std::fs::write(out, rendered).with_context(|| format!("Failed to write {}", out))?;
            println!("Wrote report for deal {} to {}", id, out);
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cli::{INPUT_FLAGS, RENTAL_FLAGS};
use crate::models::{
    BrrrrInputs, FieldSpec, INPUT_FIELDS, RENTAL_INPUT_FIELDS, RENTAL_RESULT_FIELDS,
    RESULT_FIELDS, RentalInputs,
};
use crate::utils::{fmt_value, maybe_print_json, parse_amount, pretty_table, read_json_file};
use crate::validate::{validate_brrrr, validate_rental};
use crate::{brrrr, rental};
use anyhow::Result;
use std::path::Path;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("brrrr", sub)) => calc_brrrr(sub)?,
        Some(("rental", sub)) => calc_rental(sub)?,
        _ => {}
    }
    Ok(())
}

/// Applies `--<field>` overrides onto `values`, in `flags` order.
fn apply_flags<const N: usize>(
    sub: &clap::ArgMatches,
    flags: &[&str; N],
    mut values: [f64; N],
) -> Result<[f64; N]> {
    for (i, flag) in flags.iter().enumerate() {
        if let Some(raw) = sub.get_one::<String>(flag) {
            values[i] = parse_amount(raw)?;
        }
    }
    Ok(values)
}

/// Builds BRRRR inputs from `--inputs FILE` (or `base`, or all zeros) plus
/// per-field flag overrides.
pub fn brrrr_inputs_from(sub: &clap::ArgMatches, base: Option<BrrrrInputs>) -> Result<BrrrrInputs> {
    let start = match sub.get_one::<String>("inputs") {
        Some(path) => read_json_file::<BrrrrInputs>(Path::new(path.trim()))?,
        None => base.unwrap_or_default(),
    };
    let values = apply_flags(sub, &INPUT_FLAGS, start.values())?;
    Ok(BrrrrInputs::from_values(values))
}

pub fn rental_inputs_from(sub: &clap::ArgMatches) -> Result<RentalInputs> {
    let start = match sub.get_one::<String>("inputs") {
        Some(path) => read_json_file::<RentalInputs>(Path::new(path.trim()))?,
        None => RentalInputs::default(),
    };
    let values = apply_flags(sub, &RENTAL_FLAGS, start.values())?;
    Ok(RentalInputs::from_values(values))
}

pub fn field_rows(fields: &[FieldSpec], values: &[f64]) -> Vec<Vec<String>> {
    fields
        .iter()
        .zip(values)
        .map(|(spec, v)| {
            vec![
                spec.phase.label().to_string(),
                spec.label.to_string(),
                fmt_value(spec.unit, *v),
            ]
        })
        .collect()
}

fn calc_brrrr(sub: &clap::ArgMatches) -> Result<()> {
    let inputs = brrrr_inputs_from(sub, None)?;
    if !sub.get_flag("no-validate") {
        validate_brrrr(&inputs)?;
    }
    let results = brrrr::compute(&inputs);
    log::debug!("brrrr inputs={:?} results={:?}", inputs, results);

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &results)? {
        let mut rows = field_rows(&INPUT_FIELDS, &inputs.values());
        rows.extend(field_rows(&RESULT_FIELDS, &results.values()));
        println!("{}", pretty_table(&["Phase", "Item", "Value"], rows));
    }
    Ok(())
}

fn calc_rental(sub: &clap::ArgMatches) -> Result<()> {
    let inputs = rental_inputs_from(sub)?;
    if !sub.get_flag("no-validate") {
        validate_rental(&inputs)?;
    }
    let results = rental::analyze(&inputs);
    log::debug!("rental inputs={:?} results={:?}", inputs, results);

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &results)? {
        let mut rows = field_rows(&RENTAL_INPUT_FIELDS, &inputs.values());
        rows.extend(field_rows(&RENTAL_RESULT_FIELDS, &results.values()));
        println!("{}", pretty_table(&["Phase", "Item", "Value"], rows));
    }
    Ok(())
}

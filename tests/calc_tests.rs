// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use dealdesk::cli;
use dealdesk::commands::calc::{self, brrrr_inputs_from, rental_inputs_from};
use dealdesk::models::BrrrrInputs;
use std::io::Write;
use tempfile::NamedTempFile;

fn calc_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["dealdesk", "calc"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("calc", calc_m)) => calc_m.clone(),
        _ => panic!("calc command not parsed"),
    }
}

#[test]
fn absent_flags_default_to_zero() {
    let m = calc_matches(&["brrrr", "--purchase-price", " 90000 ", "--arv", "-1"]);
    let (_, sub) = m.subcommand().unwrap();
    let inputs = brrrr_inputs_from(sub, None).unwrap();
    assert_eq!(
        inputs,
        BrrrrInputs {
            purchase_price: 90000.0,
            arv: -1.0,
            ..BrrrrInputs::default()
        }
    );
}

#[test]
fn flags_override_inputs_file() {
    let mut file = NamedTempFile::new().unwrap();
    let base = BrrrrInputs {
        purchase_price: 100000.0,
        monthly_rent: 1200.0,
        arv: 150000.0,
        new_loan_term: 30.0,
        ..BrrrrInputs::default()
    };
    write!(file, "{}", serde_json::to_string(&base).unwrap()).unwrap();
    file.flush().unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let m = calc_matches(&["brrrr", "--inputs", &path, "--monthly-rent", "1350"]);
    let (_, sub) = m.subcommand().unwrap();
    let inputs = brrrr_inputs_from(sub, None).unwrap();
    assert_eq!(inputs.purchase_price, 100000.0);
    assert_eq!(inputs.monthly_rent, 1350.0);
}

#[test]
fn malformed_inputs_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\"purchasePrice\": 1, \"typo\": 2}}").unwrap();
    file.flush().unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let m = calc_matches(&["brrrr", "--inputs", &path]);
    let (_, sub) = m.subcommand().unwrap();
    let err = brrrr_inputs_from(sub, None).unwrap_err();
    assert!(err.to_string().starts_with("Invalid inputs file"));
}

#[test]
fn bad_number_is_an_error() {
    let m = calc_matches(&["rental", "--purchase-price", "lots"]);
    let (_, sub) = m.subcommand().unwrap();
    assert!(rental_inputs_from(sub).is_err());
}

#[test]
fn brrrr_validates_unless_told_not_to() {
    assert!(calc::handle(&calc_matches(&["brrrr", "--json"])).is_err());
    assert!(calc::handle(&calc_matches(&["brrrr", "--no-validate", "--json"])).is_ok());
}

#[test]
fn rental_runs_from_flags() {
    let m = calc_matches(&[
        "rental",
        "--purchase-price",
        "200000",
        "--down-payment-percent",
        "20",
        "--interest-rate",
        "6",
        "--loan-term",
        "30",
        "--monthly-rent",
        "1800",
        "--jsonl",
    ]);
    assert!(calc::handle(&m).is_ok());
}

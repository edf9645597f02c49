// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use dealdesk::brrrr::compute;
use dealdesk::commands::doctor::check_deals;
use dealdesk::models::BrrrrInputs;
use dealdesk::{db, store};
use rusqlite::{Connection, params};

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

fn scenario() -> BrrrrInputs {
    BrrrrInputs {
        purchase_price: 100000.0,
        down_payment_percent: 25.0,
        closing_costs: 3000.0,
        acquisition_fees: 1000.0,
        holding_costs: 500.0,
        renovation_budget: 25000.0,
        contingency_percent: 10.0,
        rehab_duration: 3.0,
        rehab_financing_rate: 7.0,
        monthly_rent: 1200.0,
        vacancy_rate: 5.0,
        property_management: 100.0,
        insurance: 75.0,
        property_tax: 150.0,
        maintenance: 100.0,
        arv: 150000.0,
        refinance_ltv: 75.0,
        new_loan_rate: 6.5,
        new_loan_term: 30.0,
        refinance_costs: 3500.0,
    }
}

fn kinds(issues: &[(String, String)]) -> Vec<&str> {
    issues.iter().map(|(k, _)| k.as_str()).collect()
}

#[test]
fn clean_deal_has_no_issues() {
    let conn = setup();
    let inputs = scenario();
    store::create_deal(&conn, "Clean", &inputs, &compute(&inputs), None).unwrap();
    assert!(check_deals(&conn).unwrap().is_empty());
}

#[test]
fn tampered_results_are_stale() {
    let conn = setup();
    let inputs = scenario();
    let mut results = compute(&inputs);
    results.cash_out_amount = 1.0;
    store::create_deal(&conn, "Stale", &inputs, &results, None).unwrap();
    let issues = check_deals(&conn).unwrap();
    assert_eq!(kinds(&issues), vec!["stale_results"]);
    assert!(issues[0].1.ends_with("Stale"));
}

#[test]
fn out_of_range_inputs_are_reported_per_field() {
    let conn = setup();
    let inputs = BrrrrInputs {
        arv: 0.0,
        vacancy_rate: 150.0,
        ..scenario()
    };
    store::create_deal(&conn, "Bad", &inputs, &compute(&inputs), None).unwrap();
    let issues = check_deals(&conn).unwrap();
    assert_eq!(
        kinds(&issues),
        vec!["invalid_input", "invalid_input", "non_finite_result"]
    );
    assert!(issues[0].1.contains("vacancyRate"));
    assert!(issues[1].1.contains("arv"));
}

#[test]
fn unreadable_rows_do_not_stop_the_audit() {
    let conn = setup();
    conn.execute(
        "INSERT INTO deals(deal_name, inputs, results, notes, created_at, updated_at)
         VALUES ('Broken', '{\"purchasePrice\": 1}', '{}', NULL, ?1, ?1)",
        params!["2025-01-01 00:00:00+00:00"],
    )
    .unwrap();
    let inputs = scenario();
    let mut results = compute(&inputs);
    results.equity_created = 0.0;
    store::create_deal(&conn, "Stale", &inputs, &results, None).unwrap();

    let issues = check_deals(&conn).unwrap();
    assert_eq!(kinds(&issues), vec!["unreadable_inputs", "stale_results"]);
}

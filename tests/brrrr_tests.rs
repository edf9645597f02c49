// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use approx::assert_relative_eq;
use dealdesk::brrrr::{compute, monthly_payment};
use dealdesk::models::{BrrrrInputs, BrrrrResults, INPUT_FIELDS, RESULT_FIELDS};
use serde_json::json;

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

#[test]
fn known_scenario_phase_figures() {
    let inputs = scenario();
    let r = compute(&inputs);

    assert_eq!(inputs.down_payment_amount(), 25000.0);
    assert_eq!(inputs.loan_amount(), 75000.0);
    assert_eq!(r.total_acquisition_cost, 104000.0);
    assert_eq!(r.initial_cash_needed, 29000.0);
    assert_eq!(r.total_rehab_cost, 27500.0);
    assert_eq!(r.total_holding_cost, 1500.0);
    assert_eq!(r.pre_stabilization_investment, 58000.0);
    assert_relative_eq!(r.effective_monthly_rent, 1140.0, epsilon = 1e-9);
    assert_eq!(r.monthly_operating_expenses, 425.0);
    assert_relative_eq!(r.net_operating_income, 715.0, epsilon = 1e-9);
    assert_eq!(r.max_refinance_loan, 112500.0);
    assert_eq!(r.remaining_equity, 37500.0);
    assert_eq!(r.equity_created, 50000.0);
    assert_relative_eq!(r.rent_to_value_ratio, 9.6, epsilon = 1e-9);
}

#[test]
fn known_scenario_loan_dependent_figures() {
    let inputs = scenario();
    let r = compute(&inputs);

    let existing = monthly_payment(75000.0, 7.0, 360.0);
    assert_relative_eq!(existing, 498.98, epsilon = 0.01);
    assert_eq!(inputs.existing_monthly_payment(), existing);
    assert_relative_eq!(r.pre_refinance_cash_flow, 715.0 - existing, epsilon = 1e-9);
    assert_relative_eq!(
        r.pre_refinance_roi,
        (715.0 - existing) * 12.0 / 58000.0 * 100.0,
        epsilon = 1e-9
    );

    assert_relative_eq!(r.new_monthly_payment, 711.08, epsilon = 0.01);
    assert_eq!(r.cash_out_amount, 34000.0);
    assert_eq!(r.total_investment, 24000.0);
    assert_relative_eq!(
        r.post_refinance_cash_flow,
        715.0 - r.new_monthly_payment,
        epsilon = 1e-9
    );
    assert_relative_eq!(r.post_refinance_roi, 0.1962, epsilon = 1e-4);
    assert_relative_eq!(r.capital_recycled, 58.6207, epsilon = 1e-4);
}

#[test]
fn compute_is_bitwise_deterministic() {
    let inputs = scenario();
    let a = compute(&inputs);
    let b = compute(&inputs);
    assert!(a.same_bits(&b));
    for (x, y) in a.values().iter().zip(b.values().iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

#[test]
fn initial_cash_matches_buy_identity() {
    for (price, pct, closing, fees) in [
        (100000.0, 25.0, 3000.0, 1000.0),
        (250000.0, 0.0, 0.0, 0.0),
        (80000.0, 100.0, 1500.0, 250.0),
        (412345.67, 12.5, 7321.0, 99.0),
    ] {
        let inputs = BrrrrInputs {
            purchase_price: price,
            down_payment_percent: pct,
            closing_costs: closing,
            acquisition_fees: fees,
            ..scenario()
        };
        let r = compute(&inputs);
        assert_eq!(r.initial_cash_needed, price * pct / 100.0 + closing + fees);
    }
}

#[test]
fn cash_out_never_negative() {
    let inputs = BrrrrInputs {
        arv: 50000.0,
        ..scenario()
    };
    let r = compute(&inputs);
    assert!(r.max_refinance_loan < inputs.loan_amount() + inputs.refinance_costs);
    assert_eq!(r.cash_out_amount, 0.0);
    assert_eq!(r.total_investment, r.pre_stabilization_investment);
    assert_eq!(r.capital_recycled, 0.0);
}

#[test]
fn full_recycle_floors_investment_and_zeroes_roi() {
    let inputs = BrrrrInputs {
        arv: 1_000_000.0,
        refinance_ltv: 80.0,
        ..scenario()
    };
    let r = compute(&inputs);
    assert!(r.cash_out_amount > r.pre_stabilization_investment);
    assert_eq!(r.total_investment, 0.0);
    assert_eq!(r.post_refinance_roi, 0.0);
    assert!(r.capital_recycled > 100.0);
}

#[test]
fn higher_ltv_never_lowers_loan_or_cash_out() {
    let mut prev: Option<BrrrrResults> = None;
    for step in 0..=20 {
        let inputs = BrrrrInputs {
            refinance_ltv: step as f64 * 5.0,
            ..scenario()
        };
        let r = compute(&inputs);
        if let Some(p) = prev {
            assert!(r.max_refinance_loan >= p.max_refinance_loan);
            assert!(r.cash_out_amount >= p.cash_out_amount);
        }
        prev = Some(r);
    }
}

#[test]
fn equity_created_ignores_financing() {
    let base = compute(&scenario());
    let alt = compute(&BrrrrInputs {
        down_payment_percent: 5.0,
        rehab_financing_rate: 12.0,
        refinance_ltv: 60.0,
        new_loan_rate: 9.0,
        new_loan_term: 15.0,
        ..scenario()
    });
    assert_eq!(base.equity_created, 50000.0);
    assert_eq!(alt.equity_created, 50000.0);
}

#[test]
fn rehab_financing_rate_drives_acquisition_loan_only() {
    let base = compute(&scenario());
    let pricier = compute(&BrrrrInputs {
        rehab_financing_rate: 10.0,
        ..scenario()
    });
    assert!(pricier.pre_refinance_cash_flow < base.pre_refinance_cash_flow);
    assert_eq!(pricier.total_rehab_cost, base.total_rehab_cost);
    assert_eq!(pricier.new_monthly_payment, base.new_monthly_payment);
}

#[test]
fn zero_denominators_are_not_guarded() {
    let no_arv = compute(&BrrrrInputs {
        arv: 0.0,
        ..scenario()
    });
    assert!(no_arv.rent_to_value_ratio.is_infinite());

    let nothing_invested = compute(&BrrrrInputs {
        down_payment_percent: 0.0,
        closing_costs: 0.0,
        acquisition_fees: 0.0,
        holding_costs: 0.0,
        renovation_budget: 0.0,
        ..scenario()
    });
    assert_eq!(nothing_invested.pre_stabilization_investment, 0.0);
    assert!(!nothing_invested.pre_refinance_roi.is_finite());
    assert!(nothing_invested.capital_recycled.is_infinite());
    assert_eq!(nothing_invested.total_investment, 0.0);
    assert_eq!(nothing_invested.post_refinance_roi, 0.0);
}

#[test]
fn nan_input_propagates_without_panicking() {
    let r = compute(&BrrrrInputs {
        purchase_price: f64::NAN,
        ..scenario()
    });
    assert!(r.cash_out_amount.is_nan());
    assert!(r.equity_created.is_nan());
}

#[test]
fn zero_rate_loan_pays_straight_line() {
    assert_relative_eq!(monthly_payment(120000.0, 0.0, 360.0), 333.3333, epsilon = 1e-4);
    let r = compute(&BrrrrInputs {
        new_loan_rate: 0.0,
        ..scenario()
    });
    assert_relative_eq!(r.new_monthly_payment, 112500.0 / 360.0, epsilon = 1e-9);
}

#[test]
fn json_keys_match_field_tables() {
    let inputs = serde_json::to_value(scenario()).unwrap();
    let obj = inputs.as_object().unwrap();
    assert_eq!(obj.len(), INPUT_FIELDS.len());
    for f in INPUT_FIELDS {
        assert!(obj.contains_key(f.key), "missing input key {}", f.key);
    }

    let results = serde_json::to_value(compute(&scenario())).unwrap();
    let obj = results.as_object().unwrap();
    assert_eq!(obj.len(), RESULT_FIELDS.len());
    for f in RESULT_FIELDS {
        assert!(obj.contains_key(f.key), "missing result key {}", f.key);
    }
}

#[test]
fn inputs_json_is_strict() {
    let mut doc = serde_json::to_value(scenario()).unwrap();
    assert_eq!(doc["refinanceLTV"], json!(75.0));
    let parsed: BrrrrInputs = serde_json::from_value(doc.clone()).unwrap();
    assert_eq!(parsed, scenario());

    doc["bogus"] = json!(1);
    assert!(serde_json::from_value::<BrrrrInputs>(doc.clone()).is_err());

    let obj = doc.as_object_mut().unwrap();
    obj.remove("bogus");
    obj.remove("arv");
    assert!(serde_json::from_value::<BrrrrInputs>(doc).is_err());
}

#[test]
fn non_finite_results_round_trip_as_nan() {
    let r = compute(&BrrrrInputs {
        arv: 0.0,
        ..scenario()
    });
    let text = serde_json::to_string(&r).unwrap();
    let back: BrrrrResults = serde_json::from_str(&text).unwrap();
    assert!(back.rent_to_value_ratio.is_nan());
    assert_eq!(back.max_refinance_loan, r.max_refinance_loan);
}

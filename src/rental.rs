// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Conventional buy-and-hold analysis: cap rate, cash-on-cash return and
//! monthly cash flow for a financed rental.

use crate::brrrr::monthly_payment;
use crate::models::{RentalInputs, RentalResults};

pub fn analyze(inputs: &RentalInputs) -> RentalResults {
    let down_payment = inputs.purchase_price * inputs.down_payment_percent / 100.0;
    let loan_amount = inputs.purchase_price - down_payment;
    let monthly_mortgage = monthly_payment(loan_amount, inputs.interest_rate, inputs.loan_term * 12.0);

    let effective_monthly_rent = inputs.monthly_rent * (1.0 - inputs.vacancy_rate / 100.0);
    let monthly_operating_expenses = inputs.property_tax
        + inputs.insurance
        + inputs.maintenance
        + inputs.property_management
        + inputs.other_expenses;
    let monthly_noi = effective_monthly_rent - monthly_operating_expenses;
    let annual_noi = monthly_noi * 12.0;

    let monthly_cash_flow = monthly_noi - monthly_mortgage;
    let annual_cash_flow = monthly_cash_flow * 12.0;
    let total_cash_invested = down_payment + inputs.closing_costs;

    let cap_rate = annual_noi / inputs.purchase_price * 100.0;
    let cash_on_cash_return = if total_cash_invested > 0.0 {
        annual_cash_flow / total_cash_invested * 100.0
    } else {
        0.0
    };
    let gross_rent_multiplier = inputs.purchase_price / (inputs.monthly_rent * 12.0);
    let debt_service_coverage = if monthly_mortgage > 0.0 {
        monthly_noi / monthly_mortgage
    } else {
        0.0
    };

    RentalResults {
        loan_amount,
        monthly_mortgage,
        total_cash_invested,
        effective_monthly_rent,
        monthly_operating_expenses,
        monthly_noi,
        annual_noi,
        monthly_cash_flow,
        annual_cash_flow,
        cap_rate,
        cash_on_cash_return,
        gross_rent_multiplier,
        debt_service_coverage,
    }
}
